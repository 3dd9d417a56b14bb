use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::nav::MENU_ITEMS;
use crate::theme::Theme;

#[component]
pub fn PortfolioHeader(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] on_toggle_menu: Callback<()>,
    #[prop(into)] on_close_menu: Callback<()>,
    #[prop(into)] on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let menu_ref = NodeRef::<html::Div>::new();
    let button_ref = NodeRef::<html::Button>::new();

    // close the menu on any press outside of it and its button
    let _ = use_event_listener(use_document(), ev::mousedown, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let target = match ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
            Some(t) => t,
            None => return,
        };
        let (Some(menu), Some(button)) = (menu_ref.get_untracked(), button_ref.get_untracked())
        else {
            return;
        };
        if !menu.contains(Some(&target)) && !button.contains(Some(&target)) {
            on_close_menu.run(());
        }
    });

    let link_class = move |highlight: bool| {
        let tone = if highlight {
            "text-[#C3E41D]"
        } else if theme.get().is_dark() {
            "text-white"
        } else {
            "text-neutral-900"
        };
        format!(
            "block text-lg md:text-xl font-bold tracking-tight py-1.5 px-2 cursor-pointer transition-colors duration-300 hover:text-[#C3E41D] {tone}"
        )
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 px-4 sm:px-6 lg:px-8 py-6">
            <nav class="flex items-center justify-between max-w-6xl mx-auto">
                <div class="relative">
                    <button
                        node_ref=button_ref
                        type="button"
                        class="p-2 transition-colors duration-300 z-50 text-neutral-500 hover:text-black dark:hover:text-white"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| on_toggle_menu.run(())
                    >
                        {move || {
                            if menu_open.get() { Either::Left(view! { <CloseIcon /> }) } else { Either::Right(view! { <MenuIcon /> }) }
                        }}
                    </button>
                    {move || {
                        menu_open
                            .get()
                            .then(|| {
                                view! {
                                    <div
                                        node_ref=menu_ref
                                        class="absolute top-full left-0 w-[200px] md:w-[240px] border-none shadow-2xl mt-2 ml-4 p-4 rounded-lg z-[100]"
                                        style:background-color=move || theme.get().menu_background()
                                    >
                                        {MENU_ITEMS
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <a
                                                        href=item.href()
                                                        class=move || link_class(item.highlight)
                                                        on:click=move |_| on_close_menu.run(())
                                                    >
                                                        {item.label}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </div>

                <div
                    class="text-4xl font-monogram"
                    style:color=move || theme.get().foreground()
                >
                    "N.D."
                </div>

                <button
                    type="button"
                    on:click=move |_| on_toggle_theme.run(())
                    class="relative w-16 h-8 rounded-full hover:opacity-80 transition-opacity"
                    style:background-color=move || theme.get().switch_track()
                    aria-label="Toggle theme"
                >
                    <div
                        class="absolute top-1 left-1 w-6 h-6 rounded-full transition-transform duration-300"
                        style:background-color=move || theme.get().foreground()
                        style:transform=move || theme.get().switch_knob_offset()
                    />
                </button>
            </nav>
        </header>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            class="w-8 h-8 transition-colors duration-300"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            class="w-8 h-8 transition-colors duration-300"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}
