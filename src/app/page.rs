use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_use::use_media_query;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::background::PortfolioBackground;
use super::effects::use_scroll_sampler;
use super::header::PortfolioHeader;
use super::hero::PortfolioHero;
use super::sections::PortfolioSections;
use crate::motion::Parallax;
use crate::nav::{self, find_section};
use crate::persona::PortfolioMode;
use crate::theme::Theme;

/// Below this width parallax is switched off.
const COMPACT_LAYOUT_QUERY: &str = "(max-width: 1024px)";

/// Smooth-scroll the section with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    match find_section(id, |id| document().get_element_by_id(id)) {
        Ok(el) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Err(err) => log::warn!("{err}"),
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let persona = PortfolioMode::from_build_env().persona();

    let (theme, set_theme) = signal(Theme::default());
    let (menu_open, set_menu_open) = signal(false);

    let scroll_y = use_scroll_sampler();
    let compact = use_media_query(COMPACT_LAYOUT_QUERY);
    let parallax = Memo::new(move |_| Parallax::new(scroll_y.get(), !compact.get()));

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    let toggle_theme = Callback::new(move |_| {
        set_theme.update(|t| *t = t.toggle());
        log::debug!("theme switched to {:?}", theme.get_untracked());
    });
    let toggle_menu = Callback::new(move |_| set_menu_open.update(|open| *open = !*open));
    let close_menu = Callback::new(move |_| set_menu_open.set(false));
    let view_projects = Callback::new(move |_| scroll_to_section(nav::PROJECTS));
    let scroll_down = Callback::new(move |_| scroll_to_section(nav::ABOUT));

    let built = env!("BUILD_TIME").split('T').next().unwrap_or_default();

    view! {
        <Title text=persona.meta.title />
        <Meta name="description" content=persona.meta.description />
        <Meta name="keywords" content=persona.keywords() />
        <Meta property="og:title" content=persona.meta.title />
        <Meta property="og:description" content=persona.meta.description />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=persona.meta.title />
        <Meta name="twitter:description" content=persona.meta.description />
        <div
            id=nav::TOP
            class="min-h-screen text-foreground transition-colors relative isolate"
            style=move || theme.get().page_style()
        >
            <PortfolioBackground theme parallax />
            <PortfolioHeader
                theme
                menu_open
                on_toggle_menu=toggle_menu
                on_close_menu=close_menu
                on_toggle_theme=toggle_theme
            />
            <PortfolioHero
                theme
                parallax
                tagline=persona.hero_tagline
                on_scroll_down=scroll_down
            />
            <PortfolioSections persona theme parallax on_view_projects=view_projects />
            <footer class="relative z-10 px-4 sm:px-6 lg:px-8 pb-10">
                <div class="max-w-6xl mx-auto border-t border-neutral-200/70 dark:border-neutral-800/60 pt-8">
                    <p class=move || format!("{} text-sm", theme.get().tokens().muted_text)>
                        "Built with Leptos · " {built}
                    </p>
                </div>
            </footer>
        </div>
    }
}
