use leptos::prelude::*;

use super::effects::BlurText;
use crate::motion::{Parallax, SplitMode};
use crate::persona::{OWNER, PORTRAIT_SRC};
use crate::theme::{accent_text_style, Theme};

const NAME_CLASS: &str = "font-bold text-[100px] sm:text-[140px] md:text-[180px] lg:text-[210px] leading-[0.75] tracking-tighter uppercase justify-center whitespace-nowrap";

#[component]
pub fn PortfolioHero(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] parallax: Signal<Parallax>,
    tagline: &'static str,
    #[prop(into)] on_scroll_down: Callback<()>,
) -> impl IntoView {
    let shift = move |speed: f64| move || parallax.get().transform(speed);
    let (first, last) = OWNER.split_once(' ').unwrap_or((OWNER, ""));
    let name_style = accent_text_style("'Fira Code', monospace");

    view! {
        <main class="relative z-10 min-h-screen flex flex-col overflow-hidden">
            <div
                class="pointer-events-none absolute -top-32 -left-24 h-72 w-72 rounded-full bg-[#C3E41D]/10 blur-3xl"
                style:transform=shift(0.08)
            />
            <div
                class="pointer-events-none absolute top-40 -right-24 h-96 w-96 rounded-full bg-white/5 blur-[120px]"
                style:transform=shift(-0.06)
            />
            <div
                class="pointer-events-none absolute bottom-[-120px] left-1/3 h-80 w-80 rounded-full bg-[#C3E41D]/10 blur-3xl"
                style:transform=shift(0.05)
            />
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full px-4">
                <div class="relative text-center">
                    <div style:transform=shift(-0.02)>
                        <BlurText
                            text=first
                            delay=100
                            animate_by=SplitMode::Letters
                            class=NAME_CLASS
                            style=name_style.clone()
                        />
                    </div>
                    <div style:transform=shift(0.02)>
                        <BlurText
                            text=last
                            delay=100
                            animate_by=SplitMode::Letters
                            class=NAME_CLASS
                            style=name_style
                        />
                    </div>

                    <div
                        class="absolute top-1/2 left-1/2 z-10"
                        style:transform=move || {
                            format!("{} translate(-50%, -50%)", parallax.get().transform(0.1))
                        }
                    >
                        <div class="w-[65px] h-[110px] sm:w-[90px] sm:h-[152px] md:w-[110px] md:h-[185px] lg:w-[129px] lg:h-[218px] rounded-full overflow-hidden shadow-2xl transition-transform duration-700 hover:scale-110 hover:-rotate-2 cursor-pointer ring-1 ring-black/5">
                            <img src=PORTRAIT_SRC alt=OWNER class="w-full h-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-14 sm:bottom-20 md:bottom-24 lg:bottom-32 xl:bottom-36 left-1/2 -translate-x-1/2 w-full px-6">
                <div class=move || {
                    format!(
                        "flex justify-center transition-colors duration-500 hover:text-black dark:hover:text-white {}",
                        theme.get().tokens().label_text,
                    )
                }>
                    <BlurText
                        text=tagline
                        delay=150
                        animate_by=SplitMode::Words
                        class="text-[15px] sm:text-[18px] md:text-[20px] lg:text-[22px] text-center"
                        style="font-family: 'Antic', sans-serif;"
                    />
                </div>
            </div>

            <button
                type="button"
                class="absolute bottom-6 md:bottom-10 left-1/2 -translate-x-1/2 transition-colors duration-300"
                aria-label="Scroll down"
                on:click=move |_| on_scroll_down.run(())
            >
                <svg
                    class="w-5 h-5 md:w-8 md:h-8 text-neutral-500 hover:text-black dark:hover:text-white transition-colors duration-300"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="m6 9 6 6 6-6" />
                </svg>
            </button>
        </main>
    }
}
