use leptos::prelude::*;

use super::effects::FloatingShape;
use crate::motion::Parallax;
use crate::theme::Theme;

#[component]
pub fn PortfolioBackground(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] parallax: Signal<Parallax>,
) -> impl IntoView {
    let layer = move |speed: f64| Signal::derive(move || parallax.get().transform(speed));

    let grid = move || {
        let alpha = theme.get().grid_alpha();
        format!(
            "background-image: linear-gradient(to right, rgba(195, 228, 29, {alpha}) 1px, transparent 1px), linear-gradient(to bottom, rgba(195, 228, 29, {alpha}) 1px, transparent 1px); background-size: 140px 140px; transform: {};",
            parallax.get().transform(-0.03)
        )
    };
    let glow = move || {
        let (accent, corner) = if theme.get().is_dark() {
            ("0.18", "255, 255, 255, 0.12")
        } else {
            ("0.28", "0, 0, 0, 0.08")
        };
        format!(
            "background-image: radial-gradient(circle at 15% 20%, rgba(195, 228, 29, {accent}), transparent 55%), radial-gradient(circle at 85% 10%, rgba({corner}), transparent 50%); transform: {};",
            parallax.get().transform(0.02)
        )
    };

    view! {
        <div class="pointer-events-none fixed inset-0 z-0">
            <div class="absolute inset-0" style=grid />
            <div class="absolute inset-0" style=glow />
            <FloatingShape
                delay=0.2
                width=520
                height=130
                rotate=12
                gradient="from-[#C3E41D]/20"
                class="left-[-10%] top-[12%]"
                transform=layer(0.06)
            />
            <FloatingShape
                delay=0.4
                width=420
                height=110
                rotate={-16}
                gradient="from-white/[0.12]"
                class="right-[-6%] top-[55%]"
                transform=layer(-0.05)
            />
            <FloatingShape
                delay=0.6
                width=280
                height=80
                rotate={-8}
                gradient="from-amber-500/[0.18]"
                class="left-[5%] bottom-[10%]"
                transform=layer(0.04)
            />
            <FloatingShape
                delay=0.8
                width=220
                height=60
                rotate=22
                gradient="from-indigo-500/[0.18]"
                class="right-[10%] top-[18%]"
                transform=layer(-0.03)
            />
        </div>
    }
}
