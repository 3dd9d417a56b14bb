mod background;
mod effects;
mod header;
mod hero;
mod page;
mod sections;

pub use effects::{use_reveal, use_scroll_sampler, BlurText, FloatingShape, Reveal};
pub use page::{scroll_to_section, PortfolioPage};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::persona::{PortfolioMode, FAVICON_SRC};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let person = PortfolioMode::from_build_env().persona().person_json_ld();
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON_SRC />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}
