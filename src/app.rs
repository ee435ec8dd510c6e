mod about;
mod ai_lab;
mod backdrop;
mod bento;
mod contact;
mod experience;
mod header;
mod hero;
mod showcase;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::i18n::{provide_i18n, use_i18n};
use crate::theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    provide_i18n();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Martín Lucero - {title}") />

        <Router>
            <div class=move || {
                format!("min-h-screen text-foreground transition-colors duration-500 {}", theme.get().class())
            }>
                <backdrop::Backdrop />
                <header::Header />
                <main class="relative">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <hero::Hero />
        <about::About />
        <experience::Experience />
        <ai_lab::AiLab />
        <showcase::Showcase />
        <contact::Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    // BUILD_TIME is an RFC 3339 stamp from build.rs; the year is enough here
    let year = &env!("BUILD_TIME")[..4];
    view! {
        <footer class="relative py-8 text-center text-sm text-muted border-t border-bento-border">
            <p>{move || i18n.t("footer.tagline")}</p>
            <p class="mt-1">"© " {year} " Martín Lucero. " {move || i18n.t("footer.rights")}</p>
        </footer>
    }
}
