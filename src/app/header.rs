use leptos::prelude::*;

use crate::i18n::{use_i18n, Lang};
use crate::theme::use_theme;

static NAV_ITEMS: [&str; 6] = ["home", "about", "experience", "ai", "projects", "contact"];

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let (menu_open, set_menu_open) = signal(false);

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <a
                        href=format!("#{item}")
                        class="px-4 py-2 rounded-lg text-muted hover:text-purple transition-colors font-medium"
                        on:click=move |_| set_menu_open(false)
                    >
                        {i18n.t(&format!("nav.{item}"))}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 w-full z-50 bg-bento-dark/90 backdrop-blur-md border-b border-bento-border">
            <nav class="container mx-auto px-4 sm:px-6 py-3">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="text-2xl font-bold bg-gradient-to-r from-purple to-blue bg-clip-text text-transparent"
                    >
                        "ML"
                    </a>

                    <div class="hidden md:flex items-center space-x-2">{nav_links}</div>

                    <div class="flex items-center space-x-3">
                        <ThemeToggle />
                        <LangPicker />
                        <button
                            class="md:hidden text-muted hover:text-purple transition-colors"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                {move || {
                    menu_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden mt-3 flex flex-col bg-bento-card rounded-lg border border-bento-border p-2">
                                    {nav_links}
                                </div>
                            }
                        })
                }}
            </nav>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-lg bg-bento-card border border-bento-border hover:border-purple transition-all"
            aria-label="Toggle color theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || if theme.get().is_dark() { "🌙" } else { "☀️" }}
        </button>
    }
}

#[component]
fn LangPicker() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="flex items-center rounded-lg border border-bento-border overflow-hidden">
            {Lang::ALL
                .iter()
                .map(|&lang| {
                    view! {
                        <button
                            class=move || {
                                if i18n.lang.get() == lang {
                                    "px-2 py-1 text-sm font-medium text-purple bg-bento-card"
                                } else {
                                    "px-2 py-1 text-sm font-medium text-muted hover:text-purple"
                                }
                            }
                            on:click=move |_| i18n.lang.set(lang)
                        >
                            {lang.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
