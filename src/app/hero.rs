use leptos::prelude::*;

use crate::i18n::{translate_list, use_i18n};
use crate::motion::{DomScheduler, RoleCycler, Ticker, TYPE_INTERVAL};

/// Landing section. The role line perpetually types, holds, and deletes each
/// label; switching languages restarts the cycle with the translated labels.
#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let (role, set_role) = signal(String::new());

    let ticker = StoredValue::new_local(None::<Ticker<DomScheduler>>);
    Effect::watch(
        move || i18n.lang.get(),
        move |&lang, _, _| {
            let labels = translate_list(lang, "hero.roles");
            ticker.update_value(|slot| {
                let t = slot.get_or_insert_with(|| Ticker::new(DomScheduler));
                // an empty label list ends the run on its first tick
                let mut cycler = RoleCycler::new(labels);
                set_role(String::new());
                t.start(TYPE_INTERVAL, move || {
                    let next = cycler.step();
                    set_role(cycler.text());
                    next
                });
            });
        },
        true,
    );
    on_cleanup(move || {
        ticker.update_value(|slot| {
            if let Some(t) = slot.take() {
                t.stop();
            }
        })
    });

    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center pt-16">
            <div class="container mx-auto px-4 sm:px-6 text-center">
                <p class="text-lg text-muted mb-2">{move || i18n.t("hero.greeting")}</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-4">
                    <span class="bg-gradient-to-r from-purple via-blue to-purple bg-clip-text text-transparent">
                        "Martín Lucero"
                    </span>
                </h1>
                <div class="text-2xl md:text-3xl font-mono h-10 mb-4">
                    <span class="text-purple">{role}</span>
                    <span class="animate-caret text-purple">"|"</span>
                </div>
                <p class="text-muted mb-2">"📍 " {move || i18n.t("hero.location")}</p>
                <p class="text-lg text-muted max-w-2xl mx-auto mb-8">
                    {move || i18n.t("hero.description")}
                </p>
                <div class="flex flex-wrap items-center justify-center gap-4">
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-lg bg-gradient-to-r from-purple to-blue text-white font-medium hover:opacity-90 transition-opacity"
                    >
                        {move || i18n.t("hero.cta")}
                    </a>
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-lg border border-bento-border text-muted hover:border-purple hover:text-purple transition-colors"
                    >
                        {move || i18n.t("hero.viewWork")}
                    </a>
                </div>
            </div>
        </section>
    }
}
