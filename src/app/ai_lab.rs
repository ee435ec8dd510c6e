use leptos::prelude::*;

use crate::app::bento::{BentoCard, BentoGrid, BentoSection};
use crate::i18n::{translate_list, use_i18n};
use crate::motion::{DomScheduler, Ticker, Typewriter, BOOT_DELAY};

/// AI experiments section, fronted by a terminal that types its boot log one
/// character at a time. The block cursor blinks only while the reveal runs.
#[component]
pub fn AiLab() -> impl IntoView {
    let i18n = use_i18n();
    let (text, set_text) = signal(String::new());
    let (running, set_running) = signal(false);

    let ticker = StoredValue::new_local(None::<Ticker<DomScheduler>>);
    Effect::watch(
        move || i18n.lang.get(),
        move |&lang, _, _| {
            let lines = translate_list(lang, "ai.boot");
            ticker.update_value(|slot| {
                let t = slot.get_or_insert_with(|| Ticker::new(DomScheduler));
                let mut tw = Typewriter::new(lines);
                set_text(String::new());
                set_running(tw.is_running());
                if !tw.is_running() {
                    t.stop();
                    return;
                }
                t.start(BOOT_DELAY, move || {
                    let next = tw.step();
                    set_text(tw.text().to_owned());
                    set_running(tw.is_running());
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
        <BentoSection
            id="ai"
            title=Signal::derive(move || i18n.t("ai.title"))
            subtitle=Signal::derive(move || i18n.t("ai.subtitle"))
        >
            <div class="max-w-3xl mx-auto">
                <div class="rounded-2xl overflow-hidden border border-bento-border bg-black/80 backdrop-blur-sm">
                    <div class="flex items-center gap-2 px-4 py-3 bg-bento-card border-b border-bento-border">
                        <span class="w-3 h-3 rounded-full bg-red-500"></span>
                        <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                        <span class="w-3 h-3 rounded-full bg-green-500"></span>
                        <span class="ml-2 text-xs text-muted font-mono">"ai-lab — zsh"</span>
                    </div>
                    <pre class="p-6 font-mono text-sm text-green-400 whitespace-pre-wrap min-h-[10rem]">
                        {text}
                        {move || running().then(|| view! { <span class="animate-caret">"▊"</span> })}
                        {move || {
                            (!running())
                                .then(|| {
                                    view! {
                                        <span class="text-purple">"$ "</span>
                                        <span class="text-foreground">
                                            {move || i18n.t("ai.prompt")}
                                        </span>
                                    }
                                })
                        }}
                    </pre>
                </div>
                <div class="mt-8">
                    <BentoGrid columns=3>
                        {move || {
                            (0..i18n.len("ai.tools"))
                                .map(|i| {
                                    let base = format!("ai.tools.{i}");
                                    view! {
                                        <BentoCard>
                                            <div class="text-3xl mb-2">
                                                {i18n.t(&format!("{base}.icon"))}
                                            </div>
                                            <h3 class="font-bold">
                                                {i18n.t(&format!("{base}.name"))}
                                            </h3>
                                            <p class="text-sm text-muted mt-1">
                                                {i18n.t(&format!("{base}.description"))}
                                            </p>
                                        </BentoCard>
                                    }
                                })
                                .collect_view()
                        }}
                    </BentoGrid>
                </div>
                <p class="text-center mt-6">
                    <a
                        href="#contact"
                        class="text-purple hover:underline font-medium"
                    >
                        {move || i18n.t("ai.cta")}
                    </a>
                </p>
            </div>
        </BentoSection>
    }
}
