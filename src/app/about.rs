use std::time::Duration;

use leptos::prelude::*;

use crate::app::bento::{BentoCard, BentoGrid, BentoSection};
use crate::i18n::use_i18n;
use crate::motion::{DomScheduler, Ticker};

const FADE: Duration = Duration::from_millis(150);

/// Bio, a small photo carousel, and the education timeline.
#[component]
pub fn About() -> impl IntoView {
    let i18n = use_i18n();
    let (photo, set_photo) = signal(0usize);
    let (fading, set_fading) = signal(false);

    let photo_count = move || i18n.len("about.photos");

    // Fade the old photo out, swap it mid-fade, let CSS fade the new one in.
    let fade = StoredValue::new_local(None::<Ticker<DomScheduler>>);
    let show = move |next: usize| {
        set_fading(true);
        fade.update_value(|slot| {
            let t = slot.get_or_insert_with(|| Ticker::new(DomScheduler));
            t.start(FADE, move || {
                set_photo(next);
                set_fading(false);
                None
            });
        });
    };
    on_cleanup(move || {
        fade.update_value(|slot| {
            if let Some(t) = slot.take() {
                t.stop();
            }
        })
    });

    let step = move |delta: isize| {
        let count = photo_count();
        if count == 0 {
            return;
        }
        let next = (photo.get_untracked() as isize + delta).rem_euclid(count as isize);
        show(next as usize);
    };

    view! {
        <BentoSection id="about" title=Signal::derive(move || i18n.t("about.title"))>
            <BentoGrid columns=2>
                <BentoCard>
                    <div class="space-y-4 text-muted leading-relaxed">
                        <p>{move || i18n.t("about.intro.p1")}</p>
                        <p>{move || i18n.t("about.intro.p2")}</p>
                        <p>{move || i18n.t("about.intro.p3")}</p>
                    </div>
                </BentoCard>

                <BentoCard>
                    <div class="relative overflow-hidden rounded-xl">
                        <img
                            src=move || format!("/images/about-{}.webp", photo())
                            alt=move || i18n.t(&format!("about.photos.{}.description", photo()))
                            class=move || {
                                if fading() {
                                    "w-full h-64 object-cover opacity-0 transition-opacity duration-150"
                                } else {
                                    "w-full h-64 object-cover opacity-100 transition-opacity duration-150"
                                }
                            }
                        />
                        <button
                            class="absolute left-2 top-1/2 -translate-y-1/2 bg-bento-dark/60 rounded-full w-8 h-8"
                            aria-label="Previous photo"
                            on:click=move |_| step(-1)
                        >
                            "‹"
                        </button>
                        <button
                            class="absolute right-2 top-1/2 -translate-y-1/2 bg-bento-dark/60 rounded-full w-8 h-8"
                            aria-label="Next photo"
                            on:click=move |_| step(1)
                        >
                            "›"
                        </button>
                    </div>
                    <div class="mt-3 text-sm text-muted">
                        <p class="font-medium text-foreground">
                            "📍 " {move || i18n.t(&format!("about.photos.{}.location", photo()))}
                            " · " {move || i18n.t(&format!("about.photos.{}.date", photo()))}
                        </p>
                        <p class="mt-1">
                            {move || i18n.t(&format!("about.photos.{}.description", photo()))}
                        </p>
                        <p class="mt-2 text-xs italic">{move || i18n.t("about.photoHint")}</p>
                    </div>
                </BentoCard>
            </BentoGrid>

            <div class="mt-8">
                <h3 class="text-2xl font-bold mb-4 text-center">
                    {move || i18n.t("about.education.title")}
                </h3>
                <BentoGrid columns=3>
                    {move || {
                        (0..i18n.len("about.education.items"))
                            .map(|i| {
                                let base = format!("about.education.items.{i}");
                                let status = i18n.t(&format!("{base}.status"));
                                let status_label = if status == "current" {
                                    i18n.t("about.education.current")
                                } else {
                                    i18n.t("about.education.completed")
                                };
                                view! {
                                    <BentoCard>
                                        <div class="text-3xl mb-2">
                                            {i18n.t(&format!("{base}.icon"))}
                                        </div>
                                        <h4 class="font-bold">{i18n.t(&format!("{base}.title"))}</h4>
                                        <p class="text-sm text-muted">
                                            {i18n.t(&format!("{base}.institution"))}
                                        </p>
                                        <p class="text-sm text-muted">
                                            {i18n.t(&format!("{base}.period"))}
                                        </p>
                                        <span class="inline-block mt-2 text-xs px-2 py-1 rounded-full bg-purple/20 text-purple">
                                            {status_label}
                                        </span>
                                    </BentoCard>
                                }
                            })
                            .collect_view()
                    }}
                </BentoGrid>
            </div>

            <div class="mt-8 max-w-3xl mx-auto text-center">
                <p class="text-muted leading-relaxed mb-6">{move || i18n.t("about.philosophy")}</p>
                <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                    {move || {
                        (0..i18n.len("about.values"))
                            .map(|i| {
                                let base = format!("about.values.{i}");
                                view! {
                                    <div class="bg-bento-card backdrop-blur-sm border border-bento-border rounded-xl p-4 hover:border-purple/50 transition-colors">
                                        <div class="text-2xl mb-2">
                                            {i18n.t(&format!("{base}.icon"))}
                                        </div>
                                        <p class="text-sm font-medium">
                                            {i18n.t(&format!("{base}.label"))}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </BentoSection>
    }
}
