use leptos::prelude::*;

use crate::i18n::{translate_list, use_i18n};
use crate::planets::{resolve_variant, today_index, FactCard};
use crate::theme::use_theme;

/// Full-page planet background plus the floating trivia badge.
///
/// The weekday is read once at mount and never refreshed, so the planet is
/// stable for the whole session even across midnight. Theme toggles swap the
/// image without touching the planet choice.
#[component]
pub fn Backdrop() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();

    let day = today_index();
    let variant = Memo::new(move |_| resolve_variant(day, theme.get()));

    let (visible, set_visible) = signal(false);
    let (fact, set_fact) = signal(None::<String>);
    let (has_pool, set_has_pool) = signal(false);

    let card = StoredValue::new_local(None::<FactCard>);
    Effect::watch(
        move || i18n.lang.get(),
        move |&lang, _, _| {
            let key = format!("planets.facts.{}", variant.get_untracked().key);
            let pool = translate_list(lang, &key);
            card.set_value(match FactCard::new(pool) {
                Ok(card) => {
                    set_has_pool(true);
                    Some(card)
                }
                Err(e) => {
                    log::error!("no trivia for {key}: {e}");
                    set_has_pool(false);
                    None
                }
            });
            set_visible(false);
            set_fact(None);
        },
        true,
    );

    let sync = move |card: &FactCard| {
        set_visible(card.is_visible());
        set_fact(card.current().map(str::to_string));
    };
    let reveal = move |_| {
        card.update_value(|slot| {
            if let Some(card) = slot {
                card.reveal(&mut rand::thread_rng());
                sync(card);
            }
        })
    };
    let another = move |_| {
        card.update_value(|slot| {
            if let Some(card) = slot {
                card.pick_another(&mut rand::thread_rng());
                sync(card);
            }
        })
    };
    let dismiss = move |_| {
        card.update_value(|slot| {
            if let Some(card) = slot {
                card.dismiss();
                sync(card);
            }
        })
    };

    view! {
        <div
            class="fixed inset-0 -z-10 bg-cover bg-center transition-[background-image] duration-700"
            style=move || format!("background-image: url('{}')", variant.get().background)
        ></div>
        <div class="fixed inset-0 -z-10 bg-bento-dark/70 backdrop-blur-[2px]"></div>

        <div class="fixed bottom-6 right-6 z-40 flex flex-col items-end gap-3">
            {move || {
                visible()
                    .then(|| {
                        view! {
                            <div class="max-w-xs bg-bento-card border border-bento-border rounded-2xl p-4 shadow-xl">
                                <p class="text-sm text-foreground">{fact}</p>
                                <div class="flex justify-end gap-3 mt-3 text-sm">
                                    <button
                                        class="text-purple hover:underline"
                                        on:click=another
                                    >
                                        {move || i18n.t("planets.another")}
                                    </button>
                                    <button
                                        class="text-muted hover:text-foreground"
                                        on:click=dismiss
                                    >
                                        {move || i18n.t("planets.close")}
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
            <div class="flex items-center gap-2 bg-bento-card border border-bento-border rounded-full px-4 py-2 shadow-lg">
                <span>{move || variant.get().emoji}</span>
                <span class="text-sm font-medium">
                    {move || i18n.t("planets.badge")} " " {move || variant.get().name}
                </span>
                {move || {
                    has_pool()
                        .then(|| {
                            view! {
                                <button
                                    class="text-sm text-purple hover:underline ml-1"
                                    on:click=reveal
                                >
                                    {move || i18n.t("planets.reveal")}
                                </button>
                            }
                        })
                }}
            </div>
        </div>
    }
}
