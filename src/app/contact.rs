use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::app::bento::{BentoCard, BentoGrid, BentoSection};
use crate::i18n::use_i18n;
use crate::motion::{DomScheduler, Ticker};

const SEND_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum SendState {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Contact info card and the message form. There is no backend; submission
/// shows a sending state briefly, then clears the form and confirms.
#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let (state, set_state) = signal(SendState::default());

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let ticker = StoredValue::new_local(None::<Ticker<DomScheduler>>);
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == SendState::Sending {
            return;
        }
        set_state(SendState::Sending);
        ticker.update_value(|slot| {
            let t = slot.get_or_insert_with(|| Ticker::new(DomScheduler));
            t.start(SEND_DELAY, move || {
                for input in [name_ref, email_ref, subject_ref] {
                    if let Some(input) = input.get_untracked() {
                        input.set_value("");
                    }
                }
                if let Some(message) = message_ref.get_untracked() {
                    message.set_value("");
                }
                set_state(SendState::Sent);
                None
            });
        });
    };
    on_cleanup(move || {
        ticker.update_value(|slot| {
            if let Some(t) = slot.take() {
                t.stop();
            }
        })
    });

    let field = "w-full bg-bento-dark border border-bento-border rounded-lg px-4 py-2 \
                 focus:border-purple focus:outline-none transition-colors";

    view! {
        <BentoSection
            id="contact"
            title=Signal::derive(move || i18n.t("contact.title"))
            subtitle=Signal::derive(move || i18n.t("contact.description"))
        >
            <BentoGrid columns=2>
                <BentoCard>
                    <h3 class="text-xl font-bold mb-4">{move || i18n.t("contact.getInTouch")}</h3>
                    <ul class="space-y-3 text-muted">
                        <li>"✉️ " {move || i18n.t("contact.info.email")}</li>
                        <li>"📍 " {move || i18n.t("contact.info.location")}</li>
                        <li>
                            "⏱️ " {move || i18n.t("contact.info.response")} " "
                            {move || i18n.t("contact.info.responseTime")}
                        </li>
                    </ul>
                </BentoCard>

                <BentoCard>
                    <form class="space-y-4" on:submit=submit>
                        <div class="grid sm:grid-cols-2 gap-4">
                            <input
                                type="text"
                                required
                                node_ref=name_ref
                                class=field
                                placeholder=move || i18n.t("contact.form.name")
                            />
                            <input
                                type="email"
                                required
                                node_ref=email_ref
                                class=field
                                placeholder=move || i18n.t("contact.form.email")
                            />
                        </div>
                        <input
                            type="text"
                            required
                            node_ref=subject_ref
                            class=field
                            placeholder=move || i18n.t("contact.form.subject")
                        />
                        <textarea
                            required
                            rows=5
                            node_ref=message_ref
                            class=field
                            placeholder=move || i18n.t("contact.form.message")
                        ></textarea>
                        <button
                            type="submit"
                            disabled=move || state() == SendState::Sending
                            class="w-full px-6 py-3 rounded-lg bg-gradient-to-r from-purple to-blue text-white font-medium hover:opacity-90 transition-opacity disabled:opacity-50"
                        >
                            {move || {
                                match state() {
                                    SendState::Sending => i18n.t("contact.form.sending"),
                                    _ => i18n.t("contact.form.send"),
                                }
                            }}
                        </button>
                        {move || {
                            (state() == SendState::Sent)
                                .then(|| {
                                    view! {
                                        <p class="text-center text-green-400 text-sm">
                                            {move || i18n.t("contact.form.sent")}
                                        </p>
                                    }
                                })
                        }}
                    </form>
                </BentoCard>
            </BentoGrid>
        </BentoSection>
    }
}
