use leptos::prelude::*;

use crate::app::bento::{BentoCard, BentoSection};
use crate::i18n::use_i18n;

/// Work history timeline plus the summary stats row.
#[component]
pub fn Experience() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <BentoSection id="experience" title=Signal::derive(move || i18n.t("experience.title"))>
            <div class="max-w-4xl mx-auto space-y-6">
                {move || {
                    (0..i18n.len("experience.items"))
                        .map(|i| {
                            let base = format!("experience.items.{i}");
                            let responsibilities =
                                i18n.t_list(&format!("{base}.responsibilities"));
                            let skills = i18n.t_list(&format!("{base}.skills"));
                            view! {
                                <BentoCard>
                                    <div class="flex flex-col sm:flex-row sm:items-start gap-4">
                                        <div class="text-4xl">{i18n.t(&format!("{base}.icon"))}</div>
                                        <div class="flex-1">
                                            <div class="flex flex-col sm:flex-row sm:justify-between gap-1">
                                                <div>
                                                    <h3 class="text-xl font-bold">
                                                        {i18n.t(&format!("{base}.role"))}
                                                    </h3>
                                                    <p class="text-purple font-medium">
                                                        {i18n.t(&format!("{base}.company"))}
                                                    </p>
                                                </div>
                                                <div class="text-sm text-muted sm:text-right">
                                                    <p>"🗓️ " {i18n.t(&format!("{base}.period"))}</p>
                                                    <p>"📍 " {i18n.t(&format!("{base}.location"))}</p>
                                                </div>
                                            </div>
                                            <p class="text-muted mt-3">
                                                {i18n.t(&format!("{base}.description"))}
                                            </p>
                                            <h4 class="font-semibold mt-4 mb-2">
                                                {i18n.t("experience.keyResponsibilities")}
                                            </h4>
                                            <ul class="space-y-1 text-sm text-muted">
                                                {responsibilities
                                                    .into_iter()
                                                    .map(|r| {
                                                        view! {
                                                            <li class="flex items-start gap-2">
                                                                <span class="w-1.5 h-1.5 rounded-full bg-purple mt-1.5 shrink-0"></span>
                                                                <span>{r}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                            <div class="flex flex-wrap gap-2 mt-4">
                                                {skills
                                                    .into_iter()
                                                    .map(|s| {
                                                        view! {
                                                            <span class="text-xs px-2 py-1 rounded-full bg-bento-dark border border-bento-border text-muted">
                                                                {s}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </BentoCard>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="mt-12 grid gap-4 sm:grid-cols-3 max-w-3xl mx-auto">
                <StatCard
                    value=Signal::derive(move || i18n.t("experience.stats.years"))
                    label=Signal::derive(move || i18n.t("experience.stats.yearsLabel"))
                />
                <StatCard
                    value=Signal::derive(move || i18n.t("experience.stats.projects"))
                    label=Signal::derive(move || i18n.t("experience.stats.projectsLabel"))
                />
                <StatCard
                    value=Signal::derive(move || i18n.t("experience.stats.sectors"))
                    label=Signal::derive(move || i18n.t("experience.stats.sectorsLabel"))
                />
            </div>
        </BentoSection>
    }
}

#[component]
fn StatCard(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-bento-card backdrop-blur-sm border border-bento-border rounded-xl p-6 text-center">
            <div class="text-3xl font-bold text-purple mb-1">{move || value.get()}</div>
            <div class="text-sm text-muted">{move || label.get()}</div>
        </div>
    }
}
