use leptos::prelude::*;

use crate::app::bento::{BentoCard, BentoGrid, BentoSection};
use crate::i18n::use_i18n;

/// Projects grid followed by the skills strip.
#[component]
pub fn Showcase() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <BentoSection
            id="projects"
            title=Signal::derive(move || i18n.t("projects.title"))
            subtitle=Signal::derive(move || i18n.t("projects.subtitle"))
        >
            <BentoGrid columns=3>
                {move || {
                    (0..i18n.len("projects.items"))
                        .map(|i| {
                            let base = format!("projects.items.{i}");
                            let tech = i18n.t_list(&format!("{base}.tech"));
                            view! {
                                <BentoCard>
                                    <h3 class="text-xl font-bold mb-2">
                                        {i18n.t(&format!("{base}.title"))}
                                    </h3>
                                    <p class="text-muted text-sm mb-4">
                                        {i18n.t(&format!("{base}.description"))}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {tech
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded-full bg-blue/20 text-blue">
                                                        {t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </BentoCard>
                            }
                        })
                        .collect_view()
                }}
            </BentoGrid>

            <div class="mt-12">
                <h3 class="text-2xl font-bold mb-4 text-center">
                    {move || i18n.t("skills.title")}
                </h3>
                <div class="flex flex-wrap justify-center gap-3">
                    {move || {
                        i18n.t_list("skills.items")
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-4 py-2 rounded-lg bg-bento-card border border-bento-border text-sm hover:border-purple transition-colors">
                                        {skill}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </BentoSection>
    }
}
