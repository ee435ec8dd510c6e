use leptos::prelude::*;

/// Full-width page section with the shared heading treatment.
#[component]
pub fn BentoSection(
    id: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] subtitle: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="relative py-16 sm:py-24">
            <div class="container mx-auto px-4 sm:px-6">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold">{move || title.get()}</h2>
                    <div class="w-16 h-1 bg-gradient-to-r from-purple to-blue mx-auto mt-4"></div>
                    {subtitle
                        .map(|s| {
                            view! {
                                <p class="text-muted text-lg max-w-2xl mx-auto mt-4">
                                    {move || s.get()}
                                </p>
                            }
                        })}
                </div>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn BentoGrid(#[prop(default = 3)] columns: u8, children: Children) -> impl IntoView {
    let cols = match columns {
        2 => "grid gap-4 sm:grid-cols-2",
        4 => "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
        _ => "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
    };
    view! { <div class=cols>{children()}</div> }
}

#[component]
pub fn BentoCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-bento-card backdrop-blur-sm border border-bento-border rounded-2xl p-6 transition-all duration-300 hover:border-purple/50 {class}",
        )>{children()}</div>
    }
}
