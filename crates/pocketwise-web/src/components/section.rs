use leptos::prelude::*;

/// Card panel with a heading, used for every dashboard block
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="card">
            <h2 class="card-title">{title}</h2>
            {children()}
        </section>
    }
}

/// Small pill next to a list item ("UPI", "CREDIT CARD", ...)
#[component]
pub fn Chip(#[prop(into)] label: String, #[prop(into)] tone: String) -> impl IntoView {
    view! { <span class=format!("chip chip-{tone}")>{label}</span> }
}
