use leptos::prelude::*;

/// Determinate progress bar; `percent` is clamped to 0..=100
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>, #[prop(into)] tone: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="progress">
            <div
                class=move || format!("progress-fill tone-{}", tone.get())
                style:width=move || format!("{:.1}%", percent.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}

/// Quick-stat card: caption, big value, progress bar and an optional footnote
#[component]
pub fn StatCard(
    #[prop(into)] caption: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] tone: Signal<&'static str>,
    #[prop(into)] percent: Signal<f64>,
    #[prop(optional, into)] footnote: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="card stat">
            <div class="muted">{caption}</div>
            <div class=move || format!("stat-value text-{}", tone.get())>{move || value.get()}</div>
            <ProgressBar percent=percent tone=tone />
            {footnote.map(|f| view! { <div class="caption muted">{move || f.get()}</div> })}
        </div>
    }
}
