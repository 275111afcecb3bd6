use leptos::prelude::*;
use pocketwise_core::{
    PaymentKind, UpcomingPayment, format_currency, format_date, nearest_payment_within_days, payments_for_account,
};

use super::{Chip, Section};
use crate::state::use_dashboard;

fn kind_tone(kind: PaymentKind) -> &'static str {
    match kind {
        PaymentKind::Bank => "primary",
        PaymentKind::CreditCard => "warning",
    }
}

/// Scheduled payments, the next one due and static tips
#[component]
pub fn UpcomingPayments() -> impl IntoView {
    let state = use_dashboard();
    let (as_of, window) = state.config.with_value(|c| (c.as_of, c.payment_window_days));

    let payments = Memo::new(move |_| {
        let filter = state.filter.get();
        state.dataset.with(|d| {
            payments_for_account(&d.upcoming_payments, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<UpcomingPayment>>()
        })
    });
    let next_due = Memo::new(move |_| payments.with(|p| nearest_payment_within_days(p, as_of, window).cloned()));
    let recommendations = state.dataset.with_untracked(|d| d.recommendations.clone());

    view! {
        {move || next_due.get().map(|p| view! {
            <div class="card highlight">
                <div class="muted">{format!("Due within {window} days")}</div>
                <div class="primary">{p.description.clone()}</div>
                <div>
                    <span class="amount text-error">{format!("-{}", format_currency(p.amount))}</span>
                    " on " {format_date(p.due_date)}
                </div>
            </div>
        })}

        <Section id="scheduled" title="Scheduled Payments">
            <ul class="list">
                <For
                    each=move || payments.get()
                    key=|p| p.id.clone()
                    children=move |p| view! {
                        <li class="list-item">
                            <div>
                                <div class="primary">{p.description.clone()}</div>
                                <div class="secondary">
                                    "Due on " {format_date(p.due_date)}
                                    <Chip label=p.kind.label() tone=kind_tone(p.kind) />
                                </div>
                            </div>
                            <div class="amount text-error">{format!("-{}", format_currency(p.amount))}</div>
                        </li>
                    }
                />
            </ul>
        </Section>

        <Section id="recommendations" title="Smart Recommendations">
            <div class="grid-2">
                {recommendations
                    .into_iter()
                    .enumerate()
                    .map(|(i, r)| {
                        let tone = if i % 2 == 0 { "tip tip-primary" } else { "tip tip-secondary" };
                        view! {
                            <div class=tone>
                                <div class="tip-title">{r.icon} " " {r.title}</div>
                                <div class="tip-body">{r.body}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
