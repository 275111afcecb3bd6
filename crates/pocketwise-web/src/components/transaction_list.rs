use leptos::prelude::*;
use pocketwise_core::{Transaction, TransactionSource, format_date, format_signed, visible_feed};

use super::Chip;
use crate::state::use_dashboard;

fn source_tone(source: TransactionSource) -> &'static str {
    match source {
        TransactionSource::CreditCard => "warning",
        TransactionSource::Upi => "info",
        TransactionSource::Bank => "default",
    }
}

/// Feed for the current account filter and search text, pinned merchant first
#[component]
pub fn TransactionList() -> impl IntoView {
    let state = use_dashboard();
    let pinned = state.config.with_value(|c| c.pinned_merchant.clone());

    let feed = Memo::new(move |_| {
        let filter = state.filter.get();
        let query = state.search.get();
        state.dataset.with(|d| {
            visible_feed(d, &filter, &query, pinned.as_deref())
                .into_iter()
                .cloned()
                .collect::<Vec<Transaction>>()
        })
    });

    view! {
        <div class="card">
            <input
                class="search"
                type="search"
                placeholder="Search transactions"
                prop:value=move || state.search.get()
                on:input=move |ev| state.search.set(event_target_value(&ev))
            />
            <Show
                when=move || !feed.with(Vec::is_empty)
                fallback=|| view! { <p class="muted">"No transactions match."</p> }
            >
                <ul class="list">
                    <For
                        each=move || feed.get()
                        key=|t| t.id.clone()
                        children=move |t| {
                            let amount_class = if t.is_credit() { "amount text-success" } else { "amount text-error" };
                            view! {
                                <li class="list-item">
                                    <div>
                                        <div class="primary">{t.description.clone()}</div>
                                        <div class="secondary">
                                            {format_date(t.date)}
                                            <Chip label=t.source.label() tone=source_tone(t.source) />
                                        </div>
                                    </div>
                                    <div class=amount_class>{format_signed(&t)}</div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
