use leptos::logging::log;
use leptos::prelude::*;
use pocketwise_core::AccountFilter;

use crate::state::use_dashboard;

/// Account selector: all accounts, each bank, each card
#[component]
pub fn AccountSelect() -> impl IntoView {
    let state = use_dashboard();
    let (banks, cards) = state.dataset.with_untracked(|d| {
        let banks: Vec<(String, String)> = d
            .bank_accounts
            .iter()
            .map(|b| (AccountFilter::Bank(b.id.clone()).key(), b.label()))
            .collect();
        let cards: Vec<(String, String)> = d
            .credit_cards
            .iter()
            .map(|c| (AccountFilter::Card(c.id.clone()).key(), c.label()))
            .collect();
        (banks, cards)
    });

    let on_change = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        log!("account filter -> {key}");
        state.filter.set(AccountFilter::from_key(&key));
    };

    view! {
        <select class="account-select" on:change=on_change prop:value=move || state.filter.get().key()>
            <option value="all">"All Accounts"</option>
            {banks
                .into_iter()
                .chain(cards)
                .map(|(key, label)| view! { <option value=key>{label}</option> })
                .collect_view()}
        </select>
    }
}
