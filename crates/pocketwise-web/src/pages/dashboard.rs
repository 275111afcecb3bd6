use leptos::prelude::*;
use pocketwise_core::{DashboardSummary, format_currency};

use crate::components::{AccountSelect, MonthlyTrend, Section, SpendingChart, StatCard, TransactionList, UpcomingPayments};
use crate::state::{Tab, use_dashboard};

/// Fixed fill of the balance bars; only card usage has a meaningful ratio
const NET_BALANCE_FILL: f64 = 70.0;
const BANK_BALANCE_FILL: f64 = 85.0;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_dashboard();
    let title = state.config.with_value(|c| c.title.clone());

    let summary = Memo::new(move |_| {
        let filter = state.filter.get();
        state
            .dataset
            .with(|d| state.config.with_value(|c| DashboardSummary::compute(d, &filter, c)))
    });

    let net_tone = Signal::derive(move || if summary.with(|s| s.net_cashflow.is_negative()) { "error" } else { "success" });

    view! {
        <main class="container">
            // Header
            <header class="page-header">
                <h1>{title}</h1>
                <AccountSelect />
            </header>

            // Quick Stats
            <div class="grid-3">
                <StatCard
                    caption="Net Balance"
                    value=Signal::derive(move || format_currency(summary.with(|s| s.net_cashflow)))
                    tone=net_tone
                    percent=NET_BALANCE_FILL
                />
                <StatCard
                    caption="Bank Balance"
                    value=Signal::derive(move || format_currency(summary.with(|s| s.bank_balance)))
                    tone="primary"
                    percent=BANK_BALANCE_FILL
                />
                <StatCard
                    caption="Credit Card Usage"
                    value=Signal::derive(move || format_currency(summary.with(|s| s.card_outstanding)))
                    tone="warning"
                    percent=Signal::derive(move || summary.with(|s| s.card_utilization))
                    footnote=Signal::derive(move || {
                        format!("Available: {}", format_currency(summary.with(|s| s.card_available)))
                    })
                />
            </div>

            // This month
            <div class="month-strip muted">
                {move || summary.with(|s| format!(
                    "This month: in {} · out {} · total balance {}",
                    format_currency(s.monthly_inflow),
                    format_currency(s.monthly_outflow),
                    format_currency(s.total_balance),
                ))}
            </div>

            // Main Content Tabs
            <div class="tabs" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            role="tab"
                            class="tab"
                            class:active=move || state.tab.get() == tab
                            on:click=move |_| state.tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match state.tab.get() {
                Tab::Transactions => view! { <TransactionList /> }.into_any(),
                Tab::Cashflow => view! {
                    <Section id="spending" title="Spending by Category">
                        <SpendingChart />
                    </Section>
                    <Section id="trend" title="Monthly Cashflow">
                        <MonthlyTrend />
                    </Section>
                }.into_any(),
                Tab::Upcoming => view! { <UpcomingPayments /> }.into_any(),
            }}
        </main>
    }
}
