//! Reactive dashboard state shared through context

use leptos::prelude::*;
use pocketwise_core::{AccountFilter, ClaimFlow, Dataset, DashboardConfig, sample_dataset};

/// Main content tabs on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Transactions,
    Cashflow,
    Upcoming,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Transactions, Tab::Cashflow, Tab::Upcoming];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Transactions => "Transactions",
            Tab::Cashflow => "Cashflow",
            Tab::Upcoming => "Upcoming Payments",
        }
    }
}

/// Everything the panels react to
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub dataset: RwSignal<Dataset>,
    pub config: StoredValue<DashboardConfig>,
    pub filter: RwSignal<AccountFilter>,
    pub tab: RwSignal<Tab>,
    pub search: RwSignal<String>,
    pub claim: RwSignal<ClaimFlow>,
    /// Last claim-flow error shown in the rewards dialog
    pub claim_error: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self {
            dataset: RwSignal::new(dataset),
            config: StoredValue::new(config),
            filter: RwSignal::new(AccountFilter::All),
            tab: RwSignal::new(Tab::default()),
            search: RwSignal::new(String::new()),
            claim: RwSignal::new(ClaimFlow::default()),
            claim_error: RwSignal::new(None),
        }
    }

    /// Provide the sample-backed state to the component tree
    pub fn provide() -> Self {
        let state = Self::new(sample_dataset(), DashboardConfig::default());
        provide_context(state);
        state
    }
}

pub fn use_dashboard() -> DashboardState {
    expect_context::<DashboardState>()
}
