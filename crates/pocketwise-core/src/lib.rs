//! Pocketwise core
//!
//! Everything the dashboard shows is derived here from an in-memory record set:
//! balances, the transaction feed, spending by category, upcoming payments and
//! the rewards claim flow. The web and CLI crates only render these values.

pub mod calc;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod money;
pub mod rewards;
pub mod sample_data;

pub use calc::{
    AccountFilter, CategoryTotal, DashboardSummary, MAX_TREND_MONTHS, MonthlyFlow, YearMonth, filter_by_account,
    group_by_category, monthly_inflow, monthly_outflow, monthly_series, nearest_payment_within_days, net_cashflow,
    payments_for_account, search, sort_feed, total_balance, visible_feed,
};
pub use config::{CONFIG_FILE, DashboardConfig};
pub use error::{Error, Result};
pub use format::{format_currency, format_date, format_decimal, format_month, format_signed};
pub use model::{
    AccountId, BankAccount, CreditCard, Dataset, PaymentKind, Recommendation, Reward, RewardStatus, Transaction,
    TransactionKind, TransactionSource, UpcomingPayment,
};
pub use money::Money;
pub use rewards::{
    ClaimError, ClaimFlow, REEL_COUNT, SPIN_DURATION_MS, SlotSymbol, SpinOutcome, SpinResult, SpinTicket, spin,
};
pub use sample_data::sample_dataset;
