//! Dashboard calculations
//!
//! Every helper here is a single pass over the record set. None of them
//! allocate more than the list they return.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::model::{
    AccountId, BankAccount, CreditCard, Dataset, PaymentKind, Transaction, TransactionSource, UpcomingPayment,
};
use crate::money::Money;

// =============================================================================
// Calendar months
// =============================================================================

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn prev(self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

// =============================================================================
// Account selection
// =============================================================================

/// Account selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AccountFilter {
    #[default]
    All,
    Bank(AccountId),
    Card(AccountId),
}

impl AccountFilter {
    /// Stable key used as the `<option>` value ("all", "bank:ID", "card:ID")
    pub fn key(&self) -> String {
        match self {
            AccountFilter::All => "all".to_string(),
            AccountFilter::Bank(id) => format!("bank:{id}"),
            AccountFilter::Card(id) => format!("card:{id}"),
        }
    }

    /// Inverse of [`AccountFilter::key`]; unknown keys fall back to `All`
    pub fn from_key(key: &str) -> Self {
        match key.split_once(':') {
            Some(("bank", id)) => AccountFilter::Bank(AccountId::new(id)),
            Some(("card", id)) => AccountFilter::Card(AccountId::new(id)),
            _ => AccountFilter::All,
        }
    }

    /// Resolve a bare account id against the dataset
    pub fn resolve(dataset: &Dataset, id: &str) -> Result<Self> {
        if id.eq_ignore_ascii_case("all") {
            return Ok(AccountFilter::All);
        }
        let id = AccountId::new(id);
        if dataset.bank(&id).is_some() {
            Ok(AccountFilter::Bank(id))
        } else if dataset.card(&id).is_some() {
            Ok(AccountFilter::Card(id))
        } else {
            Err(Error::UnknownAccount(id.0))
        }
    }

    /// Bank and card ids may collide, so the record's rail decides which side it is on
    pub fn matches_transaction(&self, txn: &Transaction) -> bool {
        let on_card = txn.source == TransactionSource::CreditCard;
        self.matches(&txn.account, on_card)
    }

    pub fn matches_payment(&self, payment: &UpcomingPayment) -> bool {
        let on_card = payment.kind == PaymentKind::CreditCard;
        self.matches(&payment.account, on_card)
    }

    fn matches(&self, account: &AccountId, on_card: bool) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Bank(id) => !on_card && id == account,
            AccountFilter::Card(id) => on_card && id == account,
        }
    }

    fn includes_bank(&self, bank: &BankAccount) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Bank(id) => *id == bank.id,
            AccountFilter::Card(_) => false,
        }
    }

    fn includes_card(&self, card: &CreditCard) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Card(id) => *id == card.id,
            AccountFilter::Bank(_) => false,
        }
    }
}

// =============================================================================
// Balances and flows
// =============================================================================

/// Bank balances minus card outstandings
pub fn total_balance(banks: &[BankAccount], cards: &[CreditCard]) -> Money {
    let bank: Money = banks.iter().map(|a| a.balance).sum();
    let card: Money = cards.iter().map(CreditCard::balance).sum();
    bank + card
}

/// Credits booked in `month`
pub fn monthly_inflow<'a>(txns: impl IntoIterator<Item = &'a Transaction>, month: YearMonth) -> Money {
    txns.into_iter()
        .filter(|t| t.is_credit() && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Debits booked in `month`, as a positive magnitude
pub fn monthly_outflow<'a>(txns: impl IntoIterator<Item = &'a Transaction>, month: YearMonth) -> Money {
    txns.into_iter()
        .filter(|t| t.is_debit() && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Total credits minus total debits
pub fn net_cashflow<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Money {
    txns.into_iter().map(Transaction::signed_amount).sum()
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Sum debits per category, keeping first-appearance order
pub fn group_by_category<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for txn in txns.into_iter().filter(|t| t.is_debit()) {
        match groups.iter_mut().find(|g| g.category == txn.category) {
            Some(group) => group.total += txn.amount,
            None => groups.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }
    groups
}

/// Inflow and outflow of one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyFlow {
    pub month: YearMonth,
    pub inflow: Money,
    pub outflow: Money,
}

/// Longest trend window, ten years
pub const MAX_TREND_MONTHS: u32 = 120;

/// Trailing `months` months ending at the latest transaction, zero-filled
///
/// `months` is capped at [`MAX_TREND_MONTHS`].
pub fn monthly_series(txns: &[Transaction], months: u32) -> Vec<MonthlyFlow> {
    let Some(last) = txns.iter().map(|t| t.date).max() else {
        return Vec::new();
    };
    let months = months.min(MAX_TREND_MONTHS);
    if months == 0 {
        return Vec::new();
    }

    let mut first = YearMonth::of(last);
    for _ in 1..months {
        first = first.prev();
    }

    let mut series: Vec<MonthlyFlow> = Vec::with_capacity(months as usize);
    let mut month = first;
    for _ in 0..months {
        series.push(MonthlyFlow {
            month,
            inflow: Money::ZERO,
            outflow: Money::ZERO,
        });
        month = month.next();
    }

    for txn in txns {
        let key = YearMonth::of(txn.date);
        if let Some(slot) = series.iter_mut().find(|f| f.month == key) {
            if txn.is_credit() {
                slot.inflow += txn.amount;
            } else {
                slot.outflow += txn.amount;
            }
        }
    }
    series
}

// =============================================================================
// Upcoming payments
// =============================================================================

/// Earliest payment due in `[today, today + window_days]`
///
/// Overdue payments are not candidates. Ties keep the first in input order.
pub fn nearest_payment_within_days(
    payments: &[UpcomingPayment],
    today: NaiveDate,
    window_days: u32,
) -> Option<&UpcomingPayment> {
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    payments
        .iter()
        .filter(|p| p.due_date >= today && p.due_date <= window_end)
        .min_by_key(|p| p.due_date)
}

pub fn payments_for_account<'a>(payments: &'a [UpcomingPayment], filter: &AccountFilter) -> Vec<&'a UpcomingPayment> {
    payments.iter().filter(|p| filter.matches_payment(p)).collect()
}

// =============================================================================
// Transaction feed
// =============================================================================

pub fn filter_by_account<'a>(
    txns: impl IntoIterator<Item = &'a Transaction>,
    filter: &AccountFilter,
) -> Vec<&'a Transaction> {
    txns.into_iter().filter(|t| filter.matches_transaction(t)).collect()
}

/// Case-insensitive match on description or category; blank matches all
pub fn search<'a>(txns: impl IntoIterator<Item = &'a Transaction>, query: &str) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();
    txns.into_iter()
        .filter(|t| {
            needle.is_empty()
                || t.description.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Newest first, then the pinned merchant's transactions float to the top
///
/// Both stages are stable, so equal dates keep input order and pinned
/// transactions stay in recency order among themselves.
pub fn sort_feed<'a>(
    txns: impl IntoIterator<Item = &'a Transaction>,
    pinned_merchant: Option<&str>,
) -> Vec<&'a Transaction> {
    let mut feed: Vec<&Transaction> = txns.into_iter().collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));

    let pin = pinned_merchant.map(|m| m.trim().to_lowercase()).filter(|m| !m.is_empty());
    let Some(pin) = pin else {
        return feed;
    };

    let (mut pinned, rest): (Vec<_>, Vec<_>) = feed
        .into_iter()
        .partition(|t| t.description.to_lowercase().contains(&pin));
    pinned.extend(rest);
    pinned
}

/// The feed as the transaction list shows it: account filter, then search,
/// then recency order with the pinned merchant first
pub fn visible_feed<'a>(
    dataset: &'a Dataset,
    filter: &AccountFilter,
    query: &str,
    pinned_merchant: Option<&str>,
) -> Vec<&'a Transaction> {
    sort_feed(search(filter_by_account(&dataset.transactions, filter), query), pinned_merchant)
}

// =============================================================================
// Quick stats
// =============================================================================

/// Values behind the quick-stat cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Credits minus debits of the selected transactions
    pub net_cashflow: Money,
    pub bank_balance: Money,
    /// Selected bank balances minus selected card outstandings
    pub total_balance: Money,
    pub card_outstanding: Money,
    pub card_available: Money,
    pub card_limit: Money,
    pub card_utilization: f64,
    pub month: YearMonth,
    pub monthly_inflow: Money,
    pub monthly_outflow: Money,
    pub next_payment: Option<UpcomingPayment>,
}

impl DashboardSummary {
    pub fn compute(dataset: &Dataset, filter: &AccountFilter, config: &DashboardConfig) -> Self {
        let txns = filter_by_account(&dataset.transactions, filter);
        let banks: Vec<BankAccount> = dataset
            .bank_accounts
            .iter()
            .filter(|b| filter.includes_bank(b))
            .cloned()
            .collect();
        let cards: Vec<CreditCard> = dataset
            .credit_cards
            .iter()
            .filter(|c| filter.includes_card(c))
            .cloned()
            .collect();

        let card_outstanding: Money = cards.iter().map(|c| c.outstanding_amount).sum();
        let card_limit: Money = cards.iter().map(|c| c.total_limit).sum();
        let card_available: Money = cards.iter().map(|c| c.available_limit).sum();

        let payments: Vec<UpcomingPayment> = payments_for_account(&dataset.upcoming_payments, filter)
            .into_iter()
            .cloned()
            .collect();
        let month = YearMonth::of(config.as_of);

        Self {
            net_cashflow: net_cashflow(txns.iter().copied()),
            bank_balance: banks.iter().map(|b| b.balance).sum(),
            total_balance: total_balance(&banks, &cards),
            card_outstanding,
            card_available,
            card_limit,
            card_utilization: card_outstanding.percent_of(card_limit).clamp(0.0, 100.0),
            month,
            monthly_inflow: monthly_inflow(txns.iter().copied(), month),
            monthly_outflow: monthly_outflow(txns.iter().copied(), month),
            next_payment: nearest_payment_within_days(&payments, config.as_of, config.payment_window_days).cloned(),
        }
    }
}
