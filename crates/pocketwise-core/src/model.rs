//! Record shapes rendered by the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::money::Money;

/// Identifier of a bank account or credit card
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// Rail a transaction went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSource {
    Upi,
    CreditCard,
    Bank,
}

impl TransactionSource {
    /// Chip label shown next to the date
    pub fn label(self) -> &'static str {
        match self {
            TransactionSource::Upi => "UPI",
            TransactionSource::CreditCard => "CREDIT_CARD",
            TransactionSource::Bank => "BANK",
        }
    }
}

impl std::fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single booked transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    /// Always non-negative; the sign comes from `kind`
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub kind: TransactionKind,
    pub source: TransactionSource,
    pub account: AccountId,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// Amount with the sign of the money movement
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: AccountId,
    pub bank_name: String,
    pub account_type: String,
    pub balance: Money,
}

impl BankAccount {
    /// Selector label, e.g. "HDFC Bank - Savings"
    pub fn label(&self) -> String {
        format!("{} - {}", self.bank_name, self.account_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: AccountId,
    pub bank: String,
    pub last_four_digits: String,
    pub total_limit: Money,
    pub available_limit: Money,
    pub due_date: NaiveDate,
    pub outstanding_amount: Money,
}

impl CreditCard {
    /// Selector label, e.g. "HDFC Bank Card (*4567)"
    pub fn label(&self) -> String {
        format!("{} Card (*{})", self.bank, self.last_four_digits)
    }

    /// Share of the limit currently used, in percent
    pub fn utilization_percent(&self) -> f64 {
        self.outstanding_amount
            .percent_of(self.total_limit)
            .clamp(0.0, 100.0)
    }

    /// Signed balance of the card (debt is negative)
    pub fn balance(&self) -> Money {
        -self.outstanding_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Bank,
    CreditCard,
}

impl PaymentKind {
    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::Bank => "BANK",
            PaymentKind::CreditCard => "CREDIT CARD",
        }
    }
}

/// A scheduled outgoing payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingPayment {
    pub id: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub description: String,
    pub kind: PaymentKind,
    pub account: AccountId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardStatus {
    #[default]
    Available,
    Claimed,
}

/// Influencer x brand giveaway that can be claimed through the slot machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub influencer: String,
    pub brand: String,
    pub prize: String,
    #[serde(default)]
    pub status: RewardStatus,
}

impl Reward {
    /// Card heading, e.g. "Farah Khan x Swiggy"
    pub fn title(&self) -> String {
        format!("{} x {}", self.influencer, self.brand)
    }

    pub fn is_claimed(&self) -> bool {
        self.status == RewardStatus::Claimed
    }
}

/// Static tip shown under the upcoming payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub body: String,
}

/// Complete record set the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub upcoming_payments: Vec<UpcomingPayment>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Dataset {
    /// Parse a dataset from its JSON form and check its records
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reject amounts the calculations cannot interpret
    ///
    /// Transaction and payment amounts carry no sign of their own, and card
    /// figures are never negative. Bank balances may be overdrawn.
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |record: &'static str, id: &str, reason: &'static str| Error::InvalidRecord {
            record,
            id: id.to_string(),
            reason,
        };

        for txn in &self.transactions {
            if txn.amount.is_negative() {
                return Err(invalid("transaction", &txn.id, "amount is negative"));
            }
        }
        for payment in &self.upcoming_payments {
            if payment.amount.is_negative() {
                return Err(invalid("payment", &payment.id, "amount is negative"));
            }
        }
        for card in &self.credit_cards {
            let id = card.id.as_str();
            if card.total_limit.is_negative() {
                return Err(invalid("card", id, "total limit is negative"));
            }
            if card.available_limit.is_negative() {
                return Err(invalid("card", id, "available limit is negative"));
            }
            if card.outstanding_amount.is_negative() {
                return Err(invalid("card", id, "outstanding amount is negative"));
            }
            if card.available_limit > card.total_limit {
                return Err(invalid("card", id, "available limit exceeds total limit"));
            }
        }
        Ok(())
    }

    pub fn bank(&self, id: &AccountId) -> Option<&BankAccount> {
        self.bank_accounts.iter().find(|a| &a.id == id)
    }

    pub fn card(&self, id: &AccountId) -> Option<&CreditCard> {
        self.credit_cards.iter().find(|c| &c.id == id)
    }

    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    pub fn reward_mut(&mut self, id: &str) -> Option<&mut Reward> {
        self.rewards.iter_mut().find(|r| r.id == id)
    }
}
