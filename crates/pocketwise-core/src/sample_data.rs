//! Bundled sample records
//!
//! February 2024 and March 2024 feeds across two bank accounts and two cards.
//! All amounts are whole rupees.

use chrono::NaiveDate;

use crate::model::{
    AccountId, BankAccount, CreditCard, Dataset, PaymentKind, Recommendation, Reward, RewardStatus, Transaction,
    TransactionKind, TransactionSource, UpcomingPayment,
};
use crate::money::Money;

// Literal dates below are all valid
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn txn(
    id: &str,
    on: NaiveDate,
    rupees: i64,
    description: &str,
    category: &str,
    kind: TransactionKind,
    source: TransactionSource,
    account: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: on,
        amount: Money::rupees(rupees),
        description: description.to_string(),
        category: category.to_string(),
        kind,
        source,
        account: AccountId::new(account),
    }
}

fn transactions() -> Vec<Transaction> {
    use TransactionKind::{Credit, Debit};
    use TransactionSource::{Bank, CreditCard, Upi};

    vec![
        txn("1", date(2024, 2, 2), 100_000, "Salary", "Income", Credit, Bank, "bank1"),
        txn("2", date(2024, 2, 10), 15_000, "Rent Payment", "Housing", Debit, Bank, "bank1"),
        txn("3", date(2024, 2, 12), 10_000, "Grocery Shopping", "Groceries", Debit, CreditCard, "cc1"),
        txn("4", date(2024, 2, 15), 2_500, "Restaurant Dinner", "Food", Debit, CreditCard, "cc1"),
        txn("5", date(2024, 2, 18), 5_000, "Shopping Mall", "Shopping", Debit, CreditCard, "cc1"),
        txn("6", date(2024, 2, 20), 2_500, "Fuel", "Transportation", Debit, CreditCard, "cc1"),
        txn("7", date(2024, 2, 22), 10_000, "Maid Payment", "Services", Debit, Upi, "bank1"),
        txn("8", date(2024, 2, 25), 850, "Swiggy Food Order", "Food", Debit, Upi, "bank2"),
        txn("9", date(2024, 3, 2), 100_000, "Salary Deposit", "Income", Credit, Bank, "bank1"),
        txn("10", date(2024, 3, 10), 15_000, "Rent Payment", "Housing", Debit, Bank, "bank1"),
        txn("11", date(2024, 3, 12), 1_200, "Swiggy Instamart", "Groceries", Debit, CreditCard, "cc2"),
        txn("12", date(2024, 3, 15), 10_000, "Grocery Shopping", "Groceries", Debit, CreditCard, "cc1"),
    ]
}

fn bank_accounts() -> Vec<BankAccount> {
    vec![
        BankAccount {
            id: AccountId::new("bank1"),
            bank_name: "HDFC Bank".to_string(),
            account_type: "Savings".to_string(),
            balance: Money::rupees(75_000),
        },
        BankAccount {
            id: AccountId::new("bank2"),
            bank_name: "SBI".to_string(),
            account_type: "Salary".to_string(),
            balance: Money::rupees(50_000),
        },
    ]
}

fn credit_cards() -> Vec<CreditCard> {
    vec![
        CreditCard {
            id: AccountId::new("cc1"),
            bank: "HDFC Bank".to_string(),
            last_four_digits: "4567".to_string(),
            total_limit: Money::rupees(200_000),
            available_limit: Money::rupees(155_000),
            due_date: date(2024, 3, 5),
            outstanding_amount: Money::rupees(45_000),
        },
        CreditCard {
            id: AccountId::new("cc2"),
            bank: "Axis Bank".to_string(),
            last_four_digits: "8812".to_string(),
            total_limit: Money::rupees(100_000),
            available_limit: Money::rupees(95_000),
            due_date: date(2024, 3, 18),
            outstanding_amount: Money::rupees(5_000),
        },
    ]
}

fn upcoming_payments() -> Vec<UpcomingPayment> {
    let payment = |id: &str, rupees: i64, due: NaiveDate, description: &str, kind: PaymentKind, account: &str| {
        UpcomingPayment {
            id: id.to_string(),
            amount: Money::rupees(rupees),
            due_date: due,
            description: description.to_string(),
            kind,
            account: AccountId::new(account),
        }
    };

    vec![
        payment("rent", 15_000, date(2024, 3, 10), "Rent Payment", PaymentKind::Bank, "bank1"),
        payment("cc-bill", 45_000, date(2024, 3, 5), "Credit Card Bill", PaymentKind::CreditCard, "cc1"),
        payment("cc2-bill", 5_000, date(2024, 3, 18), "Axis Card Bill", PaymentKind::CreditCard, "cc2"),
        payment("utility", 3_000, date(2024, 3, 28), "Utility Bill", PaymentKind::Bank, "bank1"),
    ]
}

fn rewards() -> Vec<Reward> {
    let reward = |id: &str, influencer: &str, brand: &str, prize: &str| Reward {
        id: id.to_string(),
        influencer: influencer.to_string(),
        brand: brand.to_string(),
        prize: prize.to_string(),
        status: RewardStatus::Available,
    };

    vec![
        reward("farah-swiggy", "Farah Khan", "Swiggy", "₹30L worth of gifts"),
        reward("john-techgadget", "John Doe", "TechGadget", "Latest smartphone"),
        reward("jane-fashionhub", "Jane Smith", "FashionHub", "Shopping spree"),
    ]
}

fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            icon: "💡".to_string(),
            title: "Optimize Credit Card Usage".to_string(),
            body: "Use your credit card for grocery purchases to earn 5% cashback".to_string(),
        },
        Recommendation {
            icon: "💰".to_string(),
            title: "Better Cashflow Management".to_string(),
            body: "Consider paying rent via credit card to better manage monthly cashflow".to_string(),
        },
    ]
}

/// The complete sample record set
pub fn sample_dataset() -> Dataset {
    Dataset {
        transactions: transactions(),
        bank_accounts: bank_accounts(),
        credit_cards: credit_cards(),
        upcoming_payments: upcoming_payments(),
        rewards: rewards(),
        recommendations: recommendations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let dataset = sample_dataset();
        let txn_ids: HashSet<_> = dataset.transactions.iter().map(|t| &t.id).collect();
        assert_eq!(txn_ids.len(), dataset.transactions.len());
        let reward_ids: HashSet<_> = dataset.rewards.iter().map(|r| &r.id).collect();
        assert_eq!(reward_ids.len(), dataset.rewards.len());
    }

    #[test]
    fn test_every_record_points_at_a_known_account() {
        let dataset = sample_dataset();
        let known = |id: &AccountId| dataset.bank(id).is_some() || dataset.card(id).is_some();
        assert!(dataset.transactions.iter().all(|t| known(&t.account)));
        assert!(dataset.upcoming_payments.iter().all(|p| known(&p.account)));
    }

    #[test]
    fn test_card_limits_are_consistent() {
        for card in sample_dataset().credit_cards {
            assert_eq!(card.available_limit + card.outstanding_amount, card.total_limit);
        }
    }

    #[test]
    fn test_dataset_survives_json() {
        let dataset = sample_dataset();
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(Dataset::from_json(&json).unwrap(), dataset);
    }
}
