//! en-IN display formatting for amounts and dates

use chrono::{Datelike, NaiveDate};

use crate::calc::YearMonth;
use crate::model::Transaction;
use crate::money::{Money, PAISE_PER_RUPEE};

const RUPEE: char = '₹';

/// en-IN short month names (September is "Sept")
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Group digits the Indian way: last three, then pairs ("10000000" -> "1,00,00,000")
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Format as whole rupees: `₹1,00,000`, `-₹15,000`
pub fn format_currency(amount: Money) -> String {
    let rupees = amount.rounded_rupees();
    let grouped = group_indian(&rupees.unsigned_abs().to_string());
    if rupees < 0 {
        format!("-{RUPEE}{grouped}")
    } else {
        format!("{RUPEE}{grouped}")
    }
}

/// Plain decimal rupees with paise for exports: `-1200.50`, `0.05`
///
/// Built from the integer paise so the digits are exact.
pub fn format_decimal(amount: Money) -> String {
    let paise = amount.paise();
    let abs = paise.unsigned_abs();
    let per_rupee = PAISE_PER_RUPEE.unsigned_abs();
    let sign = if paise < 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", abs / per_rupee, abs % per_rupee)
}

/// Amount with an explicit direction sign, as the feed shows it
pub fn format_signed(txn: &Transaction) -> String {
    let sign = if txn.is_credit() { '+' } else { '-' };
    format!("{}{}", sign, format_currency(txn.amount))
}

/// `2 Feb 2024`
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// `Feb 2024`
pub fn format_month(month: YearMonth) -> String {
    format!("{} {}", short_month(month), month.year)
}

/// `Feb`
pub fn short_month(month: YearMonth) -> &'static str {
    MONTHS[(month.month.clamp(1, 12) - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountId, TransactionKind, TransactionSource};

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(Money::rupees(0)), "₹0");
        assert_eq!(format_currency(Money::rupees(999)), "₹999");
        assert_eq!(format_currency(Money::rupees(2500)), "₹2,500");
        assert_eq!(format_currency(Money::rupees(75_000)), "₹75,000");
        assert_eq!(format_currency(Money::rupees(100_000)), "₹1,00,000");
        assert_eq!(format_currency(Money::rupees(12_345_678)), "₹1,23,45,678");
    }

    #[test]
    fn test_format_currency_negative_and_rounding() {
        assert_eq!(format_currency(Money::rupees(-15_000)), "-₹15,000");
        assert_eq!(format_currency(Money::from_paise(249_950)), "₹2,500");
        assert_eq!(format_currency(Money::from_paise(-49)), "₹0");
    }

    #[test]
    fn test_format_decimal_is_exact() {
        assert_eq!(format_decimal(Money::rupees(-1200)), "-1200.00");
        assert_eq!(format_decimal(Money::from_paise(5)), "0.05");
        assert_eq!(format_decimal(Money::from_paise(-5)), "-0.05");
        assert_eq!(format_decimal(Money::from_paise(1_000_000_000_000_001)), "10000000000000.01");
        assert_eq!(format_decimal(Money::from_paise(i64::MIN)), "-92233720368547758.08");
        assert_eq!(format_decimal(Money::ZERO), "0.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()), "2 Feb 2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()), "10 Mar 2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()), "1 Sept 2024");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(YearMonth::new(2024, 2)), "Feb 2024");
    }

    #[test]
    fn test_format_signed() {
        let txn = Transaction {
            id: "2".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            amount: Money::rupees(15_000),
            description: "Rent Payment".to_string(),
            category: "Housing".to_string(),
            kind: TransactionKind::Debit,
            source: TransactionSource::Bank,
            account: AccountId::new("bank1"),
        };
        assert_eq!(format_signed(&txn), "-₹15,000");
    }
}
