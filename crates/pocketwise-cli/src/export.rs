//! CSV export of the transaction feed

use anyhow::{Context, Result};
use csv::Writer;
use pocketwise_core::{Transaction, format_decimal};
use std::io;
use std::path::Path;

/// Write `feed` to `path`, returning the number of rows written
pub fn write_transactions(path: &Path, feed: &[&Transaction]) -> Result<usize> {
    let wtr = Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_feed(wtr, feed)
}

fn write_feed<W: io::Write>(mut wtr: Writer<W>, feed: &[&Transaction]) -> Result<usize> {
    wtr.write_record([
        "Date",
        "Description",
        "Category",
        "Type",
        "Source",
        "Account",
        "Amount_INR",
    ])?;

    for txn in feed {
        let kind = if txn.is_credit() { "credit" } else { "debit" };
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = format_decimal(txn.signed_amount());
        wtr.write_record([
            date.as_str(),
            txn.description.as_str(),
            txn.category.as_str(),
            kind,
            txn.source.label(),
            txn.account.as_str(),
            amount.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(feed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketwise_core::{Money, sample_dataset, sort_feed};

    fn render(feed: &[&Transaction]) -> String {
        let mut buf = Vec::new();
        write_feed(Writer::from_writer(&mut buf), feed).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_header_and_signed_amounts() {
        let dataset = sample_dataset();
        let feed = sort_feed(&dataset.transactions, None);
        let csv = render(&feed);
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Date,Description,Category,Type,Source,Account,Amount_INR")
        );
        assert_eq!(csv.lines().count(), feed.len() + 1);
        assert!(csv.contains("Swiggy Instamart,Groceries,debit,CREDIT_CARD,cc2,-1200.00"));
        assert!(csv.contains("Salary Deposit,Income,credit,BANK,bank1,100000.00"));
    }

    #[test]
    fn test_csv_keeps_paise_exact() {
        let dataset = sample_dataset();
        let mut txn = dataset.transactions[0].clone();
        txn.amount = Money::from_paise(1_000_000_000_000_001);
        let csv = render(&[&txn]);
        assert!(csv.trim_end().ends_with(",10000000000000.01"));
    }

    #[test]
    fn test_csv_empty_feed_has_header_only() {
        assert_eq!(render(&[]).lines().count(), 1);
    }

    #[test]
    fn test_write_transactions_to_file() {
        let dataset = sample_dataset();
        let feed: Vec<&Transaction> = dataset.transactions.iter().take(3).collect();
        let path = std::env::temp_dir().join(format!("pocketwise-{}-export.csv", std::process::id()));

        assert_eq!(write_transactions(&path, &feed).unwrap(), 3);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 4);
        std::fs::remove_file(path).unwrap();
    }
}
