//! Console output for each dashboard view

use pocketwise_core::{
    CategoryTotal, DashboardConfig, DashboardSummary, Dataset, Money, MonthlyFlow, Recommendation, Reward,
    SpinOutcome, Transaction, UpcomingPayment, format::short_month, format_currency, format_date, format_month,
    format_signed, nearest_payment_within_days,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Width of the longest trend bar in characters
const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Source")]
    source: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Payment")]
    description: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct RewardRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Giveaway")]
    title: String,
    #[tabled(rename = "Prize")]
    prize: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn debit(amount: Money) -> String {
    format!("-{}", format_currency(amount))
}

fn transaction_rows(feed: &[&Transaction]) -> Vec<TransactionRow> {
    feed.iter()
        .map(|t| TransactionRow {
            date: format_date(t.date),
            description: t.description.clone(),
            category: t.category.clone(),
            source: t.source.label(),
            amount: format_signed(t),
        })
        .collect()
}

fn category_rows(groups: &[CategoryTotal]) -> Vec<CategoryRow> {
    let total: Money = groups.iter().map(|g| g.total).sum();
    groups
        .iter()
        .map(|g| CategoryRow {
            category: g.category.clone(),
            spent: format_currency(g.total),
            share: format!("{:.1}%", g.total.percent_of(total)),
        })
        .collect()
}

/// Horizontal bar scaled against the largest value in the series
fn bar(value: Money, max: Money) -> String {
    let len = (value.percent_of(max).clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

fn trend_lines(series: &[MonthlyFlow]) -> Vec<String> {
    let max = series
        .iter()
        .map(|f| f.inflow.max(f.outflow))
        .max()
        .unwrap_or(Money::ZERO);
    series
        .iter()
        .flat_map(|f| {
            [
                format!("  {:<4} in  {:<w$} {}", short_month(f.month), bar(f.inflow, max), format_currency(f.inflow), w = BAR_WIDTH),
                format!("       out {:<w$} {}", bar(f.outflow, max), format_currency(f.outflow), w = BAR_WIDTH),
            ]
        })
        .collect()
}

fn reward_rows(rewards: &[Reward]) -> Vec<RewardRow> {
    rewards
        .iter()
        .map(|r| RewardRow {
            id: r.id.clone(),
            title: r.title(),
            prize: r.prize.clone(),
            status: if r.is_claimed() { "Claimed" } else { "Available" },
        })
        .collect()
}

fn reels_line(outcome: &SpinOutcome) -> String {
    outcome
        .reels
        .iter()
        .map(|s| s.glyph())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn print_summary(config: &DashboardConfig, summary: &DashboardSummary) {
    println!("\n{}  (as of {})\n", config.title, format_date(config.as_of));

    println!("Quick Stats");
    println!("  Net Cashflow:       {}", format_currency(summary.net_cashflow));
    println!("  Bank Balance:       {}", format_currency(summary.bank_balance));
    println!("  Total Balance:      {}", format_currency(summary.total_balance));
    if summary.card_limit > Money::ZERO {
        println!(
            "  Card Outstanding:   {} of {} ({:.1}% used, {} available)",
            format_currency(summary.card_outstanding),
            format_currency(summary.card_limit),
            summary.card_utilization,
            format_currency(summary.card_available)
        );
    }

    println!("\n{}", format_month(summary.month));
    println!("  Income:             {}", format_currency(summary.monthly_inflow));
    println!("  Expenses:           {}", debit(summary.monthly_outflow));

    match &summary.next_payment {
        Some(p) => println!(
            "\nNext payment: {} {} on {}\n",
            p.description,
            debit(p.amount),
            format_date(p.due_date)
        ),
        None => println!("\nNo payments due in the next {} days\n", config.payment_window_days),
    }
}

pub fn print_transactions(feed: &[&Transaction]) {
    if feed.is_empty() {
        println!("  No transactions match\n");
        return;
    }
    println!("{}", table(transaction_rows(feed)));
    println!("  {} transactions\n", feed.len());
}

pub fn print_cashflow(groups: &[CategoryTotal], series: &[MonthlyFlow]) {
    println!("\nSpending by Category");
    if groups.is_empty() {
        println!("  No spending recorded");
    } else {
        println!("{}", table(category_rows(groups)));
    }

    println!("\nMonthly Trend");
    for line in trend_lines(series) {
        println!("{line}");
    }
    println!();
}

pub fn print_upcoming(config: &DashboardConfig, payments: &[UpcomingPayment], tips: &[Recommendation]) {
    match nearest_payment_within_days(payments, config.as_of, config.payment_window_days) {
        Some(p) => println!(
            "\nDue within {} days: {} {} on {}",
            config.payment_window_days,
            p.description,
            debit(p.amount),
            format_date(p.due_date)
        ),
        None => println!("\nNothing due within {} days", config.payment_window_days),
    }

    println!("\nScheduled Payments");
    let rows: Vec<PaymentRow> = payments
        .iter()
        .map(|p| PaymentRow {
            due: format_date(p.due_date),
            description: p.description.clone(),
            kind: p.kind.label(),
            amount: debit(p.amount),
        })
        .collect();
    println!("{}", table(rows));

    if !tips.is_empty() {
        println!("\nSmart Recommendations");
        for tip in tips {
            println!("  {} {}: {}", tip.icon, tip.title, tip.body);
        }
    }
    println!();
}

pub fn print_rewards(rewards: &[Reward]) {
    if rewards.is_empty() {
        println!("  No giveaways running\n");
        return;
    }
    println!("{}", table(reward_rows(rewards)));
}

pub fn print_spins(dataset: &Dataset, reward_id: &str, spins: &[SpinOutcome]) {
    for (i, outcome) in spins.iter().enumerate() {
        println!("  Spin {}: [ {} ]  {}", i + 1, reels_line(outcome), outcome.headline());
    }

    let claimed = dataset.reward(reward_id).is_some_and(Reward::is_claimed);
    if claimed {
        println!("\nReward claimed! (not saved: the dataset is read-only)\n");
    } else {
        println!("\nNo win this time. Try again with more --attempts.\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketwise_core::{YearMonth, sample_dataset, sort_feed};

    #[test]
    fn test_transaction_rows_keep_feed_order() {
        let dataset = sample_dataset();
        let feed = sort_feed(&dataset.transactions, Some("Swiggy"));
        let rows = transaction_rows(&feed);
        assert_eq!(rows.len(), dataset.transactions.len());
        assert!(rows[0].description.contains("Swiggy"));
        assert!(rows[1].description.contains("Swiggy"));
    }

    #[test]
    fn test_category_shares() {
        let groups = vec![
            CategoryTotal {
                category: "Housing".to_string(),
                total: Money::rupees(750),
            },
            CategoryTotal {
                category: "Food".to_string(),
                total: Money::rupees(250),
            },
        ];
        let rows = category_rows(&groups);
        assert_eq!(rows[0].share, "75.0%");
        assert_eq!(rows[1].share, "25.0%");
        assert_eq!(rows[1].spent, "₹250");
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(Money::rupees(100), Money::rupees(100)).chars().count(), BAR_WIDTH);
        assert_eq!(bar(Money::rupees(50), Money::rupees(100)).chars().count(), BAR_WIDTH / 2);
        assert!(bar(Money::rupees(50), Money::ZERO).is_empty());
    }

    #[test]
    fn test_trend_lines_two_per_month() {
        let series = vec![MonthlyFlow {
            month: YearMonth::new(2024, 9),
            inflow: Money::rupees(1_00_000),
            outflow: Money::rupees(25_000),
        }];
        let lines = trend_lines(&series);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Sept"));
        assert!(lines[0].ends_with("₹1,00,000"));
        assert!(lines[1].ends_with("₹25,000"));
    }

    #[test]
    fn test_reward_rows_status() {
        let mut dataset = sample_dataset();
        dataset.rewards[0].status = pocketwise_core::RewardStatus::Claimed;
        let rows = reward_rows(&dataset.rewards);
        assert_eq!(rows[0].status, "Claimed");
        assert_eq!(rows[1].status, "Available");
        assert_eq!(rows[0].title, dataset.rewards[0].title());
    }

    #[test]
    fn test_table_renders_headers() {
        let dataset = sample_dataset();
        let rendered = table(reward_rows(&dataset.rewards));
        assert!(rendered.contains("Giveaway"));
        assert!(rendered.contains("farah-swiggy"));
    }
}
