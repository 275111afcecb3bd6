//! Pocketwise terminal dashboard
//!
//! Prints the same figures as the web dashboard (quick stats, transaction
//! feed, cashflow, upcoming payments, giveaways) from the bundled sample
//! data or a JSON dataset.

mod export;
mod loader;
mod reports;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pocketwise_core::{
    AccountFilter, ClaimFlow, DashboardSummary, Dataset, Error, MAX_TREND_MONTHS, SpinOutcome, filter_by_account,
    group_by_category, monthly_series, payments_for_account, spin, visible_feed,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pocketwise")]
#[command(about = "Personal finance dashboard for the terminal")]
struct Args {
    /// Config file (default: ./pocketwise.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to load instead of the bundled sample data
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Override "today" (YYYY-MM-DD)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Restrict to one account id, e.g. bank1 or cc2 (default: all)
    #[arg(short, long, global = true)]
    account: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quick stats: balances, card usage, this month, next payment (default)
    Summary,

    /// Transaction feed, newest first with the pinned merchant on top
    Transactions {
        /// Case-insensitive text to match in description or category
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Spending by category and monthly income vs expenses
    Cashflow {
        /// Months in the trend, 1-120 (default: from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TREND_MONTHS)))]
        months: Option<u32>,
    },

    /// Scheduled payments and the next one due
    Upcoming {
        /// Days ahead to look for the next payment (default: from config)
        #[arg(long)]
        window_days: Option<u32>,
    },

    /// Influencer giveaways
    Rewards {
        #[command(subcommand)]
        action: RewardsCommand,
    },

    /// Write the filtered transaction feed to a CSV file
    Export {
        /// Output path
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum RewardsCommand {
    /// List giveaways and their status
    List,

    /// Spin the slot machine for a giveaway
    Spin {
        /// Giveaway id (see `rewards list`)
        id: String,

        /// RNG seed for reproducible reels
        #[arg(long)]
        seed: Option<u64>,

        /// Spins to try before giving up (at least 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        attempts: u32,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = loader::load_config(args.config.as_deref())?;
    if let Some(as_of) = args.as_of {
        config.as_of = as_of;
    }
    let mut dataset = loader::load_dataset(args.data.as_deref())?;
    let filter = match &args.account {
        Some(id) => AccountFilter::resolve(&dataset, id)?,
        None => AccountFilter::All,
    };
    debug!(?filter, as_of = %config.as_of, "dashboard ready");

    match args.command.unwrap_or(Command::Summary) {
        Command::Summary => {
            let summary = DashboardSummary::compute(&dataset, &filter, &config);
            reports::print_summary(&config, &summary);
        }
        Command::Transactions { search: query } => {
            let query = query.as_deref().unwrap_or("");
            let feed = visible_feed(&dataset, &filter, query, config.pinned_merchant.as_deref());
            reports::print_transactions(&feed);
        }
        Command::Cashflow { months } => {
            let txns: Vec<_> = filter_by_account(&dataset.transactions, &filter)
                .into_iter()
                .cloned()
                .collect();
            let groups = group_by_category(&txns);
            let series = monthly_series(&txns, months.unwrap_or(config.trend_months));
            reports::print_cashflow(&groups, &series);
        }
        Command::Upcoming { window_days } => {
            if let Some(days) = window_days {
                config.payment_window_days = days;
            }
            let payments: Vec<_> = payments_for_account(&dataset.upcoming_payments, &filter)
                .into_iter()
                .cloned()
                .collect();
            reports::print_upcoming(&config, &payments, &dataset.recommendations);
        }
        Command::Rewards { action } => match action {
            RewardsCommand::List => reports::print_rewards(&dataset.rewards),
            RewardsCommand::Spin { id, seed, attempts } => {
                let seed = seed.unwrap_or_else(clock_seed);
                info!(seed, "spinning for {id}");
                let mut rng = StdRng::seed_from_u64(seed);
                let spins = play(&mut dataset, &id, attempts, || spin(&mut rng))?;
                reports::print_spins(&dataset, &id, &spins);
            }
        },
        Command::Export { file } => {
            let feed = visible_feed(&dataset, &filter, "", config.pinned_merchant.as_deref());
            let written = export::write_transactions(&file, &feed)?;
            println!("Wrote {} transactions to {}", written, file.display());
        }
    }

    Ok(())
}

/// Seed from the wall clock when none is given
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Run the claim flow for one giveaway until a win or `attempts` misses
///
/// A win is claimed straight away. Returns every outcome in order; zero
/// attempts spins nothing.
fn play(
    dataset: &mut Dataset,
    reward_id: &str,
    attempts: u32,
    mut next_spin: impl FnMut() -> SpinOutcome,
) -> Result<Vec<SpinOutcome>> {
    let reward = dataset
        .reward(reward_id)
        .ok_or_else(|| Error::UnknownReward(reward_id.to_string()))?
        .clone();

    let mut flow = ClaimFlow::default();
    flow.open(&reward)?;

    let mut spins = Vec::new();
    for attempt in 1..=attempts {
        let ticket = flow.start_spin()?;
        let outcome = next_spin();
        debug!(attempt, result = ?outcome.result, "reels stopped");
        let won = outcome.is_win();
        spins.push(outcome);
        flow.finish_spin(ticket, outcome)?;

        if won {
            flow.claim(&mut dataset.rewards)?;
            info!("claimed {reward_id} on attempt {attempt}");
            break;
        }
    }
    flow.close();
    Ok(spins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pocketwise_core::{DashboardConfig, Money, RewardStatus, SlotSymbol, sample_dataset};

    fn outcome(reels: [SlotSymbol; 3]) -> SpinOutcome {
        SpinOutcome::from_reels(reels)
    }

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_summary() {
        let args = Args::try_parse_from(["pocketwise"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.account.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["pocketwise", "transactions", "--search", "swiggy", "--account", "cc2"]).unwrap();
        assert_eq!(args.account.as_deref(), Some("cc2"));
        match args.command {
            Some(Command::Transactions { search }) => assert_eq!(search.as_deref(), Some("swiggy")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_as_of_parses_date() {
        let args = Args::try_parse_from(["pocketwise", "--as-of", "2024-03-15", "upcoming"]).unwrap();
        assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(Args::try_parse_from(["pocketwise", "--as-of", "15/03/2024"]).is_err());
    }

    #[test]
    fn test_rewards_spin_args() {
        let args = Args::try_parse_from(["pocketwise", "rewards", "spin", "farah-swiggy", "--seed", "7"]).unwrap();
        match args.command {
            Some(Command::Rewards {
                action: RewardsCommand::Spin { id, seed, attempts },
            }) => {
                assert_eq!(id, "farah-swiggy");
                assert_eq!(seed, Some(7));
                assert_eq!(attempts, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_attempts_must_be_positive() {
        assert!(Args::try_parse_from(["pocketwise", "rewards", "spin", "farah-swiggy", "--attempts", "0"]).is_err());
        let args = Args::try_parse_from(["pocketwise", "rewards", "spin", "farah-swiggy", "--attempts", "4"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Rewards {
                action: RewardsCommand::Spin { attempts: 4, .. }
            })
        ));
    }

    #[test]
    fn test_months_range() {
        assert!(Args::try_parse_from(["pocketwise", "cashflow", "--months", "0"]).is_err());
        assert!(Args::try_parse_from(["pocketwise", "cashflow", "--months", "4294967295"]).is_err());
        let args = Args::try_parse_from(["pocketwise", "cashflow", "--months", "120"]).unwrap();
        assert!(matches!(args.command, Some(Command::Cashflow { months: Some(120) })));
    }

    #[test]
    fn test_play_with_zero_attempts_spins_nothing() {
        let mut dataset = sample_dataset();
        let spins = play(&mut dataset, "farah-swiggy", 0, || unreachable!()).unwrap();
        assert!(spins.is_empty());
        assert!(!dataset.reward("farah-swiggy").unwrap().is_claimed());
    }

    #[test]
    fn test_play_claims_on_win() {
        let mut dataset = sample_dataset();
        let mut reels = vec![
            outcome([SlotSymbol::Rupee, SlotSymbol::Gift, SlotSymbol::Star]),
            outcome([SlotSymbol::Seven, SlotSymbol::Seven, SlotSymbol::Seven]),
        ]
        .into_iter();

        let spins = play(&mut dataset, "farah-swiggy", 5, || reels.next().unwrap()).unwrap();
        assert_eq!(spins.len(), 2);
        assert!(!spins[0].is_win());
        assert!(spins[1].is_win());
        assert_eq!(dataset.reward("farah-swiggy").unwrap().status, RewardStatus::Claimed);
    }

    #[test]
    fn test_play_stops_after_attempts() {
        let mut dataset = sample_dataset();
        let miss = outcome([SlotSymbol::Rupee, SlotSymbol::Gift, SlotSymbol::Star]);

        let spins = play(&mut dataset, "john-techgadget", 3, || miss).unwrap();
        assert_eq!(spins.len(), 3);
        assert!(!dataset.reward("john-techgadget").unwrap().is_claimed());
    }

    #[test]
    fn test_play_rejects_unknown_and_claimed() {
        let mut dataset = sample_dataset();
        let win = outcome([SlotSymbol::Coin, SlotSymbol::Coin, SlotSymbol::Star]);

        assert!(play(&mut dataset, "nobody", 1, || win).is_err());

        play(&mut dataset, "jane-fashionhub", 1, || win).unwrap();
        let err = play(&mut dataset, "jane-fashionhub", 1, || win).unwrap_err();
        assert!(err.to_string().contains("already been claimed"));
    }

    #[test]
    fn test_summary_for_single_card() {
        let dataset = sample_dataset();
        let filter = AccountFilter::resolve(&dataset, "cc2").unwrap();
        let summary = DashboardSummary::compute(&dataset, &filter, &DashboardConfig::default());
        assert_eq!(summary.card_limit, Money::rupees(100_000));
        assert_eq!(summary.bank_balance, Money::ZERO);
    }
}
