mod account_select;
mod chart;
mod reward_dialog;
mod section;
mod stat_card;
mod transaction_list;
mod upcoming;

pub use account_select::AccountSelect;
pub use chart::{MonthlyTrend, SpendingChart};
pub use reward_dialog::{RewardDialog, open_reward};
pub use section::{Chip, Section};
pub use stat_card::StatCard;
pub use transaction_list::TransactionList;
pub use upcoming::UpcomingPayments;
