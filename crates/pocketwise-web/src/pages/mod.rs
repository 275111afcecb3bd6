mod dashboard;
mod rewards;

pub use dashboard::DashboardPage;
pub use rewards::RewardsPage;
