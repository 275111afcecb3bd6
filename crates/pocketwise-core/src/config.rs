//! Dashboard configuration
//!
//! Every field has a default so an empty `pocketwise.toml` is valid. The web
//! app always runs on the defaults; the CLI can override them from a file.

use chrono::NaiveDate;
use serde::Deserialize;

/// Default config file name looked up by the CLI
pub const CONFIG_FILE: &str = "pocketwise.toml";

/// Reference date of the bundled sample data
const SAMPLE_AS_OF: (i32, u32, u32) = (2024, 3, 1);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Page heading
    pub title: String,
    /// "Today" for window and month calculations
    pub as_of: NaiveDate,
    /// How far ahead the next-payment highlight looks
    pub payment_window_days: u32,
    /// Merchant whose transactions are pinned to the top of the feed
    pub pinned_merchant: Option<String>,
    /// Number of months in the cashflow trend
    pub trend_months: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let (y, m, d) = SAMPLE_AS_OF;
        Self {
            title: "Financial Overview".to_string(),
            as_of: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            payment_window_days: 7,
            pinned_merchant: Some("Swiggy".to_string()),
            trend_months: 6,
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document, falling back to defaults for missing keys
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(config.payment_window_days, 7);
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_toml_str(
            r#"
            as_of = "2024-03-20"
            pinned_merchant = "Zomato"
            "#,
        )
        .unwrap();
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(config.pinned_merchant.as_deref(), Some("Zomato"));
        assert_eq!(config.trend_months, 6);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DashboardConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(DashboardConfig::from_toml_str("payment_window_days = \"seven\"").is_err());
    }
}
