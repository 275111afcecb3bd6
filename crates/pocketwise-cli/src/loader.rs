//! Config and dataset loading

use anyhow::{Context, Result};
use pocketwise_core::{CONFIG_FILE, DashboardConfig, Dataset, sample_dataset};
use std::path::Path;
use tracing::{debug, info};

/// Load the dashboard config
///
/// An explicit path must exist. Without one, `./pocketwise.toml` is used when
/// present and the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(CONFIG_FILE);
            if default.exists() {
                read_config(default)
            } else {
                debug!("no {CONFIG_FILE}, using defaults");
                Ok(DashboardConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<DashboardConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = DashboardConfig::from_toml_str(&content).with_context(|| {
        format!(
            "Failed to parse {}. Check for:\n\
             - Unknown keys (only title, as_of, payment_window_days, pinned_merchant, trend_months)\n\
             - Dates not written as \"YYYY-MM-DD\"\n\n\
             See pocketwise.toml.example for the expected format.",
            path.display()
        )
    })?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load a JSON dataset, or the bundled sample data when no path is given
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let Some(path) = path else {
        return Ok(sample_dataset());
    };

    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    let dataset = Dataset::from_json(&json).with_context(|| format!("Failed to parse dataset: {}", path.display()))?;
    info!(
        transactions = dataset.transactions.len(),
        rewards = dataset.rewards.len(),
        "loaded dataset from {}",
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pocketwise-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_config_from_file() {
        let path = scratch("config.toml", "payment_window_days = 14\npinned_merchant = \"Zomato\"\n");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.payment_window_days, 14);
        assert_eq!(config.pinned_merchant.as_deref(), Some("Zomato"));
        assert_eq!(config.trend_months, DashboardConfig::default().trend_months);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_config_errors_name_the_file() {
        let missing = Path::new("/nonexistent/pocketwise.toml");
        let err = load_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pocketwise.toml"));

        let path = scratch("bad.toml", "currency = \"USD\"\n");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_dataset_defaults_to_sample() {
        assert_eq!(load_dataset(None).unwrap(), sample_dataset());
    }

    #[test]
    fn test_load_dataset_from_json() {
        let json = serde_json::to_string(&sample_dataset()).unwrap();
        let path = scratch("data.json", &json);
        assert_eq!(load_dataset(Some(&path)).unwrap(), sample_dataset());
        std::fs::remove_file(path).unwrap();

        let path = scratch("broken.json", "{\"transactions\": 3}");
        assert!(load_dataset(Some(&path)).is_err());
        std::fs::remove_file(path).unwrap();
    }
}
