use thiserror::Error;

use crate::rewards::ClaimError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dashboard config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid dataset: {0}")]
    Data(#[from] serde_json::Error),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error("unknown account '{0}'")]
    UnknownAccount(String),

    #[error("unknown reward '{0}'")]
    UnknownReward(String),

    #[error("invalid {record} '{id}': {reason}")]
    InvalidRecord {
        record: &'static str,
        id: String,
        reason: &'static str,
    },
}
