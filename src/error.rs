use std::time::Duration;

/// Everything that can go wrong between receiving a rank command and
/// rendering its result.
#[derive(thiserror::Error, Debug)]
pub enum RankError {
    #[error("Missing option: {0}")]
    OptionMissing(&'static str),
    #[error("Invalid value {value:?} for option {option}")]
    InvalidOption { option: &'static str, value: String },
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Request cancelled after {0:?}")]
    Cancelled(Duration),
}
