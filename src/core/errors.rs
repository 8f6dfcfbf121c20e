// @file: capital_history/src/core/errors.rs
// @description: Error kinds surfaced by the time codec, the fetcher and the formatters.
// @author: LAS.

use thiserror::Error;


//
// TYPE DEFINITIONS
//

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Invalid timestamp: {0} ms")]
    InvalidTimestamp(i64),

    #[error("Invalid datetime '{0}': expected 'YYYY-MM-DD HH:MM:SS'")]
    InvalidDatetimeFormat(String),

    #[error("Invalid time window: start {start} is after end {end}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Rate limited by upstream (HTTP {status})")]
    RateLimited { status: u16 },

    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl HistoryError {
    //
    // PUBLIC INTERFACE
    //

    // The core never retries; callers use this to decide whether a second attempt makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HistoryError::RateLimited { .. } | HistoryError::Network(_))
    }
}

impl From<reqwest::Error> for HistoryError {
    fn from(e: reqwest::Error) -> Self {
        HistoryError::Network(e.to_string())
    }
}
