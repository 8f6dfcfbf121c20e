// @file: capital_history/src/lib.rs
// @description: Exposes the fetcher, formatters and helpers for the binary and for tests.
// @author: LAS.

pub mod core;
pub mod connectors;
pub mod formatting;
pub mod utils;
mod tests;

pub use crate::core::errors::{HistoryError, Result};
pub use crate::core::fetcher::HistoryFetcher;
pub use crate::core::models::{Credentials, FetcherConfig, HistoryKind, QueryParams, TimePoint};
