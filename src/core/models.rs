// @file: capital_history/src/core/models.rs
// @description: Centralized data structures shared by the fetcher, connectors and formatters.
// @author: LAS.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::core::errors::{HistoryError, Result};
use crate::utils::time_codec;


//
// TIME INPUTS
//

// A window boundary as supplied by the caller: raw epoch millis or a UTC datetime string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimePoint {
    Millis(i64),
    Datetime(String),
}

impl TimePoint {
    pub fn to_millis(&self) -> Result<i64> {
        match self {
            TimePoint::Millis(ms) => {
                if *ms < 0 {
                    return Err(HistoryError::InvalidTimestamp(*ms));
                }
                Ok(*ms)
            }
            TimePoint::Datetime(s) => time_codec::datetime_to_millis(s),
        }
    }
}

impl From<i64> for TimePoint {
    fn from(ms: i64) -> Self {
        TimePoint::Millis(ms)
    }
}

impl From<&str> for TimePoint {
    fn from(s: &str) -> Self {
        TimePoint::Datetime(s.to_string())
    }
}

impl From<String> for TimePoint {
    fn from(s: String) -> Self {
        TimePoint::Datetime(s)
    }
}

// All-digit input is epoch millis, anything else is left for the codec to validate.
impl FromStr for TimePoint {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(ms) = trimmed.parse::<i64>() {
                return Ok(TimePoint::Millis(ms));
            }
        }
        Ok(TimePoint::Datetime(trimmed.to_string()))
    }
}


//
// QUERY PARAMETERS
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Null,
}

impl ParamValue {
    // Null and empty text never reach the query string.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Text(s) => s.is_empty(),
            ParamValue::Int(_) => false,
            ParamValue::Null => true,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Null => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(v) => ParamValue::Int(v),
            Err(_) => ParamValue::Text(n.to_string()),
        }
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => ParamValue::Null,
        }
    }
}

// Insertion-ordered parameter map. Re-inserting a key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key: String = key.into();
        let value: ParamValue = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    // Later entries win on key conflict.
    pub fn merge(&mut self, other: &QueryParams) {
        for (k, v) in &other.entries {
            self.insert(k.clone(), v.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}


//
// CREDENTIALS & FETCHER CONFIGURATION
//

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

// Keeps the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub withdrawal_endpoint: String,
    pub deposit_endpoint: String,
    pub recv_window: Option<u64>,
    pub account_log_name: String,
}


//
// TRANSPORT TYPES
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

// Binance error payload, e.g. {"code":-1021,"msg":"Timestamp for this request is outside of the recvWindow."}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}


//
// HISTORY KINDS
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    Withdrawals,
    Deposits,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryKind::Withdrawals => write!(f, "withdrawals"),
            HistoryKind::Deposits => write!(f, "deposits"),
        }
    }
}
