// @file: capital_history/src/formatting/mod.rs
// @description: Maps raw Binance capital records into readable, snake_case records.
// @author: LAS.

pub mod withdrawals;
pub mod deposits;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::core::errors::{HistoryError, Result};


//
// SHARED CODE TABLES
//

pub fn transfer_type_name(code: Option<i64>) -> Option<String> {
    let name: &str = match code? {
        0 => "External Transfer",
        1 => "Internal Transfer",
        _ => return None,
    };
    Some(name.to_string())
}

pub fn wallet_type_name(code: Option<i64>) -> Option<String> {
    let name: &str = match code? {
        0 => "Spot Wallet",
        1 => "Funding Wallet",
        _ => return None,
    };
    Some(name.to_string())
}


//
// INTERNAL HELPERS
//

pub(crate) fn decode_records<R: DeserializeOwned>(raw: &[Value], kind: &str) -> Result<Vec<R>> {
    raw.iter()
        .enumerate()
        .map(|(idx, item)| {
            R::deserialize(item).map_err(|e| {
                HistoryError::MalformedResponse(format!("Invalid {} record at index {}: {}", kind, idx, e))
            })
        })
        .collect()
}

// Binance sends most numeric fields as strings, but not consistently.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
