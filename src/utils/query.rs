// @file: capital_history/src/utils/query.rs
// @description: Builds URL query strings from ordered parameter maps.
// @author: LAS.

use url::form_urlencoded::byte_serialize;
use crate::core::models::QueryParams;


//
// PUBLIC INTERFACE
//

// Insertion order is kept; null and empty values are dropped entirely.
pub fn build_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| {
            let raw: String = value.to_string();
            let encoded: String = byte_serialize(raw.as_bytes()).collect();
            format!("{}={}", key, encoded)
        })
        .collect::<Vec<String>>()
        .join("&")
}
