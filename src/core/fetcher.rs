// @file: capital_history/src/core/fetcher.rs
// @description: Signed, single-request fetcher for Binance capital history endpoints.
// @author: LAS.

use log::{debug, info, warn};
use serde_json::Value;
use crate::core::errors::{HistoryError, Result};
use crate::core::interfaces::HttpTransport;
use crate::core::models::{ApiErrorBody, FetcherConfig, HistoryKind, HttpResponse, ParamValue, QueryParams, TimePoint};
use crate::utils::{query, signing, time_codec};


//
// CONSTANTS
//

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";


//
// TYPE DEFINITIONS
//

pub struct HistoryFetcher<T: HttpTransport> {
    config: FetcherConfig,
    transport: T,
}

impl<T: HttpTransport> HistoryFetcher<T> {
    pub fn new(config: FetcherConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    //
    // PUBLIC INTERFACE
    //

    pub fn fetch_history(
        &self,
        endpoint_path: &str,
        start_time: &TimePoint,
        end_time: &TimePoint,
        extra_params: &QueryParams,
    ) -> Result<Vec<Value>> {
        // #1. Normalize Window
        let start_ms: i64 = start_time.to_millis()?;
        let end_ms: i64 = end_time.to_millis()?;

        // #2. Merge Parameters
        // Binance USER_DATA endpoints require `timestamp`; caller keys override ours.
        let mut params: QueryParams = QueryParams::new()
            .with("startTime", start_ms)
            .with("endTime", end_ms)
            .with("timestamp", time_codec::now_millis())
            .with("recvWindow", self.config.recv_window);
        params.merge(extra_params);

        // Checked on the merged values since extras may override either bound.
        validate_window(&params)?;

        // #3. Build & Sign
        let query_string: String = query::build_query_string(&params);
        let signed_query: String = signing::sign_query(&self.config.credentials.api_secret, &query_string)?;

        let url: String = format!("{}{}?{}", self.config.base_url, endpoint_path, signed_query);
        debug!("Requesting {}{} with {}", self.config.base_url, endpoint_path, query_string);

        // #4. Execute Request
        let headers: [(&str, &str); 1] = [(API_KEY_HEADER, self.config.credentials.api_key.as_str())];
        let response: HttpResponse = self.transport.get(&url, &headers)?;

        // #5. Map Response
        parse_history_response(response)
    }

    pub fn fetch_withdrawals(&self, start_time: &TimePoint, end_time: &TimePoint, extra_params: &QueryParams) -> Result<Vec<Value>> {
        self.fetch_kind(HistoryKind::Withdrawals, start_time, end_time, extra_params)
    }

    pub fn fetch_deposits(&self, start_time: &TimePoint, end_time: &TimePoint, extra_params: &QueryParams) -> Result<Vec<Value>> {
        self.fetch_kind(HistoryKind::Deposits, start_time, end_time, extra_params)
    }

    pub fn fetch_kind(
        &self,
        kind: HistoryKind,
        start_time: &TimePoint,
        end_time: &TimePoint,
        extra_params: &QueryParams,
    ) -> Result<Vec<Value>> {
        let endpoint: &str = match kind {
            HistoryKind::Withdrawals => &self.config.withdrawal_endpoint,
            HistoryKind::Deposits => &self.config.deposit_endpoint,
        };

        let records: Vec<Value> = self.fetch_history(endpoint, start_time, end_time, extra_params)?;
        self.log_outcome(kind, records.len(), start_time, end_time);

        Ok(records)
    }


    //
    // INTERNAL HELPERS
    //

    fn log_outcome(&self, kind: HistoryKind, count: usize, start_time: &TimePoint, end_time: &TimePoint) {
        let start_dt: String = readable(start_time);
        let end_dt: String = readable(end_time);

        if count == 0 {
            warn!(
                "For account {}, there are NO {} in the time range from {} to {}.",
                self.config.account_log_name, kind, start_dt, end_dt
            );
        } else {
            info!(
                "Fetched {} {} for account {} in the time range from {} to {}.",
                count, kind, self.config.account_log_name, start_dt, end_dt
            );
        }
    }
}


//
// RESPONSE MAPPING
//

pub fn parse_history_response(response: HttpResponse) -> Result<Vec<Value>> {
    let status: u16 = response.status;

    // #1. Status Classification
    match status {
        200..=299 => {}
        401 | 403 => return Err(HistoryError::Auth(upstream_message(&response))),
        // 418 is Binance's IP ban after ignored 429s
        418 | 429 => return Err(HistoryError::RateLimited { status }),
        _ => {
            return Err(HistoryError::Upstream {
                status,
                message: upstream_message(&response),
            })
        }
    }

    // #2. Body Decoding
    let json: Value = serde_json::from_str(&response.body)
        .map_err(|e| HistoryError::MalformedResponse(format!("JSON Parse Error: {}", e)))?;

    match json {
        Value::Array(records) => Ok(records),
        other => Err(HistoryError::MalformedResponse(format!(
            "Expected JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn validate_window(params: &QueryParams) -> Result<()> {
    let start: Option<i64> = window_bound(params, "startTime")?;
    let end: Option<i64> = window_bound(params, "endTime")?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(HistoryError::InvalidWindow { start, end });
        }
    }
    Ok(())
}

// A bound overridden with text must still be epoch millis or a UTC datetime.
fn window_bound(params: &QueryParams, key: &str) -> Result<Option<i64>> {
    match params.get(key) {
        Some(ParamValue::Int(ms)) => TimePoint::Millis(*ms).to_millis().map(Some),
        Some(ParamValue::Text(s)) if s.is_empty() => Ok(None),
        Some(ParamValue::Text(s)) => match s.parse::<TimePoint>() {
            Ok(point) => point.to_millis().map(Some),
            Err(never) => match never {},
        },
        Some(ParamValue::Null) | None => Ok(None),
    }
}

fn upstream_message(response: &HttpResponse) -> String {
    match serde_json::from_str::<ApiErrorBody>(&response.body) {
        Ok(err) => format!("{} (code {})", err.msg, err.code),
        Err(_) if response.body.trim().is_empty() => format!("HTTP {}", response.status),
        Err(_) => response.body.trim().to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn readable(point: &TimePoint) -> String {
    match point.to_millis().and_then(time_codec::millis_to_datetime) {
        Ok(s) => s,
        Err(_) => format!("{:?}", point),
    }
}
