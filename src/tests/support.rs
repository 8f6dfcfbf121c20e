// @file: capital_history/src/tests/support.rs
// @description: Stub transports and fixtures shared by the test suites.
// @author: LAS.

#![cfg(test)]

use std::cell::RefCell;
use crate::core::errors::{HistoryError, Result};
use crate::core::interfaces::HttpTransport;
use crate::core::models::{Credentials, FetcherConfig, HttpResponse};


//
// STUB TRANSPORTS
//

// Replies with a canned response and records what was asked of it.
pub struct StubTransport {
    pub status: u16,
    pub body: String,
    pub seen_urls: RefCell<Vec<String>>,
    pub seen_headers: RefCell<Vec<(String, String)>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            seen_urls: RefCell::new(Vec::new()),
            seen_headers: RefCell::new(Vec::new()),
        }
    }

    pub fn last_url(&self) -> String {
        self.seen_urls.borrow().last().cloned().unwrap_or_default()
    }

    // Query string of the last request, split into (key, value) pairs in order.
    pub fn last_query_pairs(&self) -> Vec<(String, String)> {
        let url: String = self.last_url();
        let query: &str = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        query
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| {
                let (k, v) = p.split_once('=').unwrap_or((p, ""));
                (k.to_string(), v.to_string())
            })
            .collect()
    }
}

impl HttpTransport for StubTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.seen_urls.borrow_mut().push(url.to_string());
        for (name, value) in headers {
            self.seen_headers.borrow_mut().push((name.to_string(), value.to_string()));
        }
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub struct UnreachableTransport;

impl HttpTransport for UnreachableTransport {
    fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse> {
        Err(HistoryError::Network("connection refused".to_string()))
    }
}


//
// FIXTURES
//

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

pub fn test_config() -> FetcherConfig {
    FetcherConfig {
        base_url: "https://api.example.test".to_string(),
        credentials: Credentials::new(TEST_API_KEY, TEST_API_SECRET),
        withdrawal_endpoint: "/sapi/v1/capital/withdraw/history".to_string(),
        deposit_endpoint: "/sapi/v1/capital/deposit/hisrec".to_string(),
        recv_window: None,
        account_log_name: "unit-test".to_string(),
    }
}
