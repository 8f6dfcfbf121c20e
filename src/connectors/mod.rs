// @file: capital_history/src/connectors/mod.rs
// @description: Factory for the production HTTP transport.
// @author: LAS.

pub mod binance_rest;

use std::time::Duration;
use crate::core::errors::Result;
use crate::core::fetcher::HistoryFetcher;
use crate::utils::config::AppConfig;
use binance_rest::ReqwestTransport;

//
// FACTORY FUNCTION
//

pub fn build_fetcher(app_config: &AppConfig) -> Result<HistoryFetcher<ReqwestTransport>> {
    let transport: ReqwestTransport = ReqwestTransport::new(Duration::from_secs(app_config.request_timeout_secs))?;
    Ok(HistoryFetcher::new(app_config.fetcher_config(), transport))
}
