// @file: capital_history/src/utils/config.rs
// @description: Application configuration loaded from defaults, an optional config file, .env and the process environment.
// @author: LAS.

use serde::Deserialize;
use config::{Config, ConfigError, File, Environment};
use crate::core::models::{Credentials, FetcherConfig};

//
// CONSTANTS
//

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_WITHDRAWAL_ENDPOINT: &str = "/sapi/v1/capital/withdraw/history";
pub const DEFAULT_DEPOSIT_ENDPOINT: &str = "/sapi/v1/capital/deposit/hisrec";

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // Account
    pub api_key: String,
    pub api_secret: String,
    pub api_log_name: String,

    // Binance REST
    pub base_url: String,
    pub withdrawal_hist_endpoint: Option<String>,
    // Legacy spelling still found in older .env files
    pub withdrawal_hist_enpoint: Option<String>,
    pub deposits_hist_endpoint: String,
    pub recv_window: Option<u64>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> Result<Self, ConfigError> {
        // #1. Pull a local .env into the process environment (missing file is fine)
        dotenv::dotenv().ok();

        Self::load_from(Environment::default())
    }

    // Split out so tests can feed a controlled environment source.
    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("api_log_name", "default")?

            // Binance Endpoints
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("deposits_hist_endpoint", DEFAULT_DEPOSIT_ENDPOINT)?
            .set_default("request_timeout_secs", 10)?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(env);

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        // #2. Credentials have no sensible default
        if app_config.api_key.trim().is_empty() {
            return Err(ConfigError::Message("API_KEY is empty".to_string()));
        }
        if app_config.api_secret.trim().is_empty() {
            return Err(ConfigError::Message("API_SECRET is empty".to_string()));
        }

        Ok(app_config)
    }

    // Correct spelling wins over the legacy one, then the default.
    pub fn withdrawal_endpoint(&self) -> String {
        self.withdrawal_hist_endpoint
            .as_ref()
            .or(self.withdrawal_hist_enpoint.as_ref())
            .filter(|path| !path.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_WITHDRAWAL_ENDPOINT.to_string())
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials: Credentials::new(self.api_key.clone(), self.api_secret.clone()),
            withdrawal_endpoint: self.withdrawal_endpoint(),
            deposit_endpoint: self.deposits_hist_endpoint.clone(),
            recv_window: self.recv_window,
            account_log_name: self.api_log_name.clone(),
        }
    }
}
