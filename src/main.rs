// @file: capital_history/src/main.rs
// @description: CLI entry point for pulling Binance withdrawal and deposit history.
// @author: LAS.

use std::error::Error;
use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde_json::Value;
use capital_history::connectors::build_fetcher;
use capital_history::connectors::binance_rest::ReqwestTransport;
use capital_history::formatting::{deposits, withdrawals};
use capital_history::utils::config::AppConfig;
use capital_history::utils::time_codec;
use capital_history::{HistoryFetcher, HistoryKind, QueryParams, TimePoint};


//
// CLI DEFINITIONS
//

#[derive(Parser, Debug)]
#[command(name = "capital-history", about = "Fetch Binance withdrawal and deposit history")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Withdrawal history (filtered on applyTime)
    Withdrawals(WindowArgs),
    /// Deposit history (filtered on insertTime)
    Deposits(WindowArgs),
}

#[derive(Args, Debug)]
struct WindowArgs {
    /// Window start: epoch millis or 'YYYY-MM-DD HH:MM:SS' (UTC)
    #[arg(long)]
    start: TimePoint,

    /// Window end: epoch millis or 'YYYY-MM-DD HH:MM:SS' (UTC)
    #[arg(long)]
    end: TimePoint,

    #[arg(long)]
    coin: Option<String>,

    #[arg(long)]
    status: Option<i64>,

    #[arg(long)]
    limit: Option<i64>,

    /// Print records exactly as returned by Binance
    #[arg(long)]
    raw: bool,
}

impl WindowArgs {
    fn extra_params(&self) -> QueryParams {
        QueryParams::new()
            .with("coin", self.coin.clone())
            .with("status", self.status)
            .with("limit", self.limit)
    }
}


//
// ENTRY POINT
//

fn main() -> ExitCode {
    let cli: Cli = Cli::parse();

    // #1. Load Configuration
    let app_config: AppConfig = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // #2. Initialize Logger with the configured default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(app_config.log_level.as_str())).init();

    // #3. Run
    match run(cli, &app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fetching history for account {} failed: {}", app_config.api_log_name, e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, app_config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let fetcher: HistoryFetcher<ReqwestTransport> = build_fetcher(app_config)?;

    let (kind, args): (HistoryKind, WindowArgs) = match cli.command {
        Command::Withdrawals(args) => (HistoryKind::Withdrawals, args),
        Command::Deposits(args) => (HistoryKind::Deposits, args),
    };

    info!(">>> Fetching {} for account {} <<<", kind, app_config.api_log_name);

    let records: Vec<Value> = fetcher.fetch_kind(kind, &args.start, &args.end, &args.extra_params())?;

    let output: String = if args.raw {
        serde_json::to_string_pretty(&records)?
    } else {
        let load_dttm: String = time_codec::now_datetime();
        match kind {
            HistoryKind::Withdrawals => serde_json::to_string_pretty(&withdrawals::format_withdrawals(&records, &load_dttm)?)?,
            HistoryKind::Deposits => serde_json::to_string_pretty(&deposits::format_deposits(&records, &load_dttm)?)?,
        }
    };

    println!("{}", output);
    Ok(())
}
