//! Bookkeeper reporter
//!
//! Derives the trial balance, profit and loss, balance sheet and cash flow
//! statement from a JSON transaction snapshot and prints them as JSON.
//!
//! ```bash
//! bookkeeper transactions.json --pretty --dashboard
//! cat transactions.json | bookkeeper - --strict
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bookkeeper_shared::{AppConfig, AppError};

mod pipeline;

use pipeline::Options;

/// Derive financial reports from a transaction snapshot
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(name = "bookkeeper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON transaction snapshot, or `-` for stdin
    transactions: PathBuf,

    /// Extra configuration file layered over config/default
    #[arg(short, long, env = "BOOKKEEPER_CONFIG")]
    config: Option<String>,

    /// Fail when any diagnostic is raised
    #[arg(long)]
    strict: bool,

    /// Do not apply configured categorization rules
    #[arg(long)]
    no_rules: bool,

    /// Reject transactions that break the double-entry contract
    #[arg(long)]
    validate: bool,

    /// Include the dashboard summary
    #[arg(long)]
    dashboard: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(code, "{err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "bookkeeper=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).map_err(AppError::from)?;

    let transactions = pipeline::read_snapshot(&cli.transactions)
        .with_context(|| format!("reading {}", cli.transactions.display()))?;

    let options = Options {
        strict: cli.strict,
        no_rules: cli.no_rules,
        validate: cli.validate,
        dashboard: cli.dashboard,
    };
    let output = pipeline::derive(&transactions, &config, options)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    println!("{json}");
    Ok(())
}
