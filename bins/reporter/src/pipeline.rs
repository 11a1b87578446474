//! Snapshot-to-report pipeline behind the `bookkeeper` command.

use std::io::Read;
use std::path::Path;

use bookkeeper_core::dashboard::DashboardSummary;
use bookkeeper_core::ledger::{Transaction, validate_transactions};
use bookkeeper_core::reports::{FinancialReports, ReportService};
use bookkeeper_core::rules::{CategorizationRule, apply_rules};
use bookkeeper_shared::{AppConfig, AppError, AppResult};
use serde::Serialize;
use tracing::{debug, info};

/// Pipeline switches taken from the command line.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Fail on any diagnostic.
    pub strict: bool,
    /// Skip the configured categorization rules.
    pub no_rules: bool,
    /// Reject snapshots that break the transaction contract.
    pub validate: bool,
    /// Include the dashboard summary.
    pub dashboard: bool,
}

/// JSON document written to stdout.
#[derive(Debug, Serialize)]
pub struct Output {
    /// The derived reports.
    #[serde(flatten)]
    pub reports: FinancialReports,
    /// Dashboard summary, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSummary>,
}

/// Reads a JSON transaction snapshot from a file, or stdin for `-`.
pub fn read_snapshot(path: &Path) -> AppResult<Vec<Transaction>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(format!("{}: {e}", path.display())))?
    };

    let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;
    debug!(count = transactions.len(), "loaded transaction snapshot");
    Ok(transactions)
}

/// Converts the configured categorization rules.
pub fn configured_rules(config: &AppConfig) -> AppResult<Vec<CategorizationRule>> {
    config
        .rules
        .iter()
        .map(|rule| CategorizationRule::try_from(rule).map_err(AppError::from))
        .collect()
}

/// Runs rules, derivation and the consistency check over a snapshot.
pub fn derive(
    transactions: &[Transaction],
    config: &AppConfig,
    options: Options,
) -> AppResult<Output> {
    let service = ReportService::from_config(config)?;

    let transactions = if options.no_rules {
        transactions.to_vec()
    } else {
        let rules = configured_rules(config)?;
        apply_rules(transactions, &rules, service.bank_account())
    };

    if options.validate {
        validate_transactions(&transactions)?;
    }

    let reports = service.generate(&transactions);
    reports.ensure_clean(options.strict || config.reporting.strict)?;

    let dashboard = options.dashboard.then(|| {
        DashboardSummary::build(
            &transactions,
            &reports.profit_and_loss,
            &reports.balance_sheet,
            reports.currency,
        )
    });

    info!(
        currency = %reports.currency,
        net_profit = %reports.profit_and_loss.net_profit,
        ending_bank_balance = %reports.cash_flow.ending_bank_balance,
        diagnostics = reports.diagnostics.len(),
        "reports derived"
    );

    Ok(Output { reports, dashboard })
}
