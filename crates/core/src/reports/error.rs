//! Report error types.

use bookkeeper_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Consistency failures raised when reports are checked.
///
/// Derivation itself never fails; these come from
/// [`FinancialReports::ensure_clean`](super::FinancialReports::ensure_clean).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Trial balance debits differ from credits.
    #[error("Trial balance is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedTrialBalance {
        /// Total debits.
        debit: Decimal,
        /// Total credits.
        credit: Decimal,
    },

    /// Strict mode and at least one diagnostic was raised.
    #[error("{count} report diagnostics raised, first: {first}")]
    Diagnostics {
        /// Number of diagnostics.
        count: usize,
        /// The first diagnostic, rendered.
        first: String,
    },
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Report(err.to_string())
    }
}
