//! Financial report derivation.
//!
//! Turns a snapshot of double-entry transactions into:
//! - Trial Balance
//! - Profit & Loss Statement
//! - Balance Sheet
//! - Cash Flow Statement
//!
//! Derivation is total over any input: gaps such as unclassified accounts
//! or a missing bank account are recorded as [`Diagnostic`]s instead of
//! failing.

pub mod diagnostics;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use diagnostics::{CashFlowExclusion, Diagnostic, Diagnostics};
pub use error::ReportError;
pub use service::{
    DEFAULT_BANK_ACCOUNT, ReportService, build_balance_sheet, build_cash_flow,
    build_profit_and_loss, build_trial_balance,
};
pub use types::*;
