//! Double-entry transaction model.
//!
//! This module implements the ledger side of the engine:
//! - Transactions, bank effect and categories
//! - Per-account debit/credit accumulation
//! - Contract validation for transaction sources
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{AccountLedger, AccountTotals};
pub use error::LedgerError;
pub use transaction::{BankEffect, Category, Transaction};
pub use validation::{validate_transaction, validate_transactions};
