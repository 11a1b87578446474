//! Ledger error types for the transaction contract.

use bookkeeper_shared::{AppError, types::TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Violations of the balanced-entry contract a transaction source must honor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative.
    #[error("Transaction {id} amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// Offending transaction.
        id: TransactionId,
        /// The amount supplied.
        amount: Decimal,
    },

    /// Debit or credit account name is blank.
    #[error("Transaction {id} is missing its {side} account")]
    MissingAccount {
        /// Offending transaction.
        id: TransactionId,
        /// "debit" or "credit".
        side: &'static str,
    },

    /// Debit and credit name the same account.
    #[error("Transaction {id} debits and credits the same account '{account}'")]
    SameAccount {
        /// Offending transaction.
        id: TransactionId,
        /// The account on both sides.
        account: String,
    },
}

impl LedgerError {
    /// The transaction that failed validation.
    #[must_use]
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Self::NonPositiveAmount { id, .. }
            | Self::MissingAccount { id, .. }
            | Self::SameAccount { id, .. } => *id,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
