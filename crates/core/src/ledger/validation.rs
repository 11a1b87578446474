//! Contract checks a transaction source may run before derivation.
//!
//! The report generators never call these; they are total over any input.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::transaction::Transaction;

/// Validates a single transaction.
///
/// # Errors
///
/// Returns an error if the amount is not positive, an account name is
/// blank, or both sides name the same account.
pub fn validate_transaction(tx: &Transaction) -> Result<(), LedgerError> {
    if tx.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount {
            id: tx.id,
            amount: tx.amount,
        });
    }

    if tx.debit_account.trim().is_empty() {
        return Err(LedgerError::MissingAccount {
            id: tx.id,
            side: "debit",
        });
    }

    if tx.credit_account.trim().is_empty() {
        return Err(LedgerError::MissingAccount {
            id: tx.id,
            side: "credit",
        });
    }

    if tx.debit_account.trim().eq_ignore_ascii_case(tx.credit_account.trim()) {
        return Err(LedgerError::SameAccount {
            id: tx.id,
            account: tx.debit_account.clone(),
        });
    }

    Ok(())
}

/// Validates every transaction, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`LedgerError`] in input order.
pub fn validate_transactions(transactions: &[Transaction]) -> Result<(), LedgerError> {
    transactions.iter().try_for_each(validate_transaction)
}
