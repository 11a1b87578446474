//! Per-account debit and credit accumulation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Running debit and credit totals for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
}

impl AccountTotals {
    /// Adds a debit amount.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.debit_total += amount;
    }

    /// Adds a credit amount.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.credit_total += amount;
    }

    /// Raw balance, `debit - credit`.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit_total - self.credit_total
    }

    /// Splits the net balance into presentation columns `(debit, credit)`.
    ///
    /// At most one side is non-zero.
    #[must_use]
    pub fn columns(&self) -> (Decimal, Decimal) {
        let net = self.net();
        if net > Decimal::ZERO {
            (net, Decimal::ZERO)
        } else {
            (Decimal::ZERO, -net)
        }
    }
}

/// Account totals keyed by account name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLedger {
    accounts: BTreeMap<String, AccountTotals>,
}

impl AccountLedger {
    /// Posts every transaction: `amount` to the debit account's debit total
    /// and to the credit account's credit total.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut ledger = Self::default();
        for tx in transactions {
            ledger.post(tx);
        }
        ledger
    }

    /// Posts a single transaction.
    pub fn post(&mut self, tx: &Transaction) {
        self.accounts
            .entry(tx.debit_account.clone())
            .or_default()
            .add_debit(tx.amount);
        self.accounts
            .entry(tx.credit_account.clone())
            .or_default()
            .add_credit(tx.amount);
    }

    /// Iterates accounts in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccountTotals)> {
        self.accounts.iter().map(|(name, totals)| (name.as_str(), totals))
    }

    /// Number of distinct accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true when nothing has been posted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Totals for an account, by exact name.
    #[must_use]
    pub fn get(&self, account: &str) -> Option<&AccountTotals> {
        self.accounts.get(account)
    }
}
