//! Non-fatal findings raised while deriving reports.
//!
//! Diagnostics never change a computed number. They make the engine's
//! silent gaps visible: unclassified accounts, transactions left out of the
//! cash flow statement, a missing bank account, broken equations.

use std::collections::HashSet;

use bookkeeper_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::AccountClass;

/// Why a transaction is absent from the cash flow statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowExclusion {
    /// Personal spending is kept out of the business cash flow.
    PersonalCategory,
    /// Category and counter-account match no cash flow bucket.
    UnmatchedCategory,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No classification rule matched the account name.
    UnclassifiedAccount {
        /// Account name.
        account: String,
    },
    /// Balance sits on the side opposite the account's normal balance.
    AbnormalBalance {
        /// Account name.
        account: String,
        /// Account class.
        class: AccountClass,
        /// Debit column.
        debit: Decimal,
        /// Credit column.
        credit: Decimal,
    },
    /// Account left off the balance sheet.
    ExcludedFromBalanceSheet {
        /// Account name.
        account: String,
        /// Net balance that was dropped.
        amount: Decimal,
    },
    /// Transaction category is not one of the recognized five.
    UnrecognizedCategory {
        /// Transaction.
        transaction: TransactionId,
        /// The free-text category.
        category: String,
    },
    /// Transaction left off the cash flow statement.
    ExcludedFromCashFlow {
        /// Transaction.
        transaction: TransactionId,
        /// Reason.
        reason: CashFlowExclusion,
    },
    /// Transaction does not move money in or out of the bank.
    NonCashTransaction {
        /// Transaction.
        transaction: TransactionId,
    },
    /// No trial balance account matches the bank account name.
    MissingBankAccount {
        /// Bank account name searched for.
        account: String,
    },
    /// Trial balance debits differ from credits.
    UnbalancedTrialBalance {
        /// Total debits.
        debit: Decimal,
        /// Total credits.
        credit: Decimal,
    },
    /// Assets differ from liabilities plus equity.
    UnbalancedBalanceSheet {
        /// Total assets.
        assets: Decimal,
        /// Liabilities plus equity.
        liabilities_and_equity: Decimal,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclassifiedAccount { account } => {
                write!(f, "account '{account}' matches no classification rule")
            }
            Self::AbnormalBalance {
                account,
                class,
                debit,
                credit,
            } => write!(
                f,
                "{class} account '{account}' has an abnormal balance \
                 (debit {debit}, credit {credit})"
            ),
            Self::ExcludedFromBalanceSheet { account, amount } => {
                write!(f, "account '{account}' ({amount}) is not on the balance sheet")
            }
            Self::UnrecognizedCategory {
                transaction,
                category,
            } => write!(f, "transaction {transaction} has unrecognized category '{category}'"),
            Self::ExcludedFromCashFlow {
                transaction,
                reason,
            } => {
                let why = match reason {
                    CashFlowExclusion::PersonalCategory => "personal category",
                    CashFlowExclusion::UnmatchedCategory => "no matching activity",
                };
                write!(f, "transaction {transaction} excluded from cash flow: {why}")
            }
            Self::NonCashTransaction { transaction } => {
                write!(f, "transaction {transaction} does not touch the bank account")
            }
            Self::MissingBankAccount { account } => write!(
                f,
                "no '{account}' account in the trial balance; ending bank balance is zero"
            ),
            Self::UnbalancedTrialBalance { debit, credit } => {
                write!(f, "trial balance does not balance: debit {debit}, credit {credit}")
            }
            Self::UnbalancedBalanceSheet {
                assets,
                liabilities_and_equity,
            } => write!(
                f,
                "balance sheet does not balance: assets {assets}, \
                 liabilities and equity {liabilities_and_equity}"
            ),
        }
    }
}

/// Diagnostics in the order they were raised, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Diagnostic>", into = "Vec<Diagnostic>")]
pub struct Diagnostics {
    raised: Vec<Diagnostic>,
    seen: HashSet<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic unless an equal one is already present.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.seen.insert(diagnostic.clone()) {
            self.raised.push(diagnostic);
        }
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raised.len()
    }

    /// Returns true when nothing was raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.raised.iter()
    }

    /// Names of accounts no rule could classify.
    #[must_use]
    pub fn unclassified_accounts(&self) -> Vec<&str> {
        self.raised
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnclassifiedAccount { account } => Some(account.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Emits every diagnostic as a `tracing` warning.
    pub fn log(&self) {
        let unclassified = self.unclassified_accounts().len();
        if unclassified > 0 {
            warn!(count = unclassified, "{unclassified} accounts unclassified");
        }
        for diagnostic in &self.raised {
            warn!(%diagnostic, "report diagnostic");
        }
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(raised: Vec<Diagnostic>) -> Self {
        let mut diagnostics = Self::new();
        for diagnostic in raised {
            diagnostics.push(diagnostic);
        }
        diagnostics
    }
}

impl From<Diagnostics> for Vec<Diagnostic> {
    fn from(diagnostics: Diagnostics) -> Self {
        diagnostics.raised
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.raised.iter()
    }
}
