//! Double-entry transaction captured from a bank statement or entered manually.

use bookkeeper_shared::types::TransactionId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Effect of a transaction on the bank account, from the bank's own statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankEffect {
    /// Money left the account.
    Debit,
    /// Money arrived in the account.
    Credit,
}

/// High-level category assigned at entry or classification time.
///
/// Manual entry accepts free text, so anything outside the five known
/// labels is kept verbatim as [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Sales and other income.
    Revenue,
    /// Day-to-day running costs.
    OperatingExpense,
    /// Owner capital, loans and repayments.
    Financing,
    /// Purchase or sale of long-lived assets.
    Investing,
    /// Owner's private spending.
    Personal,
    /// Unrecognized free-text category.
    Other(String),
}

impl Category {
    /// Returns true for the five recognized categories.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Revenue => "Revenue",
            Self::OperatingExpense => "Operating Expense",
            Self::Financing => "Financing",
            Self::Investing => "Investing",
            Self::Personal => "Personal",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_lowercase().as_str() {
            "revenue" => Self::Revenue,
            "operating expense" => Self::OperatingExpense,
            "financing" => Self::Financing,
            "investing" => Self::Investing,
            "personal" => Self::Personal,
            _ => Self::Other(s.trim().to_string()),
        };
        Ok(category)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// A balanced double-entry posting.
///
/// Exactly one account is debited and one credited with the same `amount`,
/// so every transaction balances by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque identity.
    #[serde(default)]
    pub id: TransactionId,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text statement description.
    pub description: String,
    /// Positive magnitude of the posting.
    pub amount: Decimal,
    /// Effect on the bank account.
    #[serde(rename = "type", alias = "bankEffect")]
    pub bank_effect: BankEffect,
    /// Account receiving the debit.
    pub debit_account: String,
    /// Account receiving the credit.
    pub credit_account: String,
    /// High-level category.
    pub category: Category,
}

impl Transaction {
    /// Creates a transaction with a fresh id.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        bank_effect: BankEffect,
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            amount,
            bank_effect,
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            category,
        }
    }
}
