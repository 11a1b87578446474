//! Account classification types.

use serde::{Deserialize, Serialize};

/// Financial-statement nature of a ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountClass {
    /// Resources held (bank, equipment).
    Asset,
    /// Amounts owed (loans, payables).
    Liability,
    /// Owner's stake (capital, drawings).
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
    /// No classification rule matched.
    Unclassified,
}

impl AccountClass {
    /// The side this class normally carries its balance on.
    ///
    /// Contra accounts (e.g. drawings) override this per rule.
    #[must_use]
    pub const fn default_normal_balance(self) -> Option<NormalBalance> {
        match self {
            Self::Asset | Self::Expense => Some(NormalBalance::Debit),
            Self::Liability | Self::Equity | Self::Revenue => Some(NormalBalance::Credit),
            Self::Unclassified => None,
        }
    }
}

impl std::fmt::Display for AccountClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Unclassified => "unclassified",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for AccountClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" | "assets" => Ok(Self::Asset),
            "liability" | "liabilities" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" | "income" => Ok(Self::Revenue),
            "expense" | "expenses" => Ok(Self::Expense),
            _ => Err(format!("Unknown account class: {s}")),
        }
    }
}

/// Debit or credit side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Balance normally sits in the debit column.
    Debit,
    /// Balance normally sits in the credit column.
    Credit,
}

impl std::str::FromStr for NormalBalance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown balance side: {s}")),
        }
    }
}

/// Result of classifying one account name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Statement bucket.
    pub class: AccountClass,
    /// Expected balance side; `None` when unclassified.
    pub normal_balance: Option<NormalBalance>,
}

impl Classification {
    /// The unclassified result.
    pub const UNCLASSIFIED: Self = Self {
        class: AccountClass::Unclassified,
        normal_balance: None,
    };

    /// A classification using the class's default normal balance.
    #[must_use]
    pub const fn of(class: AccountClass) -> Self {
        Self {
            class,
            normal_balance: class.default_normal_balance(),
        }
    }

    /// Returns true when no rule matched.
    #[must_use]
    pub const fn is_unclassified(&self) -> bool {
        matches!(self.class, AccountClass::Unclassified)
    }
}
