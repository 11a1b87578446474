//! Categorization rule type.

use bookkeeper_shared::{config::RuleConfig, types::RuleId};
use serde::{Deserialize, Serialize};

use super::error::RuleError;
use crate::ledger::Category;

/// "If the description contains `keyword`, book it to `account` under `category`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationRule {
    /// Rule identity.
    pub id: RuleId,
    /// Substring searched for in the description, case-insensitively.
    pub keyword: String,
    /// Account assigned to the non-bank side.
    pub account: String,
    /// Category assigned to the transaction.
    pub category: Category,
}

impl CategorizationRule {
    /// Creates a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword or the account is blank.
    pub fn new(
        keyword: impl Into<String>,
        account: impl Into<String>,
        category: Category,
    ) -> Result<Self, RuleError> {
        let keyword = keyword.into().trim().to_string();
        let account = account.into().trim().to_string();

        if keyword.is_empty() {
            return Err(RuleError::EmptyKeyword);
        }
        if account.is_empty() {
            return Err(RuleError::EmptyAccount);
        }

        Ok(Self {
            id: RuleId::new(),
            keyword,
            account,
            category,
        })
    }

    /// Returns true if the rule's keyword occurs in `description`.
    #[must_use]
    pub fn matches(&self, description: &str) -> bool {
        description
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }
}

impl TryFrom<&RuleConfig> for CategorizationRule {
    type Error = RuleError;

    fn try_from(config: &RuleConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.keyword.as_str(),
            config.account.as_str(),
            Category::from(config.category.clone()),
        )
    }
}
