//! Categorization rule errors.

use bookkeeper_shared::AppError;
use thiserror::Error;

/// Errors creating a categorization rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Keyword is blank.
    #[error("Rule keyword cannot be empty")]
    EmptyKeyword,

    /// Account is blank.
    #[error("Rule account cannot be empty")]
    EmptyAccount,
}

impl From<RuleError> for AppError {
    fn from(err: RuleError) -> Self {
        Self::Config(err.to_string())
    }
}
