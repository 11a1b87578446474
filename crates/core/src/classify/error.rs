//! Classifier configuration errors.

use bookkeeper_shared::AppError;
use thiserror::Error;

/// Errors building a classifier from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// Class name is not one of asset, liability, equity, revenue, expense.
    #[error("Unknown account class: {0}")]
    UnknownClass(String),

    /// Balance side is neither debit nor credit.
    #[error("Unknown normal balance side: {0}")]
    UnknownBalanceSide(String),

    /// A rule has no usable keyword.
    #[error("Classifier rule #{index} has no keywords")]
    NoKeywords {
        /// Position of the rule in the configured table.
        index: usize,
    },
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        Self::Config(err.to_string())
    }
}
