//! Categorization rules.
//!
//! Keyword rules rewrite the accounts and category of freshly ingested
//! transactions before any report is derived.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::apply_rules;
pub use error::RuleError;
pub use types::CategorizationRule;
