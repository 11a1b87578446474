//! Account classification.
//!
//! Every report generator asks the same classifier what an account name is,
//! so the trial balance, balance sheet and cash flow statement can never
//! disagree about a given account.

pub mod error;
pub mod keyword;
pub mod types;

pub use error::ClassifierError;
pub use keyword::{KeywordClassifier, KeywordRule, default_rules};
pub use types::{AccountClass, Classification, NormalBalance};

/// Maps a free-text account name to its statement bucket.
pub trait AccountClassifier {
    /// Classifies one account name.
    fn classify(&self, account: &str) -> Classification;
}

impl<C: AccountClassifier + ?Sized> AccountClassifier for &C {
    fn classify(&self, account: &str) -> Classification {
        (**self).classify(account)
    }
}
