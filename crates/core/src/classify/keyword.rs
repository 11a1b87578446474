//! Keyword-driven account classifier.

use bookkeeper_shared::config::ClassifierConfig;

use super::error::ClassifierError;
use super::types::{AccountClass, Classification, NormalBalance};
use super::AccountClassifier;

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lower-case substrings; any match selects this rule.
    pub keywords: Vec<String>,
    /// Resulting classification.
    pub classification: Classification,
}

impl KeywordRule {
    /// Creates a rule with the class's default normal balance.
    #[must_use]
    pub fn new(keywords: &[&str], class: AccountClass) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            classification: Classification::of(class),
        }
    }

    /// Overrides the normal balance (contra accounts).
    #[must_use]
    pub fn with_normal_balance(mut self, normal_balance: NormalBalance) -> Self {
        self.classification.normal_balance = Some(normal_balance);
        self
    }

    fn matches(&self, lower_account: &str) -> bool {
        self.keywords.iter().any(|k| lower_account.contains(k.as_str()))
    }
}

/// Case-insensitive substring classifier; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl KeywordClassifier {
    /// Creates a classifier from an ordered rule table.
    #[must_use]
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Builds a classifier from configuration.
    ///
    /// An empty rule list keeps the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule names an unknown class or balance side, or
    /// has no keywords.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        if config.rules.is_empty() {
            return Ok(Self::default());
        }

        let mut rules = Vec::with_capacity(config.rules.len());
        for (index, rule) in config.rules.iter().enumerate() {
            let keywords: Vec<String> = rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if keywords.is_empty() {
                return Err(ClassifierError::NoKeywords { index });
            }

            let class: AccountClass = rule
                .class
                .parse()
                .map_err(|_| ClassifierError::UnknownClass(rule.class.clone()))?;

            let mut classification = Classification::of(class);
            if let Some(side) = &rule.normal_balance {
                let side: NormalBalance = side
                    .parse()
                    .map_err(|_| ClassifierError::UnknownBalanceSide(side.clone()))?;
                classification.normal_balance = Some(side);
            }

            rules.push(KeywordRule {
                keywords,
                classification,
            });
        }

        Ok(Self::new(rules))
    }

    /// The rule table in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl AccountClassifier for KeywordClassifier {
    fn classify(&self, account: &str) -> Classification {
        let lower = account.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map_or(Classification::UNCLASSIFIED, |rule| rule.classification)
    }
}

/// Built-in keyword table.
///
/// Income statement markers come first so names like "Bank Charges Expense"
/// are not taken for assets.
#[must_use]
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(&["expense"], AccountClass::Expense),
        KeywordRule::new(&["revenue", "income"], AccountClass::Revenue),
        KeywordRule::new(&["bank", "asset"], AccountClass::Asset),
        KeywordRule::new(&["liability", "liabilities", "loan"], AccountClass::Liability),
        KeywordRule::new(&["capital"], AccountClass::Equity),
        KeywordRule::new(&["drawings"], AccountClass::Equity)
            .with_normal_balance(NormalBalance::Debit),
    ]
}
