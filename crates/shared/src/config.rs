//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report derivation settings.
    pub reporting: ReportingConfig,
    /// Account classifier overrides.
    pub classifier: ClassifierConfig,
    /// Categorization rules applied to ingested transactions.
    pub rules: Vec<RuleConfig>,
}

/// Report derivation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Currency the reports are presented in.
    pub currency: Currency,
    /// Name of the ledger account that mirrors the bank statement.
    pub bank_account: String,
    /// Fail when any diagnostic is raised.
    pub strict: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            bank_account: default_bank_account(),
            strict: false,
        }
    }
}

fn default_bank_account() -> String {
    "Bank".to_string()
}

/// Account classifier overrides.
///
/// An empty rule list keeps the built-in keyword table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Ordered keyword rules; the first match wins.
    pub rules: Vec<KeywordRuleConfig>,
}

/// A single keyword rule for the account classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRuleConfig {
    /// Case-insensitive substrings matched against the account name.
    pub keywords: Vec<String>,
    /// Target class: asset, liability, equity, revenue or expense.
    pub class: String,
    /// Normal balance side; defaults to the class's usual side.
    #[serde(default)]
    pub normal_balance: Option<String>,
}

/// A categorization rule as written in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Substring searched for in the transaction description.
    pub keyword: String,
    /// Account assigned to the non-bank side.
    pub account: String,
    /// Category assigned to the transaction.
    pub category: String,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// the optional explicit file, then `BOOKKEEPER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load(explicit_file: Option<&str>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = explicit_file {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("BOOKKEEPER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
