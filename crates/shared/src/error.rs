//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transaction input could not be read or parsed.
    #[error("Input error: {0}")]
    Input(String),

    /// Transactions or rules violate the bookkeeping contract.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Derived reports failed a consistency check.
    #[error("Report error: {0}")]
    Report(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (sysexits-style).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 65,
            Self::Input(_) => 66,
            Self::Internal(_) => 70,
            Self::Config(_) => 78,
            Self::Report(_) => 3,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Input(_) => "INPUT_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Report(_) => "REPORT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Input(err.to_string())
    }
}
