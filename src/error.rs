/// Centralized error types for pyfunc-index using thiserror
///
/// Extraction failures are fatal for the whole run, so every variant carries
/// enough context (file, line) to tell the user where the scan stopped.
use thiserror::Error;

/// Main error type for a scan
#[derive(Error, Debug)]
pub enum PyFuncError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while pulling function records out of a source file
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read file '{file}': {reason}")]
    FileReadFailed { file: String, reason: String },

    #[error("Definition at {file}:{line_number} has no parameter list: {line:?}")]
    MissingParameterList {
        file: String,
        line_number: usize,
        line: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Errors related to input validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Empty {0}")]
    Empty(String),
}

impl From<anyhow::Error> for PyFuncError {
    fn from(err: anyhow::Error) -> Self {
        PyFuncError::Other(format!("{:#}", err))
    }
}

impl PyFuncError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        PyFuncError::Other(msg.into())
    }

    /// Check if this is a user error (bad input or settings) vs a failure while scanning
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PyFuncError::Validation(_) | PyFuncError::Config(ConfigError::InvalidValue { .. })
        )
    }
}
