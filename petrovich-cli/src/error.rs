//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Rule file not found or inaccessible
    RulesNotFound(String),
    /// Rule file failed to load
    InvalidRules(String),
    /// Malformed line in batch input
    InvalidInput { line: usize, reason: String },
    /// Required argument absent
    MissingArgument(&'static str),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::RulesNotFound(path) => write!(f, "Rule file not found: {path}"),
            CliError::InvalidRules(msg) => write!(f, "Invalid rule file: {msg}"),
            CliError::InvalidInput { line, reason } => write!(f, "Line {line}: {reason}"),
            CliError::MissingArgument(name) => write!(f, "Missing argument: {name}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
