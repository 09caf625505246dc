//! Error types for rule loading and argument parsing
//!
//! Declension itself never fails: a word that no rule covers comes back
//! unchanged. Errors only surface while building a rule table or while
//! turning caller-supplied tokens into the closed enums of [`crate::types`].

use thiserror::Error;

/// Errors produced by petrovich-core
#[derive(Debug, Error)]
pub enum PetrovichError {
    /// Rule file could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule file parsed but violates a rule table invariant
    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    /// Unknown name kind token
    #[error("Invalid name kind: {0}")]
    InvalidKind(String),

    /// Unknown gender token
    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    /// Unknown grammatical case token
    #[error("Invalid case: {0}")]
    InvalidCase(String),
}

/// Result type for petrovich-core operations
pub type Result<T> = std::result::Result<T, PetrovichError>;
