//! Rule table loader
//!
//! Manages the embedded Russian rules and rule files supplied at runtime.

use super::config::RulesConfig;
use super::table::RuleTable;
use crate::error::{PetrovichError, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Embedded Russian rule file
pub const RUSSIAN_RULES: &str = include_str!("../../configs/rules/russian.toml");

/// Parsed embedded table, built on first access
static RUSSIAN: OnceLock<std::result::Result<Arc<RuleTable>, String>> = OnceLock::new();

/// Shared handle to the embedded Russian rule table
pub fn russian_rules() -> Result<Arc<RuleTable>> {
    RUSSIAN
        .get_or_init(|| {
            RuleTable::from_toml_str(RUSSIAN_RULES)
                .map(Arc::new)
                .map_err(|e| format!("embedded Russian rules: {e}"))
        })
        .clone()
        .map_err(PetrovichError::InvalidRules)
}

impl RuleTable {
    /// The embedded Russian rules
    pub fn russian() -> Result<Arc<RuleTable>> {
        russian_rules()
    }

    /// Build a table from rule file contents
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = RulesConfig::from_toml_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Build a table from a rule file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PetrovichError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: RulesConfig = toml::from_str(&content).map_err(|e| {
            PetrovichError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::debug!(
            "loaded rule file '{}' ({})",
            path.display(),
            config.metadata.code
        );
        Self::from_config(&config)
    }
}
