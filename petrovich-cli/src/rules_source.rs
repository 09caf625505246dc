//! Rule source management for CLI

use crate::error::{CliError, CliResult};
use anyhow::Context;
use petrovich_core::RuleTable;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the declension rules come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// Rules compiled into the binary
    Embedded,
    /// External rule file
    External(PathBuf),
}

impl RulesSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(RulesSource::Embedded, RulesSource::External)
    }

    /// Get the display name for the rule source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::Embedded => "Built-in: Russian".to_string(),
            RulesSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the rule table
    pub fn load(&self) -> CliResult<Arc<RuleTable>> {
        log::info!("Loading rules ({})", self.display_name());
        match self {
            RulesSource::Embedded => {
                RuleTable::russian().context("Failed to load the built-in rules")
            }
            RulesSource::External(path) => {
                if !path.exists() {
                    return Err(CliError::RulesNotFound(path.display().to_string()).into());
                }
                let table = RuleTable::from_file(path)
                    .map_err(|e| CliError::InvalidRules(e.to_string()))?;
                Ok(Arc::new(table))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(RulesSource::from_option(None), RulesSource::Embedded);
        assert_eq!(
            RulesSource::from_option(Some(PathBuf::from("r.toml"))),
            RulesSource::External(PathBuf::from("r.toml"))
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(RulesSource::Embedded.display_name(), "Built-in: Russian");
        assert_eq!(
            RulesSource::External(PathBuf::from("custom.toml")).display_name(),
            "External: custom.toml"
        );
    }

    #[test]
    fn test_load_embedded() {
        let table = RulesSource::Embedded.load().unwrap();
        assert_eq!(table.code(), "ru");
    }

    #[test]
    fn test_load_missing_file() {
        let err = RulesSource::External(PathBuf::from("/nonexistent/rules.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::RulesNotFound(_))
        ));
    }
}
