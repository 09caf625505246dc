//! Configuration structures and validation
//!
//! This module defines the TOML schema for rule tables.

use crate::error::PetrovichError;
use crate::types::{GenderScope, NameKind};
use serde::{Deserialize, Serialize};

/// Root rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub firstname: KindRules,
    pub middlename: KindRules,
    pub lastname: KindRules,
}

/// Rule file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Rules of one name kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindRules {
    /// Whole-word rules, checked before any suffix rule
    #[serde(default)]
    pub exceptions: Vec<RuleConfig>,
    /// Ending rules, longest matching ending wins
    #[serde(default)]
    pub suffixes: Vec<RuleConfig>,
}

/// A single rule as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub gender: GenderScope,
    pub test: Vec<String>,
    pub mods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<usize>,
}

/// Tag restricting a rule to the first part of a hyphenated name
pub const TAG_FIRST_WORD: &str = "first_word";

impl RulesConfig {
    /// Parse a rule file from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PetrovichError> {
        toml::from_str(toml_str)
            .map_err(|e| PetrovichError::Configuration(format!("Failed to parse rules: {e}")))
    }

    /// Rules of the given kind
    pub fn kind(&self, kind: NameKind) -> &KindRules {
        match kind {
            NameKind::First => &self.firstname,
            NameKind::Middle => &self.middlename,
            NameKind::Last => &self.lastname,
        }
    }

    /// Validate file-level fields
    ///
    /// Per-rule invariants are checked when the runtime table is built.
    pub(crate) fn validate(&self) -> Result<(), PetrovichError> {
        if self.metadata.code.trim().is_empty() {
            return Err(PetrovichError::InvalidRules(
                "metadata.code must not be empty".to_string(),
            ));
        }

        for kind in NameKind::ALL {
            let rules = self.kind(kind);
            for (group, list) in [("exception", &rules.exceptions), ("suffix", &rules.suffixes)] {
                for (i, rule) in list.iter().enumerate() {
                    if let Some(tag) = rule.tags.iter().find(|t| *t != TAG_FIRST_WORD) {
                        return Err(PetrovichError::InvalidRules(format!(
                            "{} {group} rule {i}: unknown tag '{tag}'",
                            kind.section()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl RuleConfig {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
