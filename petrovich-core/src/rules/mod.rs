//! Declension rule tables
//!
//! Rules are data: a TOML document (see `configs/rules/russian.toml`) is
//! parsed into [`config::RulesConfig`], validated, and frozen into a
//! [`RuleTable`] that the engine only ever reads.

pub mod config;
pub mod loader;
pub mod table;

pub use config::{KindRules, Metadata, RuleConfig, RulesConfig};
pub use loader::russian_rules;
pub use table::{Rule, RuleSet, RuleTable, RuleTableBuilder, KEEP_MOD, MAX_SUFFIX_LEN};
