//! Petrovich CLI library
//!
//! This library provides the command-line interface for declining Russian
//! personal names with petrovich-core.

pub mod commands;
pub mod error;
pub mod output;
pub mod rules_source;

pub use commands::{Cli, Commands};
pub use error::{CliError, CliResult};
