//! Validate command implementation

use super::LoggingArgs;
use anyhow::Result;
use clap::Args;
use petrovich_core::{NameKind, RuleTable};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.logging.init_logging()?;

        println!("Validating rule file: {}", self.rules.display());

        match RuleTable::from_file(&self.rules) {
            Ok(table) => {
                println!("✓ Rules are valid!");
                println!("  Code: {}", table.code());
                println!("  Name: {}", table.name());
                for line in summary(&table) {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// One line per name kind with its exception and suffix rule counts
pub fn summary(table: &RuleTable) -> Vec<String> {
    NameKind::ALL
        .iter()
        .map(|&kind| {
            let set = table.rules(kind);
            format!(
                "{}: {} exceptions, {} suffix rules",
                kind.section(),
                set.exceptions().count(),
                set.suffixes().count()
            )
        })
        .collect()
}
