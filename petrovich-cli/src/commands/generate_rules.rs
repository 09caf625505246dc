//! Generate rules command implementation

use super::LoggingArgs;
use anyhow::{Context, Result};
use clap::Args;
use petrovich_core::rules::loader::RUSSIAN_RULES;
use std::path::PathBuf;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Code for the new rule set
    #[arg(short, long, value_name = "CODE", required = true)]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        self.logging.init_logging()?;

        println!("Generating rule file template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule file template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to add or change rules");
        println!("2. Validate your rules:");
        println!("   petrovich validate --rules {}", self.output.display());
        println!("3. Use them for declension:");
        println!(
            "   petrovich first male Иван --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// The built-in rules with the metadata block rewritten
    pub fn generate_template(&self) -> String {
        let code = toml::Value::String(self.code.clone());
        RUSSIAN_RULES
            .replacen("code = \"ru\"", &format!("code = {code}"), 1)
            .replacen("name = \"Russian\"", "name = \"Custom rules\"", 1)
    }
}
