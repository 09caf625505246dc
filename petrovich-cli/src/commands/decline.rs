//! Decline command implementation

use super::{CaseArg, GenderArg, KindArg, LoggingArgs};
use crate::error::CliError;
use crate::output::{self, Layout, OutputFormat};
use crate::rules_source::RulesSource;
use anyhow::Result;
use clap::Args;
use petrovich_core::{NameRequest, Petrovich};
use std::path::PathBuf;

/// Arguments for declining a single name
#[derive(Debug, Args)]
pub struct DeclineArgs {
    /// Which part of the full name NAME is
    #[arg(value_enum, required = true)]
    pub kind: Option<KindArg>,

    /// Gender of the person
    #[arg(value_enum, required = true)]
    pub gender: Option<GenderArg>,

    /// Name in the nominative case
    #[arg(required = true)]
    pub name: Option<String>,

    /// Print only this case
    #[arg(short, long, value_enum)]
    pub case: Option<CaseArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// External rule file (default: built-in Russian rules)
    #[arg(short, long, value_name = "FILE", env = "PETROVICH_RULES")]
    pub rules: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl DeclineArgs {
    /// Execute the decline command
    pub fn execute(&self) -> Result<()> {
        self.logging.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let request = self.request()?;
        let petrovich = Petrovich::new(RulesSource::from_option(self.rules.clone()).load()?);
        let declension = petrovich.decline(request.kind, request.gender, &request.name);

        let mut formatter =
            output::stdout_formatter(self.format, self.case.map(Into::into), Layout::Single);
        formatter.format_declension(&request, &declension)?;
        formatter.finish()
    }

    /// The name to decline, as given on the command line
    pub fn request(&self) -> Result<NameRequest, CliError> {
        let kind = self.kind.ok_or(CliError::MissingArgument("<KIND>"))?;
        let gender = self.gender.ok_or(CliError::MissingArgument("<GENDER>"))?;
        let name = self
            .name
            .as_deref()
            .ok_or(CliError::MissingArgument("<NAME>"))?;
        Ok(NameRequest::new(kind.into(), gender.into(), name))
    }
}
