//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use petrovich_core::{Case, Gender, NameKind};

pub mod batch;
pub mod decline;
pub mod generate_rules;
pub mod validate;

/// Decline Russian first names, patronymics and last names
#[derive(Debug, Parser)]
#[command(
    name = "petrovich",
    version,
    about = "Declension of Russian personal names across the six grammatical cases",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub decline: decline::DeclineArgs,
}

impl Cli {
    /// Run the selected command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Validate(args)) => args.execute(),
            Some(Commands::Batch(args)) => args.execute(),
            Some(Commands::GenerateRules(args)) => args.execute(),
            None => self.decline.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a rule file and summarise its contents
    Validate(validate::ValidateArgs),

    /// Decline names read line by line from a file or stdin
    Batch(batch::BatchArgs),

    /// Write the built-in rules out as a template for a custom rule file
    GenerateRules(generate_rules::GenerateRulesArgs),
}

/// Kind of name on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Given name
    First,
    /// Patronymic
    Middle,
    /// Family name
    Last,
}

impl From<KindArg> for NameKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::First => NameKind::First,
            KindArg::Middle => NameKind::Middle,
            KindArg::Last => NameKind::Last,
        }
    }
}

/// Gender on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Grammatical case on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    #[value(alias = "nom")]
    Nominative,
    #[value(alias = "gen")]
    Genitive,
    #[value(alias = "dat")]
    Dative,
    #[value(alias = "acc")]
    Accusative,
    #[value(alias = "ins")]
    Instrumental,
    #[value(alias = "pre")]
    Prepositional,
}

impl From<CaseArg> for Case {
    fn from(case: CaseArg) -> Self {
        match case {
            CaseArg::Nominative => Case::Nominative,
            CaseArg::Genitive => Case::Genitive,
            CaseArg::Dative => Case::Dative,
            CaseArg::Accusative => Case::Accusative,
            CaseArg::Instrumental => Case::Instrumental,
            CaseArg::Prepositional => Case::Prepositional,
        }
    }
}

/// Logging flags shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingArgs {
    /// Suppress log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LoggingArgs {
    /// Filter level for the current verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(self.log_level()))
            .try_init()
            .context("Failed to initialize logging")?;
        Ok(())
    }
}
