//! Entry point of the `petrovich` binary

use clap::Parser;
use petrovich_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
