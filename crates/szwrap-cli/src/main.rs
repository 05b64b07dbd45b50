//! szwrap CLI - Command-line front-end for the 7-Zip wrapper.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let tool = commands::resolve_tool(cli.seven_zip.as_deref())?;

    match &cli.command {
        cli::Commands::Create(args) => commands::create::execute(args, &tool, &*formatter),
        cli::Commands::Test(args) => commands::test::execute(args, &tool, &*formatter),
        cli::Commands::Extract(args) => commands::extract::execute(args, &tool, &*formatter),
    }
}
