//! dburl CLI - Command-line interface for dburl.

use clap::Parser;

use dburl_cli::cli::{Cli, Command};
use dburl_cli::commands;
use dburl_cli::error::CliResult;
use dburl_cli::output;

fn main() {
    dburl_config::logging::init();

    if let Err(e) = run() {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse(args) => commands::parse::run(args),
        Command::Env(args) => commands::env::run(args),
        Command::Schemes(args) => commands::schemes::run(args),
        Command::Settings(args) => commands::settings::run(args),
        Command::Version => commands::version::run(),
    }
}
