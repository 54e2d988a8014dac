//! `dburl env` command - Parse the URL held in an environment variable.

use crate::cli::{EnvArgs, OutputFormat};
use crate::commands::emit_config;
use crate::error::CliResult;
use crate::output;

/// Run the env command
pub fn run(args: EnvArgs) -> CliResult<()> {
    let config = args
        .parser
        .parser()
        .from_env(&args.var, args.default.as_deref())?;

    if config.is_empty() {
        output::warn(&format!("{} is unset or empty", args.var));
        if args.format == OutputFormat::Json {
            println!("{{}}");
        }
        return Ok(());
    }

    emit_config(&args.var, &config, args.format)
}
