//! `dburl parse` command - Parse a URL given on the command line.

use crate::cli::ParseArgs;
use crate::commands::emit_config;
use crate::error::CliResult;
use tracing::debug;

/// Run the parse command
pub fn run(args: ParseArgs) -> CliResult<()> {
    debug!(format = ?args.format, "dburl parse");
    let config = args.parser.parser().parse(&args.url)?;
    emit_config("Connection", &config, args.format)
}
