//! CLI command implementations.

pub mod env;
pub mod parse;
pub mod schemes;
pub mod settings;
pub mod version;

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output;
use dburl_config::ConnectionConfig;

/// Print one connection record in the requested format.
pub(crate) fn emit_config(title: &str, config: &ConnectionConfig, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            output::newline();
            output::config(title, config);
            output::newline();
        }
        _ => println!("{}", output::render(config, format)?),
    }
    Ok(())
}
