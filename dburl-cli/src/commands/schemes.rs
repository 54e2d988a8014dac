//! `dburl schemes` command - List known URL schemes.

use crate::cli::{OutputFormat, SchemesArgs};
use crate::error::CliResult;
use crate::output;
use dburl_config::SchemeRegistry;
use std::collections::BTreeMap;

/// Run the schemes command
pub fn run(args: SchemesArgs) -> CliResult<()> {
    let registry = SchemeRegistry::with_custom(args.schemes.iter().map(|(k, v)| (k, v.clone())));

    match args.format {
        OutputFormat::Text => {
            output::header("URL Schemes");
            let width = registry.schemes().map(|(s, _)| s.len()).max().unwrap_or(0);
            for (scheme, engine) in registry.schemes() {
                println!("  {:width$}  {}", scheme, engine, width = width);
            }
            output::newline();
            output::dim("Aliases: postgresql, pgsql -> postgres; sqlite3 -> sqlite; mysql2 -> mysql; sqlserver -> mssql");
        }
        format => {
            let table: BTreeMap<&str, &str> = registry.schemes().collect();
            println!("{}", output::render(&table, format)?);
        }
    }

    Ok(())
}
