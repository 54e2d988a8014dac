//! `dburl settings` command - Load databases from a settings file.

use crate::cli::{OutputFormat, SettingsArgs};
use crate::commands::emit_config;
use crate::error::CliResult;
use crate::output;
use dburl_config::{DatabaseSettings, StdEnvSource};
use indexmap::IndexMap;

/// Run the settings command
pub fn run(args: SettingsArgs) -> CliResult<()> {
    let settings = DatabaseSettings::from_file(&args.path)?;

    let configs = match &args.alias {
        Some(alias) => {
            let config = settings.load_database(alias, &StdEnvSource)?;
            IndexMap::from([(alias.clone(), config)])
        }
        None => settings.load()?,
    };

    if args.format != OutputFormat::Text {
        println!("{}", output::render(&configs, args.format)?);
        return Ok(());
    }

    output::header(&format!("Databases in {}", args.path.display()));
    for (alias, config) in &configs {
        if config.is_empty() {
            output::warn(&format!("{}: not configured", alias));
            continue;
        }
        emit_config(alias, config, args.format)?;
    }
    output::success(&format!("{} database(s) resolved", configs.len()));

    Ok(())
}
