//! `dburl version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};
use dburl_config::{DEFAULT_ENV, SETTINGS_FILE_NAME, SchemeRegistry};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("dburl");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();

    output::section("Defaults");
    kv("Variable", DEFAULT_ENV);
    kv("Settings file", SETTINGS_FILE_NAME);
    kv("Schemes", &SchemeRegistry::new().len().to_string());

    output::newline();

    output::section("Components");
    kv("dburl-config", env!("CARGO_PKG_VERSION"));

    Ok(())
}
