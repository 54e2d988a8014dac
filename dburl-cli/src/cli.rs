//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dburl_config::{OptionValue, SETTINGS_FILE_NAME, UrlParser};
use std::path::PathBuf;

/// dburl - Database URL inspector
#[derive(Parser, Debug)]
#[command(name = "dburl")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "dburl - Turn database URLs into connection settings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a database URL given on the command line
    Parse(ParseArgs),

    /// Parse the database URL held in an environment variable
    Env(EnvArgs),

    /// List the known URL schemes and their engines
    Schemes(SchemesArgs),

    /// Load every database from a settings file
    Settings(SettingsArgs),

    /// Display version information
    Version,
}

/// Output format for parsed configurations
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled key/value listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// TOML document
    Toml,
}

// =============================================================================
// Shared parser flags
// =============================================================================

/// Overrides accepted by every command that parses URLs
#[derive(Args, Debug, Clone, Default)]
pub struct ParserArgs {
    /// Engine identifier to use regardless of scheme
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Custom scheme entry as SCHEME=ENGINE (repeatable)
    #[arg(short, long = "scheme", value_name = "SCHEME=ENGINE", value_parser = parse_key_value)]
    pub schemes: Vec<(String, String)>,

    /// Extra driver option as KEY=VALUE (repeatable, values are typed like query strings)
    #[arg(short, long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// CONN_MAX_AGE in seconds
    #[arg(long, default_value_t = 0)]
    pub conn_max_age: u64,

    /// Add sslmode=require to the options
    #[arg(long)]
    pub ssl_require: bool,
}

impl ParserArgs {
    /// Build a URL parser from the flags.
    pub fn parser(&self) -> UrlParser {
        let mut parser = UrlParser::new()
            .custom_schemes(self.schemes.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .options(
                self.options
                    .iter()
                    .map(|(k, v)| (k.clone(), OptionValue::coerce(v))),
            )
            .conn_max_age(self.conn_max_age)
            .ssl_require(self.ssl_require);
        if let Some(engine) = &self.engine {
            parser = parser.engine(engine.clone());
        }
        parser
    }
}

/// Split a `KEY=VALUE` argument.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Database URL to parse
    pub url: String,

    #[command(flatten)]
    pub parser: ParserArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// =============================================================================
// Env Command
// =============================================================================

/// Arguments for the `env` command
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Environment variable holding the URL
    #[arg(default_value = dburl_config::DEFAULT_ENV)]
    pub var: String,

    /// URL to use when the variable is unset
    #[arg(short, long)]
    pub default: Option<String>,

    #[command(flatten)]
    pub parser: ParserArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// =============================================================================
// Schemes Command
// =============================================================================

/// Arguments for the `schemes` command
#[derive(Args, Debug)]
pub struct SchemesArgs {
    /// Custom scheme entry as SCHEME=ENGINE to merge into the listing (repeatable)
    #[arg(short, long = "scheme", value_name = "SCHEME=ENGINE", value_parser = parse_key_value)]
    pub schemes: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// =============================================================================
// Settings Command
// =============================================================================

/// Arguments for the `settings` command
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the settings file
    #[arg(default_value = SETTINGS_FILE_NAME)]
    pub path: PathBuf,

    /// Only load this database alias
    #[arg(short, long)]
    pub alias: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
