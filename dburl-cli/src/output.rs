//! Styled terminal output utilities.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use dburl_config::ConnectionConfig;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print a warning message
pub fn warn(text: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), text.yellow());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Mask a password for display.
pub fn mask(password: &str) -> String {
    if password.is_empty() {
        String::new()
    } else {
        "*".repeat(8)
    }
}

/// Print a connection record as a styled listing.
pub fn config(title: &str, config: &ConnectionConfig) {
    section(title);
    kv("ENGINE", &config.engine);
    kv("NAME", &config.name);
    kv("HOST", &config.host);
    kv("USER", &config.user);
    kv("PASSWORD", &mask(&config.password));
    kv("PORT", &config.port_string());
    kv("CONN_MAX_AGE", &config.conn_max_age.to_string());
    if !config.options.is_empty() {
        kv("OPTIONS", "");
        for (key, value) in &config.options {
            println!("    {} = {}", key.dimmed(), value);
        }
    }
}

/// Render any serializable value in a machine-readable format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Toml => Ok(toml::to_string(value)?),
        OutputFormat::Text => Err(CliError::Format(
            "text output is printed directly, not rendered".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("secret"), "********");
    }

    #[test]
    fn test_render_json_and_toml() {
        let config = ConnectionConfig {
            engine: "django.db.backends.sqlite3".into(),
            name: ":memory:".into(),
            ..Default::default()
        };

        let json = render(&config, OutputFormat::Json).unwrap();
        assert!(json.contains("\"NAME\": \":memory:\""));
        assert!(json.contains("\"PORT\": \"\""));

        let toml = render(&config, OutputFormat::Toml).unwrap();
        assert!(toml.contains("ENGINE = \"django.db.backends.sqlite3\""));

        assert!(render(&config, OutputFormat::Text).is_err());
    }
}
