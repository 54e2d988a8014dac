//! Settings file parsing for `dburl.toml`.
//!
//! A settings file names one or more databases, each read from an
//! environment variable or given as a literal URL:
//!
//! ```toml
//! [databases.default]
//! env = "DATABASE_URL"
//! default = "sqlite://"
//! conn_max_age = 600
//!
//! [databases.default.schemes]
//! somecustomdb = "somecustomdb.django.backend"
//!
//! [databases.replica]
//! url = "postgres://${REPLICA_USER}@replica.internal/app"
//! ```
//!
//! A literal `url` is expanded with [`EnvExpander`], so a `$` that belongs to
//! the URL itself is written `$$` (or percent-encoded as `%24`).

use crate::config::ConnectionConfig;
use crate::env::{EnvExpander, EnvSource, StdEnvSource};
use crate::error::{ConnectionError, ConnectionResult};
use crate::parser::{DEFAULT_ENV, UrlParser};
use crate::value::OptionValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default settings file name.
pub const SETTINGS_FILE_NAME: &str = "dburl.toml";

/// Alias of the database created when a file declares none.
pub const DEFAULT_ALIAS: &str = "default";

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Databases keyed by alias, in file order.
    #[serde(default = "default_databases")]
    pub databases: IndexMap<String, DatabaseEntry>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            databases: default_databases(),
        }
    }
}

fn default_databases() -> IndexMap<String, DatabaseEntry> {
    let mut databases = IndexMap::new();
    databases.insert(DEFAULT_ALIAS.to_string(), DatabaseEntry::default());
    databases
}

impl FromStr for DatabaseSettings {
    type Err = ConnectionError;

    fn from_str(content: &str) -> ConnectionResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl DatabaseSettings {
    /// Load settings from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConnectionResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading database settings");
        let content = std::fs::read_to_string(path).map_err(|e| ConnectionError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        content.parse()
    }

    /// Get a database entry by alias.
    pub fn get(&self, alias: &str) -> Option<&DatabaseEntry> {
        self.databases.get(alias)
    }

    /// Check every entry for conflicting keys.
    pub fn validate(&self) -> ConnectionResult<()> {
        self.databases
            .iter()
            .try_for_each(|(alias, entry)| entry.validate(alias))
    }

    /// Resolve every database against the process environment.
    pub fn load(&self) -> ConnectionResult<IndexMap<String, ConnectionConfig>> {
        self.load_from(&StdEnvSource)
    }

    /// Resolve every database against `source`.
    pub fn load_from<S: EnvSource + ?Sized>(
        &self,
        source: &S,
    ) -> ConnectionResult<IndexMap<String, ConnectionConfig>> {
        let mut configs = IndexMap::with_capacity(self.databases.len());
        for (alias, entry) in &self.databases {
            configs.insert(alias.clone(), entry.resolve(alias, source)?);
        }

        info!(databases = configs.len(), "Database settings loaded");
        Ok(configs)
    }

    /// Resolve a single database by alias against `source`.
    pub fn load_database<S: EnvSource + ?Sized>(
        &self,
        alias: &str,
        source: &S,
    ) -> ConnectionResult<ConnectionConfig> {
        let entry = self
            .get(alias)
            .ok_or_else(|| ConnectionError::Config(format!("Unknown database alias '{}'", alias)))?;
        entry.resolve(alias, source)
    }
}

/// One named database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseEntry {
    /// Literal URL; `${VAR}` references are expanded and `$$` is a literal `$`.
    pub url: Option<String>,

    /// Environment variable holding the URL (`DATABASE_URL` when neither this nor `url` is set).
    pub env: Option<String>,

    /// URL used when the variable is unset.
    pub default: Option<String>,

    /// Explicit engine override.
    pub engine: Option<String>,

    /// Connection lifetime in seconds.
    #[serde(default)]
    pub conn_max_age: u64,

    /// Add `sslmode=require`.
    #[serde(default)]
    pub ssl_require: bool,

    /// Custom scheme table merged over the defaults.
    #[serde(default)]
    pub schemes: IndexMap<String, String>,

    /// Extra driver options.
    #[serde(default)]
    pub options: IndexMap<String, OptionValue>,
}

impl DatabaseEntry {
    /// Name of the variable this entry reads.
    pub fn env_var(&self) -> &str {
        self.env.as_deref().unwrap_or(DEFAULT_ENV)
    }

    /// Build a parser carrying this entry's overrides.
    pub fn parser(&self) -> UrlParser {
        let mut parser = UrlParser::new()
            .custom_schemes(self.schemes.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .options(self.options.iter().map(|(k, v)| (k.clone(), v.clone())))
            .conn_max_age(self.conn_max_age)
            .ssl_require(self.ssl_require);
        if let Some(engine) = &self.engine {
            parser = parser.engine(engine.clone());
        }
        parser
    }

    fn validate(&self, alias: &str) -> ConnectionResult<()> {
        if self.url.is_some() && self.env.is_some() {
            return Err(ConnectionError::Config(format!(
                "database '{}': 'url' and 'env' are mutually exclusive",
                alias
            )));
        }
        if self.url.is_some() && self.default.is_some() {
            return Err(ConnectionError::Config(format!(
                "database '{}': 'default' only applies to environment lookups",
                alias
            )));
        }
        Ok(())
    }

    /// Produce the connection record for this entry.
    pub fn resolve<S: EnvSource + ?Sized>(
        &self,
        alias: &str,
        source: &S,
    ) -> ConnectionResult<ConnectionConfig> {
        self.validate(alias)?;
        let parser = self.parser();

        match &self.url {
            Some(url) => {
                debug!(alias, "Resolving database from literal URL");
                let expanded = EnvExpander::with_source(source).expand(url)?;
                parser.parse(&expanded)
            }
            None => {
                debug!(alias, var = self.env_var(), "Resolving database from environment");
                parser.from_source(source, self.env_var(), self.default.as_deref())
            }
        }
    }
}
