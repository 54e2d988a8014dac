//! Scheme token to engine identifier resolution.

use crate::error::{ConnectionError, ConnectionResult};
use std::collections::HashMap;
use tracing::trace;

/// Canonical engine identifiers for the built-in schemes.
///
/// These are the backend module paths a Django-style `DATABASES` consumer
/// expects in its `ENGINE` key.
pub mod engines {
    /// PostgreSQL (`postgres://`, `postgresql://`, `pgsql://`).
    pub const POSTGRES: &str = "django.db.backends.postgresql_psycopg2";
    /// PostGIS (`postgis://`).
    pub const POSTGIS: &str = "django.contrib.gis.db.backends.postgis";
    /// MySQL (`mysql://`, `mysql2://`).
    pub const MYSQL: &str = "django.db.backends.mysql";
    /// MySQL with GIS extensions (`mysqlgis://`).
    pub const MYSQL_GIS: &str = "django.contrib.gis.db.backends.mysql";
    /// Oracle's MySQL connector (`mysql-connector://`).
    pub const MYSQL_CONNECTOR: &str = "mysql.connector.django";
    /// SQL Server over pyodbc (`mssql://`, `sqlserver://`).
    pub const MSSQL: &str = "sql_server.pyodbc";
    /// SQL Server over the Microsoft driver (`mssqlms://`).
    pub const MSSQL_MS: &str = "mssql";
    /// Oracle (`oracle://`).
    pub const ORACLE: &str = "django.db.backends.oracle";
    /// Oracle Spatial (`oraclegis://`).
    pub const ORACLE_GIS: &str = "django.contrib.gis.db.backends.oracle";
    /// SQLite (`sqlite://`, `sqlite3://`).
    pub const SQLITE: &str = "django.db.backends.sqlite3";
    /// SpatiaLite (`spatialite://`).
    pub const SPATIALITE: &str = "django.contrib.gis.db.backends.spatialite";
    /// Amazon Redshift (`redshift://`).
    pub const REDSHIFT: &str = "django_redshift_backend";
    /// LDAP (`ldap://`).
    pub const LDAP: &str = "ldapdb.backends.ldap";
}

/// The compiled-in scheme table.
pub static DEFAULT_SCHEMES: &[(&str, &str)] = &[
    ("postgres", engines::POSTGRES),
    ("postgis", engines::POSTGIS),
    ("mysql", engines::MYSQL),
    ("mysqlgis", engines::MYSQL_GIS),
    ("mysql-connector", engines::MYSQL_CONNECTOR),
    ("mssql", engines::MSSQL),
    ("mssqlms", engines::MSSQL_MS),
    ("oracle", engines::ORACLE),
    ("oraclegis", engines::ORACLE_GIS),
    ("sqlite", engines::SQLITE),
    ("spatialite", engines::SPATIALITE),
    ("redshift", engines::REDSHIFT),
    ("ldap", engines::LDAP),
];

/// Map a compatibility alias onto the scheme that owns its table entry.
///
/// Input must already be lowercase. Unknown tokens are returned unchanged.
pub fn canonical_scheme(scheme: &str) -> &str {
    match scheme {
        "postgresql" | "pgsql" => "postgres",
        "sqlite3" => "sqlite",
        "mysql2" => "mysql",
        "sqlserver" => "mssql",
        other => other,
    }
}

/// Check whether a scheme addresses a database file rather than a server.
///
/// File-based schemes carry a path (or `:memory:`) after `://` instead of an
/// authority section.
pub fn is_file_based(scheme: &str) -> bool {
    let scheme = scheme.to_ascii_lowercase();
    matches!(canonical_scheme(&scheme), "sqlite" | "spatialite")
}

/// Scheme token to engine identifier table.
///
/// Built from [`DEFAULT_SCHEMES`] with custom entries copied over it, so the
/// static table itself is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRegistry {
    schemes: HashMap<String, String>,
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES
                .iter()
                .map(|(scheme, engine)| (scheme.to_string(), engine.to_string()))
                .collect(),
        }
    }
}

impl SchemeRegistry {
    /// Create a registry holding only the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with custom entries merged over the defaults.
    ///
    /// Custom keys are lowercased; on collision the custom engine wins.
    pub fn with_custom<I, K, V>(custom: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut registry = Self::default();
        registry.extend(custom);
        registry
    }

    /// Merge more entries into this registry.
    pub fn extend<I, K, V>(&mut self, custom: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (scheme, engine) in custom {
            self.schemes
                .insert(scheme.as_ref().to_ascii_lowercase(), engine.into());
        }
    }

    /// Look up the engine for a scheme without alias fallback or overrides.
    pub fn get(&self, scheme: &str) -> Option<&str> {
        self.schemes.get(scheme).map(String::as_str)
    }

    /// Check whether a scheme resolves, aliases included.
    pub fn contains(&self, scheme: &str) -> bool {
        self.lookup(&scheme.to_ascii_lowercase()).is_some()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Iterate over `(scheme, engine)` pairs sorted by scheme.
    pub fn schemes(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<_> = self
            .schemes
            .iter()
            .map(|(scheme, engine)| (scheme.as_str(), engine.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(scheme, _)| *scheme);
        entries.into_iter()
    }

    /// Resolve a scheme token to an engine identifier.
    ///
    /// A non-empty `explicit_engine` wins without consulting the table.
    /// Otherwise the lowercased token is looked up as written, then through
    /// [`canonical_scheme`], so a custom `postgresql` entry still takes
    /// precedence over the shared `postgres` default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dburl_config::{SchemeRegistry, engines};
    ///
    /// let registry = SchemeRegistry::new();
    /// assert_eq!(registry.resolve("postgresql", None).unwrap(), engines::POSTGRES);
    /// assert_eq!(registry.resolve("foodb", Some("my.engine")).unwrap(), "my.engine");
    /// assert!(registry.resolve("foodb", None).is_err());
    /// ```
    pub fn resolve(&self, scheme: &str, explicit_engine: Option<&str>) -> ConnectionResult<String> {
        if let Some(engine) = explicit_engine.filter(|e| !e.is_empty()) {
            trace!(scheme, engine, "Using explicit engine");
            return Ok(engine.to_string());
        }

        let scheme = scheme.to_ascii_lowercase();
        self.lookup(&scheme)
            .map(str::to_string)
            .ok_or(ConnectionError::UnrecognizedScheme(scheme))
    }

    fn lookup(&self, scheme: &str) -> Option<&str> {
        self.get(scheme)
            .or_else(|| self.get(canonical_scheme(scheme)))
    }
}

/// Resolve a scheme against the defaults merged with an optional custom table.
pub fn resolve_engine(
    scheme: &str,
    explicit_engine: Option<&str>,
    custom_schemes: Option<&HashMap<String, String>>,
) -> ConnectionResult<String> {
    match custom_schemes {
        Some(custom) if !custom.is_empty() => SchemeRegistry::with_custom(
            custom.iter().map(|(k, v)| (k.as_str(), v.clone())),
        )
        .resolve(scheme, explicit_engine),
        _ => SchemeRegistry::new().resolve(scheme, explicit_engine),
    }
}
