//! The normalized connection record.

use crate::value::OptionValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// In-memory database sentinel used for file-based engines.
pub const MEMORY_DATABASE: &str = ":memory:";

/// Connection settings decomposed from a database URL.
///
/// Serializes with the upper-case keys settings consumers expect (`ENGINE`,
/// `NAME`, `HOST`, `USER`, `PASSWORD`, `PORT`, `CONN_MAX_AGE`) and nests
/// driver options under `OPTIONS`. An absent port serializes as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ConnectionConfig {
    /// Canonical engine identifier.
    #[serde(default)]
    pub engine: String,
    /// Database name, file path, or [`MEMORY_DATABASE`].
    #[serde(default)]
    pub name: String,
    /// Hostname, IP address, or Unix-socket directory.
    #[serde(default)]
    pub host: String,
    /// Username.
    #[serde(default)]
    pub user: String,
    /// Password.
    #[serde(default)]
    pub password: String,
    /// Port, `None` when the URL carries none.
    #[serde(default, with = "port_field")]
    pub port: Option<u16>,
    /// Seconds a consumer may keep a connection open, `0` to close after each use.
    #[serde(default)]
    pub conn_max_age: u64,
    /// Driver options.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, OptionValue>,
}

impl ConnectionConfig {
    /// Check if this is the empty record returned for an unset variable.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if this points at an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.name == MEMORY_DATABASE
    }

    /// Check if the host is a Unix-socket directory.
    pub fn is_unix_socket(&self) -> bool {
        self.host.starts_with('/')
    }

    /// Get a driver option.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Set a driver option, replacing any previous value.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// Port or an empty string, the way it is written into settings files.
    pub fn port_string(&self) -> String {
        self.port.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// `PORT` is either an integer or the empty string.
mod port_field {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(port: &Option<u16>, serializer: S) -> Result<S::Ok, S::Error> {
        match port {
            Some(port) => serializer.serialize_u16(*port),
            None => serializer.serialize_str(""),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
        let raw = Option::<RawPort>::deserialize(deserializer)?;
        let number = match raw {
            None => return Ok(None),
            Some(RawPort::Text(text)) if text.is_empty() => return Ok(None),
            Some(RawPort::Text(text)) => text
                .parse::<u64>()
                .map_err(|_| de::Error::custom(format!("invalid port '{}'", text)))?,
            Some(RawPort::Number(n)) => n,
        };
        match u16::try_from(number) {
            Ok(port) if port > 0 => Ok(Some(port)),
            _ => Err(de::Error::custom(format!("port out of range: {}", number))),
        }
    }
}
