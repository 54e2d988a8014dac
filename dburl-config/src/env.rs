//! Environment variable sources and expansion.

use crate::error::{ConnectionError, ConnectionResult};
use std::collections::HashMap;
use std::env::VarError;

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Get a variable, failing when it is set but unreadable.
    ///
    /// `Ok(None)` means the variable is absent. Sources that cannot hold
    /// unreadable values keep the default, which defers to [`get`](Self::get).
    fn try_get(&self, name: &str) -> ConnectionResult<Option<String>> {
        Ok(self.get(name))
    }

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn try_get(&self, name: &str) -> ConnectionResult<Option<String>> {
        (**self).try_get(name)
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn try_get(&self, name: &str) -> ConnectionResult<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConnectionError::InvalidEnvValue {
                name: name.to_string(),
                message: "value is not valid UTF-8".to_string(),
            }),
        }
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands environment variables in strings.
///
/// Supported syntax:
/// - `${VAR}` - Required variable
/// - `${VAR:-default}` - Variable with default value
/// - `${VAR:?error message}` - Required with custom error
/// - `${VAR:+value}` - `value` if VAR is set, empty otherwise
/// - `$VAR` - Simple variable reference
/// - `$$` - A literal `$`
#[derive(Debug, Clone)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl<S: EnvSource> EnvExpander<S> {
    /// Create an expander with a custom environment source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand environment variables in a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dburl_config::{EnvExpander, MapEnvSource};
    ///
    /// let source = MapEnvSource::new().set("DB_HOST", "localhost");
    /// let expander = EnvExpander::with_source(source);
    /// let result = expander.expand("postgres://${DB_HOST}/db").unwrap();
    /// assert_eq!(result, "postgres://localhost/db");
    /// ```
    pub fn expand(&self, input: &str) -> ConnectionResult<String> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                result.push(c);
                continue;
            }

            match chars.peek() {
                Some('$') => {
                    chars.next();
                    result.push('$');
                }
                Some('{') => {
                    chars.next();
                    result.push_str(&self.expand_braced(&mut chars)?);
                }
                Some(next) if next.is_alphabetic() || *next == '_' => {
                    result.push_str(&self.expand_simple(&mut chars)?);
                }
                // Literal $
                _ => result.push(c),
            }
        }

        Ok(result)
    }

    fn expand_braced(
        &self,
        chars: &mut std::iter::Peekable<std::str::Chars>,
    ) -> ConnectionResult<String> {
        let mut name = String::new();
        let mut modifier = None;
        let mut modifier_value = String::new();
        let mut closed = false;

        while let Some(c) = chars.next() {
            if c == '}' {
                closed = true;
                break;
            } else if c == ':' && modifier.is_none() {
                modifier = chars.next();
            } else if modifier.is_some() {
                modifier_value.push(c);
            } else {
                name.push(c);
            }
        }

        if !closed {
            return Err(ConnectionError::InvalidEnvValue {
                name,
                message: "Unterminated '${' reference".to_string(),
            });
        }

        if name.is_empty() {
            return Err(ConnectionError::InvalidEnvValue {
                name,
                message: "Empty variable name".to_string(),
            });
        }

        match (self.source.try_get(&name)?, modifier) {
            (Some(value), Some('+')) if !value.is_empty() => Ok(modifier_value),
            (_, Some('+')) => Ok(String::new()),
            (Some(value), _) if !value.is_empty() => Ok(value),
            (_, Some('-')) => Ok(modifier_value),
            (_, Some('?')) => Err(ConnectionError::InvalidEnvValue {
                message: if modifier_value.is_empty() {
                    format!("Required variable '{}' is not set", name)
                } else {
                    modifier_value
                },
                name,
            }),
            _ => Err(ConnectionError::EnvNotFound(name)),
        }
    }

    fn expand_simple(
        &self,
        chars: &mut std::iter::Peekable<std::str::Chars>,
    ) -> ConnectionResult<String> {
        let mut name = String::new();

        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                chars.next();
            } else {
                break;
            }
        }

        self.source
            .try_get(&name)?
            .ok_or(ConnectionError::EnvNotFound(name))
    }
}
