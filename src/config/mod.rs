#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::Configuration;
use crate::utils::error::{Result, VendingError};
use std::collections::HashMap;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfiguration;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigValue {
    Integer(i64),
    Text(String),
}

/// In-memory configuration, optionally layered over another provider.
///
/// Keys set here win; anything else is looked up in the fallback.
#[derive(Default)]
pub struct MapConfiguration {
    values: HashMap<String, ConfigValue>,
    fallback: Option<Box<dyn Configuration>>,
}

impl MapConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(mut self, fallback: impl Configuration + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn with_integer(mut self, key: impl Into<String>, value: i64) -> Self {
        self.values.insert(key.into(), ConfigValue::Integer(value));
        self
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), ConfigValue::Text(value.into()));
        self
    }
}

impl Configuration for MapConfiguration {
    fn get_integer(&self, key: &str, default: i64) -> Result<i64> {
        match self.values.get(key) {
            Some(ConfigValue::Integer(value)) => Ok(*value),
            Some(ConfigValue::Text(text)) => {
                text.trim()
                    .parse()
                    .map_err(|_| VendingError::InvalidConfigValueError {
                        field: key.to_string(),
                        value: text.clone(),
                        reason: "Expected an integer".to_string(),
                    })
            }
            None => match &self.fallback {
                Some(fallback) => fallback.get_integer(key, default),
                None => Ok(default),
            },
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(ConfigValue::Integer(value)) => value.to_string(),
            Some(ConfigValue::Text(text)) => text.clone(),
            None => match &self.fallback {
                Some(fallback) => fallback.get_string(key, default),
                None => default.to_string(),
            },
        }
    }
}

impl std::fmt::Debug for MapConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapConfiguration")
            .field("values", &self.values)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
