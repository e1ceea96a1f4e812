use crate::domain::ports::Configuration;
use crate::utils::error::{Result, VendingError};
use std::path::Path;
use toml::{Table, Value};

/// Configuration read from a TOML document.
///
/// Keys are resolved literally first (`"machine.size.rows" = 5`), then as a
/// dotted path through nested tables (`[machine.size]` / `rows = 5`).
#[derive(Debug, Clone, Default)]
pub struct TomlConfiguration {
    table: Table,
}

impl TomlConfiguration {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VendingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let table = toml::from_str::<Table>(&processed_content).map_err(|e| {
            VendingError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            }
        })?;
        Ok(Self { table })
    }

    /// 替換環境變數 (例如 ${MACHINE_ROWS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VendingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.table.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let mut current = self.table.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }
}

impl Configuration for TomlConfiguration {
    fn get_integer(&self, key: &str, default: i64) -> Result<i64> {
        match self.lookup(key) {
            None => Ok(default),
            Some(Value::Integer(value)) => Ok(*value),
            Some(Value::String(text)) => {
                text.trim()
                    .parse()
                    .map_err(|_| VendingError::InvalidConfigValueError {
                        field: key.to_string(),
                        value: text.clone(),
                        reason: "Expected an integer".to_string(),
                    })
            }
            Some(other) => Err(VendingError::InvalidConfigValueError {
                field: key.to_string(),
                value: other.to_string(),
                reason: format!("Expected an integer, found {}", other.type_str()),
            }),
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            None => default.to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Integer(value)) => value.to_string(),
            Some(Value::Float(value)) => value.to_string(),
            Some(Value::Boolean(value)) => value.to_string(),
            Some(other) => {
                tracing::warn!(
                    "Ignoring {} value for `{}`, using default {:?}",
                    other.type_str(),
                    key,
                    default
                );
                default.to_string()
            }
        }
    }
}
