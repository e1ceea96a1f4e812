use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid machine dimension `{field}`: {value} (must be between {min} and {max})")]
    InvalidDimension {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Malformed tray symbol: {0:?}")]
    MalformedSymbol(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for `{field}`: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl VendingError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VendingError::MalformedSymbol(_) => ErrorSeverity::Low,
            VendingError::InvalidDimension { .. }
            | VendingError::ConfigError { .. }
            | VendingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            // 呼叫端違反契約或系統層錯誤
            VendingError::OutOfBounds { .. }
            | VendingError::IoError(_)
            | VendingError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VendingError::InvalidDimension { field, value, .. } => {
                format!("The machine cannot be built with {} {}", value, field)
            }
            VendingError::MalformedSymbol(symbol) => {
                format!("'{}' is not a tray symbol", symbol)
            }
            VendingError::ConfigError { .. } | VendingError::InvalidConfigValueError { .. } => {
                format!("The configuration could not be used: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VendingError::InvalidDimension { field, min, max, .. } => format!(
                "Set machine.size.{} to a value between {} and {}",
                field, min, max
            ),
            VendingError::MalformedSymbol(_) => {
                "Enter one letter followed by one digit, e.g. B3".to_string()
            }
            VendingError::ConfigError { .. } | VendingError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line overrides".to_string()
            }
            VendingError::IoError(_) => "Check that the file exists and is readable".to_string(),
            _ => "Please report this as a bug".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_suggests_valid_range() {
        let error = VendingError::InvalidDimension {
            field: "rows".to_string(),
            value: 27,
            min: 1,
            max: 26,
        };

        assert_eq!(error.severity(), ErrorSeverity::High);
        assert_eq!(
            error.recovery_suggestion(),
            "Set machine.size.rows to a value between 1 and 26"
        );
        assert!(error.to_string().contains("`rows`: 27"));
    }

    #[test]
    fn test_out_of_bounds_is_critical() {
        let error = VendingError::OutOfBounds {
            row: 3,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }
}
