use crate::utils::error::{Result, VendingError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(VendingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 機台尺寸專用的範圍檢查，失敗時回報 `InvalidDimension`
pub fn validate_dimension(field_name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    validate_range(field_name, value, min, max).map_err(|_| VendingError::InvalidDimension {
        field: field_name.to_string(),
        value,
        min,
        max,
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VendingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
