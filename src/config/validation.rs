//! Configuration value validation utilities.
//!
//! This module provides comprehensive validation for configuration values,
//! ensuring type safety and constraint compliance.

use crate::error::{SubtitleError, SubtitleResult};

/// Validate a string value against a list of allowed values.
pub fn validate_enum(value: &str, allowed: &[&str]) -> SubtitleResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(SubtitleError::config(format!(
            "Invalid value '{}'. Allowed values: {}",
            value,
            allowed.join(", ")
        )))
    }
}

/// Validate a float value within a specified range.
pub fn validate_float_range(value: &str, min: f32, max: f32) -> SubtitleResult<f32> {
    let parsed = value
        .parse::<f32>()
        .map_err(|_| SubtitleError::config(format!("Invalid float value: {}", value)))?;
    if parsed < min || parsed > max {
        return Err(SubtitleError::config(format!(
            "Value {} is out of range [{}, {}]",
            parsed, min, max
        )));
    }
    Ok(parsed)
}

/// Validate an unsigned integer within a specified range.
pub fn validate_uint_range(value: &str, min: u32, max: u32) -> SubtitleResult<u32> {
    let parsed = value
        .parse::<u32>()
        .map_err(|_| SubtitleError::config(format!("Invalid integer value: {}", value)))?;
    if parsed < min || parsed > max {
        return Err(SubtitleError::config(format!(
            "Value {} is out of range [{}, {}]",
            parsed, min, max
        )));
    }
    Ok(parsed)
}

/// Validate a u64 value within a specified range.
pub fn validate_u64_range(value: &str, min: u64, max: u64) -> SubtitleResult<u64> {
    let parsed = value
        .parse::<u64>()
        .map_err(|_| SubtitleError::config(format!("Invalid u64 value: {}", value)))?;
    if parsed < min || parsed > max {
        return Err(SubtitleError::config(format!(
            "Value {} is out of range [{}, {}]",
            parsed, min, max
        )));
    }
    Ok(parsed)
}

/// Validate a usize value within a specified range.
pub fn validate_usize_range(value: &str, min: usize, max: usize) -> SubtitleResult<usize> {
    let parsed = value
        .parse::<usize>()
        .map_err(|_| SubtitleError::config(format!("Invalid usize value: {}", value)))?;
    if parsed < min || parsed > max {
        return Err(SubtitleError::config(format!(
            "Value {} is out of range [{}, {}]",
            parsed, min, max
        )));
    }
    Ok(parsed)
}

/// Validate an i64 value within a specified range.
pub fn validate_i64_range(value: &str, min: i64, max: i64) -> SubtitleResult<i64> {
    let parsed = value
        .parse::<i64>()
        .map_err(|_| SubtitleError::config(format!("Invalid integer value: {}", value)))?;
    if parsed < min || parsed > max {
        return Err(SubtitleError::config(format!(
            "Value {} is out of range [{}, {}]",
            parsed, min, max
        )));
    }
    Ok(parsed)
}

/// Parse boolean value from string.
pub fn parse_bool(value: &str) -> SubtitleResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(SubtitleError::config(format!(
            "Invalid boolean value: {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_enum_membership() {
        assert!(validate_enum("srt", &["srt", "ass", "vtt"]).is_ok());
        assert!(validate_enum("mp4", &["srt", "ass", "vtt"]).is_err());
    }

    #[test]
    fn validates_float_range() {
        assert!(validate_float_range("0.5", 0.0, 1.0).is_ok());
        assert!(validate_float_range("1.5", 0.0, 1.0).is_err());
        assert!(validate_float_range("nan-ish", 0.0, 1.0).is_err());
    }

    #[test]
    fn parses_bool_aliases() {
        assert_eq!(parse_bool("yes").unwrap(), true);
        assert_eq!(parse_bool("off").unwrap(), false);
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn validates_i64_range() {
        assert!(validate_i64_range("-500", -1000, 1000).is_ok());
        assert!(validate_i64_range("5000", -1000, 1000).is_err());
    }
}
