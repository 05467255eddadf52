//! Configuration validation module providing validation rules and constraints.
//!
//! This module provides comprehensive validation functionality for configuration
//! values, ensuring that all settings meet business requirements and system
//! constraints before being used by the application.

use crate::Result;
use crate::config::Config;
use crate::error::SubtitleError;

/// Trait defining the validation interface for configuration sections.
pub trait ConfigValidator {
    /// Validate the configuration and return any errors found.
    fn validate(&self, config: &Config) -> Result<()>;
}

/// Formats configuration validator.
pub struct FormatsValidator;

impl ConfigValidator for FormatsValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        if config.formats.default_output.is_empty() {
            return Err(SubtitleError::config("Default output format cannot be empty"));
        }
        if !["srt", "vtt", "ass", "ssa"].contains(&config.formats.default_output.as_str()) {
            return Err(SubtitleError::config(format!(
                "Unsupported default output format: {}",
                config.formats.default_output
            )));
        }
        if config.formats.default_encoding.is_empty() {
            return Err(SubtitleError::config("Default encoding cannot be empty"));
        }
        if config.formats.encoding_detection_confidence < 0.0
            || config.formats.encoding_detection_confidence > 1.0
        {
            return Err(SubtitleError::config(
                "Encoding detection confidence must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}

/// Realignment configuration validator.
pub struct RealignValidator;

impl ConfigValidator for RealignValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        let realign = &config.realign;
        if realign.scan_window == 0 {
            return Err(SubtitleError::config("realign.scan_window must be greater than 0"));
        }
        if realign.prune_tolerance_ms < 0 {
            return Err(SubtitleError::config(
                "realign.prune_tolerance_ms cannot be negative",
            ));
        }
        if !(0.0..=1.0).contains(&realign.clamp_warn_fraction) {
            return Err(SubtitleError::config(
                "realign.clamp_warn_fraction must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&realign.confidence_threshold) {
            return Err(SubtitleError::config(
                "realign.confidence_threshold must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}

/// Merge configuration validator.
pub struct MergeValidator;

impl ConfigValidator for MergeValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        let merge = &config.merge;
        if merge.micro_cue_threshold_ms < 0 {
            return Err(SubtitleError::config(
                "merge.micro_cue_threshold_ms cannot be negative",
            ));
        }
        if merge.adjacency_gap_ms < 0 {
            return Err(SubtitleError::config("merge.adjacency_gap_ms cannot be negative"));
        }
        Ok(())
    }
}

/// Batch configuration validator.
pub struct BatchValidator;

impl ConfigValidator for BatchValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        if config.batch.default_source_ext.is_empty() {
            return Err(SubtitleError::config("batch.default_source_ext cannot be empty"));
        }
        if config.batch.default_reference_ext.is_empty() {
            return Err(SubtitleError::config(
                "batch.default_reference_ext cannot be empty",
            ));
        }
        Ok(())
    }
}

/// General configuration validator.
pub struct GeneralValidator;

impl ConfigValidator for GeneralValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        if config.general.task_timeout_seconds == 0 {
            return Err(SubtitleError::config(
                "general.task_timeout_seconds must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Validate the complete configuration.
///
/// This function runs all configuration validators and returns the first
/// error encountered, or Ok(()) if all validation passes.
pub fn validate_config(config: &Config) -> Result<()> {
    FormatsValidator.validate(config)?;
    RealignValidator.validate(config)?;
    MergeValidator.validate(config)?;
    BatchValidator.validate(config)?;
    GeneralValidator.validate(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_output_format() {
        let mut config = Config::default();
        config.formats.default_output = "mp4".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_confidence_threshold() {
        let mut config = Config::default();
        config.realign.confidence_threshold = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_prune_tolerance() {
        let mut config = Config::default();
        config.realign.prune_tolerance_ms = -100;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_batch_extension_is_rejected() {
        let mut config = Config::default();
        config.batch.default_source_ext = String::new();
        assert!(validate_config(&config).is_err());
    }
}
