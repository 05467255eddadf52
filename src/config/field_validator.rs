//! Key-value validation for configuration service.
//!
//! This module handles the validation logic that was previously embedded
//! in `ProductionConfigService::validate_and_set_value`. It provides
//! field-specific validation for configuration keys and values.
//!
//! # Architecture
//!
//! - [`crate::config::validation`] - Low-level validation functions for individual values
//! - [`crate::config::validator`] - High-level configuration section validators
//! - [`crate::config::field_validator`] (this module) - Key-value validation for configuration service

use super::validation::*;
use crate::{Result, error::SubtitleError};

/// Validate and parse a configuration field based on its key.
///
/// This function handles the validation logic that was previously
/// embedded in ProductionConfigService::validate_and_set_value.
///
/// # Arguments
/// * `key` - The configuration key (e.g., "realign.scan_window")
/// * `value` - The string value to validate and parse
///
/// # Returns
/// Returns Ok(()) if validation passes, or an error describing the validation failure.
pub fn validate_field(key: &str, value: &str) -> Result<()> {
    match key {
        // Formats configuration fields
        "formats.default_output" => {
            validate_enum(value, &["srt", "vtt", "ass", "ssa"])?;
        }
        "formats.preserve_styling" => {
            parse_bool(value)?;
        }
        "formats.default_encoding" => {
            validate_non_empty(value, "Default encoding")?;
        }
        "formats.encoding_detection_confidence" => {
            validate_float_range(value, 0.0, 1.0)?;
        }

        // Realignment configuration fields
        "realign.scan_window" => {
            validate_usize_range(value, 1, 10_000)?;
        }
        "realign.prune_tolerance_ms" => {
            validate_i64_range(value, 0, i64::MAX)?;
        }
        "realign.clamp_warn_fraction" => {
            validate_float_range(value, 0.0, 1.0)?;
        }
        "realign.confidence_threshold" => {
            validate_float_range(value, 0.0, 1.0)?;
        }
        "realign.prune_leading" => {
            parse_bool(value)?;
        }

        // Merge configuration fields
        "merge.micro_cue_threshold_ms" => {
            validate_i64_range(value, 0, i64::MAX)?;
        }
        "merge.adjacency_gap_ms" => {
            validate_i64_range(value, 0, i64::MAX)?;
        }

        // Batch configuration fields
        "batch.max_concurrency" => {
            validate_usize_range(value, 0, 1024)?;
        }
        "batch.default_source_ext" => {
            validate_non_empty(value, "Default source extension")?;
        }
        "batch.default_reference_ext" => {
            validate_non_empty(value, "Default reference extension")?;
        }

        // General configuration fields
        "general.backup_enabled" => {
            parse_bool(value)?;
        }
        "general.task_timeout_seconds" => {
            validate_u64_range(value, 1, 86_400)?;
        }
        "general.workspace" => {
            validate_non_empty(value, "Workspace path")?;
        }
        "general.enable_progress_bar" => {
            parse_bool(value)?;
        }

        _ => {
            return Err(SubtitleError::config(format!(
                "Unknown configuration key: {key}"
            )));
        }
    }

    Ok(())
}

/// Validate that a string value is non-empty, producing a labeled error otherwise.
fn validate_non_empty(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SubtitleError::config(format!("{label} cannot be empty")));
    }
    Ok(())
}

/// Get a user-friendly description for a configuration field.
pub fn get_field_description(key: &str) -> &'static str {
    match key {
        "formats.default_output" => "Default output format for subtitles",
        "formats.preserve_styling" => "Preserve ASS/SSA styling information when converting",
        "formats.default_encoding" => "Default character encoding used when writing files",
        "formats.encoding_detection_confidence" => "Confidence threshold for encoding detection",

        "realign.scan_window" => "Number of leading events scanned for heuristic anchors",
        "realign.prune_tolerance_ms" => "Tolerance in milliseconds for pruning leading events",
        "realign.clamp_warn_fraction" => "Fraction of clamped events that triggers a warning",
        "realign.confidence_threshold" => "Minimum anchor confidence before downgrading a result",
        "realign.prune_leading" => "Whether to prune leading source events by default",

        "merge.micro_cue_threshold_ms" => "Cues shorter than this are folded into a neighbour",
        "merge.adjacency_gap_ms" => "Boundaries within this many milliseconds are merged",

        "batch.max_concurrency" => "Maximum number of files processed concurrently",
        "batch.default_source_ext" => "Default source-track filename suffix for pair discovery",
        "batch.default_reference_ext" => "Default reference-track filename suffix for pair discovery",

        "general.backup_enabled" => "Enable automatic backup creation",
        "general.task_timeout_seconds" => "Per-file processing timeout in seconds",
        "general.workspace" => "Workspace directory for CLI commands",
        "general.enable_progress_bar" => "Enable progress bar display",

        _ => "Configuration field",
    }
}
