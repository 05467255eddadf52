//! Configuration management module.
//!
//! This module provides the complete configuration service system with
//! dependency injection support and comprehensive type definitions.
//!
//! # Key Components
//!
//! - [`Config`] - Main configuration structure containing all settings
//! - [`ConfigService`] - Service interface for configuration management
//! - [`ProductionConfigService`] - Production implementation with file I/O
//! - [`TestConfigService`] - Test implementation with controlled behavior
//! - [`TestConfigBuilder`] - Builder pattern for test configurations
//!
//! # Validation System
//!
//! - [`validation`] - Low-level validation functions for individual values
//! - [`validator`] - High-level configuration section validators
//! - [`field_validator`] - Key-value validation for configuration service
//!
//! # Examples
//!
//! ```rust
//! use subtrack_cli::config::{Config, ConfigService, ProductionConfigService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config_service = ProductionConfigService::new()?;
//! let config = config_service.get_config()?;
//! println!("Default output format: {}", config.formats.default_output);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod builder;
pub mod environment;
pub mod field_validator;
pub mod service;
pub mod test_macros;
pub mod test_service;
pub mod validation;
pub mod validator;

// ============================================================================
// Configuration Type Definitions
// ============================================================================

/// Full application configuration.
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.formats.default_output, "srt");
/// ```
///
/// ```rust
/// use subtrack_cli::config::Config;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let toml_str = toml::to_string(&config)?;
/// assert!(toml_str.contains("[formats]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Subtitle format conversion and encoding-detection settings.
    pub formats: FormatsConfig,
    /// Cross-track realignment defaults.
    pub realign: RealignConfig,
    /// Bilingual merge defaults.
    pub merge: MergeConfig,
    /// Batch orchestration defaults.
    pub batch: BatchConfig,
    /// General runtime options (e.g. backups).
    pub general: GeneralConfig,
    /// Optional file path from which the configuration was loaded.
    pub loaded_from: Option<PathBuf>,
}

/// Subtitle format related configuration.
///
/// ```rust
/// use subtrack_cli::config::FormatsConfig;
///
/// let formats = FormatsConfig::default();
/// assert_eq!(formats.default_output, "srt");
/// assert_eq!(formats.default_encoding, "utf-8");
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormatsConfig {
    /// Default output format (e.g. "srt", "ass", "vtt").
    pub default_output: String,
    /// Whether to preserve ASS/SSA style information when converting formats.
    pub preserve_styling: bool,
    /// Default character encoding used when writing new files.
    pub default_encoding: String,
    /// Encoding detection confidence threshold (0.0-1.0) below which a
    /// warning is logged.
    pub encoding_detection_confidence: f32,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            default_output: "srt".to_string(),
            preserve_styling: true,
            default_encoding: "utf-8".to_string(),
            encoding_detection_confidence: 0.8,
        }
    }
}

/// Cross-track realignment configuration.
///
/// ```rust
/// use subtrack_cli::config::RealignConfig;
///
/// let realign = RealignConfig::default();
/// assert_eq!(realign.prune_tolerance_ms, 500);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RealignConfig {
    /// How many leading events to scan for heuristic/similarity anchors.
    pub scan_window: usize,
    /// Discard leading source events ending before the reference's first
    /// event minus this tolerance, when pruning is requested.
    pub prune_tolerance_ms: i64,
    /// Warn when more than this fraction of events would clamp to zero.
    pub clamp_warn_fraction: f32,
    /// Minimum acceptable anchor confidence before a result is downgraded
    /// to low-confidence.
    pub confidence_threshold: f32,
    /// Whether to prune leading source events by default.
    pub prune_leading: bool,
}

impl Default for RealignConfig {
    fn default() -> Self {
        Self {
            scan_window: 20,
            prune_tolerance_ms: 500,
            clamp_warn_fraction: 0.05,
            confidence_threshold: 0.5,
            prune_leading: false,
        }
    }
}

/// Bilingual merge configuration.
///
/// ```rust
/// use subtrack_cli::config::MergeConfig;
///
/// let merge = MergeConfig::default();
/// assert_eq!(merge.micro_cue_threshold_ms, 50);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MergeConfig {
    /// Cues shorter than this are folded into a neighbour.
    pub micro_cue_threshold_ms: i64,
    /// Two boundaries within this many milliseconds are treated as one.
    pub adjacency_gap_ms: i64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            micro_cue_threshold_ms: 50,
            adjacency_gap_ms: 1,
        }
    }
}

/// Batch orchestration configuration.
///
/// ```rust
/// use subtrack_cli::config::BatchConfig;
///
/// let batch = BatchConfig::default();
/// assert!(batch.max_concurrency > 0);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchConfig {
    /// Maximum number of files processed concurrently. Zero falls back to
    /// the number of logical CPUs at run time.
    pub max_concurrency: usize,
    /// Default source-track extension suffix for pair discovery (e.g. `.zh.srt`).
    pub default_source_ext: String,
    /// Default reference-track extension suffix for pair discovery (e.g. `.en.srt`).
    pub default_reference_ext: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            default_source_ext: ".zh.srt".to_string(),
            default_reference_ext: ".en.srt".to_string(),
        }
    }
}

/// General configuration settings.
///
/// ```rust
/// use subtrack_cli::config::GeneralConfig;
///
/// let config = GeneralConfig::default();
/// assert!(!config.backup_enabled);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneralConfig {
    /// Enable automatic backup of original files before an in-place write.
    pub backup_enabled: bool,
    /// Per-file processing timeout in seconds.
    pub task_timeout_seconds: u64,
    /// Workspace directory for CLI commands (overrides the current working directory).
    pub workspace: PathBuf,
    /// Enable progress reporting during batch operations.
    pub enable_progress_bar: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            backup_enabled: false,
            task_timeout_seconds: 300,
            workspace: PathBuf::from("."),
            enable_progress_bar: true,
        }
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = Config::default();
        assert_eq!(config.formats.default_output, "srt");
        assert!(!config.general.backup_enabled);
        assert_eq!(config.batch.max_concurrency, 4);
    }

    #[test]
    fn test_realign_config_defaults() {
        let realign = RealignConfig::default();
        assert_eq!(realign.scan_window, 20);
        assert_eq!(realign.prune_tolerance_ms, 500);
        assert_eq!(realign.confidence_threshold, 0.5);
    }

    #[test]
    fn test_merge_config_defaults() {
        let merge = MergeConfig::default();
        assert_eq!(merge.micro_cue_threshold_ms, 50);
        assert_eq!(merge.adjacency_gap_ms, 1);
    }

    #[test]
    fn test_config_serialization_round_trips() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[formats]"));
        assert!(toml_str.contains("[realign]"));
        assert!(toml_str.contains("[merge]"));
        assert!(toml_str.contains("[batch]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.formats.default_output, config.formats.default_output);
    }
}

// ============================================================================
// Public API Re-exports
// ============================================================================

pub use builder::TestConfigBuilder;
pub use environment::{EnvironmentProvider, SystemEnvironmentProvider, TestEnvironmentProvider};
pub use service::{ConfigService, ProductionConfigService};
pub use test_service::TestConfigService;

pub use field_validator::validate_field;
pub use validator::validate_config;
