//! Test configuration service for isolated testing.
//!
//! This module provides a configuration service implementation specifically
//! designed for testing environments, offering complete isolation and
//! predictable configuration states.

use crate::config::service::ConfigService;
use crate::error::SubtitleError;
use crate::{Result, config::Config};
use std::path::{Path, PathBuf};

/// Test configuration service implementation.
///
/// This service provides a fixed configuration for testing purposes,
/// ensuring complete isolation between tests and predictable behavior.
/// It does not load from external sources or cache.
pub struct TestConfigService {
    fixed_config: Config,
}

impl TestConfigService {
    /// Create a new test configuration service with the provided configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The fixed configuration to use
    pub fn new(config: Config) -> Self {
        Self {
            fixed_config: config,
        }
    }

    /// Create a test configuration service with default settings.
    ///
    /// This is useful for tests that don't need specific configuration values.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Create a test configuration service with specific format settings.
    ///
    /// # Arguments
    ///
    /// * `default_output` - Default output format
    /// * `default_encoding` - Default character encoding
    pub fn with_formats_settings(default_output: &str, default_encoding: &str) -> Self {
        let mut config = Config::default();
        config.formats.default_output = default_output.to_string();
        config.formats.default_encoding = default_encoding.to_string();
        Self::new(config)
    }

    /// Create a test configuration service with specific realignment settings.
    ///
    /// # Arguments
    ///
    /// * `scan_window` - Number of leading events scanned for heuristic anchors
    /// * `confidence_threshold` - Minimum acceptable anchor confidence
    pub fn with_realign_settings(scan_window: usize, confidence_threshold: f32) -> Self {
        let mut config = Config::default();
        config.realign.scan_window = scan_window;
        config.realign.confidence_threshold = confidence_threshold;
        Self::new(config)
    }

    /// Create a test configuration service with specific merge settings.
    ///
    /// # Arguments
    ///
    /// * `micro_cue_threshold_ms` - Threshold below which cues are folded into a neighbour
    /// * `adjacency_gap_ms` - Boundary merge tolerance in milliseconds
    pub fn with_merge_settings(micro_cue_threshold_ms: i64, adjacency_gap_ms: i64) -> Self {
        let mut config = Config::default();
        config.merge.micro_cue_threshold_ms = micro_cue_threshold_ms;
        config.merge.adjacency_gap_ms = adjacency_gap_ms;
        Self::new(config)
    }

    /// Create a test configuration service with specific batch orchestration settings.
    ///
    /// # Arguments
    ///
    /// * `max_concurrency` - Maximum number of files processed concurrently
    /// * `default_source_ext` - Default source-track filename suffix
    /// * `default_reference_ext` - Default reference-track filename suffix
    pub fn with_batch_settings(
        max_concurrency: usize,
        default_source_ext: &str,
        default_reference_ext: &str,
    ) -> Self {
        let mut config = Config::default();
        config.batch.max_concurrency = max_concurrency;
        config.batch.default_source_ext = default_source_ext.to_string();
        config.batch.default_reference_ext = default_reference_ext.to_string();
        Self::new(config)
    }

    /// Get the underlying configuration.
    ///
    /// This is useful for tests that need direct access to the configuration object.
    pub fn config(&self) -> &Config {
        &self.fixed_config
    }

    /// Get a mutable reference to the underlying configuration.
    ///
    /// This allows tests to modify the configuration after creation.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.fixed_config
    }
}

impl ConfigService for TestConfigService {
    fn get_config(&self) -> Result<Config> {
        Ok(self.fixed_config.clone())
    }

    fn reload(&self) -> Result<()> {
        // Test configuration doesn't need reloading since it's fixed
        Ok(())
    }

    fn save_config(&self) -> Result<()> {
        // Test environment does not perform actual file I/O
        Ok(())
    }

    fn save_config_to_file(&self, _path: &Path) -> Result<()> {
        // Test environment does not perform actual file I/O
        Ok(())
    }

    fn get_config_file_path(&self) -> Result<PathBuf> {
        // Return a dummy path to avoid conflicts in test environment
        Ok(PathBuf::from("/tmp/subtrack_test_config.toml"))
    }

    fn get_config_value(&self, key: &str) -> Result<String> {
        let config = &self.fixed_config;
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["formats", "default_output"] => Ok(config.formats.default_output.clone()),
            ["formats", "default_encoding"] => Ok(config.formats.default_encoding.clone()),
            ["formats", "preserve_styling"] => Ok(config.formats.preserve_styling.to_string()),
            ["realign", "scan_window"] => Ok(config.realign.scan_window.to_string()),
            ["realign", "confidence_threshold"] => {
                Ok(config.realign.confidence_threshold.to_string())
            }
            ["merge", "micro_cue_threshold_ms"] => {
                Ok(config.merge.micro_cue_threshold_ms.to_string())
            }
            ["batch", "max_concurrency"] => Ok(config.batch.max_concurrency.to_string()),
            ["batch", "default_source_ext"] => Ok(config.batch.default_source_ext.clone()),
            ["general", "backup_enabled"] => Ok(config.general.backup_enabled.to_string()),
            _ => Err(SubtitleError::config(format!(
                "Unknown configuration key: {}",
                key
            ))),
        }
    }

    fn reset_to_defaults(&self) -> Result<()> {
        // Test service holds a fixed configuration; nothing to persist.
        Ok(())
    }
}

impl Default for TestConfigService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_service_with_defaults() {
        let service = TestConfigService::with_defaults();
        let config = service.get_config().unwrap();

        assert_eq!(config.formats.default_output, "srt");
        assert_eq!(config.realign.scan_window, 20);
    }

    #[test]
    fn test_config_service_with_formats_settings() {
        let service = TestConfigService::with_formats_settings("vtt", "gbk");
        let config = service.get_config().unwrap();

        assert_eq!(config.formats.default_output, "vtt");
        assert_eq!(config.formats.default_encoding, "gbk");
    }

    #[test]
    fn test_config_service_with_realign_settings() {
        let service = TestConfigService::with_realign_settings(10, 0.8);
        let config = service.get_config().unwrap();

        assert_eq!(config.realign.scan_window, 10);
        assert_eq!(config.realign.confidence_threshold, 0.8);
    }

    #[test]
    fn test_config_service_with_merge_settings() {
        let service = TestConfigService::with_merge_settings(80, 2);
        let config = service.get_config().unwrap();

        assert_eq!(config.merge.micro_cue_threshold_ms, 80);
        assert_eq!(config.merge.adjacency_gap_ms, 2);
    }

    #[test]
    fn test_config_service_with_batch_settings() {
        let service = TestConfigService::with_batch_settings(8, ".zh.srt", ".en.srt");
        let config = service.get_config().unwrap();

        assert_eq!(config.batch.max_concurrency, 8);
        assert_eq!(config.batch.default_reference_ext, ".en.srt");
    }

    #[test]
    fn test_config_service_reload() {
        let service = TestConfigService::with_defaults();

        // Reload should always succeed for test service
        assert!(service.reload().is_ok());
    }

    #[test]
    fn test_config_service_direct_access() {
        let mut service = TestConfigService::with_defaults();

        // Test direct read access
        assert_eq!(service.config().formats.default_output, "srt");

        // Test mutable access
        service.config_mut().formats.default_output = "ass".to_string();
        assert_eq!(service.config().formats.default_output, "ass");

        let config = service.get_config().unwrap();
        assert_eq!(config.formats.default_output, "ass");
    }
}
