//! Configuration builder for fluent test configuration creation.
//!
//! This module provides a fluent API for building test configurations,
//! making it easy to create specific configuration scenarios for testing.

use crate::config::Config;
use crate::config::test_service::TestConfigService;

/// Fluent builder for creating test configurations.
///
/// This builder provides a convenient way to create configurations
/// for testing with specific settings, using method chaining for clarity.
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::config::TestConfigBuilder;
///
/// let config = TestConfigBuilder::new()
///     .with_default_output_format("vtt")
///     .with_confidence_threshold(0.8)
///     .build_config();
/// ```
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // Formats Configuration Methods

    /// Set the default output format.
    ///
    /// # Arguments
    ///
    /// * `format` - The output format (e.g., "srt", "ass", "vtt")
    pub fn with_default_output_format(mut self, format: &str) -> Self {
        self.config.formats.default_output = format.to_string();
        self
    }

    /// Enable or disable style preservation.
    ///
    /// # Arguments
    ///
    /// * `preserve` - Whether to preserve styling
    pub fn with_preserve_styling(mut self, preserve: bool) -> Self {
        self.config.formats.preserve_styling = preserve;
        self
    }

    /// Set the default encoding.
    ///
    /// # Arguments
    ///
    /// * `encoding` - The default encoding (e.g., "utf-8", "gbk")
    pub fn with_default_encoding(mut self, encoding: &str) -> Self {
        self.config.formats.default_encoding = encoding.to_string();
        self
    }

    /// Set the encoding detection confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `confidence` - Confidence threshold (0.0-1.0)
    pub fn with_encoding_detection_confidence(mut self, confidence: f32) -> Self {
        self.config.formats.encoding_detection_confidence = confidence;
        self
    }

    // Realignment Configuration Methods

    /// Set the heuristic anchor scan window.
    ///
    /// # Arguments
    ///
    /// * `window` - Number of leading events to scan
    pub fn with_scan_window(mut self, window: usize) -> Self {
        self.config.realign.scan_window = window;
        self
    }

    /// Set the leading-event prune tolerance.
    ///
    /// # Arguments
    ///
    /// * `tolerance_ms` - Tolerance in milliseconds
    pub fn with_prune_tolerance_ms(mut self, tolerance_ms: i64) -> Self {
        self.config.realign.prune_tolerance_ms = tolerance_ms;
        self
    }

    /// Set the minimum acceptable anchor confidence.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Confidence threshold (0.0-1.0)
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.config.realign.confidence_threshold = threshold;
        self
    }

    /// Enable or disable pruning of leading source events by default.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Whether to prune leading events
    pub fn with_prune_leading(mut self, enabled: bool) -> Self {
        self.config.realign.prune_leading = enabled;
        self
    }

    // Merge Configuration Methods

    /// Set the micro-cue collapse threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold_ms` - Cues shorter than this are folded into a neighbour
    pub fn with_micro_cue_threshold_ms(mut self, threshold_ms: i64) -> Self {
        self.config.merge.micro_cue_threshold_ms = threshold_ms;
        self
    }

    /// Set the boundary adjacency tolerance.
    ///
    /// # Arguments
    ///
    /// * `gap_ms` - Two boundaries within this many milliseconds are merged
    pub fn with_adjacency_gap_ms(mut self, gap_ms: i64) -> Self {
        self.config.merge.adjacency_gap_ms = gap_ms;
        self
    }

    // Batch Configuration Methods

    /// Set the maximum batch concurrency.
    ///
    /// # Arguments
    ///
    /// * `concurrency` - Maximum number of files processed concurrently
    pub fn with_max_concurrency(mut self, concurrency: usize) -> Self {
        self.config.batch.max_concurrency = concurrency;
        self
    }

    /// Set the default source/reference filename suffixes used for pair discovery.
    ///
    /// # Arguments
    ///
    /// * `source_ext` - Source-track filename suffix (e.g. `.zh.srt`)
    /// * `reference_ext` - Reference-track filename suffix (e.g. `.en.srt`)
    pub fn with_batch_extensions(mut self, source_ext: &str, reference_ext: &str) -> Self {
        self.config.batch.default_source_ext = source_ext.to_string();
        self.config.batch.default_reference_ext = reference_ext.to_string();
        self
    }

    // General Configuration Methods

    /// Enable or disable backup.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Whether to enable backup
    pub fn with_backup_enabled(mut self, enabled: bool) -> Self {
        self.config.general.backup_enabled = enabled;
        self
    }

    /// Set the per-file processing timeout.
    ///
    /// # Arguments
    ///
    /// * `timeout_seconds` - Timeout in seconds
    pub fn with_task_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.general.task_timeout_seconds = timeout_seconds;
        self
    }

    /// Enable or disable progress bar.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Whether to enable progress bar
    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.config.general.enable_progress_bar = enabled;
        self
    }

    // Builder Methods

    /// Build a test configuration service with the configured settings.
    pub fn build_service(self) -> TestConfigService {
        TestConfigService::new(self.config)
    }

    /// Build a configuration object with the configured settings.
    pub fn build_config(self) -> Config {
        self.config
    }

    /// Get a reference to the current configuration being built.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a mutable reference to the current configuration being built.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::service::ConfigService;

    #[test]
    fn test_builder_default() {
        let config = TestConfigBuilder::new().build_config();
        let default_config = Config::default();

        assert_eq!(config.formats.default_output, default_config.formats.default_output);
        assert_eq!(config.realign.scan_window, default_config.realign.scan_window);
    }

    #[test]
    fn test_builder_formats_configuration() {
        let config = TestConfigBuilder::new()
            .with_default_output_format("vtt")
            .with_default_encoding("gbk")
            .with_encoding_detection_confidence(0.7)
            .build_config();

        assert_eq!(config.formats.default_output, "vtt");
        assert_eq!(config.formats.default_encoding, "gbk");
        assert_eq!(config.formats.encoding_detection_confidence, 0.7);
    }

    #[test]
    fn test_builder_realign_configuration() {
        let config = TestConfigBuilder::new()
            .with_scan_window(10)
            .with_prune_tolerance_ms(250)
            .with_confidence_threshold(0.9)
            .with_prune_leading(true)
            .build_config();

        assert_eq!(config.realign.scan_window, 10);
        assert_eq!(config.realign.prune_tolerance_ms, 250);
        assert_eq!(config.realign.confidence_threshold, 0.9);
        assert!(config.realign.prune_leading);
    }

    #[test]
    fn test_builder_service_creation() {
        let service = TestConfigBuilder::new()
            .with_default_output_format("ass")
            .build_service();

        let config = service.get_config().unwrap();
        assert_eq!(config.formats.default_output, "ass");
    }

    #[test]
    fn test_builder_chaining() {
        let config = TestConfigBuilder::new()
            .with_default_output_format("vtt")
            .with_confidence_threshold(0.8)
            .with_max_concurrency(8)
            .with_batch_extensions(".src.srt", ".ref.srt")
            .build_config();

        assert_eq!(config.formats.default_output, "vtt");
        assert_eq!(config.realign.confidence_threshold, 0.8);
        assert_eq!(config.batch.max_concurrency, 8);
        assert_eq!(config.batch.default_reference_ext, ".ref.srt");
    }
}
