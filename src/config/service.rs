//! Configuration service system for dependency injection and test isolation.
//!
//! This module provides a clean abstraction for configuration management
//! that enables dependency injection and complete test isolation without
//! requiring unsafe code or global state resets.

use crate::config::{EnvironmentProvider, SystemEnvironmentProvider};
use crate::{Result, config::Config, error::SubtitleError};
use config::{Config as ConfigCrate, ConfigBuilder, Environment, File, builder::DefaultState};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service trait for dependency injection.
///
/// This trait abstracts configuration loading and reloading operations,
/// allowing different implementations for production and testing environments.
pub trait ConfigService: Send + Sync {
    /// Get the current configuration.
    ///
    /// Returns the current [`Config`] instance loaded from files,
    /// environment variables, and defaults. May use internal caching.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or validation fails.
    fn get_config(&self) -> Result<Config>;

    /// Reload configuration from sources.
    ///
    /// Forces a reload of configuration from all sources, discarding
    /// any cached values.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration reloading fails.
    fn reload(&self) -> Result<()>;

    /// Save current configuration to the default file location.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Unable to determine config file path
    /// - File system write permissions are insufficient
    /// - TOML serialization fails
    fn save_config(&self) -> Result<()>;

    /// Save configuration to a specific file path.
    ///
    /// # Arguments
    ///
    /// - `path`: Target file path for the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - TOML serialization fails
    /// - Unable to create parent directories
    /// - File write operation fails
    fn save_config_to_file(&self, path: &Path) -> Result<()>;

    /// Get the default configuration file path.
    ///
    /// # Returns
    ///
    /// Returns the path where configuration files are expected to be located,
    /// typically `$CONFIG_DIR/subtrack/config.toml`.
    fn get_config_file_path(&self) -> Result<PathBuf>;

    /// Get a specific configuration value by key path.
    ///
    /// # Arguments
    ///
    /// - `key`: Dot-separated path to the configuration value (e.g., "realign.scan_window")
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized.
    fn get_config_value(&self, key: &str) -> Result<String>;

    /// Reset configuration to default values.
    ///
    /// This will overwrite the current configuration file with default values
    /// and reload the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if save or reload fails.
    fn reset_to_defaults(&self) -> Result<()>;

    /// Set a specific configuration value by key path.
    ///
    /// # Arguments
    ///
    /// - `key`: Dot-separated path to the configuration value
    /// - `value`: New value as string (will be converted to appropriate type)
    ///
    /// # Errors
    ///
    /// Returns an error if validation or persistence fails, including:
    /// - Unknown configuration key
    /// - Type conversion or validation error
    /// - Failure to persist configuration
    fn set_config_value(&self, key: &str, value: &str) -> Result<()>;
}

/// Production configuration service implementation.
///
/// This service loads configuration from multiple sources in order of priority:
/// 1. Environment variables (highest priority)
/// 2. User configuration file
/// 3. Default configuration file (lowest priority)
///
/// Configuration is cached after first load for performance.
pub struct ProductionConfigService {
    config_builder: ConfigBuilder<DefaultState>,
    cached_config: Arc<RwLock<Option<Config>>>,
    env_provider: Arc<dyn EnvironmentProvider>,
}

impl ProductionConfigService {
    /// Create a new production configuration service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration builder cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_env_provider(Arc::new(SystemEnvironmentProvider::new()))
    }

    /// Create a configuration service using the specified environment variable provider.
    ///
    /// # Arguments
    /// * `env_provider` - Environment variable provider
    pub fn with_env_provider(env_provider: Arc<dyn EnvironmentProvider>) -> Result<Self> {
        let config_file_path =
            if let Some(custom_path) = env_provider.get_var("SUBTRACK_CONFIG_PATH") {
                PathBuf::from(custom_path)
            } else {
                Self::user_config_path()
            };

        let config_builder = ConfigCrate::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::from(config_file_path).required(false))
            .add_source(Environment::with_prefix("SUBTRACK").separator("_"));

        Ok(Self {
            config_builder,
            cached_config: Arc::new(RwLock::new(None)),
            env_provider,
        })
    }

    /// Create a configuration service with an additional custom source file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration builder cannot be updated.
    pub fn with_custom_file(mut self, file_path: PathBuf) -> Result<Self> {
        self.config_builder = self.config_builder.add_source(File::from(file_path));
        Ok(self)
    }

    /// Get the user configuration file path.
    fn user_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("subtrack")
            .join("config.toml")
    }

    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or validation fails.
    fn load_and_validate(&self) -> Result<Config> {
        debug!("ProductionConfigService: Loading configuration from sources");

        let config_crate = self.config_builder.build_cloned().map_err(|e| {
            debug!("ProductionConfigService: Config build failed: {}", e);
            SubtitleError::config(format!("Failed to build configuration: {}", e))
        })?;

        let mut app_config = Config::default();
        if let Ok(config) = config_crate.clone().try_deserialize::<Config>() {
            app_config = config;
            debug!("ProductionConfigService: Full configuration loaded successfully");
        } else {
            debug!("ProductionConfigService: Full deserialization failed, using defaults");
        }

        if let Some(workspace) = self.env_provider.get_var("SUBTRACK_WORKSPACE") {
            app_config.general.workspace = PathBuf::from(workspace);
        }

        crate::config::validator::validate_config(&app_config).map_err(|e| {
            debug!("ProductionConfigService: Config validation failed: {}", e);
            SubtitleError::config(format!("Configuration validation failed: {}", e))
        })?;

        debug!("ProductionConfigService: Configuration loaded and validated successfully");
        Ok(app_config)
    }

    /// Validate and set a configuration value.
    ///
    /// This method delegates field-level validation to the field_validator module.
    fn validate_and_set_value(&self, config: &mut Config, key: &str, value: &str) -> Result<()> {
        use crate::config::field_validator;

        field_validator::validate_field(key, value)?;
        self.set_value_internal(config, key, value)?;
        self.validate_configuration(config)?;

        Ok(())
    }

    /// Internal method to set configuration values without validation.
    fn set_value_internal(&self, config: &mut Config, key: &str, value: &str) -> Result<()> {
        use crate::config::validation::*;

        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["formats", "default_output"] => {
                config.formats.default_output = value.to_string();
            }
            ["formats", "preserve_styling"] => {
                config.formats.preserve_styling = parse_bool(value)?;
            }
            ["formats", "default_encoding"] => {
                config.formats.default_encoding = value.to_string();
            }
            ["formats", "encoding_detection_confidence"] => {
                config.formats.encoding_detection_confidence =
                    validate_float_range(value, 0.0, 1.0)?;
            }
            ["realign", "scan_window"] => {
                config.realign.scan_window = validate_usize_range(value, 1, 10_000)?;
            }
            ["realign", "prune_tolerance_ms"] => {
                config.realign.prune_tolerance_ms = validate_i64_range(value, 0, i64::MAX)?;
            }
            ["realign", "clamp_warn_fraction"] => {
                config.realign.clamp_warn_fraction = validate_float_range(value, 0.0, 1.0)?;
            }
            ["realign", "confidence_threshold"] => {
                config.realign.confidence_threshold = validate_float_range(value, 0.0, 1.0)?;
            }
            ["realign", "prune_leading"] => {
                config.realign.prune_leading = parse_bool(value)?;
            }
            ["merge", "micro_cue_threshold_ms"] => {
                config.merge.micro_cue_threshold_ms = validate_i64_range(value, 0, i64::MAX)?;
            }
            ["merge", "adjacency_gap_ms"] => {
                config.merge.adjacency_gap_ms = validate_i64_range(value, 0, i64::MAX)?;
            }
            ["batch", "max_concurrency"] => {
                config.batch.max_concurrency = validate_usize_range(value, 0, 1024)?;
            }
            ["batch", "default_source_ext"] => {
                config.batch.default_source_ext = value.to_string();
            }
            ["batch", "default_reference_ext"] => {
                config.batch.default_reference_ext = value.to_string();
            }
            ["general", "backup_enabled"] => {
                config.general.backup_enabled = parse_bool(value)?;
            }
            ["general", "task_timeout_seconds"] => {
                config.general.task_timeout_seconds = validate_u64_range(value, 1, 86_400)?;
            }
            ["general", "workspace"] => {
                config.general.workspace = PathBuf::from(value);
            }
            ["general", "enable_progress_bar"] => {
                config.general.enable_progress_bar = parse_bool(value)?;
            }
            _ => {
                return Err(SubtitleError::config(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Validate the entire configuration.
    fn validate_configuration(&self, config: &Config) -> Result<()> {
        use crate::config::validator;
        validator::validate_config(config)
    }

    /// Save configuration to file with specific config object.
    fn save_config_to_file_with_config(&self, path: &Path, config: &Config) -> Result<()> {
        let toml_content = toml::to_string_pretty(config)
            .map_err(|e| SubtitleError::config(format!("TOML serialization error: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SubtitleError::config(format!("Failed to create config directory: {}", e))
            })?;
        }
        std::fs::write(path, toml_content)
            .map_err(|e| SubtitleError::config(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }
}

impl ConfigService for ProductionConfigService {
    fn get_config(&self) -> Result<Config> {
        {
            let cache = self.cached_config.read().unwrap();
            if let Some(config) = cache.as_ref() {
                debug!("ProductionConfigService: Returning cached configuration");
                return Ok(config.clone());
            }
        }

        let app_config = self.load_and_validate()?;

        {
            let mut cache = self.cached_config.write().unwrap();
            *cache = Some(app_config.clone());
        }

        Ok(app_config)
    }

    fn reload(&self) -> Result<()> {
        debug!("ProductionConfigService: Reloading configuration");

        {
            let mut cache = self.cached_config.write().unwrap();
            *cache = None;
        }

        self.get_config()?;

        debug!("ProductionConfigService: Configuration reloaded successfully");
        Ok(())
    }

    fn save_config(&self) -> Result<()> {
        let _config = self.get_config()?;
        let path = self.get_config_file_path()?;
        self.save_config_to_file(&path)
    }

    fn save_config_to_file(&self, path: &Path) -> Result<()> {
        let config = self.get_config()?;
        let toml_content = toml::to_string_pretty(&config)
            .map_err(|e| SubtitleError::config(format!("TOML serialization error: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SubtitleError::config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, toml_content)
            .map_err(|e| SubtitleError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_config_file_path(&self) -> Result<PathBuf> {
        if let Some(custom) = self.env_provider.get_var("SUBTRACK_CONFIG_PATH") {
            return Ok(PathBuf::from(custom));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| SubtitleError::config("Unable to determine config directory"))?;
        Ok(config_dir.join("subtrack").join("config.toml"))
    }

    fn get_config_value(&self, key: &str) -> Result<String> {
        let config = self.get_config()?;
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["formats", "default_output"] => Ok(config.formats.default_output.clone()),
            ["formats", "preserve_styling"] => Ok(config.formats.preserve_styling.to_string()),
            ["formats", "default_encoding"] => Ok(config.formats.default_encoding.clone()),
            ["formats", "encoding_detection_confidence"] => {
                Ok(config.formats.encoding_detection_confidence.to_string())
            }

            ["realign", "scan_window"] => Ok(config.realign.scan_window.to_string()),
            ["realign", "prune_tolerance_ms"] => {
                Ok(config.realign.prune_tolerance_ms.to_string())
            }
            ["realign", "clamp_warn_fraction"] => {
                Ok(config.realign.clamp_warn_fraction.to_string())
            }
            ["realign", "confidence_threshold"] => {
                Ok(config.realign.confidence_threshold.to_string())
            }
            ["realign", "prune_leading"] => Ok(config.realign.prune_leading.to_string()),

            ["merge", "micro_cue_threshold_ms"] => {
                Ok(config.merge.micro_cue_threshold_ms.to_string())
            }
            ["merge", "adjacency_gap_ms"] => Ok(config.merge.adjacency_gap_ms.to_string()),

            ["batch", "max_concurrency"] => Ok(config.batch.max_concurrency.to_string()),
            ["batch", "default_source_ext"] => Ok(config.batch.default_source_ext.clone()),
            ["batch", "default_reference_ext"] => {
                Ok(config.batch.default_reference_ext.clone())
            }

            ["general", "backup_enabled"] => Ok(config.general.backup_enabled.to_string()),
            ["general", "task_timeout_seconds"] => {
                Ok(config.general.task_timeout_seconds.to_string())
            }
            ["general", "workspace"] => Ok(config.general.workspace.display().to_string()),
            ["general", "enable_progress_bar"] => {
                Ok(config.general.enable_progress_bar.to_string())
            }

            _ => Err(SubtitleError::config(format!(
                "Unknown configuration key: {}",
                key
            ))),
        }
    }

    fn set_config_value(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.get_config()?;

        self.validate_and_set_value(&mut config, key, value)?;
        crate::config::validator::validate_config(&config)?;

        let path = self.get_config_file_path()?;
        self.save_config_to_file_with_config(&path, &config)?;

        {
            let mut cache = self.cached_config.write().unwrap();
            *cache = Some(config);
        }

        Ok(())
    }

    fn reset_to_defaults(&self) -> Result<()> {
        let default_config = Config::default();
        let path = self.get_config_file_path()?;

        let toml_content = toml::to_string_pretty(&default_config)
            .map_err(|e| SubtitleError::config(format!("TOML serialization error: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SubtitleError::config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(&path, toml_content)
            .map_err(|e| SubtitleError::config(format!("Failed to write config file: {}", e)))?;

        self.reload()
    }
}

impl Default for ProductionConfigService {
    fn default() -> Self {
        Self::new().expect("Failed to create default ProductionConfigService")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfigService;
    use crate::config::TestEnvironmentProvider;
    use std::sync::Arc;

    #[test]
    fn test_production_config_service_creation() {
        let service = ProductionConfigService::new();
        assert!(service.is_ok());
    }

    #[test]
    fn test_production_config_service_with_custom_file() {
        let service = ProductionConfigService::new()
            .unwrap()
            .with_custom_file(PathBuf::from("test.toml"));
        assert!(service.is_ok());
    }

    #[test]
    fn test_production_service_implements_config_service_trait() {
        let service = ProductionConfigService::new().unwrap();

        let config1 = service.get_config();
        assert!(config1.is_ok());

        let reload_result = service.reload();
        assert!(reload_result.is_ok());

        let config2 = service.get_config();
        assert!(config2.is_ok());
    }

    #[test]
    fn test_config_service_with_custom_batch_settings() {
        let test_service = TestConfigService::with_batch_settings(8, ".src.srt", ".ref.srt");

        let config = test_service.get_config().unwrap();
        assert_eq!(config.batch.max_concurrency, 8);
        assert_eq!(config.batch.default_source_ext, ".src.srt");
        assert_eq!(config.batch.default_reference_ext, ".ref.srt");
    }

    #[test]
    fn test_config_service_with_custom_realign_settings() {
        let mut config = Config::default();
        config.realign.confidence_threshold = 0.9;

        let test_service = TestConfigService::new(config);
        let loaded_config = test_service.get_config().unwrap();

        assert_eq!(loaded_config.realign.confidence_threshold, 0.9);
    }

    #[test]
    fn test_config_service_fallback_behavior() {
        let test_service = TestConfigService::with_defaults();
        let config = test_service.get_config().unwrap();

        assert_eq!(config.formats.default_output, "srt");
        assert_eq!(config.realign.scan_window, 20);
        assert!(!config.general.backup_enabled);
    }

    #[test]
    fn test_config_service_reload_functionality() {
        let test_service = TestConfigService::with_defaults();

        let config1 = test_service.get_config().unwrap();
        assert_eq!(config1.formats.default_output, "srt");

        let reload_result = test_service.reload();
        assert!(reload_result.is_ok());

        let config2 = test_service.get_config().unwrap();
        assert_eq!(config2.formats.default_output, "srt");
    }

    #[test]
    fn test_config_service_merge_settings() {
        let test_service = TestConfigService::with_merge_settings(100, 5);
        let config = test_service.get_config().unwrap();

        assert_eq!(config.merge.micro_cue_threshold_ms, 100);
        assert_eq!(config.merge.adjacency_gap_ms, 5);
    }

    #[test]
    fn test_config_service_direct_access() {
        let test_service = TestConfigService::with_defaults();

        assert_eq!(test_service.config().formats.default_output, "srt");

        test_service.config_mut().formats.default_output = "vtt".to_string();
        assert_eq!(test_service.config().formats.default_output, "vtt");

        let config = test_service.get_config().unwrap();
        assert_eq!(config.formats.default_output, "vtt");
    }

    #[test]
    fn test_production_config_service_custom_workspace() {
        let mut env_provider = TestEnvironmentProvider::new();
        env_provider.set_var("SUBTRACK_WORKSPACE", "/tmp/subtrack-workspace");
        env_provider.set_var(
            "SUBTRACK_CONFIG_PATH",
            "/tmp/test_config_workspace_does_not_exist.toml",
        );

        let service = ProductionConfigService::with_env_provider(Arc::new(env_provider))
            .expect("Failed to create config service");

        let config = service.get_config().expect("Failed to get config");

        assert_eq!(config.general.workspace, PathBuf::from("/tmp/subtrack-workspace"));
    }

    #[test]
    fn test_production_config_service_no_env_override() {
        let mut env_provider = TestEnvironmentProvider::new();
        env_provider.set_var(
            "SUBTRACK_CONFIG_PATH",
            "/tmp/test_config_no_override_does_not_exist.toml",
        );

        let service = ProductionConfigService::with_env_provider(Arc::new(env_provider))
            .expect("Failed to create config service");

        let config = service.get_config().expect("Failed to get config");

        assert_eq!(config.general.workspace, PathBuf::from("."));
    }
}
