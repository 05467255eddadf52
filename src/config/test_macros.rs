//! Test macros for convenient configuration service testing.
//!
//! This module provides convenient macros for creating test configurations
//! and running tests with specific configuration services.

/// Run a test with a custom configuration builder.
///
/// This macro takes a configuration builder and a test closure,
/// creates a configuration service, and runs the test with it.
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::{test_with_config, config::{TestConfigBuilder, ConfigService}};
///
/// test_with_config!(
///     TestConfigBuilder::new().with_default_output_format("vtt"),
///     |config_service: &dyn ConfigService| {
///         let config = config_service.get_config().unwrap();
///         assert_eq!(config.formats.default_output, "vtt");
///     }
/// );
/// ```
#[macro_export]
macro_rules! test_with_config {
    ($config_builder:expr, $test:expr) => {{
        let config_service = $config_builder.build_service();
        $test(&config_service)
    }};
}

/// Execute ProductionConfigService tests with specified environment variable mapping.
///
/// This macro creates a TestEnvironmentProvider, sets the specified environment variables,
/// then uses that provider to create a ProductionConfigService for testing.
///
/// # Arguments
/// * `$env_vars` - Environment variable mapping expression (HashMap<&str, &str>)
/// * `$test` - Test closure that receives a ProductionConfigService reference
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::test_production_config_with_env;
/// use std::collections::HashMap;
///
/// let env_vars = [
///     ("SUBTRACK_WORKSPACE", "/tmp/workspace"),
/// ].iter().cloned().collect::<HashMap<_, _>>();
///
/// test_production_config_with_env!(env_vars, |service| {
///     let config = service.get_config().unwrap();
///     assert_eq!(config.general.workspace, std::path::PathBuf::from("/tmp/workspace"));
/// });
/// ```
#[macro_export]
macro_rules! test_production_config_with_env {
    ($env_vars:expr, $test:expr) => {{
        use std::sync::Arc;

        let mut env_provider = $crate::config::TestEnvironmentProvider::new();

        for (key, value) in $env_vars {
            env_provider.set_var(key, value);
        }

        let service =
            $crate::config::ProductionConfigService::with_env_provider(Arc::new(env_provider))
                .expect("Failed to create ProductionConfigService with environment provider");

        $test(&service)
    }};
}

/// Create a temporary ProductionConfigService with environment variable provider for test functions.
///
/// This macro creates a ProductionConfigService variable with specified environment variables
/// that can be used throughout the entire test function.
///
/// # Arguments
/// * `$service_name` - Service variable name
/// * `$env_vars` - Environment variable mapping expression (HashMap<&str, &str>)
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::create_production_config_service_with_env;
///
/// fn my_test() {
///     let env_vars = [("SUBTRACK_WORKSPACE", "/tmp/ws")].iter().cloned().collect();
///     create_production_config_service_with_env!(service, env_vars);
///
///     let config = service.get_config().unwrap();
///     assert_eq!(config.general.workspace, std::path::PathBuf::from("/tmp/ws"));
/// }
/// ```
#[macro_export]
macro_rules! create_production_config_service_with_env {
    ($service_name:ident, $env_vars:expr) => {
        use std::sync::Arc;

        let mut env_provider = $crate::config::TestEnvironmentProvider::new();

        for (key, value) in $env_vars {
            env_provider.set_var(key, value);
        }

        let $service_name =
            $crate::config::ProductionConfigService::with_env_provider(Arc::new(env_provider))
                .expect("Failed to create ProductionConfigService with environment provider");
    };
}

/// Create a ProductionConfigService with empty environment variables for testing.
///
/// This macro creates a ProductionConfigService without any environment variables,
/// used for testing default behavior.
///
/// # Arguments
/// * `$service_name` - Service variable name
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::create_production_config_service_with_empty_env;
///
/// fn my_test() {
///     create_production_config_service_with_empty_env!(service);
///
///     let config = service.get_config().unwrap();
///     assert_eq!(config.general.workspace, std::path::PathBuf::from("."));
/// }
/// ```
#[macro_export]
macro_rules! create_production_config_service_with_empty_env {
    ($service_name:ident) => {
        create_production_config_service_with_env!($service_name, std::collections::HashMap::new())
    };
}

#[cfg(test)]
mod env_macro_tests {
    use crate::config::service::ConfigService;
    use std::collections::HashMap;

    #[test]
    fn test_production_config_with_env_macro() {
        let env_vars: HashMap<&str, &str> = [
            ("SUBTRACK_WORKSPACE", "/tmp/macro-workspace"),
            (
                "SUBTRACK_CONFIG_PATH",
                "/tmp/test_macro_config_does_not_exist.toml",
            ),
        ]
        .iter()
        .cloned()
        .collect();

        test_production_config_with_env!(
            env_vars,
            |service: &crate::config::ProductionConfigService| {
                let config = service.get_config().unwrap();
                assert_eq!(
                    config.general.workspace,
                    std::path::PathBuf::from("/tmp/macro-workspace")
                );
            }
        );
    }

    #[test]
    fn test_create_production_config_service_with_env_macro() {
        let env_vars: HashMap<&str, &str> = [
            ("SUBTRACK_WORKSPACE", "/tmp/create-macro-workspace"),
            (
                "SUBTRACK_CONFIG_PATH",
                "/tmp/test_create_macro_config_does_not_exist.toml",
            ),
        ]
        .iter()
        .cloned()
        .collect();

        create_production_config_service_with_env!(service, env_vars);

        let config = service.get_config().unwrap();
        assert_eq!(
            config.general.workspace,
            std::path::PathBuf::from("/tmp/create-macro-workspace")
        );
    }

    #[test]
    fn test_create_production_config_service_with_empty_env_macro() {
        create_production_config_service_with_empty_env!(service);

        let config = service.get_config().unwrap();
        assert_eq!(config.general.workspace, std::path::PathBuf::from("."));
    }
}

/// Run a test with the default configuration.
///
/// This macro creates a test configuration service with default settings
/// and runs the provided test closure with it.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::{test_with_default_config, config::ConfigService};
///
/// test_with_default_config!(|config_service: &dyn ConfigService| {
///     let config = config_service.get_config().unwrap();
///     assert_eq!(config.formats.default_output, "srt");
/// });
/// ```
#[macro_export]
macro_rules! test_with_default_config {
    ($test:expr) => {
        test_with_config!($crate::config::TestConfigBuilder::new(), $test)
    };
}

/// Run a test with a specific output format and encoding.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::{test_with_formats_config, config::ConfigService};
///
/// test_with_formats_config!("vtt", "gbk", |config_service: &dyn ConfigService| {
///     let config = config_service.get_config().unwrap();
///     assert_eq!(config.formats.default_output, "vtt");
///     assert_eq!(config.formats.default_encoding, "gbk");
/// });
/// ```
#[macro_export]
macro_rules! test_with_formats_config {
    ($format:expr, $encoding:expr, $test:expr) => {
        test_with_config!(
            $crate::config::TestConfigBuilder::new()
                .with_default_output_format($format)
                .with_default_encoding($encoding),
            $test
        )
    };
}

/// Run a test with specific realignment configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::{test_with_realign_config, config::ConfigService};
///
/// test_with_realign_config!(10, 0.9, |config_service: &dyn ConfigService| {
///     let config = config_service.get_config().unwrap();
///     assert_eq!(config.realign.scan_window, 10);
///     assert_eq!(config.realign.confidence_threshold, 0.9);
/// });
/// ```
#[macro_export]
macro_rules! test_with_realign_config {
    ($scan_window:expr, $confidence_threshold:expr, $test:expr) => {
        test_with_config!(
            $crate::config::TestConfigBuilder::new()
                .with_scan_window($scan_window)
                .with_confidence_threshold($confidence_threshold),
            $test
        )
    };
}

/// Run a test with specific batch orchestration configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::{test_with_batch_config, config::ConfigService};
///
/// test_with_batch_config!(8, ".zh.srt", ".en.srt", |config_service: &dyn ConfigService| {
///     let config = config_service.get_config().unwrap();
///     assert_eq!(config.batch.max_concurrency, 8);
/// });
/// ```
#[macro_export]
macro_rules! test_with_batch_config {
    ($max_concurrency:expr, $source_ext:expr, $reference_ext:expr, $test:expr) => {
        test_with_config!(
            $crate::config::TestConfigBuilder::new()
                .with_max_concurrency($max_concurrency)
                .with_batch_extensions($source_ext, $reference_ext),
            $test
        )
    };
}

/// Create a temporary test configuration service for use in test functions.
///
/// This macro creates a configuration service variable that can be used
/// throughout a test function.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::create_test_config_service;
///
/// fn my_test() {
///     create_test_config_service!(service, TestConfigBuilder::new().with_default_output_format("vtt"));
///
///     let config = service.get_config().unwrap();
///     assert_eq!(config.formats.default_output, "vtt");
/// }
/// ```
#[macro_export]
macro_rules! create_test_config_service {
    ($service_name:ident, $config_builder:expr) => {
        let $service_name = $config_builder.build_service();
    };
}

/// Create a temporary test configuration service with default settings.
///
/// This macro creates a configuration service variable with default settings
/// that can be used throughout a test function.
///
/// # Examples
///
/// ```rust,ignore
/// use subtrack_cli::create_default_test_config_service;
///
/// fn my_test() {
///     create_default_test_config_service!(service);
///
///     let config = service.get_config().unwrap();
///     assert_eq!(config.formats.default_output, "srt");
/// }
/// ```
#[macro_export]
macro_rules! create_default_test_config_service {
    ($service_name:ident) => {
        create_test_config_service!($service_name, $crate::config::TestConfigBuilder::new());
    };
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigService, TestConfigBuilder};

    #[test]
    fn test_macro_with_config() {
        test_with_config!(
            TestConfigBuilder::new().with_default_output_format("ass"),
            |config_service: &crate::config::TestConfigService| {
                let config = config_service.get_config().unwrap();
                assert_eq!(config.formats.default_output, "ass");
            }
        );
    }

    #[test]
    fn test_macro_with_default_config() {
        test_with_default_config!(|config_service: &crate::config::TestConfigService| {
            let config = config_service.get_config().unwrap();
            assert_eq!(config.formats.default_output, "srt");
        });
    }

    #[test]
    fn test_macro_with_formats_config() {
        test_with_formats_config!(
            "vtt",
            "gbk",
            |config_service: &crate::config::TestConfigService| {
                let config = config_service.get_config().unwrap();
                assert_eq!(config.formats.default_output, "vtt");
                assert_eq!(config.formats.default_encoding, "gbk");
            }
        );
    }

    #[test]
    fn test_macro_with_realign_config() {
        test_with_realign_config!(
            10,
            0.9,
            |config_service: &crate::config::TestConfigService| {
                let config = config_service.config();
                assert_eq!(config.realign.scan_window, 10);
                assert_eq!(config.realign.confidence_threshold, 0.9);
            }
        );
    }

    #[test]
    fn test_macro_with_batch_config() {
        test_with_batch_config!(
            16,
            ".src.srt",
            ".ref.srt",
            |config_service: &crate::config::TestConfigService| {
                let config = config_service.get_config().unwrap();
                assert_eq!(config.batch.max_concurrency, 16);
                assert_eq!(config.batch.default_source_ext, ".src.srt");
            }
        );
    }

    #[test]
    fn test_create_test_config_service_macro() {
        create_test_config_service!(
            service,
            TestConfigBuilder::new().with_default_output_format("vtt")
        );

        let config = service.get_config().unwrap();
        assert_eq!(config.formats.default_output, "vtt");
    }

    #[test]
    fn test_create_default_test_config_service_macro() {
        create_default_test_config_service!(service);

        let config = service.get_config().unwrap();
        assert_eq!(config.formats.default_output, "srt");
    }
}
