use clap::{Args, Subcommand};

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management operations.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a configuration value.
    Set {
        /// Dotted configuration key, e.g. `realign.scan_window`.
        key: String,
        /// New value, as a string.
        value: String,
    },
    /// Get a configuration value.
    Get {
        /// Dotted configuration key, e.g. `batch.max_concurrency`.
        key: String,
    },
    /// List the full effective configuration.
    List,
    /// Reset configuration to built-in defaults.
    Reset,
}
