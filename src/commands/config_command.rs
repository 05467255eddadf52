//! Configuration management command: view, set, and reset application settings.
//!
//! # Configuration Sources (Priority Order)
//! 1. **Environment Variables**: Runtime configuration overrides
//! 2. **User Configuration**: Settings in the user config directory
//! 3. **Built-in Defaults**: Application default values
//!
//! # Configuration Keys
//!
//! ```text
//! general.enable_progress_bar     # Boolean: Show progress indicators
//! general.backup_enabled          # Boolean: Automatic file backups
//! general.task_timeout_seconds    # Integer: Operation timeout in seconds
//! formats.default_output          # String: Default serialization format
//! realign.scan_window             # Integer: Heuristic anchor scan window
//! realign.confidence_threshold    # Float: Minimum anchor confidence to apply
//! merge.micro_cue_threshold_ms    # Integer: Minimum cue duration before merging
//! batch.max_concurrency           # Integer: Default batch worker pool size
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use subtrack_cli::cli::{ConfigArgs, ConfigAction};
//! use subtrack_cli::commands::config_command;
//!
//! let get_args = ConfigArgs {
//!     action: ConfigAction::Get { key: "realign.scan_window".to_string() },
//! };
//! config_command::execute(get_args, &config_service).await?;
//! ```

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::ConfigService;
use crate::error::SubtitleError;
use crate::Result;

/// Execute the `config` command with an injected configuration service.
pub async fn execute(args: ConfigArgs, config_service: &dyn ConfigService) -> Result<()> {
    match args.action {
        ConfigAction::Set { key, value } => {
            config_service.set_config_value(&key, &value)?;
            println!("Configuration '{}' set to '{}'", key, value);
            if let Ok(current) = config_service.get_config_value(&key) {
                println!("  Current value: {}", current);
            }
            if let Ok(path) = config_service.get_config_file_path() {
                println!("  Saved to: {}", path.display());
            }
        }
        ConfigAction::Get { key } => {
            let value = config_service.get_config_value(&key)?;
            println!("{}", value);
        }
        ConfigAction::List => {
            let config = config_service.get_config()?;
            if let Ok(path) = config_service.get_config_file_path() {
                println!("# Configuration file path: {}\n", path.display());
            }
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| SubtitleError::config(format!("TOML serialization error: {}", e)))?
            );
        }
        ConfigAction::Reset => {
            config_service.reset_to_defaults()?;
            println!("Configuration reset to default values");
            if let Ok(path) = config_service.get_config_file_path() {
                println!("Default configuration saved to: {}", path.display());
            }
        }
    }
    Ok(())
}

/// Execute the `config` command with a shared, reference-counted configuration service.
///
/// Mirrors [`execute`] but accepts an `Arc<dyn ConfigService>`, for callers that
/// already hold a shared handle rather than a borrow.
pub async fn execute_with_config(
    args: ConfigArgs,
    config_service: std::sync::Arc<dyn ConfigService>,
) -> Result<()> {
    execute(args, config_service.as_ref()).await
}
