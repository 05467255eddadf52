//! Command-line interface for the subtitle processing tool.
//!
//! This module provides the top-level CLI application structure and
//! subcommands for fixed-offset shifting, cross-track realignment,
//! bilingual merge/split, directory-wide batch processing, encoding
//! detection, configuration management, and shell completion generation.
//!
//! # Architecture
//!
//! The CLI is built using `clap` and follows a subcommand pattern:
//! - `shift` - Apply a fixed time offset to a subtitle file
//! - `realign` - Align a source track's timeline to a reference track
//! - `merge` - Combine two monolingual tracks into one bilingual track
//! - `split` - Separate a bilingual track back into monolingual tracks
//! - `batch` - Apply shift/realign/merge over every matching file in a directory
//! - `detect-encoding` - Character encoding detection
//! - `config` - Configuration management and inspection
//! - `generate-completion` - Shell completion script generation
//!
//! # Examples
//!
//! ```bash
//! # Shift a subtitle file back by 1.5 seconds
//! subtrack shift movie.srt -1.5s
//!
//! # Realign a source track against a reference track
//! subtrack realign movie.zh.srt movie.en.srt
//!
//! # Detect file encoding
//! subtrack detect-encoding *.srt
//! ```

mod batch_args;
mod config_args;
mod detect_encoding_args;
mod generate_completion_args;
mod input_handler;
mod merge_args;
mod realign_args;
mod shift_args;
mod split_args;

pub use batch_args::{BatchArgs, BatchOperation};
use clap::{Parser, Subcommand};
pub use config_args::{ConfigAction, ConfigArgs};
pub use detect_encoding_args::DetectEncodingArgs;
pub use generate_completion_args::GenerateCompletionArgs;
pub use input_handler::InputPathHandler;
pub use merge_args::{MergeArgs, OutputSubtitleFormat};
pub use realign_args::RealignArgs;
pub use shift_args::ShiftArgs;
pub use split_args::SplitArgs;

/// Main CLI application structure defining the top-level interface.
#[derive(Parser, Debug)]
#[command(name = "subtrack")]
#[command(about = "Subtitle timing, realignment, merge and split toolkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the subtitle processing CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a fixed time offset to a subtitle file
    Shift(ShiftArgs),

    /// Align a source track's timeline to a reference track
    Realign(RealignArgs),

    /// Combine two monolingual tracks into one bilingual track
    Merge(MergeArgs),

    /// Separate a bilingual track back into monolingual tracks
    Split(SplitArgs),

    /// Apply shift/realign/merge over every matching file in a directory
    Batch(BatchArgs),

    /// Detect and convert character encoding of subtitle files
    DetectEncoding(DetectEncodingArgs),

    /// Manage and inspect application configuration
    Config(ConfigArgs),

    /// Generate shell completion scripts
    GenerateCompletion(GenerateCompletionArgs),
}

/// Executes the CLI application with parsed arguments.
///
/// This is the main entry point for CLI execution, routing parsed
/// command-line arguments to their respective command handlers.
///
/// # Arguments Processing
///
/// The function takes ownership of parsed CLI arguments and dispatches
/// them to the appropriate command implementation based on the selected
/// subcommand.
///
/// # Error Handling
///
/// Returns a [`crate::Result<()>`] that wraps any errors encountered
/// during command execution. Errors are propagated up to the main
/// function for proper exit code handling.
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::cli::run;
///
/// # tokio_test::block_on(async {
/// // This would typically be called from main()
/// // run().await?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
///
/// # Async Context
///
/// This function is async because the batch orchestrator's worker pool and
/// the per-file I/O it drives benefit from async execution.
pub async fn run() -> crate::Result<()> {
    // Create production configuration service
    let config_service = std::sync::Arc::new(crate::config::ProductionConfigService::new()?);
    run_with_config(config_service.as_ref()).await
}

/// Run the CLI with a provided configuration service.
///
/// This function enables dependency injection of configuration services,
/// making it easier to test and providing better control over configuration
/// management.
///
/// # Arguments
///
/// * `config_service` - The configuration service to use
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn run_with_config(
    config_service: &dyn crate::config::ConfigService,
) -> crate::Result<()> {
    let cli = Cli::parse();
    crate::commands::dispatcher::dispatch_command_with_ref(cli.command, config_service).await
}
