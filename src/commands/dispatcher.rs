use crate::{cli::Commands, config::ConfigService, Result};
use std::sync::Arc;

/// Central command dispatcher to avoid code duplication.
///
/// This module provides a unified way to dispatch commands,
/// eliminating duplication between CLI and library API paths.
///
/// # Design Principles
///
/// - **Single Responsibility**: Each command dispatcher handles exactly one command type
/// - **Consistency**: Both owned and borrowed configuration-service callers use the
///   same command execution logic
/// - **Error Handling**: Unified error handling across all command paths
/// - **Testability**: Easy to test individual command dispatch without full CLI setup
///
/// # Architecture
///
/// The dispatcher acts as a bridge between:
/// - CLI argument parsing (from `clap`)
/// - Command execution logic (in `commands` module)
/// - Configuration dependency injection
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::commands::dispatcher::dispatch_command;
/// use subtrack_cli::cli::{Commands, ShiftArgs};
/// use subtrack_cli::config::TestConfigService;
/// use std::sync::Arc;
///
/// # async fn example() -> subtrack_cli::Result<()> {
/// let config_service = Arc::new(TestConfigService::with_defaults());
/// let shift_args = ShiftArgs {
///     input: "/path/to/movie.srt".into(),
///     offset: "1000".to_string(),
///     output: None,
///     backup: false,
/// };
///
/// dispatch_command(Commands::Shift(shift_args), config_service).await?;
/// # Ok(())
/// # }
/// ```
pub async fn dispatch_command(
    command: Commands,
    config_service: Arc<dyn ConfigService>,
) -> Result<()> {
    dispatch_command_with_ref(command, config_service.as_ref()).await
}

/// Dispatch a command with a borrowed config service reference.
///
/// This version is used by the CLI interface where we have a borrowed
/// reference to the configuration service rather than an owned `Arc`.
pub async fn dispatch_command_with_ref(
    command: Commands,
    config_service: &dyn ConfigService,
) -> Result<()> {
    match command {
        Commands::Shift(args) => crate::commands::shift_command::execute(args, config_service).await,
        Commands::Realign(args) => {
            crate::commands::realign_command::execute(args, config_service).await
        }
        Commands::Merge(args) => crate::commands::merge_command::execute(args, config_service).await,
        Commands::Split(args) => crate::commands::split_command::execute(args, config_service).await,
        Commands::Batch(args) => crate::commands::batch_command::execute(args, config_service).await,
        Commands::DetectEncoding(args) => {
            crate::commands::detect_encoding_command::execute(args, config_service).await
        }
        Commands::Config(args) => {
            crate::commands::config_command::execute(args, config_service).await
        }
        Commands::GenerateCompletion(args) => {
            let mut cmd = <crate::cli::Cli as clap::CommandFactory>::command();
            let cmd_name = cmd.get_name().to_string();
            let mut stdout = std::io::stdout();
            clap_complete::generate(args.shell, &mut cmd, cmd_name, &mut stdout);
            Ok(())
        }
    }
}
