//! The `shift` command: apply a fixed time offset to a subtitle file.

use crate::cli::ShiftArgs;
use crate::commands::current_timestamp;
use crate::config::ConfigService;
use crate::core::backup;
use crate::core::formats;
use crate::core::timing::{parse_offset_ms, shift_by};
use crate::Result;

/// Execute the `shift` command with an injected configuration service.
pub async fn execute(args: ShiftArgs, config_service: &dyn ConfigService) -> Result<()> {
    let config = config_service.get_config()?;
    let delta_ms = parse_offset_ms(&args.offset)?;

    let file = formats::load_subtitle(&args.input)?;
    let shifted = shift_by(&file, delta_ms);

    let output_path = args.output.as_deref().unwrap_or(&args.input);

    if (args.backup || config.general.backup_enabled) && output_path == args.input {
        let backup_path = backup::create_backup(&args.input, &current_timestamp())?;
        log::info!("backed up {} to {}", args.input.display(), backup_path.display());
    }

    formats::save_subtitle(&shifted, output_path)?;
    println!("Shifted {} by {} ms -> {}", args.input.display(), delta_ms, output_path.display());
    Ok(())
}
