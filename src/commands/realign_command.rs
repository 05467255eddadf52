//! The `realign` command: align a source track's timeline to a reference track.

use crate::cli::RealignArgs;
use crate::commands::current_timestamp;
use crate::config::ConfigService;
use crate::core::backup;
use crate::core::formats;
use crate::core::realign::{self, RealignOptions, RealignOutcome};
use crate::Result;

/// Execute the `realign` command with an injected configuration service.
pub async fn execute(args: RealignArgs, config_service: &dyn ConfigService) -> Result<()> {
    let config = config_service.get_config()?;

    let source = formats::load_subtitle(&args.source)?;
    let reference = formats::load_subtitle(&args.reference)?;

    let options = RealignOptions {
        scan_window: args.scan_window.unwrap_or(config.realign.scan_window),
        prune_tolerance_ms: config.realign.prune_tolerance_ms,
        clamp_warn_fraction: config.realign.clamp_warn_fraction,
        confidence_threshold: args
            .confidence_threshold
            .unwrap_or(config.realign.confidence_threshold),
        prune_leading: args.prune_leading || config.realign.prune_leading,
    };

    let anchor = realign::first_line_anchor(&source, &reference)?;
    let outcome = realign::apply_anchor(&source, &reference, &anchor, &options)?;

    let (adjusted, delta_ms, confidence) = match outcome {
        RealignOutcome::Applied { adjusted, delta_ms, confidence, .. } => (adjusted, delta_ms, confidence),
        RealignOutcome::LowConfidence { adjusted, delta_ms, confidence, .. } => {
            println!(
                "Warning: anchor confidence {confidence:.2} is below the requested threshold; \
                 applying the best available offset anyway"
            );
            (adjusted, delta_ms, confidence)
        }
    };

    let output_path = args.output.as_deref().unwrap_or(&args.source);

    if (args.backup || config.general.backup_enabled) && output_path == args.source {
        let backup_path = backup::create_backup(&args.source, &current_timestamp())?;
        log::info!("backed up {} to {}", args.source.display(), backup_path.display());
    }

    formats::save_subtitle(&adjusted, output_path)?;
    println!(
        "Realigned {} by {} ms (confidence {:.2}) -> {}",
        args.source.display(),
        delta_ms,
        confidence,
        output_path.display()
    );
    Ok(())
}
