//! The `merge` command: combine two monolingual tracks into one bilingual track.

use crate::cli::MergeArgs;
use crate::config::ConfigService;
use crate::core::formats::{self, SubtitleFormatKind};
use crate::core::merge::{self, MergeOptions};
use crate::error::SubtitleError;
use crate::Result;

/// Execute the `merge` command with an injected configuration service.
pub async fn execute(args: MergeArgs, config_service: &dyn ConfigService) -> Result<()> {
    let config = config_service.get_config()?;

    let primary = formats::load_subtitle(&args.primary)?;
    let secondary = args.secondary.as_ref().map(formats::load_subtitle).transpose()?;

    let output_format = match args.format {
        Some(f) => f.to_kind(),
        None => SubtitleFormatKind::from_extension(
            args.output
                .extension()
                .and_then(|e| e.to_str())
                .ok_or_else(|| SubtitleError::Other(anyhow::anyhow!(
                    "output path has no extension to infer a format from"
                )))?,
        )
        .unwrap_or(primary.format),
    };

    let options = MergeOptions {
        micro_cue_threshold_ms: args
            .micro_cue_threshold_ms
            .unwrap_or(config.merge.micro_cue_threshold_ms),
        adjacency_gap_ms: args.adjacency_gap_ms.unwrap_or(config.merge.adjacency_gap_ms),
    };

    let merged = merge::merge(Some(&primary), secondary.as_ref(), output_format, &options)?;
    formats::save_subtitle(&merged, &args.output)?;
    match &args.secondary {
        Some(secondary_path) => println!(
            "Merged {} + {} -> {}",
            args.primary.display(),
            secondary_path.display(),
            args.output.display()
        ),
        None => println!(
            "Copied {} -> {} (no secondary track)",
            args.primary.display(),
            args.output.display()
        ),
    }
    Ok(())
}
