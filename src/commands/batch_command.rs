//! The `batch` command: apply shift/realign/merge over every matching file in a directory.

use crate::cli::{BatchArgs, BatchOperation};
use crate::config::ConfigService;
use crate::core::batch;
use crate::core::merge::MergeOptions;
use crate::core::realign::RealignOptions;
use crate::core::split::SplitOptions;
use crate::core::timing::parse_offset_ms;
use crate::Result;

/// Execute the `batch` command with an injected configuration service.
pub async fn execute(args: BatchArgs, config_service: &dyn ConfigService) -> Result<()> {
    let config = config_service.get_config()?;
    let concurrency = args.concurrency.unwrap_or(config.batch.max_concurrency);

    let summary = match args.operation {
        BatchOperation::Shift { offset, extension } => {
            let delta_ms = parse_offset_ms(&offset)?;
            let ext = extension.trim_start_matches('.');
            batch::shift_directory(&args.directory, &[ext], delta_ms, concurrency).await
        }
        BatchOperation::Realign { source_ext, reference_ext, prune_leading } => {
            let options = RealignOptions {
                scan_window: config.realign.scan_window,
                prune_tolerance_ms: config.realign.prune_tolerance_ms,
                clamp_warn_fraction: config.realign.clamp_warn_fraction,
                confidence_threshold: config.realign.confidence_threshold,
                prune_leading: prune_leading || config.realign.prune_leading,
            };
            batch::realign_directory(&args.directory, &source_ext, &reference_ext, options, concurrency)
                .await
        }
        BatchOperation::Merge { primary_ext, secondary_ext, format } => {
            let options = MergeOptions {
                micro_cue_threshold_ms: config.merge.micro_cue_threshold_ms,
                adjacency_gap_ms: config.merge.adjacency_gap_ms,
            };
            batch::merge_directory(
                &args.directory,
                &primary_ext,
                &secondary_ext,
                format.to_kind(),
                options,
                concurrency,
            )
            .await
        }
        BatchOperation::Split { extension, strip_formatting, lang1_label, lang2_label } => {
            let ext = extension.trim_start_matches('.');
            let options = SplitOptions {
                strip_formatting,
                lang1_label,
                lang2_label,
            };
            batch::split_directory(&args.directory, &[ext], options, concurrency).await
        }
    };

    println!("{}", summary.report());
    if summary.failed() > 0 {
        return Err(crate::error::SubtitleError::Other(anyhow::anyhow!(
            "{} file(s) failed during batch processing",
            summary.failed()
        )));
    }
    Ok(())
}
