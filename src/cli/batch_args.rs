use crate::cli::merge_args::OutputSubtitleFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory to process.
    pub directory: PathBuf,

    /// Maximum number of files processed concurrently; 0 falls back to the
    /// number of logical CPUs.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Which batch operation to run.
    #[command(subcommand)]
    pub operation: BatchOperation,
}

/// The operation a batch run applies to every discovered file or pair.
#[derive(Subcommand, Debug)]
pub enum BatchOperation {
    /// Shift every matching subtitle file by a fixed offset.
    Shift {
        /// Time offset to apply to every file, same grammar as `shift`'s.
        offset: String,
        /// Filename suffix of files to shift (e.g. `.srt`).
        #[arg(long, default_value = ".srt")]
        extension: String,
    },
    /// Realign every matched source/reference pair.
    Realign {
        /// Source-track filename suffix (e.g. `.zh.srt`).
        #[arg(long)]
        source_ext: String,
        /// Reference-track filename suffix (e.g. `.en.srt`).
        #[arg(long)]
        reference_ext: String,
        /// Discard leading source events that precede the reference's start.
        #[arg(long)]
        prune_leading: bool,
    },
    /// Merge every matched primary/secondary pair into a bilingual track.
    Merge {
        /// Primary-track filename suffix (e.g. `.zh.srt`).
        #[arg(long)]
        primary_ext: String,
        /// Secondary-track filename suffix (e.g. `.en.srt`).
        #[arg(long)]
        secondary_ext: String,
        /// Output subtitle format for the merged tracks.
        #[arg(long, value_enum, default_value = "srt")]
        format: OutputSubtitleFormat,
    },
    /// Split every matching bilingual subtitle file into its language tracks.
    Split {
        /// Filename suffix of files to split (e.g. `.srt`).
        #[arg(long, default_value = ".srt")]
        extension: String,
        /// Strip `<i>`/`<b>`/`<font ...>`-style HTML tags from output lines.
        #[arg(long, default_value_t = true)]
        strip_formatting: bool,
        /// Output label for the CJK stream.
        #[arg(long, default_value = "zh")]
        lang1_label: String,
        /// Output label for the Latin stream.
        #[arg(long, default_value = "en")]
        lang2_label: String,
    },
}
