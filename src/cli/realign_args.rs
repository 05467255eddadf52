use clap::Args;
use std::path::PathBuf;

/// Arguments for the `realign` subcommand.
#[derive(Args, Debug)]
pub struct RealignArgs {
    /// Source subtitle file to adjust.
    pub source: PathBuf,

    /// Reference subtitle file the source is aligned against.
    pub reference: PathBuf,

    /// Output file path; defaults to overwriting the source.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How many leading events to scan for a heuristic anchor.
    #[arg(long)]
    pub scan_window: Option<usize>,

    /// Minimum acceptable anchor confidence; below this the result is
    /// reported as low-confidence rather than applied silently.
    #[arg(long)]
    pub confidence_threshold: Option<f32>,

    /// Discard leading source events that precede the reference's start.
    #[arg(long)]
    pub prune_leading: bool,

    /// Keep a timestamped backup of the original file before writing.
    #[arg(long)]
    pub backup: bool,
}
