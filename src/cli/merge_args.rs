use crate::core::formats::SubtitleFormatKind;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the `merge` subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Primary-language subtitle file (displayed first in each cue).
    pub primary: PathBuf,

    /// Secondary-language subtitle file (displayed second in each cue). If
    /// omitted, the primary track is copied unchanged to the output format.
    pub secondary: Option<PathBuf>,

    /// Output file path for the merged bilingual track.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output subtitle format; defaults to the primary file's format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputSubtitleFormat>,

    /// Cues shorter than this are folded into a neighbouring cue.
    #[arg(long)]
    pub micro_cue_threshold_ms: Option<i64>,

    /// Two boundaries within this many milliseconds are treated as one.
    #[arg(long)]
    pub adjacency_gap_ms: Option<i64>,
}

/// Subtitle output formats selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputSubtitleFormat {
    Srt,
    Vtt,
    Ass,
    Ssa,
}

impl OutputSubtitleFormat {
    /// Convert to the corresponding core format kind.
    pub fn to_kind(self) -> SubtitleFormatKind {
        match self {
            Self::Srt => SubtitleFormatKind::Srt,
            Self::Vtt => SubtitleFormatKind::Vtt,
            Self::Ass => SubtitleFormatKind::Ass,
            Self::Ssa => SubtitleFormatKind::Ssa,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn parses_required_positionals_and_output() {
        let cli = Cli::try_parse_from([
            "subtrack",
            "merge",
            "zh.srt",
            "en.srt",
            "-o",
            "out.ass",
        ])
        .unwrap();
        let args = match cli.command {
            Commands::Merge(a) => a,
            _ => panic!("expected Merge command"),
        };
        assert_eq!(args.output, std::path::PathBuf::from("out.ass"));
        assert!(args.format.is_none());
    }

    #[test]
    fn secondary_track_is_optional() {
        let cli = Cli::try_parse_from(["subtrack", "merge", "zh.srt", "-o", "out.srt"]).unwrap();
        let args = match cli.command {
            Commands::Merge(a) => a,
            _ => panic!("expected Merge command"),
        };
        assert!(args.secondary.is_none());
    }

    #[test]
    fn parses_explicit_format_and_thresholds() {
        let cli = Cli::try_parse_from([
            "subtrack",
            "merge",
            "zh.srt",
            "en.srt",
            "-o",
            "out.srt",
            "--format",
            "srt",
            "--micro-cue-threshold-ms",
            "80",
            "--adjacency-gap-ms",
            "2",
        ])
        .unwrap();
        let args = match cli.command {
            Commands::Merge(a) => a,
            _ => panic!("expected Merge command"),
        };
        assert_eq!(args.micro_cue_threshold_ms, Some(80));
        assert_eq!(args.adjacency_gap_ms, Some(2));
    }
}
