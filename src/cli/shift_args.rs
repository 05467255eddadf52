use clap::Args;
use std::path::PathBuf;

/// Arguments for the `shift` subcommand.
#[derive(Args, Debug)]
pub struct ShiftArgs {
    /// Input subtitle file path.
    pub input: PathBuf,

    /// Time offset to apply: milliseconds (`-1500`), explicit unit
    /// (`-1500ms`, `-1.5s`), or a full SRT timestamp.
    pub offset: String,

    /// Output file path; defaults to overwriting the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep a timestamped backup of the original file before writing.
    #[arg(long)]
    pub backup: bool,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn parses_positional_offset() {
        let cli = Cli::try_parse_from(["subtrack", "shift", "movie.srt", "-1500"]).unwrap();
        let args = match cli.command {
            Commands::Shift(a) => a,
            _ => panic!("expected Shift command"),
        };
        assert_eq!(args.offset, "-1500");
        assert!(!args.backup);
    }

    #[test]
    fn parses_output_and_backup_flags() {
        let cli = Cli::try_parse_from([
            "subtrack",
            "shift",
            "movie.srt",
            "1.5s",
            "-o",
            "out.srt",
            "--backup",
        ])
        .unwrap();
        let args = match cli.command {
            Commands::Shift(a) => a,
            _ => panic!("expected Shift command"),
        };
        assert_eq!(args.output, Some("out.srt".into()));
        assert!(args.backup);
    }
}
