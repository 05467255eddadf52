use clap::Args;
use std::path::PathBuf;

/// Arguments for the `split` subcommand.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Bilingual subtitle file to split.
    pub input: PathBuf,

    /// Directory to write the split tracks into; defaults to the input's
    /// own directory.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output label for the CJK stream, e.g. `zh`.
    #[arg(long, default_value = "zh")]
    pub lang1_label: String,

    /// Output label for the Latin stream, e.g. `en`.
    #[arg(long, default_value = "en")]
    pub lang2_label: String,

    /// Keep `<i>`/`<b>`/`<font ...>`-style HTML tags instead of stripping them.
    #[arg(long)]
    pub keep_formatting: bool,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["subtrack", "split", "bilingual.srt"]).unwrap();
        let args = match cli.command {
            Commands::Split(a) => a,
            _ => panic!("expected Split command"),
        };
        assert_eq!(args.lang1_label, "zh");
        assert_eq!(args.lang2_label, "en");
        assert!(!args.keep_formatting);
    }

    #[test]
    fn parses_custom_labels_and_output_dir() {
        let cli = Cli::try_parse_from([
            "subtrack",
            "split",
            "bilingual.srt",
            "--output-dir",
            "out",
            "--lang1-label",
            "ja",
            "--lang2-label",
            "en",
            "--keep-formatting",
        ])
        .unwrap();
        let args = match cli.command {
            Commands::Split(a) => a,
            _ => panic!("expected Split command"),
        };
        assert_eq!(args.output_dir, Some("out".into()));
        assert_eq!(args.lang1_label, "ja");
        assert!(args.keep_formatting);
    }
}
