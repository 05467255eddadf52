//! The subtitle model and format I/O (component D).
//!
//! Formats are modelled as a closed variant set dispatched by `match`
//! rather than the heap-allocated `Vec<Box<dyn SubtitleFormat>>` registry
//! pattern — a fixed, small set of formats does not need trait-object
//! polymorphism.

pub mod ass;
pub mod srt;
pub mod vtt;

use crate::core::encoding;
use crate::error::SubtitleError;
use std::path::Path;

/// A single timed cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Start time in integer milliseconds.
    pub start_ms: i64,
    /// End time in integer milliseconds; always `>= start_ms`.
    pub end_ms: i64,
    /// Display text; newlines denote in-cue line breaks, CRs never appear.
    pub text: String,
    /// ASS/SSA style name, if any.
    pub style_name: Option<String>,
    /// Unparsed ASS/SSA dialogue payload (override blocks intact), if any.
    pub raw: Option<String>,
}

impl Event {
    /// Construct a plain event with no format-specific extras.
    pub fn new(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
            style_name: None,
            raw: None,
        }
    }

    /// Duration in milliseconds, saturating at zero.
    pub fn duration_ms(&self) -> i64 {
        (self.end_ms - self.start_ms).max(0)
    }
}

/// The four formats this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormatKind {
    /// SubRip Text (.srt).
    Srt,
    /// WebVTT (.vtt).
    Vtt,
    /// Advanced SubStation Alpha (.ass).
    Ass,
    /// SubStation Alpha (.ssa) — same grammar as ASS.
    Ssa,
}

impl SubtitleFormatKind {
    /// Infer a format from a file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "srt" => Some(Self::Srt),
            "vtt" => Some(Self::Vtt),
            "ass" => Some(Self::Ass),
            "ssa" => Some(Self::Ssa),
            _ => None,
        }
    }

    /// The canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Ass => "ass",
            Self::Ssa => "ssa",
        }
    }

    /// Lightweight content sniff used by [`detect_format`].
    fn detect(self, content: &str) -> bool {
        match self {
            Self::Srt => srt::detect(content),
            Self::Vtt => vtt::detect(content),
            Self::Ass | Self::Ssa => ass::detect(content),
        }
    }
}

/// A fully parsed subtitle file.
#[derive(Debug, Clone)]
pub struct SubtitleFile {
    /// Format this file was parsed from / will be written as.
    pub format: SubtitleFormatKind,
    /// Cues, in parse order (callers may re-sort; writers always sort by `start_ms`).
    pub events: Vec<Event>,
    /// Verbatim `[Script Info]` section lines (ASS/SSA only).
    pub script_info: Vec<String>,
    /// Verbatim style-section lines, e.g. `[V4+ Styles]` (ASS/SSA only).
    pub styles: Vec<String>,
    /// Encoding label the source file was decoded from.
    pub source_encoding: Option<&'static str>,
}

impl SubtitleFile {
    /// Construct an empty subtitle file of the given format.
    pub fn new(format: SubtitleFormatKind) -> Self {
        Self {
            format,
            events: Vec::new(),
            script_info: Vec::new(),
            styles: Vec::new(),
            source_encoding: None,
        }
    }

    /// Sort events by start time and renumber is not needed (events carry no index).
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(|e| e.start_ms);
    }
}

/// Try each format's detector in turn and parse with the first match.
pub fn detect_format(content: &str) -> Option<SubtitleFormatKind> {
    for kind in [
        SubtitleFormatKind::Ass,
        SubtitleFormatKind::Vtt,
        SubtitleFormatKind::Srt,
    ] {
        if kind.detect(content) {
            return Some(kind);
        }
    }
    None
}

/// Parse `content` as the given format.
pub fn parse(content: &str, format: SubtitleFormatKind) -> Result<SubtitleFile, SubtitleError> {
    match format {
        SubtitleFormatKind::Srt => srt::parse(content),
        SubtitleFormatKind::Vtt => vtt::parse(content),
        SubtitleFormatKind::Ass | SubtitleFormatKind::Ssa => ass::parse(content, format),
    }
}

/// Auto-detect the format of `content` and parse it.
pub fn parse_auto(content: &str) -> Result<SubtitleFile, SubtitleError> {
    let format = detect_format(content)
        .ok_or_else(|| SubtitleError::format("unknown", "content did not match any known subtitle format"))?;
    parse(content, format)
}

/// Serialize `file` in its own format.
pub fn serialize(file: &SubtitleFile) -> Result<String, SubtitleError> {
    match file.format {
        SubtitleFormatKind::Srt => Ok(srt::serialize(file)),
        SubtitleFormatKind::Vtt => Ok(vtt::serialize(file)),
        SubtitleFormatKind::Ass | SubtitleFormatKind::Ssa => Ok(ass::serialize(file)),
    }
}

/// Load a subtitle file from disk: detect encoding, decode, auto-detect format, parse.
pub fn load_subtitle(path: &Path) -> Result<SubtitleFile, SubtitleError> {
    let (text, info) = encoding::read_file_detecting_encoding(path)?;
    let mut file = parse_auto(&text)?;
    file.source_encoding = Some(info.charset.label());
    Ok(file)
}

/// Save a subtitle file to disk in the format implied by its extension.
///
/// ASS/SSA output is written with a UTF-8 BOM; every other format is
/// written BOM-less.
pub fn save_subtitle(file: &SubtitleFile, path: &Path) -> Result<(), SubtitleError> {
    let text = serialize(file)?;
    let with_bom = matches!(file.format, SubtitleFormatKind::Ass | SubtitleFormatKind::Ssa);
    let bytes = encoding::converter::encode_for_write(&text, with_bom);
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SRT: &str = "1\n00:00:00,000 --> 00:00:01,000\nOne\n";
    const SAMPLE_VTT: &str = "WEBVTT\n\n1\n00:00:00.000 --> 00:00:01.000\nOne\n";

    #[test]
    fn parse_auto_detects_srt() {
        let file = parse_auto(SAMPLE_SRT).unwrap();
        assert_eq!(file.format, SubtitleFormatKind::Srt);
        assert_eq!(file.events.len(), 1);
    }

    #[test]
    fn parse_auto_detects_vtt() {
        let file = parse_auto(SAMPLE_VTT).unwrap();
        assert_eq!(file.format, SubtitleFormatKind::Vtt);
    }

    #[test]
    fn parse_auto_rejects_unknown_content() {
        assert!(parse_auto("not a subtitle file").is_err());
    }

    #[test]
    fn from_extension_recognises_all_four() {
        assert_eq!(SubtitleFormatKind::from_extension("SRT"), Some(SubtitleFormatKind::Srt));
        assert_eq!(SubtitleFormatKind::from_extension("vtt"), Some(SubtitleFormatKind::Vtt));
        assert_eq!(SubtitleFormatKind::from_extension("ass"), Some(SubtitleFormatKind::Ass));
        assert_eq!(SubtitleFormatKind::from_extension("ssa"), Some(SubtitleFormatKind::Ssa));
        assert_eq!(SubtitleFormatKind::from_extension("mp4"), None);
    }
}
