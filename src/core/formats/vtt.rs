//! WebVTT (.vtt) parsing and serialization.

use super::{Event, SubtitleFile, SubtitleFormatKind};
use crate::core::time::{format_timestamp, parse_timestamp, TimeFormat};
use crate::error::SubtitleError;

/// Lightweight content sniff: does the file start with the `WEBVTT` header?
pub fn detect(content: &str) -> bool {
    content.trim_start().starts_with("WEBVTT")
}

/// Parse WebVTT content. Header metadata, `NOTE`, and `STYLE` blocks are
/// discarded; cue identifier lines preceding a timing line are discarded.
pub fn parse(content: &str) -> Result<SubtitleFile, SubtitleError> {
    if !detect(content) {
        return Err(SubtitleError::format("vtt", "missing WEBVTT header"));
    }
    let mut file = SubtitleFile::new(SubtitleFormatKind::Vtt);

    // Drop everything up to and including the first blank line (the header).
    let body = match content.split_once("\n\n") {
        Some((_, rest)) => rest,
        None => "",
    };

    for block in body.split("\n\n").map(|b| b.trim_matches('\n')) {
        if block.trim().is_empty() {
            continue;
        }
        if block.trim_start().starts_with("NOTE") || block.trim_start().starts_with("STYLE") {
            continue;
        }
        let mut lines = block.lines().peekable();
        let mut timing_line = None;
        while let Some(line) = lines.peek() {
            if line.contains("-->") {
                timing_line = Some(*line);
                lines.next();
                break;
            }
            lines.next();
        }
        let Some(timing_line) = timing_line else {
            log::debug!("skipping VTT block with no timing line");
            continue;
        };
        let Some((start_str, end_str)) = timing_line.split_once("-->") else {
            continue;
        };
        let end_str = end_str.split_whitespace().next().unwrap_or(end_str.trim());
        let (Ok(start_ms), Ok(end_ms)) = (
            parse_timestamp(start_str.trim(), TimeFormat::Vtt),
            parse_timestamp(end_str.trim(), TimeFormat::Vtt),
        ) else {
            log::debug!("skipping VTT block with unparsable timing: {timing_line:?}");
            continue;
        };
        let text = lines.collect::<Vec<_>>().join("\n").trim_end().to_string();
        file.events.push(Event::new(start_ms, end_ms, text));
    }
    Ok(file)
}

/// Serialize to WebVTT text.
pub fn serialize(file: &SubtitleFile) -> String {
    let mut sorted = file.events.clone();
    sorted.sort_by_key(|e| e.start_ms);

    let mut out = String::from("WEBVTT\n\n");
    for event in &sorted {
        out.push_str(&format_timestamp(event.start_ms, TimeFormat::Vtt));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(event.end_ms, TimeFormat::Vtt));
        out.push('\n');
        out.push_str(&event.text);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_vtt() {
        let content = "WEBVTT\n\n00:00:10.000 --> 00:00:12.000\nHello\n";
        let file = parse(content).unwrap();
        assert_eq!(file.events.len(), 1);
        assert_eq!(file.events[0].start_ms, 10_000);
    }

    #[test]
    fn skips_note_and_style_blocks() {
        let content =
            "WEBVTT\n\nNOTE this is a comment\n\nSTYLE\n::cue { color: white; }\n\n1\n00:00:01.000 --> 00:00:02.000\nHi\n";
        let file = parse(content).unwrap();
        assert_eq!(file.events.len(), 1);
    }

    #[test]
    fn discards_cue_identifier_line() {
        let content = "WEBVTT\n\ncue-1\n00:00:01.000 --> 00:00:02.000\nHi\n";
        let file = parse(content).unwrap();
        assert_eq!(file.events[0].text, "Hi");
    }

    #[test]
    fn round_trips() {
        let content = "WEBVTT\n\n00:00:10.000 --> 00:00:12.000\nHello\n";
        let file = parse(content).unwrap();
        let out = serialize(&file);
        let reparsed = parse(&out).unwrap();
        assert_eq!(file.events, reparsed.events);
    }

    #[test]
    fn rejects_content_without_header() {
        assert!(parse("1\n00:00:01,000 --> 00:00:02,000\nHi\n").is_err());
    }
}
