//! SubRip Text (.srt) parsing and serialization.

use super::{Event, SubtitleFile, SubtitleFormatKind};
use crate::core::time::{format_timestamp, parse_timestamp, TimeFormat};
use crate::error::SubtitleError;

/// Lightweight content sniff: does the first non-blank block look like an
/// SRT timing line, optionally preceded by an index line?
pub fn detect(content: &str) -> bool {
    content
        .lines()
        .find(|l| !l.trim().is_empty())
        .map(|first| {
            if first.trim().chars().all(|c| c.is_ascii_digit()) {
                content.lines().nth(1).map(|l| l.contains("-->")).unwrap_or(false)
            } else {
                first.contains("-->")
            }
        })
        .unwrap_or(false)
}

/// Parse SRT content. Malformed blocks are skipped with a warning rather
/// than aborting the parse.
pub fn parse(content: &str) -> Result<SubtitleFile, SubtitleError> {
    let mut file = SubtitleFile::new(SubtitleFormatKind::Srt);
    for block in split_blocks(content) {
        let mut lines = block.lines();
        let first = match lines.next() {
            Some(l) => l,
            None => continue,
        };

        let timing_line = if first.trim().chars().all(|c| c.is_ascii_digit()) && !first.trim().is_empty() {
            match lines.next() {
                Some(l) => l,
                None => {
                    log::debug!("skipping SRT block with index but no timing line");
                    continue;
                }
            }
        } else {
            first
        };

        let Some((start_str, end_str)) = timing_line.split_once("-->") else {
            log::debug!("skipping SRT block with no timing line: {timing_line:?}");
            continue;
        };
        let (Ok(start_ms), Ok(end_ms)) = (
            parse_timestamp(start_str.trim(), TimeFormat::Srt),
            parse_timestamp(end_str.trim(), TimeFormat::Srt),
        ) else {
            log::debug!("skipping SRT block with unparsable timing: {timing_line:?}");
            continue;
        };

        let text = lines.collect::<Vec<_>>().join("\n").trim_end().to_string();
        file.events.push(Event::new(start_ms, end_ms, text));
    }
    Ok(file)
}

fn split_blocks(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(|b| b.trim_matches('\n'))
        .filter(|b| !b.trim().is_empty())
        .collect()
}

/// Serialize to SRT text: 1-based index, timing line, text, blank line.
pub fn serialize(file: &SubtitleFile) -> String {
    let mut sorted = file.events.clone();
    sorted.sort_by_key(|e| e.start_ms);

    let mut out = String::new();
    for (i, event) in sorted.iter().enumerate() {
        out.push_str(&(i + 1).to_string());
        out.push('\n');
        out.push_str(&format_timestamp(event.start_ms, TimeFormat::Srt));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(event.end_ms, TimeFormat::Srt));
        out.push('\n');
        out.push_str(&event.text);
        out.push_str("\n\n");
    }
    out
}
