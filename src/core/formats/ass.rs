//! Advanced SubStation Alpha (.ass) / SubStation Alpha (.ssa) parsing and
//! serialization.
//!
//! SSA shares the same section grammar as ASS (it historically predates the
//! `[V4+ Styles]` section name, using `[V4 Styles]` instead); both are
//! handled by this module.
//!
//! Grounded on the original `ASSParser` (section state machine, Format-line
//! column mapping, N-1-comma dialogue split) since the teacher crate's ASS
//! support was an unimplemented stub.

use super::{Event, SubtitleFile, SubtitleFormatKind};
use crate::core::time::{format_timestamp, parse_timestamp, TimeFormat};
use crate::error::SubtitleError;
use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

#[derive(PartialEq, Eq)]
enum Section {
    ScriptInfo,
    Styles,
    Events,
    Unknown,
}

/// Default column positions when an `[Events]` section has no `Format:`
/// line (Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text).
const DEFAULT_START_IDX: usize = 1;
const DEFAULT_END_IDX: usize = 2;
const DEFAULT_STYLE_IDX: usize = 3;
const DEFAULT_TEXT_IDX: usize = 9;

/// Lightweight content sniff: look for an ASS/SSA section header.
pub fn detect(content: &str) -> bool {
    content.contains("[Script Info]") || content.contains("[V4+ Styles]") || content.contains("[V4 Styles]")
}

/// Parse ASS/SSA content.
pub fn parse(content: &str, format: SubtitleFormatKind) -> Result<SubtitleFile, SubtitleError> {
    let mut file = SubtitleFile::new(format);
    let mut section = Section::Unknown;
    let mut columns: Option<Vec<String>> = None;

    for line in content.lines() {
        let trimmed = line.trim_end();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = match trimmed {
                "[Script Info]" => Section::ScriptInfo,
                "[V4+ Styles]" | "[V4 Styles]" => Section::Styles,
                "[Events]" => Section::Events,
                _ => Section::Unknown,
            };
            match section {
                Section::ScriptInfo => file.script_info.push(trimmed.to_string()),
                Section::Styles => file.styles.push(trimmed.to_string()),
                _ => {}
            }
            continue;
        }

        match section {
            Section::ScriptInfo => file.script_info.push(trimmed.to_string()),
            Section::Styles => file.styles.push(trimmed.to_string()),
            Section::Events => {
                if let Some(rest) = trimmed.strip_prefix("Format:") {
                    columns = Some(rest.split(',').map(|c| c.trim().to_lowercase()).collect());
                } else if let Some(rest) = trimmed.strip_prefix("Dialogue:") {
                    match parse_dialogue(rest, columns.as_deref()) {
                        Some(event) => file.events.push(event),
                        None => log::debug!("skipping malformed Dialogue line: {trimmed:?}"),
                    }
                }
            }
            Section::Unknown => {}
        }
    }

    if file.events.is_empty() && !content.contains("[Events]") {
        return Err(SubtitleError::format(
            format.extension(),
            "no [Events] section found",
        ));
    }
    Ok(file)
}

fn parse_dialogue(rest: &str, columns: Option<&[String]>) -> Option<Event> {
    let (start_idx, end_idx, style_idx, text_idx, n_cols) = match columns {
        Some(cols) => (
            cols.iter().position(|c| c == "start")?,
            cols.iter().position(|c| c == "end")?,
            cols.iter().position(|c| c == "style"),
            cols.iter().position(|c| c == "text")?,
            cols.len(),
        ),
        None => (
            DEFAULT_START_IDX,
            DEFAULT_END_IDX,
            Some(DEFAULT_STYLE_IDX),
            DEFAULT_TEXT_IDX,
            10,
        ),
    };

    let fields: Vec<&str> = rest.splitn(n_cols, ',').collect();
    let max_idx = *[start_idx, end_idx, text_idx].iter().max().unwrap();
    if fields.len() <= max_idx {
        return None;
    }

    let start_ms = parse_timestamp(fields[start_idx].trim(), TimeFormat::Ass).ok()?;
    let end_ms = parse_timestamp(fields[end_idx].trim(), TimeFormat::Ass).ok()?;
    let raw_text = fields[text_idx].trim().to_string();
    let display_text = clean_ass_text(&raw_text);
    let style_name = style_idx
        .and_then(|idx| fields.get(idx))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Some(Event {
        start_ms,
        end_ms,
        text: display_text,
        style_name,
        raw: Some(raw_text),
    })
}

/// Normalise ASS line breaks (`\N`, `\n`) to the newline character, strip
/// `{...}` override blocks and `<...>` HTML-style tags to produce the
/// display form of the text.
fn clean_ass_text(raw: &str) -> String {
    let mut out = String::new();
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == '}' {
                    break;
                }
            }
            continue;
        }
        if c == '\\' {
            match chars.peek() {
                Some('N') | Some('n') => {
                    chars.next();
                    out.push('\n');
                    continue;
                }
                Some('h') => {
                    chars.next();
                    out.push(' ');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    HTML_TAG_RE.replace_all(&out, "").into_owned()
}

/// Serialize to ASS/SSA text: verbatim script-info/styles when present,
/// synthesised minimal headers otherwise, followed by a canonical `[Events]`
/// section.
pub fn serialize(file: &SubtitleFile) -> String {
    let mut out = String::new();

    if !file.script_info.is_empty() {
        for line in &file.script_info {
            out.push_str(line);
            out.push('\n');
        }
    } else {
        out.push_str("[Script Info]\nScriptType: v4.00+\n");
    }
    out.push('\n');

    if !file.styles.is_empty() {
        for line in &file.styles {
            out.push_str(line);
            out.push('\n');
        }
    } else {
        let styles_header = if file.format == SubtitleFormatKind::Ssa {
            "[V4 Styles]"
        } else {
            "[V4+ Styles]"
        };
        out.push_str(styles_header);
        out.push_str("\nFormat: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n");
        out.push_str("Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n");
    }
    out.push('\n');

    out.push_str("[Events]\n");
    out.push_str("Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n");

    let mut sorted = file.events.clone();
    sorted.sort_by_key(|e| e.start_ms);
    for event in &sorted {
        let start = format_timestamp(event.start_ms, TimeFormat::Ass);
        let end = format_timestamp(event.end_ms, TimeFormat::Ass);
        let style = event.style_name.as_deref().unwrap_or("Default");
        let text = event
            .raw
            .clone()
            .unwrap_or_else(|| event.text.replace('\n', "\\N"));
        out.push_str(&format!("Dialogue: 0,{start},{end},{style},,0,0,0,,{text}\n"));
    }
    out
}
