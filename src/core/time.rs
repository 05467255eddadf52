//! Bidirectional conversion between float seconds, integer milliseconds, and
//! the per-format timestamp strings used by SRT, WebVTT, and ASS/SSA.
//!
//! All three representations co-exist; integer milliseconds is the exact,
//! round-trippable representation and is what every other core component
//! stores on [`crate::core::formats::Event`]. The float-seconds view is a
//! convenience for callers and for the `X.Ys` offset grammar.
//!
//! Grounded on the original `TimeConverter` (`time_to_seconds` /
//! `seconds_to_time` / `shift_time`), generalised per the accepted
//! timestamp tolerances (hours may exceed 99, WebVTT's optional `HH`,
//! ASS's 1/2/3-digit fractional second).

use crate::error::SubtitleError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Which subtitle format's timestamp grammar to parse or emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM:SS,mmm` (comma), `.` accepted on parse.
    Srt,
    /// `HH:MM:SS.mmm` or `MM:SS.mmm`.
    Vtt,
    /// `H:MM:SS.cc` (centiseconds).
    Ass,
}

static SRT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,}):(\d{2}):(\d{2})[,.](\d{1,3})$").expect("valid SRT timestamp regex")
});
static VTT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{1,}):)?(\d{2}):(\d{2})\.(\d{1,3})$").expect("valid VTT timestamp regex")
});
static ASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,}):(\d{2}):(\d{2})\.(\d{1,3})$").expect("valid ASS timestamp regex")
});

/// Parse a per-format timestamp string into integer milliseconds.
pub fn parse_timestamp(s: &str, format: TimeFormat) -> Result<i64, SubtitleError> {
    let s = s.trim();
    match format {
        TimeFormat::Srt => {
            let caps = SRT_RE
                .captures(s)
                .ok_or_else(|| SubtitleError::timing(format!("not an SRT timestamp: {s}")))?;
            let hh: i64 = caps[1].parse().unwrap_or(0);
            let mm: i64 = caps[2].parse().unwrap_or(0);
            let ss: i64 = caps[3].parse().unwrap_or(0);
            let frac = pad_or_truncate_ms(&caps[4]);
            Ok(((hh * 3600 + mm * 60 + ss) * 1000) + frac)
        }
        TimeFormat::Vtt => {
            let caps = VTT_RE
                .captures(s)
                .ok_or_else(|| SubtitleError::timing(format!("not a VTT timestamp: {s}")))?;
            let hh: i64 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            let mm: i64 = caps[2].parse().unwrap_or(0);
            let ss: i64 = caps[3].parse().unwrap_or(0);
            let frac = pad_or_truncate_ms(&caps[4]);
            Ok(((hh * 3600 + mm * 60 + ss) * 1000) + frac)
        }
        TimeFormat::Ass => {
            let caps = ASS_RE
                .captures(s)
                .ok_or_else(|| SubtitleError::timing(format!("not an ASS timestamp: {s}")))?;
            let hh: i64 = caps[1].parse().unwrap_or(0);
            let mm: i64 = caps[2].parse().unwrap_or(0);
            let ss: i64 = caps[3].parse().unwrap_or(0);
            // 1 digit = tenths, 2 = centiseconds, 3+ = milliseconds.
            let digits = &caps[4];
            let frac = match digits.len() {
                1 => digits.parse::<i64>().unwrap_or(0) * 100,
                2 => digits.parse::<i64>().unwrap_or(0) * 10,
                _ => pad_or_truncate_ms(digits),
            };
            Ok(((hh * 3600 + mm * 60 + ss) * 1000) + frac)
        }
    }
}

/// Interpret a fractional-seconds digit string (1-3+ digits) as milliseconds,
/// padding short strings and truncating long ones to 3 digits.
fn pad_or_truncate_ms(digits: &str) -> i64 {
    let mut s = digits.to_string();
    while s.len() < 3 {
        s.push('0');
    }
    s.truncate(3);
    s.parse().unwrap_or(0)
}

/// Format integer milliseconds as a per-format timestamp string for writing.
pub fn format_timestamp(ms: i64, format: TimeFormat) -> String {
    let ms = ms.max(0);
    let total_seconds = ms / 1000;
    let millis = ms % 1000;
    let hh = total_seconds / 3600;
    let mm = (total_seconds % 3600) / 60;
    let ss = total_seconds % 60;
    match format {
        TimeFormat::Srt => format!("{hh:02}:{mm:02}:{ss:02},{millis:03}"),
        TimeFormat::Vtt => format!("{hh:02}:{mm:02}:{ss:02}.{millis:03}"),
        TimeFormat::Ass => {
            let centis = (millis.min(999) / 10).min(99);
            format!("{hh}:{mm:02}:{ss:02}.{centis:02}")
        }
    }
}

/// Convert integer milliseconds to float seconds.
pub fn ms_to_seconds(ms: i64) -> f64 {
    ms as f64 / 1000.0
}

/// Convert float seconds to integer milliseconds, rounding to the nearest ms.
pub fn seconds_to_ms(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

/// Render milliseconds as a human-readable `HH:MM:SS.mmm` string (diagnostics only).
pub fn milliseconds_to_readable(ms: i64) -> String {
    format_timestamp(ms, TimeFormat::Vtt)
}
