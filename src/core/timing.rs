//! Fixed-offset and anchor-based timing adjustment (component E).
//!
//! Grounded on the original bulk-realign script's `shift_events_ms`, which
//! clamps each endpoint to zero independently rather than preserving
//! duration (see `DESIGN.md` for why this crate follows that variant over
//! `timing_adjuster.py`'s duration-preserving clamp).

use crate::core::formats::SubtitleFile;
use crate::core::time::{parse_timestamp, seconds_to_ms, TimeFormat};
use crate::error::SubtitleError;

/// Shift every event's start and end by `delta_ms`, clamping each endpoint
/// independently to zero. Returns a new [`SubtitleFile`]; the input is
/// unmodified.
pub fn shift_by(file: &SubtitleFile, delta_ms: i64) -> SubtitleFile {
    let mut out = file.clone();
    for event in &mut out.events {
        event.start_ms = (event.start_ms + delta_ms).max(0);
        event.end_ms = (event.end_ms + delta_ms).max(0);
    }
    out
}

/// Shift the whole track so its first event's start lands on `target_ms`.
pub fn anchor_first_to(file: &SubtitleFile, target_ms: i64) -> Result<SubtitleFile, SubtitleError> {
    let first = file
        .events
        .first()
        .ok_or_else(|| SubtitleError::no_events("cannot anchor a track with no events"))?;
    let delta = target_ms - first.start_ms;
    Ok(shift_by(file, delta))
}

/// Parse a caller-supplied offset string: plain integer milliseconds,
/// `Xms`, `X.Ys` (seconds), or a full SRT timestamp.
pub fn parse_offset_ms(input: &str) -> Result<i64, SubtitleError> {
    let s = input.trim();
    if let Some(ms_str) = s.strip_suffix("ms") {
        return ms_str
            .trim()
            .parse::<i64>()
            .map_err(|_| SubtitleError::timing(format!("invalid millisecond offset: {input}")));
    }
    if let Some(sec_str) = s.strip_suffix('s') {
        return sec_str
            .trim()
            .parse::<f64>()
            .map(seconds_to_ms)
            .map_err(|_| SubtitleError::timing(format!("invalid second offset: {input}")));
    }
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    if s.contains(':') {
        return parse_timestamp(s, TimeFormat::Srt);
    }
    s.parse::<f64>()
        .map(seconds_to_ms)
        .map_err(|_| SubtitleError::timing(format!("unrecognised offset format: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formats::{Event, SubtitleFormatKind};

    fn file_with(events: Vec<(i64, i64, &str)>) -> SubtitleFile {
        let mut f = SubtitleFile::new(SubtitleFormatKind::Srt);
        for (s, e, t) in events {
            f.events.push(Event::new(s, e, t));
        }
        f
    }

    #[test]
    fn shift_moves_both_endpoints() {
        let file = file_with(vec![(10_000, 12_000, "Hello")]);
        let shifted = shift_by(&file, -1500);
        assert_eq!(shifted.events[0].start_ms, 8_500);
        assert_eq!(shifted.events[0].end_ms, 10_500);
    }

    #[test]
    fn shift_clamps_both_endpoints_independently_to_zero() {
        let file = file_with(vec![(10_000, 12_000, "Hello")]);
        let shifted = shift_by(&file, -15_000);
        assert_eq!(shifted.events[0].start_ms, 0);
        assert_eq!(shifted.events[0].end_ms, 0);
    }

    #[test]
    fn shift_linearity_without_clamping() {
        let file = file_with(vec![(10_000, 12_000, "Hello")]);
        let composed = shift_by(&shift_by(&file, 300), 200);
        let direct = shift_by(&file, 500);
        assert_eq!(composed.events, direct.events);
    }

    #[test]
    fn anchor_first_to_computes_delta_from_first_event() {
        let file = file_with(vec![(12_000, 14_000, "A"), (15_000, 16_000, "B")]);
        let anchored = anchor_first_to(&file, 10_000).unwrap();
        assert_eq!(anchored.events[0].start_ms, 10_000);
        assert_eq!(anchored.events[1].start_ms, 13_000);
    }

    #[test]
    fn anchor_first_to_errors_on_empty_track() {
        let file = SubtitleFile::new(SubtitleFormatKind::Srt);
        assert!(anchor_first_to(&file, 0).is_err());
    }

    #[test]
    fn parse_offset_accepts_all_grammars() {
        assert_eq!(parse_offset_ms("1500").unwrap(), 1500);
        assert_eq!(parse_offset_ms("1500ms").unwrap(), 1500);
        assert_eq!(parse_offset_ms("1.5s").unwrap(), 1500);
        assert_eq!(parse_offset_ms("00:00:01,500").unwrap(), 1500);
    }
}
