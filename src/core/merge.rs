//! Bilingual merge (component G): combine a primary and secondary track
//! into one dual-language track via a sorted-boundary sweep.
//!
//! Grounded on the design notes' boundary-sweep description; there is no
//! merger.py in the ported source to anchor against, so the sweep and its
//! post-passes (adjacent merge, micro-cue collapse) follow the same
//! event-oriented style as [`super::realign`] and [`super::timing`].

use crate::core::formats::{Event, SubtitleFile, SubtitleFormatKind};
use crate::error::SubtitleError;

/// Tunable parameters for a merge.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Cues shorter than this are folded into a neighbour rather than kept
    /// standalone.
    pub micro_cue_threshold_ms: i64,
    /// Two boundaries within this many milliseconds of each other are
    /// treated as one.
    pub adjacency_gap_ms: i64,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            micro_cue_threshold_ms: 50,
            adjacency_gap_ms: 1,
        }
    }
}

/// One interval of the merged timeline, carrying whichever of the two
/// source texts are active during it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    start_ms: i64,
    end_ms: i64,
    primary_text: Option<String>,
    secondary_text: Option<String>,
}

impl Segment {
    fn into_event(self) -> Option<Event> {
        let text = match (self.primary_text, self.secondary_text) {
            (Some(p), Some(s)) if p == s => p,
            (Some(p), Some(s)) => format!("{p}\n{s}"),
            (Some(p), None) => p,
            (None, Some(s)) => s,
            (None, None) => return None,
        };
        Some(Event::new(self.start_ms, self.end_ms, text))
    }
}

/// Copy `source`'s events unchanged into a new file tagged `output_format`.
fn copy_unchanged(source: &SubtitleFile, output_format: SubtitleFormatKind) -> SubtitleFile {
    let mut file = SubtitleFile::new(output_format);
    file.events = source.events.clone();
    file.sort_events();
    file
}

/// Merge `primary` and `secondary` into a single bilingual [`SubtitleFile`]
/// of `output_format`, primary text stacked above secondary at each
/// overlapping instant. Either side may be absent, in which case the other
/// is copied unchanged.
pub fn merge(
    primary: Option<&SubtitleFile>,
    secondary: Option<&SubtitleFile>,
    output_format: SubtitleFormatKind,
    options: &MergeOptions,
) -> Result<SubtitleFile, SubtitleError> {
    let (primary, secondary) = match (primary, secondary) {
        (None, None) => {
            return Err(SubtitleError::empty_inputs(
                "both primary and secondary tracks have no events",
            ))
        }
        (Some(primary), None) => return Ok(copy_unchanged(primary, output_format)),
        (None, Some(secondary)) => return Ok(copy_unchanged(secondary, output_format)),
        (Some(primary), Some(secondary)) => (primary, secondary),
    };

    if primary.events.is_empty() && secondary.events.is_empty() {
        return Err(SubtitleError::empty_inputs(
            "both primary and secondary tracks have no events",
        ));
    }

    let boundaries = collect_boundaries(primary, secondary, options.adjacency_gap_ms);
    let mut segments = Vec::new();
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        if end <= start {
            continue;
        }
        let mid = start + (end - start) / 2;
        let primary_text = active_text(&primary.events, mid);
        let secondary_text = active_text(&secondary.events, mid);
        if primary_text.is_none() && secondary_text.is_none() {
            continue;
        }
        segments.push(Segment {
            start_ms: start,
            end_ms: end,
            primary_text,
            secondary_text,
        });
    }

    merge_adjacent(&mut segments);
    collapse_micro_cues(&mut segments, options.micro_cue_threshold_ms);

    let mut file = SubtitleFile::new(output_format);
    file.events = segments.into_iter().filter_map(Segment::into_event).collect();
    file.sort_events();
    Ok(file)
}

/// All distinct event-start/end instants across both tracks, sorted and
/// de-duplicated within `adjacency_gap_ms` of each other.
fn collect_boundaries(primary: &SubtitleFile, secondary: &SubtitleFile, adjacency_gap_ms: i64) -> Vec<i64> {
    let mut points: Vec<i64> = primary
        .events
        .iter()
        .chain(secondary.events.iter())
        .flat_map(|e| [e.start_ms, e.end_ms])
        .collect();
    points.sort_unstable();
    points.dedup();

    let mut merged = Vec::with_capacity(points.len());
    for p in points {
        match merged.last() {
            Some(&last) if p - last <= adjacency_gap_ms => {}
            _ => merged.push(p),
        }
    }
    merged
}

/// Concatenated text of every event covering instant `at_ms`, in event order.
fn active_text(events: &[Event], at_ms: i64) -> Option<String> {
    let lines: Vec<&str> = events
        .iter()
        .filter(|e| e.start_ms <= at_ms && at_ms < e.end_ms)
        .map(|e| e.text.as_str())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Merge consecutive segments that carry identical text on both channels
/// into a single segment spanning their union.
fn merge_adjacent(segments: &mut Vec<Segment>) {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments.drain(..) {
        match out.last_mut() {
            Some(prev)
                if prev.primary_text == seg.primary_text
                    && prev.secondary_text == seg.secondary_text
                    && prev.end_ms == seg.start_ms =>
            {
                prev.end_ms = seg.end_ms;
            }
            _ => out.push(seg),
        }
    }
    *segments = out;
}

/// `true` if `sub`'s text is already contained in `sup`'s text, i.e.
/// absorbing `sub` into `sup` would not lose any dialogue.
fn channel_is_superset(sup: &Option<String>, sub: &Option<String>) -> bool {
    match sub {
        None => true,
        Some(sub_text) => sup
            .as_deref()
            .map(|sup_text| sup_text.contains(sub_text.as_str()))
            .unwrap_or(false),
    }
}

/// Fold segments shorter than `threshold_ms` into the preceding segment,
/// but only when the preceding segment's text is already a superset of the
/// micro-cue's text — otherwise the micro-cue would introduce dialogue that
/// the merge would silently discard, so it is left standalone.
fn collapse_micro_cues(segments: &mut Vec<Segment>, threshold_ms: i64) {
    let mut i = 1;
    while i < segments.len() {
        let duration = segments[i].end_ms - segments[i].start_ms;
        if duration >= threshold_ms {
            i += 1;
            continue;
        }
        let is_superset = {
            let prev = &segments[i - 1];
            let cur = &segments[i];
            channel_is_superset(&prev.primary_text, &cur.primary_text)
                && channel_is_superset(&prev.secondary_text, &cur.secondary_text)
        };
        if is_superset {
            let end = segments[i].end_ms;
            segments[i - 1].end_ms = end;
            segments.remove(i);
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(format: SubtitleFormatKind, events: Vec<(i64, i64, &str)>) -> SubtitleFile {
        let mut f = SubtitleFile::new(format);
        for (s, e, t) in events {
            f.events.push(Event::new(s, e, t));
        }
        f
    }

    #[test]
    fn merges_non_overlapping_cues_by_concatenation_window() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 2000, "你好")]);
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(0, 2000, "Hello")]);
        let merged = merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(merged.events.len(), 1);
        assert_eq!(merged.events[0].text, "你好\nHello");
    }

    #[test]
    fn merges_overlapping_cues_into_three_segments() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 3000, "A")]);
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(1000, 4000, "B")]);
        let options = MergeOptions {
            micro_cue_threshold_ms: 0,
            adjacency_gap_ms: 0,
        };
        let merged = merge(Some(&primary), Some(&secondary), SubtitleFormatKind::Srt, &options).unwrap();
        assert_eq!(merged.events.len(), 3);
        assert_eq!(merged.events[0].text, "A");
        assert_eq!(merged.events[1].text, "A\nB");
        assert_eq!(merged.events[2].text, "B");
    }

    #[test]
    fn identical_text_on_both_tracks_is_emitted_once() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 2000, "Same line")]);
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(0, 2000, "Same line")]);
        let merged = merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(merged.events.len(), 1);
        assert_eq!(merged.events[0].text, "Same line");
    }

    #[test]
    fn empty_inputs_is_an_error() {
        let primary = SubtitleFile::new(SubtitleFormatKind::Srt);
        let secondary = SubtitleFile::new(SubtitleFormatKind::Srt);
        assert!(merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default()
        )
        .is_err());
    }

    #[test]
    fn both_inputs_absent_is_an_error() {
        assert!(merge(None, None, SubtitleFormatKind::Srt, &MergeOptions::default()).is_err());
    }

    #[test]
    fn missing_secondary_copies_primary_unchanged() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 1000, "only primary")]);
        let merged = merge(Some(&primary), None, SubtitleFormatKind::Ass, &MergeOptions::default()).unwrap();
        assert_eq!(merged.format, SubtitleFormatKind::Ass);
        assert_eq!(merged.events.len(), 1);
        assert_eq!(merged.events[0].text, "only primary");
    }

    #[test]
    fn missing_primary_copies_secondary_unchanged() {
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(0, 1000, "only secondary")]);
        let merged = merge(None, Some(&secondary), SubtitleFormatKind::Srt, &MergeOptions::default()).unwrap();
        assert_eq!(merged.events.len(), 1);
        assert_eq!(merged.events[0].text, "only secondary");
    }

    #[test]
    fn trailing_micro_cue_that_adds_no_text_collapses_into_preceding_cue() {
        // secondary ends 10ms before primary; the short tail segment carries
        // no text that isn't already present in the preceding segment.
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 3000, "Hello")]);
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(0, 2990, "Hola")]);
        let merged = merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(merged.events.len(), 1);
        assert_eq!(merged.events[0].end_ms, 3000);
        assert_eq!(merged.events[0].text, "Hello\nHola");
    }

    #[test]
    fn leading_micro_cue_with_no_preceding_cue_is_preserved() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(0, 40, "Hi"), (40, 3000, "there friend")]);
        let secondary = SubtitleFile::new(SubtitleFormatKind::Srt);
        let merged = merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(merged.events.len(), 2);
        assert_eq!(merged.events[0].text, "Hi");
        assert_eq!(merged.events[1].text, "there friend");
    }

    #[test]
    fn output_is_sorted_by_start() {
        let primary = file_with(SubtitleFormatKind::Srt, vec![(5000, 6000, "late")]);
        let secondary = file_with(SubtitleFormatKind::Srt, vec![(0, 1000, "early")]);
        let merged = merge(
            Some(&primary),
            Some(&secondary),
            SubtitleFormatKind::Srt,
            &MergeOptions::default(),
        )
        .unwrap();
        assert!(merged.events[0].start_ms < merged.events[1].start_ms);
    }
}
