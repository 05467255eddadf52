//! Diagnostic dialogue-candidacy scoring for a subtitle track.
//!
//! Grounded on the original `SubtitleTrackAnalyzer`/`TrackScore`: a
//! weighted combination of event count, title keywords, and content
//! sampling used to rank candidate tracks before a realignment or a
//! batch operation picks one to anchor against. Not a blocking
//! precondition of the anchor algorithms in [`super`] — purely advisory.

use crate::core::formats::Event;

const MIN_DIALOGUE_EVENTS: usize = 100;
const TYPICAL_DIALOGUE_EVENTS: usize = 300;
const SIGNS_SONGS_MAX_EVENTS: usize = 80;

const NEGATIVE_TITLE_KEYWORDS: &[&str] = &["signs", "songs", "forced", "sdh", "commentary"];
const POSITIVE_TITLE_KEYWORDS: &[&str] = &["dialogue", "main", "default", "full"];
const FORCED_ENGLISH_KEYWORDS: &[&str] = &["forced"];

/// A diagnostic, never-persisted record of how dialogue-like a track looks.
#[derive(Debug, Clone)]
pub struct TrackScore {
    /// 0.0-1.0 sub-score from event count alone.
    pub event_count_score: f32,
    /// 0.0-1.0 sub-score from the track's title, if any.
    pub title_score: f32,
    /// 0.0-1.0 sub-score from sampling the first events' content.
    pub content_score: f32,
    /// Weighted combination of the three sub-scores.
    pub total_score: f32,
    /// Whether this track looks like the main dialogue track.
    pub is_dialogue_candidate: bool,
    /// Human-readable notes explaining the score, for diagnostics/logging.
    pub rationale: Vec<String>,
}

/// Score a track's events (and optional title) for dialogue candidacy.
///
/// Weights: 40% event count, 35% title keywords, 25% content sampling —
/// matching the original analyzer's weighting.
pub fn track_score(events: &[Event], title: Option<&str>) -> TrackScore {
    let mut rationale = Vec::new();

    let event_count_score = {
        let n = events.len();
        let score = if n >= TYPICAL_DIALOGUE_EVENTS {
            1.0
        } else if n >= MIN_DIALOGUE_EVENTS {
            0.5 + 0.5 * (n - MIN_DIALOGUE_EVENTS) as f32
                / (TYPICAL_DIALOGUE_EVENTS - MIN_DIALOGUE_EVENTS) as f32
        } else if n <= SIGNS_SONGS_MAX_EVENTS {
            0.1
        } else {
            0.3
        };
        rationale.push(format!("{n} events -> event_count_score {score:.2}"));
        score
    };

    let title_score = {
        let mut score = 0.5;
        if let Some(t) = title {
            let lower = t.to_lowercase();
            if NEGATIVE_TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
                score = 0.0;
                rationale.push(format!("title {t:?} matched a negative keyword"));
            } else if FORCED_ENGLISH_KEYWORDS.iter().any(|k| lower.contains(k)) {
                score = 0.1;
                rationale.push(format!("title {t:?} matched forced-subtitle keyword"));
            } else if POSITIVE_TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
                score = 1.0;
                rationale.push(format!("title {t:?} matched a positive keyword"));
            }
        }
        score
    };

    let content_score = {
        let sample: Vec<&Event> = events.iter().take(50).collect();
        if sample.is_empty() {
            0.0
        } else {
            let mut dialogue_signal = 0usize;
            for e in &sample {
                let text = &e.text;
                let is_all_caps = text.chars().any(|c| c.is_alphabetic())
                    && text.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase());
                let bracketed = text.trim_start().starts_with('[') || text.trim_start().starts_with('(');
                if !is_all_caps && !bracketed && text.len() > 8 {
                    dialogue_signal += 1;
                }
            }
            let score = dialogue_signal as f32 / sample.len() as f32;
            rationale.push(format!(
                "{dialogue_signal}/{} sampled lines look like dialogue -> content_score {score:.2}",
                sample.len()
            ));
            score
        }
    };

    let total_score = 0.40 * event_count_score + 0.35 * title_score + 0.25 * content_score;
    let is_dialogue_candidate = total_score >= 0.5 && events.len() >= MIN_DIALOGUE_EVENTS;

    TrackScore {
        event_count_score,
        title_score,
        content_score,
        total_score,
        is_dialogue_candidate,
        rationale,
    }
}

/// Pick the best dialogue-candidate track among several scored options,
/// falling back to the highest event-count track when none qualify.
pub fn select_best_dialogue_track<'a>(
    candidates: &'a [(Vec<Event>, Option<String>)],
) -> Option<&'a (Vec<Event>, Option<String>)> {
    let scored: Vec<(&(Vec<Event>, Option<String>), TrackScore)> = candidates
        .iter()
        .map(|c| (c, track_score(&c.0, c.1.as_deref())))
        .collect();

    scored
        .iter()
        .filter(|(_, score)| score.is_dialogue_candidate)
        .max_by(|a, b| a.1.total_score.partial_cmp(&b.1.total_score).unwrap())
        .map(|(c, _)| *c)
        .or_else(|| candidates.iter().max_by_key(|c| c.0.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(n: usize) -> Vec<Event> {
        (0..n)
            .map(|i| Event::new(i as i64 * 1000, i as i64 * 1000 + 900, "This is a line of dialogue."))
            .collect()
    }

    #[test]
    fn high_event_count_and_positive_title_scores_high() {
        let score = track_score(&events(300), Some("Main Dialogue"));
        assert!(score.is_dialogue_candidate);
        assert!(score.total_score > 0.7);
    }

    #[test]
    fn signs_and_songs_title_scores_low() {
        let score = track_score(&events(50), Some("Signs & Songs"));
        assert!(!score.is_dialogue_candidate);
    }

    #[test]
    fn select_best_falls_back_to_event_count_when_none_qualify() {
        let candidates = vec![
            (events(20), Some("Signs".to_string())),
            (events(40), Some("Songs".to_string())),
        ];
        let best = select_best_dialogue_track(&candidates).unwrap();
        assert_eq!(best.0.len(), 40);
    }
}
