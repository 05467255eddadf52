//! Bilingual split (component H): the inverse of [`super::merge`] — break a
//! combined dual-language track back into per-language tracks.
//!
//! Grounded directly on `BilingualSplitter` (line-by-line classification via
//! [`super::script::classify_line`], HTML-tag stripping, language-suffix
//! base-name stripping, and the self-overwrite `-only` disambiguation).

use crate::core::formats::{Event, SubtitleFile, SubtitleFormatKind};
use crate::core::script::{classify_line, ScriptClass};
use crate::error::SubtitleError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Base names ending in one of these (case-insensitive, longest/compound
/// forms checked first) are stripped down to their movie-title stem.
const LANGUAGE_SUFFIXES: &[&str] = &[
    "zh-en", "en-zh", "zh-ja", "ja-zh", "zh-ko", "ko-zh", "ja-en", "en-ja", "ko-en", "en-ko",
    "bilingual", "dual", "zh", "en", "chi", "eng", "chs", "cht", "cn", "chinese", "english", "ja",
    "jp", "jpn", "japanese", "ko", "kr", "kor", "korean", "fr", "fre", "fra", "french", "de",
    "ger", "deu", "german", "es", "spa", "spanish",
];

/// Options controlling a split.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Strip `<i>`/`<b>`/`<font ...>`-style HTML tags from output lines.
    pub strip_formatting: bool,
    /// Output label for the CJK stream, e.g. `zh`.
    pub lang1_label: String,
    /// Output label for the Latin stream, e.g. `en`.
    pub lang2_label: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            strip_formatting: true,
            lang1_label: "zh".to_string(),
            lang2_label: "en".to_string(),
        }
    }
}

/// The two output tracks produced by a split; either may be absent if the
/// source had no content in that language.
#[derive(Debug, Clone, Default)]
pub struct SplitResult {
    /// CJK-language events, if any were found.
    pub lang1: Option<SubtitleFile>,
    /// Latin-language events, if any were found.
    pub lang2: Option<SubtitleFile>,
}

/// Split `source` into CJK and Latin tracks.
pub fn split(source: &SubtitleFile, options: &SplitOptions) -> Result<SplitResult, SubtitleError> {
    if source.events.is_empty() {
        return Err(SubtitleError::empty_inputs("source track has no events to split"));
    }

    let mut lang1_events = Vec::new();
    let mut lang2_events = Vec::new();

    for event in &source.events {
        if event.text.trim().is_empty() {
            continue;
        }
        let mut lang1_lines = Vec::new();
        let mut lang2_lines = Vec::new();

        for line in event.text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let clean = if options.strip_formatting {
                HTML_TAG_RE.replace_all(line, "").to_string()
            } else {
                line.to_string()
            };
            let clean = clean.trim();
            if clean.is_empty() {
                continue;
            }

            match classify_line(clean) {
                ScriptClass::Cjk => lang1_lines.push(clean.to_string()),
                ScriptClass::Latin => lang2_lines.push(clean.to_string()),
                ScriptClass::Ambiguous => {
                    lang1_lines.push(clean.to_string());
                    lang2_lines.push(clean.to_string());
                }
            }
        }

        if !lang1_lines.is_empty() {
            lang1_events.push(Event::new(event.start_ms, event.end_ms, lang1_lines.join("\n")));
        }
        if !lang2_lines.is_empty() {
            lang2_events.push(Event::new(event.start_ms, event.end_ms, lang2_lines.join("\n")));
        }
    }

    let lang1 = (!lang1_events.is_empty()).then(|| {
        let mut f = SubtitleFile::new(source.format);
        f.events = lang1_events;
        f
    });
    let lang2 = (!lang2_events.is_empty()).then(|| {
        let mut f = SubtitleFile::new(source.format);
        f.events = lang2_events;
        f
    });

    if lang1.is_none() {
        log::warn!("no {} content found in bilingual file", options.lang1_label);
    }
    if lang2.is_none() {
        log::warn!("no {} content found in bilingual file", options.lang2_label);
    }

    Ok(SplitResult { lang1, lang2 })
}

/// Strip a trailing language suffix (longest/compound forms first) and the
/// extension from `path`'s file stem, yielding the bare title.
pub fn clean_base_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let lower = stem.to_lowercase();
    for suffix in LANGUAGE_SUFFIXES {
        let dotted = format!(".{suffix}");
        if lower.ends_with(&dotted) {
            return stem[..stem.len() - dotted.len()].to_string();
        }
    }
    stem.to_string()
}

/// Compute the output path for a split stream, given the input path (used
/// to refuse self-overwrite), output directory, base name, label, and
/// extension.
pub fn output_path(
    input_path: &Path,
    output_dir: &Path,
    base_name: &str,
    label: &str,
    extension: &str,
) -> PathBuf {
    let candidate = output_dir.join(format!("{base_name}.{label}.{extension}"));
    let would_overwrite = match (candidate.canonicalize(), input_path.canonicalize()) {
        (Ok(c), Ok(i)) => c == i,
        _ => candidate == input_path,
    };
    if would_overwrite {
        output_dir.join(format!("{base_name}.{label}-only.{extension}"))
    } else {
        candidate
    }
}

/// Check whether the first 50 events of `file` contain both CJK and Latin
/// lines — a quick preflight before attempting a split.
pub fn is_bilingual(file: &SubtitleFile) -> bool {
    let mut has_cjk = false;
    let mut has_latin = false;
    for event in file.events.iter().take(50) {
        for line in event.text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match classify_line(line) {
                ScriptClass::Cjk => has_cjk = true,
                ScriptClass::Latin => has_latin = true,
                ScriptClass::Ambiguous => {}
            }
            if has_cjk && has_latin {
                return true;
            }
        }
    }
    has_cjk && has_latin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(events: Vec<(i64, i64, &str)>) -> SubtitleFile {
        let mut f = SubtitleFile::new(SubtitleFormatKind::Srt);
        for (s, e, t) in events {
            f.events.push(Event::new(s, e, t));
        }
        f
    }

    #[test]
    fn splits_bilingual_line_pair_into_two_tracks() {
        let source = file_with(vec![(0, 2000, "你好世界\nHello world")]);
        let result = split(&source, &SplitOptions::default()).unwrap();
        let lang1 = result.lang1.unwrap();
        let lang2 = result.lang2.unwrap();
        assert_eq!(lang1.events[0].text, "你好世界");
        assert_eq!(lang2.events[0].text, "Hello world");
    }

    #[test]
    fn both_output_tracks_keep_the_source_format() {
        let mut source = SubtitleFile::new(SubtitleFormatKind::Ass);
        source.events.push(Event::new(0, 2000, "你好世界\nHello world"));
        let result = split(&source, &SplitOptions::default()).unwrap();
        assert_eq!(result.lang1.unwrap().format, SubtitleFormatKind::Ass);
        assert_eq!(result.lang2.unwrap().format, SubtitleFormatKind::Ass);
    }

    #[test]
    fn strips_html_tags_before_classifying() {
        let source = file_with(vec![(0, 2000, "<i>Hello there friend</i>")]);
        let result = split(&source, &SplitOptions::default()).unwrap();
        assert_eq!(result.lang2.unwrap().events[0].text, "Hello there friend");
    }

    #[test]
    fn empty_source_is_an_error() {
        let source = SubtitleFile::new(SubtitleFormatKind::Srt);
        assert!(split(&source, &SplitOptions::default()).is_err());
    }

    #[test]
    fn clean_base_name_strips_compound_language_suffix() {
        let name = clean_base_name(Path::new("Movie.zh-en.srt"));
        assert_eq!(name, "Movie");
    }

    #[test]
    fn clean_base_name_strips_simple_suffix() {
        let name = clean_base_name(Path::new("Movie.zh.srt"));
        assert_eq!(name, "Movie");
    }

    #[test]
    fn is_bilingual_detects_mixed_script_content() {
        let source = file_with(vec![(0, 2000, "你好\nHello")]);
        assert!(is_bilingual(&source));
    }

    #[test]
    fn is_bilingual_false_for_monolingual_content() {
        let source = file_with(vec![(0, 2000, "Hello there")]);
        assert!(!is_bilingual(&source));
    }
}
