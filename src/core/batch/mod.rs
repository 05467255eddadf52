//! Batch orchestration (component I): discover subtitle files or pairs
//! under a directory and drive shift/realign/merge/split over all of
//! them with bounded concurrency.
//!
//! Grounded on `BatchProcessor`: `process_realign_batch` (pair discovery +
//! per-pair processing + summary) and `process_subtitles_batch` (flat
//! per-file operation with a parallel/sequential switch) map onto
//! [`discovery::find_matching_pairs`] plus [`worker::run_bounded`].

pub mod discovery;
pub mod worker;

use crate::core::encoding::read_file_detecting_encoding;
use crate::core::formats::{self, SubtitleFile, SubtitleFormatKind};
use crate::core::merge::{self, MergeOptions};
use crate::core::realign::{self, AnchorPair, RealignOptions, RealignOutcome};
use crate::core::split::{self, SplitOptions};
use crate::core::timing::shift_by;
use crate::error::SubtitleError;
use discovery::SubtitlePair;
use std::path::{Path, PathBuf};
use worker::{BatchSummary, Outcome};

/// Load and parse the subtitle file at `path`, tagging any error with the
/// path so batch failures are attributable.
fn load(path: &Path) -> Result<SubtitleFile, SubtitleError> {
    let (text, info) = read_file_detecting_encoding(path)?;
    let mut file = formats::parse_auto(&text)?;
    file.source_encoding = Some(info.charset.label());
    Ok(file)
}

/// Realign every matched pair under `directory`, writing each adjusted
/// source back to its own path, and return an aggregated summary.
///
/// This is the batch entry point for the realign workflow: discovery via
/// [`discovery::find_matching_pairs`], then one [`realign::apply_anchor`]
/// per pair, bounded by `concurrency`.
pub async fn realign_directory(
    directory: &Path,
    source_ext: &str,
    reference_ext: &str,
    options: RealignOptions,
    concurrency: usize,
) -> BatchSummary {
    let pairs = discovery::find_matching_pairs(directory, source_ext, reference_ext);
    if pairs.is_empty() {
        log::warn!("no matching subtitle pairs found under {}", directory.display());
        return BatchSummary::default();
    }
    log::info!("found {} subtitle pairs under {}", pairs.len(), directory.display());

    let options = std::sync::Arc::new(options);
    worker::run_bounded(pairs, concurrency, move |pair: SubtitlePair| {
        let options = std::sync::Arc::clone(&options);
        async move { realign_one(&pair, &options) }
    })
    .await
}

fn realign_one(pair: &SubtitlePair, options: &RealignOptions) -> Outcome {
    let result = (|| -> Result<bool, SubtitleError> {
        let source = load(&pair.source)?;
        let reference = load(&pair.reference)?;
        let anchor: AnchorPair = realign::first_line_anchor(&source, &reference)?;
        let outcome = realign::apply_anchor(&source, &reference, &anchor, options)?;
        let (adjusted, delta_ms) = match outcome {
            RealignOutcome::Applied { adjusted, delta_ms, .. } => (adjusted, delta_ms),
            RealignOutcome::LowConfidence { adjusted, delta_ms, .. } => {
                log::warn!("low-confidence realignment for {}", pair.source.display());
                (adjusted, delta_ms)
            }
        };
        if delta_ms == 0 {
            return Ok(false);
        }
        let serialized = formats::serialize(&adjusted)?;
        std::fs::write(&pair.source, serialized)?;
        Ok(true)
    })();

    match result {
        Ok(true) => Outcome::Success { path: pair.source.clone() },
        Ok(false) => Outcome::Unchanged { path: pair.source.clone() },
        Err(err) => Outcome::Failed {
            path: pair.source.clone(),
            message: err.to_string(),
        },
    }
}

/// Shift every subtitle file under `directory` matching `extensions` by
/// `delta_ms`, writing each shifted file back in place.
pub async fn shift_directory(
    directory: &Path,
    extensions: &[&str],
    delta_ms: i64,
    concurrency: usize,
) -> BatchSummary {
    let files = find_subtitle_files(directory, extensions);
    if files.is_empty() {
        log::warn!("no subtitle files found under {}", directory.display());
        return BatchSummary::default();
    }
    log::info!("found {} subtitle files under {}", files.len(), directory.display());

    worker::run_bounded(files, concurrency, move |path: PathBuf| async move {
        shift_one(&path, delta_ms)
    })
    .await
}

fn shift_one(path: &Path, delta_ms: i64) -> Outcome {
    let result = (|| -> Result<bool, SubtitleError> {
        if delta_ms == 0 {
            return Ok(false);
        }
        let file = load(path)?;
        let shifted = shift_by(&file, delta_ms);
        let serialized = formats::serialize(&shifted)?;
        std::fs::write(path, serialized)?;
        Ok(true)
    })();

    match result {
        Ok(true) => Outcome::Success { path: path.to_path_buf() },
        Ok(false) => Outcome::Unchanged { path: path.to_path_buf() },
        Err(err) => Outcome::Failed { path: path.to_path_buf(), message: err.to_string() },
    }
}

/// Merge every matched `(primary, secondary)` pair under `directory` into a
/// bilingual track of `output_format`, writing each result alongside its
/// primary input with an added `.bilingual` suffix before the extension.
pub async fn merge_directory(
    directory: &Path,
    primary_ext: &str,
    secondary_ext: &str,
    output_format: SubtitleFormatKind,
    options: MergeOptions,
    concurrency: usize,
) -> BatchSummary {
    let pairs = discovery::find_matching_pairs(directory, primary_ext, secondary_ext);
    if pairs.is_empty() {
        log::warn!("no matching subtitle pairs found under {}", directory.display());
        return BatchSummary::default();
    }
    log::info!("found {} subtitle pairs under {}", pairs.len(), directory.display());

    let options = std::sync::Arc::new(options);
    worker::run_bounded(pairs, concurrency, move |pair: SubtitlePair| {
        let options = std::sync::Arc::clone(&options);
        async move { merge_one(&pair, output_format, &options) }
    })
    .await
}

fn merge_one(pair: &SubtitlePair, output_format: SubtitleFormatKind, options: &MergeOptions) -> Outcome {
    let result = (|| -> Result<PathBuf, SubtitleError> {
        let primary = load(&pair.source)?;
        let secondary = load(&pair.reference)?;
        let merged = merge::merge(Some(&primary), Some(&secondary), output_format, options)?;
        let out_path = bilingual_output_path(&pair.source, output_format);
        let serialized = formats::serialize(&merged)?;
        std::fs::write(&out_path, serialized)?;
        Ok(out_path)
    })();

    match result {
        Ok(out_path) => Outcome::Success { path: out_path },
        Err(err) => Outcome::Failed { path: pair.source.clone(), message: err.to_string() },
    }
}

fn bilingual_output_path(primary: &Path, output_format: SubtitleFormatKind) -> PathBuf {
    let parent = primary.parent().unwrap_or_else(|| Path::new("."));
    let stem = primary.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    parent.join(format!("{stem}.bilingual.{}", output_format.extension()))
}

/// Split every subtitle file under `directory` matching `extensions` into
/// its per-language tracks, writing each alongside the source file.
pub async fn split_directory(
    directory: &Path,
    extensions: &[&str],
    options: SplitOptions,
    concurrency: usize,
) -> BatchSummary {
    let files = find_subtitle_files(directory, extensions);
    if files.is_empty() {
        log::warn!("no subtitle files found under {}", directory.display());
        return BatchSummary::default();
    }
    log::info!("found {} subtitle files under {}", files.len(), directory.display());

    let options = std::sync::Arc::new(options);
    worker::run_bounded(files, concurrency, move |path: PathBuf| {
        let options = std::sync::Arc::clone(&options);
        async move { split_one(&path, &options) }
    })
    .await
}

fn split_one(path: &Path, options: &SplitOptions) -> Outcome {
    let result = (|| -> Result<bool, SubtitleError> {
        let source = load(path)?;
        let split_result = split::split(&source, options)?;
        let output_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let base_name = split::clean_base_name(path);

        let mut wrote_any = false;
        if let Some(lang1) = split_result.lang1 {
            let out_path = split::output_path(
                path,
                output_dir,
                &base_name,
                &options.lang1_label,
                lang1.format.extension(),
            );
            let serialized = formats::serialize(&lang1)?;
            std::fs::write(&out_path, serialized)?;
            wrote_any = true;
        }
        if let Some(lang2) = split_result.lang2 {
            let out_path = split::output_path(
                path,
                output_dir,
                &base_name,
                &options.lang2_label,
                lang2.format.extension(),
            );
            let serialized = formats::serialize(&lang2)?;
            std::fs::write(&out_path, serialized)?;
            wrote_any = true;
        }
        Ok(wrote_any)
    })();

    match result {
        Ok(true) => Outcome::Success { path: path.to_path_buf() },
        Ok(false) => Outcome::Unchanged { path: path.to_path_buf() },
        Err(err) => Outcome::Failed { path: path.to_path_buf(), message: err.to_string() },
    }
}

/// Recursively collect subtitle files under `directory` matching a set of
/// extensions (e.g. `["srt", "vtt", "ass", "ssa"]`).
pub fn find_subtitle_files(directory: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    walkdir::WalkDir::new(directory)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| extensions.iter().any(|want| want.eq_ignore_ascii_case(e)))
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn realign_directory_reports_empty_when_no_pairs_found() {
        let dir = TempDir::new().unwrap();
        let summary =
            realign_directory(dir.path(), ".zh.srt", ".en.srt", RealignOptions::default(), 2).await;
        assert!(summary.outcomes.is_empty());
    }

    #[test]
    fn find_subtitle_files_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.srt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        let found = find_subtitle_files(dir.path(), &["srt", "vtt", "ass", "ssa"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "a.srt");
    }

    const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n";

    #[tokio::test]
    async fn shift_directory_rewrites_files_in_place() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.srt"), SAMPLE_SRT).unwrap();
        let summary = shift_directory(dir.path(), &["srt"], 1000, 2).await;
        assert_eq!(summary.successful(), 1);
        let rewritten = fs::read_to_string(dir.path().join("a.srt")).unwrap();
        assert!(rewritten.contains("00:00:02,000"));
    }

    #[tokio::test]
    async fn shift_directory_reports_unchanged_for_zero_delta() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.srt"), SAMPLE_SRT).unwrap();
        let summary = shift_directory(dir.path(), &["srt"], 0, 2).await;
        assert_eq!(summary.unchanged(), 1);
    }

    #[tokio::test]
    async fn merge_directory_writes_bilingual_output_for_each_pair() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("movie.zh.srt"), SAMPLE_SRT).unwrap();
        fs::write(dir.path().join("movie.en.srt"), SAMPLE_SRT).unwrap();
        let summary = merge_directory(
            dir.path(),
            ".zh.srt",
            ".en.srt",
            SubtitleFormatKind::Srt,
            MergeOptions::default(),
            2,
        )
        .await;
        assert_eq!(summary.successful(), 1);
        assert!(dir.path().join("movie.bilingual.srt").exists());
    }

    #[tokio::test]
    async fn split_directory_writes_both_language_tracks() {
        let dir = TempDir::new().unwrap();
        let bilingual = "1\n00:00:01,000 --> 00:00:02,000\n你好世界\nHello world\n";
        fs::write(dir.path().join("movie.srt"), bilingual).unwrap();
        let summary = split_directory(dir.path(), &["srt"], SplitOptions::default(), 2).await;
        assert_eq!(summary.successful(), 1);
        assert!(dir.path().join("movie.zh.srt").exists());
        assert!(dir.path().join("movie.en.srt").exists());
    }
}
