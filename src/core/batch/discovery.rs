//! Directory traversal and pair discovery for batch operations.
//!
//! Grounded on `BatchProcessor.process_realign_batch`'s source/reference
//! extension pairing, generalised to walk a directory tree rather than a
//! flat listing (via `walkdir`, already used elsewhere in the tree).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A matched source/reference pair discovered under a directory, keyed by
/// their shared base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitlePair {
    /// The file to be adjusted.
    pub source: PathBuf,
    /// The file it should be aligned against.
    pub reference: PathBuf,
}

/// Strip `suffix` from `name` if present (case-insensitive).
fn strip_suffix_ci(name: &str, suffix: &str) -> Option<String> {
    if name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix) {
        Some(name[..name.len() - suffix.len()].to_string())
    } else {
        None
    }
}

/// Recursively find `source_ext`/`reference_ext` file pairs sharing a base
/// name under `directory`. Extensions are matched as literal filename
/// suffixes (e.g. `.zh.srt`), not bare extensions, so multi-part suffixes
/// like `.zh.srt` vs `.en.srt` are distinguished correctly.
pub fn find_matching_pairs(directory: &Path, source_ext: &str, reference_ext: &str) -> Vec<SubtitlePair> {
    let mut sources: BTreeMap<(PathBuf, String), PathBuf> = BTreeMap::new();
    let mut references: BTreeMap<(PathBuf, String), PathBuf> = BTreeMap::new();

    for entry in WalkDir::new(directory)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        if let Some(base) = strip_suffix_ci(name, source_ext) {
            sources.insert((dir.clone(), base), path.to_path_buf());
        }
        if let Some(base) = strip_suffix_ci(name, reference_ext) {
            references.insert((dir, base), path.to_path_buf());
        }
    }

    sources
        .into_iter()
        .filter_map(|(key, source)| {
            references.get(&key).map(|reference| SubtitlePair {
                source,
                reference: reference.clone(),
            })
        })
        .collect()
}
