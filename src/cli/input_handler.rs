use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SubtitleError;

/// Universal input path processing structure for CLI commands.
///
/// `InputPathHandler` provides a unified interface for processing file and
/// directory inputs across different CLI subcommands. It supports multiple
/// input sources, recursive directory scanning, and file extension
/// filtering.
///
/// This handler is used by commands like `realign`, `merge`, `split`, and
/// `detect-encoding` to provide consistent `-i` parameter functionality and
/// directory processing behavior.
///
/// # Examples
///
/// ```rust
/// use subtrack_cli::cli::InputPathHandler;
/// use std::path::PathBuf;
/// # use tempfile::TempDir;
/// # use std::fs;
///
/// # let tmp = TempDir::new().unwrap();
/// # let test_dir = tmp.path();
/// # let file1 = test_dir.join("test1.srt");
/// # let file2 = test_dir.join("test2.ass");
/// # fs::write(&file1, "test content").unwrap();
/// # fs::write(&file2, "test content").unwrap();
///
/// let paths = vec![file1, file2];
/// let handler = InputPathHandler::from_args(&paths, false)?
///     .with_extensions(&["srt", "ass"]);
///
/// let files = handler.collect_files()?;
/// assert_eq!(files.len(), 2);
/// # Ok::<(), subtrack_cli::error::SubtitleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InputPathHandler {
    /// List of input paths (files and directories) to process
    pub paths: Vec<PathBuf>,
    /// Whether to recursively scan subdirectories
    pub recursive: bool,
    /// File extension filters (lowercase, without dot)
    pub file_extensions: Vec<String>,
}

impl InputPathHandler {
    /// Merge paths from multiple sources to create a unified path list.
    ///
    /// # Arguments
    ///
    /// * `optional_paths` - Optional path list (e.g., a single positional path)
    /// * `multiple_paths` - Multiple path list (e.g., `input_paths`)
    /// * `string_paths` - String format path list (e.g., trailing positional args)
    ///
    /// # Errors
    ///
    /// Returns an error if all inputs are empty.
    pub fn merge_paths_from_multiple_sources(
        optional_paths: &[Option<PathBuf>],
        multiple_paths: &[PathBuf],
        string_paths: &[String],
    ) -> Result<Vec<PathBuf>, SubtitleError> {
        let mut all_paths = Vec::new();

        for p in optional_paths.iter().flatten() {
            all_paths.push(p.clone());
        }

        all_paths.extend(multiple_paths.iter().cloned());

        for path_str in string_paths {
            all_paths.push(PathBuf::from(path_str));
        }

        if all_paths.is_empty() {
            return Err(SubtitleError::Other(anyhow::anyhow!(
                "no input path specified"
            )));
        }

        Ok(all_paths)
    }

    /// Create an `InputPathHandler` from command line arguments.
    pub fn from_args(input_args: &[PathBuf], recursive: bool) -> Result<Self, SubtitleError> {
        let handler = Self {
            paths: input_args.to_vec(),
            recursive,
            file_extensions: Vec::new(),
        };
        handler.validate()?;
        Ok(handler)
    }

    /// Set supported file extensions (without dot).
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.file_extensions = extensions.iter().map(|s| s.to_lowercase()).collect();
        self
    }

    /// Validate that all paths exist.
    pub fn validate(&self) -> Result<(), SubtitleError> {
        for path in &self.paths {
            if !path.exists() {
                return Err(SubtitleError::Other(anyhow::anyhow!(
                    "path not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Get all specified directory paths.
    ///
    /// If a specified path is a file, its parent directory is returned
    /// instead. The result is deduplicated.
    pub fn get_directories(&self) -> Vec<PathBuf> {
        let mut directories = std::collections::HashSet::new();

        for path in &self.paths {
            if path.is_dir() {
                directories.insert(path.clone());
            } else if path.is_file() {
                if let Some(parent) = path.parent() {
                    directories.insert(parent.to_path_buf());
                }
            }
        }

        directories.into_iter().collect()
    }

    /// Expand files and directories, collecting all files that match the
    /// extension filter.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, SubtitleError> {
        let mut files = Vec::new();
        for base in &self.paths {
            if base.is_file() {
                if self.matches_extension(base) {
                    files.push(base.clone());
                }
            } else if base.is_dir() {
                if self.recursive {
                    files.extend(self.scan_directory_recursive(base)?);
                } else {
                    files.extend(self.scan_directory_flat(base)?);
                }
            } else {
                return Err(SubtitleError::Other(anyhow::anyhow!(
                    "invalid path: {}",
                    base.display()
                )));
            }
        }
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.file_extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|s| {
                self.file_extensions
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(s))
            })
            .unwrap_or(false)
    }

    fn scan_directory_flat(&self, dir: &Path) -> Result<Vec<PathBuf>, SubtitleError> {
        let mut result = Vec::new();
        let rd = fs::read_dir(dir)?;
        for entry in rd {
            let entry = entry?;
            let p = entry.path();
            if p.is_file() && self.matches_extension(&p) {
                result.push(p);
            }
        }
        Ok(result)
    }

    fn scan_directory_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, SubtitleError> {
        let mut result = Vec::new();
        let rd = fs::read_dir(dir)?;
        for entry in rd {
            let entry = entry?;
            let p = entry.path();
            if p.is_file() {
                if self.matches_extension(&p) {
                    result.push(p.clone());
                }
            } else if p.is_dir() {
                result.extend(self.scan_directory_recursive(&p)?);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn collects_files_from_multiple_paths() {
        let tmp = TempDir::new().unwrap();
        let file1 = tmp.path().join("test1.srt");
        let file2 = tmp.path().join("test2.ass");
        fs::write(&file1, "x").unwrap();
        fs::write(&file2, "x").unwrap();

        let handler =
            InputPathHandler::from_args(&[file1, file2], false).unwrap().with_extensions(&["srt", "ass"]);
        let files = handler.collect_files().unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn recursive_scan_finds_nested_files() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(tmp.path().join("a.srt"), "x").unwrap();
        fs::write(nested.join("b.srt"), "x").unwrap();

        let flat = InputPathHandler::from_args(&[tmp.path().to_path_buf()], false)
            .unwrap()
            .with_extensions(&["srt"]);
        assert_eq!(flat.collect_files().unwrap().len(), 1);

        let recursive = InputPathHandler::from_args(&[tmp.path().to_path_buf()], true)
            .unwrap()
            .with_extensions(&["srt"]);
        assert_eq!(recursive.collect_files().unwrap().len(), 2);
    }

    #[test]
    fn validate_rejects_missing_path() {
        let result = InputPathHandler::from_args(&[PathBuf::from("/does/not/exist")], false);
        assert!(result.is_err());
    }

    #[test]
    fn merge_paths_errors_on_empty_input() {
        let result = InputPathHandler::merge_paths_from_multiple_sources(&[], &[], &[]);
        assert!(result.is_err());
    }
}
