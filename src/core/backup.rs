//! Pre-write backup naming and file copy.
//!
//! Grounded on the teacher's CIFS-safe copy helper (data-stream copy,
//! deliberately skipping POSIX metadata copy so SMB-mounted destinations
//! don't fail); backup-path naming is new, since the teacher backed up
//! in place rather than into a sibling directory.

use std::fs::{self, File};
use std::io::{self, copy};
use std::path::{Path, PathBuf};

/// Copy `source` to `destination`'s contents only, skipping metadata, so the
/// copy succeeds even when `destination` lives on a CIFS (SMB) mount.
pub fn copy_file_cifs_safe(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut src = File::open(source)?;
    let mut dst = File::create(destination)?;
    copy(&mut src, &mut dst)
}

/// Compute the backup path for `original` at `timestamp`: a sibling
/// `.backups` directory holding `<stem>_<YYYYMMDD_HHMMSS><ext>`. The caller
/// supplies `timestamp` so this function stays pure and testable.
pub fn backup_path(original: &Path, timestamp: &str) -> PathBuf {
    let parent = original.parent().unwrap_or_else(|| Path::new("."));
    let stem = original.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let ext = original
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    parent
        .join(".backups")
        .join(format!("{stem}_{timestamp}{ext}"))
}

/// Back up `original` to its computed sibling path, creating `.backups` if
/// needed, and return the backup path.
pub fn create_backup(original: &Path, timestamp: &str) -> io::Result<PathBuf> {
    let dest = backup_path(original, timestamp);
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir)?;
    }
    copy_file_cifs_safe(original, &dest)?;
    Ok(dest)
}
