//! Encoding detection and conversion (component A).
//!
//! See [`detector::detect_and_decode`] for the read path and
//! [`converter::encode_for_write`] for the write path.

pub mod charset;
pub mod converter;
pub mod detector;

pub use charset::{Charset, EncodingInfo};
pub use detector::detect_and_decode;

use crate::error::SubtitleError;
use std::path::Path;

/// Read a file from disk and decode it per the encoding protocol.
pub fn read_file_detecting_encoding(path: &Path) -> Result<(String, EncodingInfo), SubtitleError> {
    let bytes = std::fs::read(path)?;
    detect_and_decode(&bytes)
}
