//! Core processing engine.
//!
//! Each subsystem is organized into its own submodule:
//! - `encoding` for byte-level charset detection and conversion
//! - `time` for the float-seconds/integer-ms/per-format time codec
//! - `script` for CJK/Latin line classification
//! - `formats` for the subtitle model and SRT/VTT/ASS(/SSA) parsers and writers
//! - `timing` for fixed-offset and anchor-based timing adjustment
//! - `realign` for cross-track offset computation
//! - `merge` for bilingual track merging
//! - `split` for bilingual track splitting
//! - `batch` for directory-wide orchestration with a bounded worker pool
//! - `backup` for advisory pre-write backups
#![allow(dead_code)]

pub mod backup;
pub mod batch;
pub mod encoding;
pub mod formats;
pub mod merge;
pub mod realign;
pub mod script;
pub mod split;
pub mod time;
pub mod timing;
