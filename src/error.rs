//! Error types for subtitle processing operations.
//!
//! This module defines [`SubtitleError`], the single error type returned
//! across every component boundary: encoding detection, format parsing,
//! timing adjustment, realignment, merging, splitting, and batch
//! orchestration. Each variant maps to an exit code via
//! [`SubtitleError::exit_code`] and a remedial message via
//! [`SubtitleError::user_friendly_message`].
use thiserror::Error;

/// Represents all possible errors raised by the core subtitle components.
///
/// `low_confidence` is deliberately not a variant here: a realignment whose
/// confidence falls below the caller's threshold is a soft result returned
/// inside `Ok`, never an `Err`.
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A file could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No candidate charset decoded the input cleanly.
    #[error("Encoding error: {message}")]
    Encoding {
        /// Description of the decoding failure.
        message: String,
    },

    /// A whole subtitle file failed to parse structurally.
    ///
    /// A malformed *individual* cue inside an otherwise-readable file is
    /// logged and skipped, not raised through this variant.
    #[error("Format error [{format}]: {message}")]
    Format {
        /// The subtitle format involved (e.g. "SRT", "ASS").
        format: String,
        /// Detailed error message.
        message: String,
    },

    /// A caller-supplied offset or timestamp string could not be parsed.
    #[error("Timing error: {message}")]
    Timing {
        /// Description of the parse failure.
        message: String,
    },

    /// The merger or splitter was given no usable input.
    #[error("Empty inputs: {message}")]
    EmptyInputs {
        /// Description of which input was empty.
        message: String,
    },

    /// The realigner was given an empty source or reference track.
    #[error("No events: {message}")]
    NoEvents {
        /// Description of which track was empty.
        message: String,
    },

    /// The requested output format has no writer.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The format that was requested.
        format: String,
    },

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Catch-all for ambient glue (CLI argument plumbing, config-loading
    /// failures) that does not belong to a typed core variant.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Convert file-discovery errors (directory traversal) to a format error,
/// since a broken directory walk means the batch orchestrator cannot see
/// the files it was asked to process.
impl From<walkdir::Error> for SubtitleError {
    fn from(err: walkdir::Error) -> Self {
        SubtitleError::Format {
            format: "batch".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for SubtitleError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => SubtitleError::Config {
                message: format!("configuration file not found: {path}"),
            },
            config::ConfigError::Message(msg) => SubtitleError::Config { message: msg },
            other => SubtitleError::Config {
                message: format!("configuration error: {other}"),
            },
        }
    }
}

/// Specialized `Result` type for subtitle operations.
pub type SubtitleResult<T> = Result<T, SubtitleError>;

impl SubtitleError {
    /// Create an encoding error with the given message.
    pub fn encoding<S: Into<String>>(message: S) -> Self {
        SubtitleError::Encoding {
            message: message.into(),
        }
    }

    /// Create a format error for the given format and message.
    pub fn format<S1, S2>(format: S1, message: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        SubtitleError::Format {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create a timing error with the given message.
    pub fn timing<S: Into<String>>(message: S) -> Self {
        SubtitleError::Timing {
            message: message.into(),
        }
    }

    /// Create an empty-inputs error with the given message.
    pub fn empty_inputs<S: Into<String>>(message: S) -> Self {
        SubtitleError::EmptyInputs {
            message: message.into(),
        }
    }

    /// Create a no-events error with the given message.
    pub fn no_events<S: Into<String>>(message: S) -> Self {
        SubtitleError::NoEvents {
            message: message.into(),
        }
    }

    /// Create an unsupported-format error for the given format.
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        SubtitleError::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a configuration error with the given message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        SubtitleError::Config {
            message: message.into(),
        }
    }

    /// Return the exit code this error should cause the process to exit with.
    ///
    /// 0 is reserved for success and never returned here; 1 marks an
    /// operational failure, 2 a usage error (a caller gave the library a
    /// malformed argument rather than the library encountering bad data).
    pub fn exit_code(&self) -> i32 {
        match self {
            SubtitleError::Io(_) => 1,
            SubtitleError::Encoding { .. } => 1,
            SubtitleError::Format { .. } => 1,
            SubtitleError::Timing { .. } => 2,
            SubtitleError::EmptyInputs { .. } => 1,
            SubtitleError::NoEvents { .. } => 1,
            SubtitleError::UnsupportedFormat { .. } => 2,
            SubtitleError::Config { .. } => 2,
            SubtitleError::Other(_) => 1,
        }
    }

    /// Return a user-friendly error message with a suggested remedy.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SubtitleError::Io(e) => format!("File operation error: {e}"),
            SubtitleError::Encoding { message } => format!(
                "Encoding error: {message}\nHint: the file may use an encoding outside the supported set"
            ),
            SubtitleError::Format { format, message } => format!(
                "Subtitle format error [{format}]: {message}\nHint: check the file structure and timestamps"
            ),
            SubtitleError::Timing { message } => format!(
                "Timing error: {message}\nHint: offsets accept plain ms, `Xms`, `X.Ys`, or an SRT timestamp"
            ),
            SubtitleError::EmptyInputs { message } => format!("Empty inputs: {message}"),
            SubtitleError::NoEvents { message } => format!("No events: {message}"),
            SubtitleError::UnsupportedFormat { format } => {
                format!("Unsupported format: {format}\nHint: supported formats are srt, vtt, ass, ssa")
            }
            SubtitleError::Config { message } => format!("Configuration error: {message}"),
            SubtitleError::Other(err) => format!("Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_encoding_error_creation() {
        let error = SubtitleError::encoding("cannot decode");
        assert!(matches!(error, SubtitleError::Encoding { .. }));
        assert_eq!(error.to_string(), "Encoding error: cannot decode");
    }

    #[test]
    fn test_format_error_creation() {
        let error = SubtitleError::format("ASS", "missing [Events]");
        let msg = error.to_string();
        assert!(msg.contains("ASS"));
        assert!(msg.contains("missing [Events]"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SubtitleError = io_error.into();
        assert!(matches!(err, SubtitleError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SubtitleError::config("x").exit_code(), 2);
        assert_eq!(SubtitleError::timing("bad offset").exit_code(), 2);
        assert_eq!(SubtitleError::unsupported_format("xyz").exit_code(), 2);
        assert_eq!(SubtitleError::no_events("source empty").exit_code(), 1);
        assert_eq!(SubtitleError::empty_inputs("both empty").exit_code(), 1);
    }

    #[test]
    fn test_user_friendly_messages() {
        let err = SubtitleError::unsupported_format("xyz");
        let message = err.user_friendly_message();
        assert!(message.contains("Unsupported format: xyz"));
        assert!(message.contains("srt, vtt, ass, ssa"));
    }
}
