/*!
 * Error types for the subconv application.
 *
 * Format-level problems are reported as `SubtitleError`; the converter wraps
 * them, together with file system failures, in `ConversionError`. The
 * underlying cause is exposed through `source()` rather than repeated in the
 * message, so callers print the whole chain with `{:#}`.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or building subtitle data
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A line looked like an SRT timing line but could not be parsed
    #[error("Invalid timing line at line {line}: {content}")]
    InvalidTiming {
        /// 1-based line number in the source text
        line: usize,
        /// The offending line
        content: String,
    },

    /// The ASS script was rejected by the script parser
    #[error("Invalid ASS script: {0}")]
    Ass(String),

    /// An ASS dialogue event starts or ends before zero
    #[error("Negative time {msecs} ms in dialogue event {index}")]
    NegativeAssTime {
        index: usize,
        msecs: i64,
    },

    /// A JSON entry carries a time that is not a valid non-negative duration
    #[error("Invalid time {value} in body entry {index}")]
    InvalidTime {
        /// 1-based position of the entry in the JSON body
        index: usize,
        value: f64,
    },

    /// Malformed JSON or a JSON value of the wrong type
    #[error("Invalid JSON subtitle: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Input file missing or unreadable
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file read but its content is malformed
    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SubtitleError,
    },

    /// The converted document could not be serialized for the output path
    #[error("Failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: SubtitleError,
    },

    /// Unrecognized input or output extension, or an unsupported pairing
    #[error("\"{extension}\" file type is not supported")]
    UnsupportedFormat {
        /// Lowercased extension including its leading dot, or empty
        extension: String,
    },

    /// Output path could not be created or written
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
