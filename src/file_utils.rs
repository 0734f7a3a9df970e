use std::fmt;
use std::fs;
use std::path::Path;
use crate::errors::ConversionError;

// @module: File access and extension-based format detection

/// Subtitle formats recognized by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// Custom JSON subtitle document
    Json,
    /// SubRip text
    Srt,
    /// Advanced SubStation Alpha, read only
    Ass,
}

impl SubtitleFormat {
    /// Detect the format from a path's extension, case-insensitively
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConversionError> {
        let extension = normalized_extension(path);
        match extension.as_str() {
            ".json" => Ok(Self::Json),
            ".srt" => Ok(Self::Srt),
            ".ass" => Ok(Self::Ass),
            _ => Err(ConversionError::UnsupportedFormat { extension }),
        }
    }

    /// True for the text subtitle formats (SRT and ASS)
    pub fn is_subtitle_text(&self) -> bool {
        matches!(self, Self::Srt | Self::Ass)
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Srt => write!(f, "SRT"),
            Self::Ass => write!(f, "ASS"),
        }
    }
}

/// Lowercased extension with its leading dot, or an empty string when the
/// file name has none
pub fn normalized_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Read a whole input file
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ConversionError> {
        let path = path.as_ref();
        fs::read(path).map_err(|source| ConversionError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a whole input file as text; invalid UTF-8 is replaced rather than rejected
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, ConversionError> {
        let bytes = Self::read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write the whole output, creating the file or truncating an existing one
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<(), ConversionError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| ConversionError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
