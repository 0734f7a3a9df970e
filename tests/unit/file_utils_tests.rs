/*!
 * Tests for format detection and file access
 */

use std::path::Path;
use anyhow::Result;
use subconv::errors::ConversionError;
use subconv::file_utils::{normalized_extension, FileManager, SubtitleFormat};
use crate::common;

#[test]
fn test_from_path_withMixedCaseExtensions_shouldDetectSameFormat() {
    for name in ["FILE.JSON", "file.json", "file.JsOn"] {
        assert_eq!(SubtitleFormat::from_path(name).unwrap(), SubtitleFormat::Json, "{}", name);
    }
    assert_eq!(SubtitleFormat::from_path("movie.SRT").unwrap(), SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_path("/tmp/dir.v2/episode.Ass").unwrap(), SubtitleFormat::Ass);
}

#[test]
fn test_from_path_withUnknownExtension_shouldNameIt() {
    match SubtitleFormat::from_path("notes.TXT") {
        Err(ConversionError::UnsupportedFormat { extension }) => assert_eq!(extension, ".txt"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_from_path_withNoExtension_shouldReportEmptyExtension() {
    match SubtitleFormat::from_path("README") {
        Err(ConversionError::UnsupportedFormat { extension }) => assert_eq!(extension, ""),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_normalized_extension_withMultipleDots_shouldUseLastOne() {
    assert_eq!(normalized_extension(Path::new("show.en.SRT")), ".srt");
}

#[test]
fn test_is_subtitle_text_shouldCoverSrtAndAss() {
    assert!(SubtitleFormat::Srt.is_subtitle_text());
    assert!(SubtitleFormat::Ass.is_subtitle_text());
    assert!(!SubtitleFormat::Json.is_subtitle_text());
}

#[test]
fn test_read_bytes_withMissingFile_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.json");

    let err = FileManager::read_bytes(&missing).unwrap_err();
    assert!(matches!(err, ConversionError::Read { ref path, .. } if path == &missing));
    Ok(())
}

#[test]
fn test_read_to_string_withInvalidUtf8_shouldReplaceBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.srt");
    std::fs::write(&path, b"caf\xE9")?;

    assert_eq!(FileManager::read_to_string(&path)?, "caf\u{FFFD}");
    Ok(())
}

#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "out.json", "a much longer previous content")?;

    FileManager::write_to_file(&path, b"{}")?;

    assert_eq!(std::fs::read_to_string(&path)?, "{}");
    Ok(())
}

#[test]
fn test_write_to_file_withMissingDirectory_shouldReturnWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("no_such_dir").join("out.json");

    let err = FileManager::write_to_file(&path, b"{}").unwrap_err();
    assert!(matches!(err, ConversionError::Write { .. }));
    Ok(())
}
