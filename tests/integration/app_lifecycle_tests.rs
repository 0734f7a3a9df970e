/*!
 * Integration tests for the command-line binary
 */

use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

fn run_cli(args: &[&OsStr]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_subconv")).args(args).output()?)
}

#[test]
fn test_cli_withJsonToSrt_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "Input.JSON",
        r#"{"body":[{"from":1.5,"to":3.0,"location":2,"content":"Hello"}]}"#,
    )?;
    let output = temp_dir.path().join("output.srt");

    let result = run_cli(&[input.as_os_str(), output.as_os_str()])?;

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert_eq!(fs::read_to_string(&output)?, "1\n00:00:01,500 --> 00:00:03,000\nHello\n\n");
    Ok(())
}

#[test]
fn test_cli_withUnsupportedOutput_shouldPrintErrorToStdoutAndFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "a.json", r#"{"body":[]}"#)?;
    let output = temp_dir.path().join("b.txt");

    let result = run_cli(&[input.as_os_str(), output.as_os_str()])?;

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&result.stdout).trim(), "\".txt\" file type is not supported");
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_cli_withMissingInput_shouldReportCause() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("missing.srt");
    let output = temp_dir.path().join("out.json");

    let result = run_cli(&[input.as_os_str(), output.as_os_str()])?;

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("Failed to read"));
    assert!(stdout.contains("missing.srt"));
    Ok(())
}

#[test]
fn test_cli_withWrongArgumentCount_shouldPrintUsageAndNotConvert() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "only.srt")?;

    let result = run_cli(&[input.as_os_str()])?;

    assert_eq!(result.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
    Ok(())
}

#[test]
fn test_cli_withConfigFile_shouldApplyStyling() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    let config = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r##"{"log_level": "error", "styling": {"background_color": "#000000"}, "location": 1}"##,
    )?;
    let output = temp_dir.path().join("movie.json");

    let result = run_cli(&[
        OsStr::new("--config"),
        config.as_os_str(),
        input.as_os_str(),
        output.as_os_str(),
    ])?;

    assert!(result.status.success());
    let written: serde_json::Value = serde_json::from_slice(&fs::read(&output)?)?;
    assert_eq!(written["background_color"], "#000000");
    assert_eq!(written["body"][0]["location"], 1);
    Ok(())
}

#[test]
fn test_cli_withInvalidConfig_shouldFailBeforeConverting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    let config = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"styling": {"background_alpha": 7}}"#,
    )?;
    let output = temp_dir.path().join("movie.json");

    let result = run_cli(&[OsStr::new("-c"), config.as_os_str(), input.as_os_str(), output.as_os_str()])?;

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).contains("Configuration validation failed"));
    assert!(!output.exists());
    Ok(())
}
