// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use log::{info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, ValueEnum};

use subconv::app_config::{self, Config};
use subconv::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// subconv - convert subtitles between JSON and SRT
///
/// The direction is chosen from the file extensions.
#[derive(Parser, Debug)]
#[command(name = "subconv")]
#[command(version)]
#[command(about = "Convert subtitles between JSON and SRT/ASS")]
#[command(long_about = "Converts a JSON subtitle document to SRT, or an SRT/ASS file to a JSON subtitle document.
The direction is chosen from the input and output extensions (case-insensitive).

EXAMPLES:
    subconv input.json output.srt               # JSON to SRT
    subconv movie.srt movie.json                # SRT to JSON
    subconv episode.ass episode.json            # ASS to JSON
    subconv -c styling.json movie.srt out.json  # Custom styling for JSON output

SUPPORTED CONVERSIONS:
    .json         -> .srt
    .srt, .ass    -> .json")]
struct CommandLineOptions {
    /// Input subtitle file (.json, .srt or .ass)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output subtitle file (.srt or .json)
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Configuration file path
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Colored stderr logger, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI color for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let (tag, color) = Self::style_for_level(record.level());

        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Info until the configuration says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let options = CommandLineOptions::parse();

    // Conversion errors go to stdout; logging owns stderr
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cli_level) = &options.log_level {
        let level: app_config::LogLevel = cli_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = match &options.config_path {
        Some(path) => {
            let config = Config::load(path)?;
            config.validate().context("Configuration validation failed")?;
            debug!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::default(),
    };

    // If log level was not set via command line, take it from config
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config);
    let count = controller.run(&options.input_path, &options.output_path)?;

    info!("Success: {:?} ({} cues)", options.output_path, count);
    Ok(())
}
