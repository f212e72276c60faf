//! Logging initialization for the daily binary.
//!
//! Always logs to the terminal; errors go to stderr. Setting
//! `LEETCODE_DAILY_LOG` to a path additionally appends to that file.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Environment variable naming an optional log file.
pub const LOG_FILE_ENV: &str = "LEETCODE_DAILY_LOG";

/// Destination for log output.
pub enum LogDestination {
    /// Write to the terminal only.
    Terminal,
    /// Write to the terminal and append to the given file.
    Both(PathBuf),
}

impl LogDestination {
    pub fn from_env() -> Self {
        match std::env::var_os(LOG_FILE_ENV) {
            Some(path) if !path.is_empty() => LogDestination::Both(PathBuf::from(path)),
            _ => LogDestination::Terminal,
        }
    }
}

pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let LogDestination::Both(path) = destination {
        if let Some(file_logger) = create_file_logger(&path, level, config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", path, err);
            None
        }
    }
}
