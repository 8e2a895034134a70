//! Command-line argument parsing
//!
//! Supports:
//! - Opening a table at startup
//! - Overriding the delimiter and theme for one session

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// A small editor for semicolon-delimited tables
#[derive(Parser, Debug)]
#[command(
    name = "semicell",
    version,
    about = "A small editor for semicolon-delimited tables"
)]
pub struct CliArgs {
    /// Table to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Field delimiter for this session (defaults to the configured one)
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Theme id for this session
    #[arg(short = 't', long, value_name = "ID")]
    pub theme: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// File to load once the window is up
    pub initial_file: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("{} is a directory", path.display()));
            }
        }
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
                return Err(format!("unsupported delimiter {delimiter:?}"));
            }
        }

        Ok(StartupConfig {
            initial_file: self.path,
            delimiter: self.delimiter,
            theme: self.theme,
        })
    }
}

impl StartupConfig {
    /// Layer the command-line overrides on top of the loaded config.
    /// Overrides are not written back to disk.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}
