//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/semicell/config.yaml`. Every field
//! has a default, so a partial file is fine and a broken one is ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grid::{SortStrategy, DEFAULT_DELIMITER};
use crate::locale::Locale;

/// Sorting preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub strategy: SortStrategy,
}

/// Cell editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditConfig {
    /// Escape discards the edit instead of committing it
    #[serde(default = "default_true")]
    pub escape_cancels: bool,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            escape_cancels: true,
        }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected theme id (e.g., "default-light", "default-dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Language for notices and status messages
    #[serde(default)]
    pub language: Locale,

    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Logical pixel width of every column
    #[serde(default = "default_column_width")]
    pub column_width: u32,

    /// Logical font size
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Explicit font file; a system monospace font is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,

    #[serde(default)]
    pub sort: SortConfig,

    #[serde(default)]
    pub edit: EditConfig,
}

fn default_theme() -> String {
    "default-light".to_string()
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER as char
}

fn default_column_width() -> u32 {
    100
}

fn default_font_size() -> f32 {
    14.0
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: Locale::default(),
            delimiter: default_delimiter(),
            column_width: default_column_width(),
            font_size: default_font_size(),
            font_path: None,
            sort: SortConfig::default(),
            edit: EditConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Delimiter as a csv byte. Non-ASCII delimiters fall back to `;`.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() && !matches!(self.delimiter, '"' | '\n' | '\r') {
            self.delimiter as u8
        } else {
            tracing::warn!(
                "Unsupported delimiter {:?}, using {:?}",
                self.delimiter,
                DEFAULT_DELIMITER as char
            );
            DEFAULT_DELIMITER
        }
    }
}
