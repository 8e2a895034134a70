//! semicell - Elm-style editor for semicolon-delimited tables
//!
//! This crate provides the core types and logic for a small table editor
//! implementing the Elm Architecture pattern. The window, renderer and
//! event loop live in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod locale;
pub mod menu;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
