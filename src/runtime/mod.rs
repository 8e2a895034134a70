//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - keyboard event to message mapping
//! - `mouse` - mouse event routing with hit-testing

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
