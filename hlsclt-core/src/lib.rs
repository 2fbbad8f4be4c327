pub mod command_stream;
pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod platform;

// Re-export the process helpers most callers need
pub use command_stream::{is_tool_installed, run_silent, spawn_detached};
