//! hlsclt configuration management.
//!
//! Loads `hls_config.yaml`, fills in defaults derived from the working
//! directory, and resolves which `solution<N>` directory commands act on.

pub mod config;
pub mod loader;
pub mod solution;

pub use config::{HdlLanguage, HlsConfig, Languages};
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use solution::resolve_solution;
