//! Configuration module
//!
//! Handles loading and validating the application settings from TOML files
//! and environment variables, and describes the plugin's defaults file.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
