//! SurfsUp Core Library
//!
//! Shared utilities for the climate API:
//! - Configuration loading (XDG-compliant)
//! - File system checks for the pre-populated store
//! - Application defaults

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{is_file, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "surfsup";

/// Default API port
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the pre-populated observations store
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";

/// Station with the most historical recordings in the Hawaii dataset
pub const DEFAULT_MOST_ACTIVE_STATION: &str = "USC00519281";
