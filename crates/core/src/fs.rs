//! Filesystem utilities

use std::path::Path;

use log::{debug, warn};

/// Check if a path exists
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Check if a path points at a regular file
///
/// Logs a warning when the path exists but is something else (e.g. a directory),
/// which is the usual mistake when pointing the service at its store.
pub fn is_file(path: &str) -> bool {
    let path = Path::new(path);
    if path.is_file() {
        debug!("Found file: {}", path.display());
        return true;
    }
    if path.exists() {
        warn!("Path exists but is not a file: {}", path.display());
    }
    false
}
