//! Application Configuration
//!
//! Configuration for the bookmark application layer.

/// Bookmark application configuration
#[derive(Debug, Clone)]
pub struct BookmarkConfig {
    /// How many times a list update is re-read and re-applied after losing
    /// a version check
    pub max_update_attempts: u32,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            max_update_attempts: 3,
        }
    }
}
