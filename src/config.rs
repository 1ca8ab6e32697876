//! Session configuration

use std::path::PathBuf;

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Movie library file loaded at startup
    pub library_path: PathBuf,

    /// Watchlist file to load right after the library (None = start empty)
    pub watchlist_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(library_path: PathBuf) -> Self {
        Self {
            library_path,
            watchlist_path: None,
        }
    }

    /// Load a saved watchlist at startup
    pub fn with_watchlist(mut self, watchlist_path: PathBuf) -> Self {
        self.watchlist_path = Some(watchlist_path);
        self
    }
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).into_owned())
}
