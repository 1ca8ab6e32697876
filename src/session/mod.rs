//! Library and watchlist owned together
//!
//! [`Session`] implements the workflows that move movies between the two
//! lists. Movies are relocated, never copied: the value removed from one
//! list is the value inserted into the other.

mod console;
mod prompt;

pub use console::Console;

use crate::codec;
use crate::config::SessionConfig;
use crate::error::{Result, WatchlistError};
use crate::model::{Direction, MovieHandle, MovieList};
use std::path::Path;

/// Where a movie lands in the watchlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Beginning,
    End,
    /// Zero-based position
    At(usize),
}

/// The library and watchlist of one user
#[derive(Debug)]
pub struct Session {
    library: MovieList,
    watchlist: MovieList,
}

impl Session {
    /// Start a session with an empty watchlist
    pub fn new(library: MovieList) -> Self {
        Self {
            library,
            watchlist: MovieList::new(),
        }
    }

    /// Load the library, then the startup watchlist if one is configured.
    ///
    /// Only a library failure is an error; a startup watchlist that cannot
    /// be loaded is logged and the session starts with an empty watchlist.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let mut session = Self::new(codec::load(&config.library_path)?);

        if let Some(ref path) = config.watchlist_path {
            if let Err(e) = session.load_watchlist(path) {
                log::warn!("Starting with an empty watchlist, {:?} not loaded: {}", path, e);
            }
        }

        log::info!(
            "Session ready: {} in library, {} in watchlist",
            session.library.len(),
            session.watchlist.len()
        );
        Ok(session)
    }

    pub fn library(&self) -> &MovieList {
        &self.library
    }

    pub fn watchlist(&self) -> &MovieList {
        &self.watchlist
    }

    /// Move a movie from the library into the watchlist
    pub fn add_to_watchlist(&mut self, title: &str, placement: Placement) -> Result<MovieHandle> {
        let handle = self
            .library
            .search_by_title(title)
            .ok_or_else(|| WatchlistError::TitleNotFound(title.to_string()))?;

        let position = match placement {
            Placement::Beginning => 0,
            Placement::End => self.watchlist.len(),
            Placement::At(position) => position,
        };

        // Checked before the library gives the movie up
        if position > self.watchlist.len() {
            return Err(WatchlistError::PositionOutOfRange {
                position,
                len: self.watchlist.len(),
            });
        }

        let movie = self.library.remove(handle)?;
        log::info!("Adding {:?} to the watchlist at position {}", title, position + 1);
        self.watchlist.insert_at(movie, position)
    }

    /// Move a movie from the watchlist back to the end of the library
    pub fn return_to_library(&mut self, title: &str) -> Result<MovieHandle> {
        let handle = self
            .watchlist
            .search_by_title(title)
            .ok_or_else(|| WatchlistError::TitleNotFound(title.to_string()))?;

        let movie = self.watchlist.remove(handle)?;
        log::info!("Returning {:?} to the library", title);
        self.library.push_back(movie)
    }

    /// Swap a watchlist movie with its neighbour
    pub fn move_in_watchlist(&mut self, title: &str, direction: Direction) -> Result<bool> {
        self.watchlist.move_adjacent(title, direction)
    }

    /// Total watchlist running time in hours
    pub fn watchlist_duration(&self) -> f64 {
        self.watchlist.total_duration()
    }

    pub fn save_watchlist(&self, path: &Path) -> Result<()> {
        codec::save(&self.watchlist, path)
    }

    /// Replace the watchlist with the contents of a file.
    ///
    /// Movies in the current watchlist go back to the library, and every
    /// loaded title is taken out of the library. A failed load changes
    /// nothing. Returns the number of movies loaded.
    pub fn load_watchlist(&mut self, path: &Path) -> Result<usize> {
        let loaded = codec::load(path)?;
        let previous = std::mem::replace(&mut self.watchlist, loaded);

        for movie in previous.into_movies() {
            self.library.push_back(movie)?;
        }

        for movie in self.watchlist.iter() {
            if let Some(handle) = self.library.search_by_title(movie.title()) {
                self.library.delete(handle)?;
            }
        }

        Ok(self.watchlist.len())
    }
}
