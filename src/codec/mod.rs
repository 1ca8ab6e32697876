//! Plain-text movie files
//!
//! Each movie takes three lines: title, genre and duration in hours with
//! two decimals. There is no header or count; the file simply ends after
//! the last movie. The library and saved watchlists share this format.

mod reader;
mod writer;

pub use reader::read_movies;
pub use writer::write_movies;

use crate::error::{Result, WatchlistError};
use crate::model::MovieList;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Load a movie file into a new list
pub fn load(path: &Path) -> Result<MovieList> {
    log::info!("Loading movies from {:?}", path);

    let file = File::open(path).map_err(|source| WatchlistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let list = read_movies(BufReader::new(file))?;

    log::info!("Loaded {} movies from {:?}", list.len(), path);
    Ok(list)
}

/// Save a list to a movie file, replacing any existing file
pub fn save(list: &MovieList, path: &Path) -> Result<()> {
    if list.is_empty() {
        return Err(WatchlistError::EmptyList);
    }

    let file = File::create(path).map_err(|source| WatchlistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    write_movies(list, BufWriter::new(file))?;

    log::info!("Saved {} movies to {:?}", list.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::Movie;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("watchlist.txt");

        let mut list = MovieList::new();
        list.push_back(Movie::new("Inception", "Sci-Fi", 2.456).unwrap()).unwrap();
        list.push_back(Movie::new("Heat", "Crime", 2.83).unwrap()).unwrap();
        save(&list, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 2);

        let first = loaded.find("Inception").unwrap();
        assert_eq!(first.genre(), "Sci-Fi");
        assert_eq!(first.duration(), 2.46);
        assert_eq!(loaded.position_of_title("Heat"), Some(1));
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("watchlist.txt");
        fs::write(&path, "Old\nStuff\n1.00\nMore\nStuff\n2.00\n").unwrap();

        let mut list = MovieList::new();
        list.push_back(Movie::new("New", "Drama", 1.5).unwrap()).unwrap();
        save(&list, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "New\nDrama\n1.50\n");
    }

    #[test]
    fn test_save_empty_list_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("watchlist.txt");

        let err = save(&MovieList::new(), &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = load(&temp_dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_save_into_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("no-such-dir").join("watchlist.txt");

        let mut list = MovieList::new();
        list.push_back(Movie::new("Heat", "Crime", 2.83).unwrap()).unwrap();

        let err = save(&list, &path).unwrap_err();
        assert!(matches!(err, WatchlistError::Open { .. }));
    }
}
