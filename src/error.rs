//! Error types for the movie collections and their text files

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by movie, list, codec and session operations
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// A required field was empty
    #[error("missing {0}")]
    MissingField(&'static str),

    /// A text field is longer than the fixed storage width
    #[error("{field} is {len} characters long, at most {max} are allowed")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Insert position past the end of the list
    #[error("position {position} is out of range for a list of {len} movies")]
    PositionOutOfRange { position: usize, len: usize },

    /// Operation requires at least one movie
    #[error("the list is empty")]
    EmptyList,

    /// Handle does not refer to a movie currently in this list
    #[error("movie is not in this list")]
    StaleHandle,

    /// No movie with this title
    #[error("\"{0}\" not found")]
    TitleNotFound(String),

    /// The list arena could not grow
    #[error("out of memory")]
    OutOfMemory,

    /// A file could not be opened
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record in a movie file failed validation
    #[error("record {record} is invalid: {source}")]
    MalformedRecord {
        record: usize,
        #[source]
        source: Box<WatchlistError>,
    },

    /// Read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of a [`WatchlistError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    OutOfMemory,
    NotFound,
    Io,
}

impl ErrorKind {
    /// Process exit status for this kind (errno values)
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::InvalidArgument => 22,
            ErrorKind::OutOfRange => 34,
            ErrorKind::OutOfMemory => 12,
            ErrorKind::NotFound => 2,
            ErrorKind::Io => 5,
        }
    }
}

impl WatchlistError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WatchlistError::MissingField(_)
            | WatchlistError::EmptyList
            | WatchlistError::StaleHandle => ErrorKind::InvalidArgument,
            WatchlistError::FieldTooLong { .. } | WatchlistError::PositionOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            WatchlistError::TitleNotFound(_) => ErrorKind::NotFound,
            WatchlistError::OutOfMemory => ErrorKind::OutOfMemory,
            WatchlistError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            WatchlistError::Open { .. } | WatchlistError::Io(_) => ErrorKind::Io,
            WatchlistError::MalformedRecord { source, .. } => source.kind(),
        }
    }
}

/// Result type for watchlist operations
pub type Result<T> = std::result::Result<T, WatchlistError>;
