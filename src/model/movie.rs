use crate::error::{Result, WatchlistError};
use std::fmt;

/// Longest title or genre accepted, in characters
pub const MAX_FIELD_LEN: usize = 34;

/// A single movie record
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Movie title, also the lookup key
    title: String,

    /// Genre label
    genre: String,

    /// Running time in hours
    duration: f64,
}

impl Movie {
    /// Create a movie, checking that title and genre are present and fit
    /// within [`MAX_FIELD_LEN`]. Duration is stored as given.
    pub fn new(title: impl Into<String>, genre: impl Into<String>, duration: f64) -> Result<Self> {
        let title = title.into();
        let genre = genre.into();

        check_field("title", &title)?;
        check_field("genre", &genre)?;

        Ok(Self {
            title,
            genre,
            duration,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Running time in hours
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WatchlistError::MissingField(field));
    }

    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(WatchlistError::FieldTooLong {
            field,
            len,
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {:.2} hours)", self.title, self.genre, self.duration)
    }
}
