//! Movie Watchlist - build a watchlist from a movie library file
//!
//! The library is loaded from a plain-text file; movies are moved into an
//! ordered watchlist, rearranged there, and saved in the same format.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

pub use config::SessionConfig;
pub use error::{ErrorKind, Result, WatchlistError};
pub use model::{Direction, Movie, MovieHandle, MovieList};
pub use session::{Console, Placement, Session};
