//! Movie records and the ordered collection that holds them
//!
//! Both the library and the watchlist are a [`MovieList`]; nothing here
//! knows which is which.

mod list;
mod movie;

pub use list::{Direction, Entries, Iter, MovieHandle, MovieList};
pub use movie::{Movie, MAX_FIELD_LEN};
