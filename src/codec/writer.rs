//! Movie file writer

use crate::error::Result;
use crate::model::MovieList;
use std::io::Write;

/// Write movies in list order: title, genre, then duration with two
/// decimals, each on its own line
pub fn write_movies<W: Write>(list: &MovieList, mut writer: W) -> Result<()> {
    for movie in list {
        writeln!(writer, "{}", movie.title())?;
        writeln!(writer, "{}", movie.genre())?;
        writeln!(writer, "{:.2}", movie.duration())?;
    }

    writer.flush()?;
    Ok(())
}
