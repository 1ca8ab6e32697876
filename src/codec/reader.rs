//! Movie file parser

use crate::error::{Result, WatchlistError};
use crate::model::{Movie, MovieList};
use std::io::BufRead;

/// Lines per movie: title, genre, duration
const LINES_PER_RECORD: usize = 3;

/// Parse movies from a reader, three lines per movie.
///
/// Trailing blank lines are ignored. A duration line that does not start
/// with a number reads as 0.0. Any record that fails validation fails the
/// whole read.
pub fn read_movies<R: BufRead>(reader: R) -> Result<MovieList> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut list = MovieList::new();

    for (index, record) in lines.chunks(LINES_PER_RECORD).enumerate() {
        let number = index + 1;
        let title = record[0].as_str();
        let genre = record.get(1).map(String::as_str).unwrap_or_default();

        let duration = match record.get(2) {
            Some(text) => parse_duration(text).unwrap_or_else(|| {
                log::warn!("Record {}: unreadable duration {:?}, using 0.00", number, text);
                0.0
            }),
            None => {
                log::warn!("Record {}: duration line missing, using 0.00", number);
                0.0
            }
        };

        let movie = Movie::new(title, genre, duration).map_err(|e| {
            WatchlistError::MalformedRecord {
                record: number,
                source: Box::new(e),
            }
        })?;

        list.push_back(movie)?;
    }

    log::debug!("Parsed {} movies", list.len());
    Ok(list)
}

/// Parse the longest numeric prefix of `text`, ignoring whatever follows
/// (so "2.5 hours" reads as 2.5). Returns `None` when there is no number.
/// Only decimal notation is recognised: `inf`, `nan` and hex floats are not.
fn parse_duration(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
