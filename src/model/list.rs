//! Ordered movie collection
//!
//! Movies live in an arena of slots linked in both directions by index.
//! Each insert hands out a [`MovieHandle`] that identifies that particular
//! movie for as long as it stays in the list. Freed slots are recycled with
//! a bumped generation, so a handle to a removed movie never resolves to
//! whatever takes its slot later.

use super::Movie;
use crate::error::{Result, WatchlistError};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of one movie inside one [`MovieList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieHandle {
    list: u64,
    slot: usize,
    generation: u32,
}

/// Direction for [`MovieList::move_adjacent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the head
    Up,
    /// Towards the tail
    Down,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    movie: Option<Movie>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered sequence of movies
#[derive(Debug)]
pub struct MovieList {
    /// Distinguishes handles issued by different lists
    id: u64,

    slots: Vec<Slot>,

    /// Vacant slot indices available for reuse
    free: Vec<usize>,

    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl MovieList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of movies
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a movie before the one currently at `position` (zero-based).
    ///
    /// `position == len()` appends. Anything larger is rejected and the
    /// movie is dropped, so callers moving a movie from another list should
    /// check the position first.
    pub fn insert_at(&mut self, movie: Movie, position: usize) -> Result<MovieHandle> {
        if position > self.len {
            return Err(WatchlistError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }

        let before = self.slot_at(position);
        log::debug!("Inserting {:?} at position {}", movie.title(), position);

        let index = self.allocate(movie)?;
        self.link_before(index, before);
        Ok(self.handle(index))
    }

    /// Insert a movie at the head
    pub fn push_front(&mut self, movie: Movie) -> Result<MovieHandle> {
        self.insert_at(movie, 0)
    }

    /// Append a movie at the tail
    pub fn push_back(&mut self, movie: Movie) -> Result<MovieHandle> {
        log::debug!("Appending {:?}", movie.title());

        let index = self.allocate(movie)?;
        self.link_before(index, None);
        Ok(self.handle(index))
    }

    /// Detach a movie and hand it back to the caller
    pub fn remove(&mut self, handle: MovieHandle) -> Result<Movie> {
        if self.is_empty() {
            return Err(WatchlistError::EmptyList);
        }

        let index = self.resolve(handle).ok_or(WatchlistError::StaleHandle)?;
        self.unlink(index);
        let movie = self.release(index).ok_or(WatchlistError::StaleHandle)?;

        log::debug!("Removed {:?}", movie.title());
        Ok(movie)
    }

    /// Remove a movie and drop it
    pub fn delete(&mut self, handle: MovieHandle) -> Result<()> {
        let movie = self.remove(handle)?;
        log::debug!("Deleted {:?}", movie.title());
        Ok(())
    }

    /// Drop every movie
    pub fn clear(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(WatchlistError::EmptyList);
        }

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.movie.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                slot.prev = None;
                slot.next = None;
                self.free.push(index);
            }
        }

        log::debug!("Cleared {} movies", self.len);
        self.head = None;
        self.tail = None;
        self.len = 0;
        Ok(())
    }

    /// Handle of the first movie with exactly this title
    pub fn search_by_title(&self, title: &str) -> Option<MovieHandle> {
        self.entries()
            .find(|(_, movie)| movie.title() == title)
            .map(|(handle, _)| handle)
    }

    /// First movie with exactly this title
    pub fn find(&self, title: &str) -> Option<&Movie> {
        self.iter().find(|movie| movie.title() == title)
    }

    /// Look up a movie by handle
    pub fn get(&self, handle: MovieHandle) -> Option<&Movie> {
        self.resolve(handle)
            .and_then(|index| self.slots[index].movie.as_ref())
    }

    /// Zero-based position of the first movie with this title
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.iter().position(|movie| movie.title() == title)
    }

    /// Zero-based position of a movie by handle
    pub fn position_of(&self, handle: MovieHandle) -> Option<usize> {
        let index = self.resolve(handle)?;
        self.slot_indices().position(|i| i == index)
    }

    /// Sum of all durations in hours
    pub fn total_duration(&self) -> f64 {
        self.iter().map(Movie::duration).sum()
    }

    /// Swap the first movie titled `title` with its neighbour.
    ///
    /// Returns `Ok(false)` when the movie is already at the head (moving up)
    /// or the tail (moving down).
    pub fn move_adjacent(&mut self, title: &str, direction: Direction) -> Result<bool> {
        let handle = self
            .search_by_title(title)
            .ok_or_else(|| WatchlistError::TitleNotFound(title.to_string()))?;

        let moved = self.shift(handle, direction)?;
        if moved {
            log::debug!("Moved {:?} {:?}", title, direction);
        } else {
            log::debug!("{:?} already at the edge, not moving {:?}", title, direction);
        }
        Ok(moved)
    }

    /// Swap a movie with its neighbour by handle; see [`Self::move_adjacent`]
    pub fn shift(&mut self, handle: MovieHandle, direction: Direction) -> Result<bool> {
        let index = self.resolve(handle).ok_or(WatchlistError::StaleHandle)?;

        match direction {
            Direction::Up => {
                let Some(prev) = self.slots[index].prev else {
                    return Ok(false);
                };
                self.unlink(index);
                self.link_before(index, Some(prev));
            }
            Direction::Down => {
                let Some(next) = self.slots[index].next else {
                    return Ok(false);
                };
                self.unlink(next);
                self.link_before(next, Some(index));
            }
        }

        Ok(true)
    }

    /// Replace a movie in place, returning the previous value
    pub fn replace(&mut self, handle: MovieHandle, movie: Movie) -> Result<Movie> {
        let index = self.resolve(handle).ok_or(WatchlistError::StaleHandle)?;
        self.slots[index]
            .movie
            .replace(movie)
            .ok_or(WatchlistError::StaleHandle)
    }

    /// Movies in list order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries(),
        }
    }

    /// Handles and movies in list order
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            list: self,
            cursor: self.head,
        }
    }

    /// Consume the list, returning its movies in order
    pub fn into_movies(mut self) -> Vec<Movie> {
        let order: Vec<usize> = self.slot_indices().collect();
        order
            .into_iter()
            .filter_map(|index| self.slots[index].movie.take())
            .collect()
    }

    fn handle(&self, index: usize) -> MovieHandle {
        MovieHandle {
            list: self.id,
            slot: index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, handle: MovieHandle) -> Option<usize> {
        if handle.list != self.id {
            return None;
        }

        let slot = self.slots.get(handle.slot)?;
        (slot.generation == handle.generation && slot.movie.is_some()).then_some(handle.slot)
    }

    fn slot_indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&index| self.slots[index].next)
    }

    fn slot_at(&self, position: usize) -> Option<usize> {
        self.slot_indices().nth(position)
    }

    fn allocate(&mut self, movie: Movie) -> Result<usize> {
        if let Some(index) = self.free.pop() {
            self.slots[index].movie = Some(movie);
            return Ok(index);
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| WatchlistError::OutOfMemory)?;
        self.slots.push(Slot {
            generation: 0,
            movie: Some(movie),
            prev: None,
            next: None,
        });
        Ok(self.slots.len() - 1)
    }

    fn release(&mut self, index: usize) -> Option<Movie> {
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        let movie = slot.movie.take();
        self.free.push(index);
        movie
    }

    /// Link a detached slot in front of `before`, or at the tail for `None`
    fn link_before(&mut self, index: usize, before: Option<usize>) {
        let prev = match before {
            Some(b) => self.slots[b].prev,
            None => self.tail,
        };

        self.slots[index].prev = prev;
        self.slots[index].next = before;

        match prev {
            Some(p) => self.slots[p].next = Some(index),
            None => self.head = Some(index),
        }
        match before {
            Some(b) => self.slots[b].prev = Some(index),
            None => self.tail = Some(index),
        }

        self.len += 1;
    }

    fn unlink(&mut self, index: usize) {
        let prev = self.slots[index].prev.take();
        let next = self.slots[index].next.take();

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
    }
}

impl Default for MovieList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over handles and movies, see [`MovieList::entries`]
pub struct Entries<'a> {
    list: &'a MovieList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (MovieHandle, &'a Movie);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = &self.list.slots[index];
        self.cursor = slot.next;
        let movie = slot.movie.as_ref()?;
        Some((self.list.handle(index), movie))
    }
}

/// Iterator over movies, see [`MovieList::iter`]
pub struct Iter<'a> {
    entries: Entries<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Movie;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, movie)| movie)
    }
}

impl<'a> IntoIterator for &'a MovieList {
    type Item = &'a Movie;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
