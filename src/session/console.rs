//! Interactive menus
//!
//! The watchlist menu is the main loop; the library menu is entered from
//! it and returns to it. Failed operations are reported and the menu is
//! shown again. End of input behaves like choosing quit.

use super::prompt::Prompt;
use super::{Placement, Session};
use crate::config::expand_path;
use crate::error::WatchlistError;
use crate::model::{Direction, MovieList};
use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

const PAGE_BREAK_WIDTH: usize = 92;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchlistOption {
    Print,
    ShowDuration,
    Search,
    MoveUp,
    MoveDown,
    Remove,
    Save,
    Load,
    GoToLibrary,
    Quit,
}

impl WatchlistOption {
    const MENU: &'static str = "*** Watchlist Menu ***
 1) Print watchlist
 2) Show duration
 3) Search by title
 4) Move a movie up
 5) Move a movie down
 6) Remove a movie
 7) Save watchlist
 8) Load watchlist
 9) Go to movie library
10) Quit
";

    fn from_choice(choice: usize) -> Option<Self> {
        Some(match choice {
            1 => Self::Print,
            2 => Self::ShowDuration,
            3 => Self::Search,
            4 => Self::MoveUp,
            5 => Self::MoveDown,
            6 => Self::Remove,
            7 => Self::Save,
            8 => Self::Load,
            9 => Self::GoToLibrary,
            10 => Self::Quit,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LibraryOption {
    ViewAll,
    Search,
    AddToWatchlist,
    Back,
}

impl LibraryOption {
    const MENU: &'static str = "*** Library Menu ***
1) View all movies
2) Search by title
3) Add a movie to watchlist
4) Back to watchlist
";

    fn from_choice(choice: usize) -> Option<Self> {
        Some(match choice {
            1 => Self::ViewAll,
            2 => Self::Search,
            3 => Self::AddToWatchlist,
            4 => Self::Back,
            _ => return None,
        })
    }
}

const ADD_MENU: &str = "*** Add Movie Menu ***
 1) Add to beginning
 2) Add to end
 3) Insert at a position
";

/// Whether the menus keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over a [`Session`]
pub struct Console<R, W> {
    session: Session,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            prompt: Prompt::new(input, output),
        }
    }

    /// Run the watchlist menu until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.prompt.out(), "{}", WatchlistOption::MENU)?;

            let Some(choice) = self.prompt.number(1, 10, "Enter a menu choice: ")? else {
                break;
            };
            writeln!(self.prompt.out())?;

            let Some(option) = WatchlistOption::from_choice(choice) else {
                continue;
            };
            if option == WatchlistOption::Quit {
                break;
            }

            if self.handle_watchlist_option(option)? == Flow::Exit {
                break;
            }
            self.page_break()?;
        }

        log::debug!("Leaving the watchlist menu");
        Ok(())
    }

    /// Give back the session and the output writer
    pub fn into_inner(self) -> (Session, W) {
        let (_, output) = self.prompt.into_inner();
        (self.session, output)
    }

    fn handle_watchlist_option(&mut self, option: WatchlistOption) -> Result<Flow> {
        match option {
            WatchlistOption::Print => {
                print_list(self.prompt.out(), self.session.watchlist(), "watchlist")?;
            }
            WatchlistOption::ShowDuration => {
                if self.session.watchlist().is_empty() {
                    self.say("The watchlist is empty.")?;
                } else {
                    let hours = self.session.watchlist_duration();
                    self.say(format!("Duration is {:.2} hours.", hours))?;
                }
            }
            WatchlistOption::Search => {
                let Some(title) = self.ask("Enter a title to search: ")? else {
                    return Ok(Flow::Exit);
                };
                let position = self.session.watchlist().position_of_title(&title);
                self.report_search(&title, position, "watchlist")?;
            }
            WatchlistOption::MoveUp => return self.move_movie(Direction::Up),
            WatchlistOption::MoveDown => return self.move_movie(Direction::Down),
            WatchlistOption::Remove => {
                let Some(title) = self.ask("Enter the title of the movie to remove: ")? else {
                    return Ok(Flow::Exit);
                };
                match self.session.return_to_library(&title) {
                    Ok(_) => self.say(format!("{} returned to the library.", title))?,
                    Err(WatchlistError::TitleNotFound(_)) => self.say(format!(
                        "{} not found in the watchlist. Please search for movies before attempting to remove.",
                        title
                    ))?,
                    Err(e) => self.say(format!("Could not remove {}: {}", title, e))?,
                }
            }
            WatchlistOption::Save => {
                let Some(name) = self.ask("Enter the name of the file to save watchlist to: ")?
                else {
                    return Ok(Flow::Exit);
                };
                let path = expand_path(&name);
                match self.session.save_watchlist(&path) {
                    Ok(()) => self.say(format!("Watchlist saved to {}.", path.display()))?,
                    Err(WatchlistError::EmptyList) => {
                        self.say("The watchlist is empty, nothing to save.")?
                    }
                    Err(e) => self.say(format!("Could not save watchlist: {}", e))?,
                }
            }
            WatchlistOption::Load => {
                let Some(name) =
                    self.ask("Enter the name of the file to read the watchlist from: ")?
                else {
                    return Ok(Flow::Exit);
                };
                let path = expand_path(&name);
                match self.session.load_watchlist(&path) {
                    Ok(count) => self.say(format!("Loaded {} movies into the watchlist.", count))?,
                    Err(e) => self.say(format!("Could not load watchlist: {}", e))?,
                }
            }
            WatchlistOption::GoToLibrary => {
                self.page_break()?;
                return self.run_library();
            }
            WatchlistOption::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn move_movie(&mut self, direction: Direction) -> Result<Flow> {
        let (word, edge) = match direction {
            Direction::Up => ("up", "top"),
            Direction::Down => ("down", "bottom"),
        };

        let Some(title) = self.ask(&format!("Enter the title of the movie to move {}: ", word))?
        else {
            return Ok(Flow::Exit);
        };

        match self.session.move_in_watchlist(&title, direction) {
            Ok(true) => self.say(format!("{} moved {}.", title, word))?,
            Ok(false) => self.say(format!("{} is already at the {}.", title, edge))?,
            Err(WatchlistError::TitleNotFound(_)) => self.say(format!(
                "{} not found in the watchlist. Please search for movies before attempting to move.",
                title
            ))?,
            Err(e) => self.say(format!("Could not move {}: {}", title, e))?,
        }

        Ok(Flow::Continue)
    }

    fn run_library(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.prompt.out(), "{}", LibraryOption::MENU)?;

            let Some(choice) = self.prompt.number(1, 4, "Enter a menu choice: ")? else {
                return Ok(Flow::Exit);
            };
            writeln!(self.prompt.out())?;

            let flow = match LibraryOption::from_choice(choice) {
                Some(LibraryOption::Back) | None => return Ok(Flow::Continue),
                Some(LibraryOption::ViewAll) => {
                    print_list(self.prompt.out(), self.session.library(), "library")?;
                    Flow::Continue
                }
                Some(LibraryOption::Search) => match self.ask("Enter a title to search: ")? {
                    Some(title) => {
                        let position = self.session.library().position_of_title(&title);
                        self.report_search(&title, position, "library")?;
                        Flow::Continue
                    }
                    None => Flow::Exit,
                },
                Some(LibraryOption::AddToWatchlist) => {
                    self.page_break()?;
                    self.add_movie()?
                }
            };

            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
            self.page_break()?;
        }
    }

    fn add_movie(&mut self) -> Result<Flow> {
        let Some(title) = self.ask("Enter the title of the movie to add: ")? else {
            return Ok(Flow::Exit);
        };

        if self.session.library().search_by_title(&title).is_none() {
            self.say(format!(
                "{} not found in the library. Please search for movies before attempting to add.",
                title
            ))?;
            return Ok(Flow::Continue);
        }

        writeln!(self.prompt.out(), "{}", ADD_MENU)?;
        let Some(choice) = self.prompt.number(1, 3, "Enter how you'd like to add: ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.prompt.out())?;

        let placement = match choice {
            1 => Placement::Beginning,
            2 => Placement::End,
            _ => {
                let max = self.session.watchlist().len().max(1);
                let question = format!("Enter a position from 1 to {} to add the movie: ", max);
                let Some(position) = self.prompt.number(1, max, &question)? else {
                    return Ok(Flow::Exit);
                };
                writeln!(self.prompt.out())?;
                Placement::At(position - 1)
            }
        };

        match self.session.add_to_watchlist(&title, placement) {
            Ok(_) => self.say(format!("{} added to the watchlist.", title))?,
            Err(e) => self.say(format!("Could not add {}: {}", title, e))?,
        }

        Ok(Flow::Continue)
    }

    fn report_search(&mut self, title: &str, position: Option<usize>, name: &str) -> Result<()> {
        match position {
            Some(index) => self.say(format!(
                "{} found in the {} at position {}.",
                title,
                name,
                index + 1
            )),
            None => self.say(format!("{} not found in the {}.", title, name)),
        }
    }

    /// Prompt for a line followed by a blank line
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer = self.prompt.line(question)?;
        writeln!(self.prompt.out())?;
        Ok(answer)
    }

    /// Print a message followed by a blank line
    fn say(&mut self, message: impl Display) -> Result<()> {
        let out = self.prompt.out();
        writeln!(out, "{}", message)?;
        writeln!(out)?;
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        let out = self.prompt.out();
        writeln!(out, "{}", "*".repeat(PAGE_BREAK_WIDTH))?;
        writeln!(out)?;
        Ok(())
    }
}

fn print_list<W: Write>(out: &mut W, list: &MovieList, name: &str) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "The {} is empty.", name)?;
    } else {
        for movie in list {
            writeln!(out, "{}", movie)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use std::io::Cursor;

    fn session() -> Session {
        let mut library = MovieList::new();
        for (title, genre, hours) in [
            ("Inception", "Sci-Fi", 2.5),
            ("Alien", "Horror", 1.95),
            ("Up", "Animation", 1.6),
        ] {
            library.push_back(Movie::new(title, genre, hours).unwrap()).unwrap();
        }
        Session::new(library)
    }

    /// Run a scripted console and return the final session and output
    fn run_script(script: &str) -> (Session, String) {
        let mut console = Console::new(session(), Cursor::new(script.as_bytes().to_vec()), Vec::new());
        console.run().unwrap();
        let (session, out) = console.into_inner();
        (session, String::from_utf8(out).unwrap())
    }

    fn titles(list: &MovieList) -> Vec<&str> {
        list.iter().map(Movie::title).collect()
    }

    #[test]
    fn test_quit_immediately() {
        let (session, out) = run_script("10\n");
        assert!(out.contains("*** Watchlist Menu ***"));
        assert_eq!(session.library().len(), 3);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_, out) = run_script("");
        assert!(out.ends_with("Enter a menu choice: "));
    }

    #[test]
    fn test_add_from_library_then_print() {
        // library, add Alien to end, add Up to beginning, back, print, quit
        let script = "9\n3\nAlien\n2\n3\nUp\n1\n4\n1\n10\n";
        let (session, out) = run_script(script);

        assert_eq!(titles(session.watchlist()), vec!["Up", "Alien"]);
        assert_eq!(titles(session.library()), vec!["Inception"]);
        assert!(out.contains("Alien added to the watchlist."));
        assert!(out.contains("Up (Animation, 1.60 hours)\nAlien (Horror, 1.95 hours)\n"));
    }

    #[test]
    fn test_insert_at_position() {
        // add Alien, add Up, then insert Inception at position 2
        let script = "9\n3\nAlien\n2\n3\nUp\n2\n3\nInception\n3\n2\n4\n10\n";
        let (session, out) = run_script(script);

        assert!(out.contains("Enter a position from 1 to 2 to add the movie: "));
        assert_eq!(titles(session.watchlist()), vec!["Alien", "Inception", "Up"]);
    }

    #[test]
    fn test_insert_into_empty_watchlist() {
        let script = "9\n3\nUp\n3\n1\n4\n10\n";
        let (session, _) = run_script(script);
        assert_eq!(titles(session.watchlist()), vec!["Up"]);
    }

    #[test]
    fn test_add_unknown_title() {
        let script = "9\n3\nHeat\n4\n10\n";
        let (session, out) = run_script(script);
        assert!(out.contains("Heat not found in the library."));
        assert!(session.watchlist().is_empty());
    }

    #[test]
    fn test_move_remove_and_duration() {
        // add all three to the end, move Up up twice, remove Alien, show duration
        let script = "9\n3\nInception\n2\n3\nAlien\n2\n3\nUp\n2\n4\n\
                      4\nUp\n4\nUp\n4\nUp\n6\nAlien\n2\n10\n";
        let (session, out) = run_script(script);

        assert_eq!(titles(session.watchlist()), vec!["Up", "Inception"]);
        assert_eq!(titles(session.library()), vec!["Alien"]);
        assert!(out.contains("Up is already at the top."));
        assert!(out.contains("Alien returned to the library."));
        assert!(out.contains("Duration is 4.10 hours."));
    }

    #[test]
    fn test_search_reports_position() {
        let script = "9\n2\nAlien\n2\nHeat\n4\n3\nAlien\n10\n";
        let (_, out) = run_script(script);

        assert!(out.contains("Alien found in the library at position 2."));
        assert!(out.contains("Heat not found in the library."));
        assert!(out.contains("Alien not found in the watchlist."));
    }

    #[test]
    fn test_empty_watchlist_messages() {
        let script = "1\n2\n5\nAlien\n7\nout.txt\n10\n";
        let (_, out) = run_script(script);

        assert!(out.contains("The watchlist is empty.\n"));
        assert!(out.contains("Alien not found in the watchlist. Please search for movies"));
        assert!(out.contains("The watchlist is empty, nothing to save."));
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let (_, out) = run_script("0\nabc\n10\n");
        assert_eq!(out.matches("An integer between 1 and 10 was expected.").count(), 2);
    }
}
