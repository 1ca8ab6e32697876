use movie_watchlist::codec;
use movie_watchlist::{
    Console, Direction, ErrorKind, Movie, MovieList, Placement, Session, SessionConfig,
};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

const LIBRARY: &str = "Inception\nSci-Fi\n2.50\n\
The Godfather\nCrime\n2.75\n\
Alien\nHorror\n1.95\n\
Spirited Away\nAnimation\n2.08\n";

/// Write the test library into a temp dir
fn write_library(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("library.txt");
    fs::write(&path, LIBRARY).expect("Failed to write library");
    path
}

fn titles(list: &MovieList) -> Vec<&str> {
    list.iter().map(Movie::title).collect()
}

#[test]
fn test_load_library() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let library = codec::load(&write_library(&temp_dir)).unwrap();

    assert_eq!(library.len(), 4);
    assert_eq!(library.position_of_title("Alien"), Some(2));
    assert!((library.total_duration() - 9.28).abs() < 1e-9);
}

#[test]
fn test_missing_library_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = SessionConfig::new(temp_dir.path().join("nothing-here.txt"));

    let err = Session::open(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.kind().exit_code(), 2);
}

#[test]
fn test_corrupt_library_fails_to_open() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("library.txt");
    let title = "An Extremely Long Title That Cannot Possibly Fit";
    fs::write(&path, format!("{}{}\nDrama\n1.00\n", LIBRARY, title)).unwrap();

    let err = Session::open(&SessionConfig::new(path)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_build_save_and_reload_watchlist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = SessionConfig::new(write_library(&temp_dir));
    let saved = temp_dir.path().join("tonight.txt");

    let mut session = Session::open(&config).unwrap();
    session.add_to_watchlist("Alien", Placement::End).unwrap();
    session.add_to_watchlist("Inception", Placement::End).unwrap();
    session.add_to_watchlist("Spirited Away", Placement::At(1)).unwrap();
    session.move_in_watchlist("Inception", Direction::Up).unwrap();
    assert_eq!(
        titles(session.watchlist()),
        vec!["Alien", "Inception", "Spirited Away"]
    );

    let total = session.library().len() + session.watchlist().len();
    assert_eq!(total, 4);

    session.save_watchlist(&saved).unwrap();
    assert_eq!(
        fs::read_to_string(&saved).unwrap(),
        "Alien\nHorror\n1.95\nInception\nSci-Fi\n2.50\nSpirited Away\nAnimation\n2.08\n"
    );

    // A fresh session picks the saved watchlist back up
    let reopened = Session::open(&config.with_watchlist(saved)).unwrap();
    assert_eq!(
        titles(reopened.watchlist()),
        vec!["Alien", "Inception", "Spirited Away"]
    );
    assert_eq!(titles(reopened.library()), vec!["The Godfather"]);
}

#[test]
fn test_console_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = SessionConfig::new(write_library(&temp_dir));
    let saved = temp_dir.path().join("saved.txt");
    let session = Session::open(&config).unwrap();

    // Go to library, add The Godfather, back; move nothing; save; quit
    let script = format!(
        "9\n3\nThe Godfather\n2\n4\n7\n{}\n10\n",
        saved.display()
    );
    let mut console = Console::new(session, Cursor::new(script.into_bytes()), Vec::new());
    console.run().unwrap();

    let (session, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("The Godfather added to the watchlist."));
    assert!(out.contains("Watchlist saved to"));
    assert_eq!(titles(session.watchlist()), vec!["The Godfather"]);

    let reloaded = codec::load(&saved).unwrap();
    assert_eq!(titles(&reloaded), vec!["The Godfather"]);
}
