use anyhow::{Context, Result};
use clap::Parser;
use movie_watchlist::config::expand_path;
use movie_watchlist::{Console, Session, SessionConfig, WatchlistError};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "movie-watchlist")]
#[command(about = "Pick movies from a library file into an ordered watchlist", long_about = None)]
struct Args {
    /// Movie library file (three lines per movie: title, genre, hours)
    library: String,

    /// Saved watchlist to load at startup
    #[arg(short = 'w', long)]
    watchlist: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging; stdout belongs to the menus, logs go to stderr
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<WatchlistError>()
                .map(|err| err.kind().exit_code())
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = SessionConfig::new(expand_path(&args.library));
    if let Some(ref watchlist) = args.watchlist {
        config = config.with_watchlist(expand_path(watchlist));
    }

    log::info!("Loading library from {:?}", config.library_path);
    let session = Session::open(&config)?;

    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout().lock());
    console.run().context("Console session failed")?;

    let (session, _) = console.into_inner();
    log::info!(
        "Session ended with {} movies in the watchlist",
        session.watchlist().len()
    );
    Ok(())
}
