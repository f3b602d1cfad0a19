// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Deck presenter TUI.
//!
//! A terminal slideshow presenter for decks written in TOML, or generated
//! from a chess game export.
//!
//! Each deck is turned into a small document tree of elements carrying class
//! markers. The slideshow controller navigates that tree by toggling the
//! `active`, `visited` and `hidden` classes, and restarts reveal animations
//! on the items of the slide being shown. The renderer only ever reads those
//! class markers back.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, the slideshow and UI
//!   rendering.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state and keep animations moving.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Input and tick
//! threads communicate with the main thread via `std::sync::mpsc` channels.

mod commander;
mod config;
mod deck;
mod document;
mod events;
mod logging;
mod render;
mod slideshow;
mod stats;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs, io,
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    commander::Commander,
    config::AppConfig,
    deck::{Deck, load_deck},
    document::Document,
    events::{AppEvent, process_events},
    render::hit_map::HitMap,
    slideshow::Slideshow,
    stats::{calculate_stats, load_games, stats_deck},
    theme::Theme,
};

/// Present a slide deck in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Deck file to present (TOML)
    #[arg(required_unless_present = "games", conflicts_with = "games")]
    deck: Option<PathBuf>,

    /// Build a statistics deck from a chess game export (NDJSON, one game per line)
    #[arg(long, value_name = "FILE", requires = "user")]
    games: Option<PathBuf>,

    /// Player whose games are summarised
    #[arg(long)]
    user: Option<String>,

    /// Only count games created at or after this time (milliseconds since the epoch)
    #[arg(long, value_name = "MS")]
    since: Option<i64>,

    /// Write the generated deck as TOML instead of presenting it
    #[arg(long, value_name = "FILE", requires = "games")]
    export: Option<PathBuf>,
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub document: Document,
    pub slideshow: Slideshow,

    pub commander: Commander,
    pub hit_map: HitMap,

    /// Last error or informational message, cleared on the next input.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state presenting `deck`.
    pub fn new(config: AppConfig, deck: &Deck) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut document = deck.build_document();
        let mut slideshow = Slideshow::new();
        slideshow.initialize(&mut document);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            document,
            slideshow,
            commander: Commander::new(),
            hit_map: HitMap::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the deck, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config();

    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    let deck = load_presentation(&args)?;

    if let Some(path) = &args.export {
        let text = deck.to_toml().context("Failed to serialise deck")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write deck to {}", path.display()))?;
        info!("exported deck to {}", path.display());
        return Ok(());
    }

    let mut app = App::new(config, &deck);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Reads the deck named on the command line, or builds one from game
/// statistics.
fn load_presentation(args: &Args) -> Result<Deck> {
    if let (Some(games), Some(user)) = (&args.games, &args.user) {
        let games = load_games(games, args.since)
            .with_context(|| format!("Failed to read games from {}", games.display()))?;
        let stats = calculate_stats(&games, user);
        info!("{} games found for {}", stats.total_games, user);
        return Ok(stats_deck(&stats, user));
    }

    let path = args.deck.as_deref().context("No deck file given")?;
    load_deck(path).with_context(|| format!("Failed to load deck {}", path.display()))
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so slide controls can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => AppEvent::Error(format!("Terminal input error: {e}")),
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" while reveal animations play.
    let tx_tick = app.event_tx.clone();
    let tick_rate = app.config.tick_rate();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
