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

//! The `:` command line.
//!
//! Pressing `:` opens a single-line input at the bottom of the screen. While
//! it is open every key goes to the input; Enter runs the command and Esc
//! closes the line.
//!
//! | command          | effect                         |
//! |------------------|--------------------------------|
//! | `q`, `quit`      | exit                           |
//! | `first`, `last`  | jump to the first / last slide |
//! | `<n>`            | jump to slide `n` (1-based)    |
//! | `restart`        | re-initialize the slideshow    |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers `event` to the command line, returning `true` if it was
    /// consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    event_tx.send(parse_command(&buffer))?;
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

fn parse_command(buffer: &str) -> AppEvent {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["first"] => AppEvent::ShowSlide(0),
        ["last"] => AppEvent::ShowLastSlide,
        ["restart"] => AppEvent::Restart,

        [word] => match word.parse::<isize>() {
            Ok(number) => AppEvent::ShowSlide(number - 1),
            Err(_) => AppEvent::Error(format!("Unknown command: {}", word)),
        },

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {}", cmd)),

        [] => AppEvent::Tick,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_command(commander: &mut Commander, tx: &Sender<AppEvent>, text: &str) {
        commander.handle_event(&key(KeyCode::Char(':')), tx).unwrap();
        for c in text.chars() {
            commander.handle_event(&key(KeyCode::Char(c)), tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), tx).unwrap();
    }

    #[test]
    fn inactive_commander_ignores_other_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.handle_event(&key(KeyCode::Right), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());
    }

    #[test]
    fn slide_numbers_are_one_based() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        type_command(&mut commander, &tx, "3");

        assert!(matches!(rx.try_recv(), Ok(AppEvent::ShowSlide(2))));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn named_commands_parse() {
        assert!(matches!(parse_command("q"), AppEvent::ExitApplication));
        assert!(matches!(parse_command("first"), AppEvent::ShowSlide(0)));
        assert!(matches!(parse_command("last"), AppEvent::ShowLastSlide));
        assert!(matches!(parse_command("restart"), AppEvent::Restart));
        assert!(matches!(parse_command("0"), AppEvent::ShowSlide(-1)));
        assert!(matches!(parse_command("bogus 1"), AppEvent::Error(_)));
    }

    #[test]
    fn escape_closes_without_running() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
