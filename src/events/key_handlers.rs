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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    events::AppEvent,
    slideshow::bindings::{Dispatch, InputEvent, Key},
};

/// Routes a key press through the command line, then the slideshow's
/// bindings, then the application's own keys.
///
/// The application keys are skipped when the slideshow handled the key and
/// asked for the default action to be suppressed.
///
/// # Errors
///
/// Returns an error if an event cannot be queued on the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    app.status = None;

    if app.commander.handle_event(&Event::Key(key), &app.event_tx)? {
        return Ok(());
    }

    let outcome = app
        .slideshow
        .dispatch(&mut app.document, InputEvent::Key(slideshow_key(key.code)));
    if matches!(outcome, Dispatch::Handled { prevent_default: true }) {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn slideshow_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Char(' ') => Key::Space,
        _ => Key::Other,
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?
        }
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,

        (KeyCode::Home, _) => app.event_tx.send(AppEvent::ShowSlide(0))?,
        (KeyCode::End, _) => app.event_tx.send(AppEvent::ShowLastSlide)?,
        (KeyCode::Char('r'), _) => app.event_tx.send(AppEvent::Restart)?,

        _ => {}
    }

    Ok(())
}
