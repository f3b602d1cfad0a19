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

//! Terminal emulator background control via OSC escape sequences.
//!
//! Painting the emulator's own background (rather than only the cells the
//! TUI draws) removes the thin unpainted border some terminals leave around
//! the alternate screen. Terminals that do not understand the sequences
//! ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the emulator background with OSC 11.
///
/// Only RGB colours can be expressed; any other colour leaves the
/// background untouched.
pub(crate) fn set_terminal_bg(colour: Color) {
    let Color::Rgb(r, g, b) = colour else {
        return;
    };
    write_osc(&format!("\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b));
}

/// Restores the emulator's configured background with OSC 111.
pub(crate) fn reset_terminal_bg() {
    write_osc("\x1b]111\x07");
}

fn write_osc(sequence: &str) {
    let mut stdout = io::stdout();
    stdout.write_all(sequence.as_bytes()).ok();
    stdout.flush().ok();
}
