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

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::{debug, warn};

use crate::{App, slideshow::bindings::InputEvent};

/// Resolves a left click against the regions recorded by the last draw and
/// hands the element under the pointer to the slideshow.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let Some(target) = app.hit_map.element_at(mouse.column, mouse.row) else {
        return;
    };

    app.status = None;
    let outcome = app
        .slideshow
        .dispatch(&mut app.document, InputEvent::Click(target));
    debug!(
        "click at {},{} on {:?}: {:?}",
        mouse.column, mouse.row, target, outcome
    );
}

pub(super) fn handle_show_slide(app: &mut App, index: isize) {
    app.slideshow.show_slide(&mut app.document, index);
}

pub(super) fn handle_show_last_slide(app: &mut App) {
    if app.slideshow.is_empty() {
        return;
    }
    let last = app.slideshow.len() as isize - 1;
    app.slideshow.show_slide(&mut app.document, last);
}

pub(super) fn handle_restart(app: &mut App) {
    app.slideshow.initialize(&mut app.document);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.status = Some(message);
}
