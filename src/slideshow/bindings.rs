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

//! Input dispatch table for the slideshow.
//!
//! Maps a raw input (a click on an element, or a key press) to the
//! navigation actions it triggers. The table is rebuilt from scratch every
//! time the slideshow is initialized, so binding is never duplicated.

use crate::document::ElementId;

/// Keys the slideshow distinguishes. Anything else arrives as
/// [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Click(ElementId),
    Key(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Show(usize),
    Next,
    Previous,
}

/// Outcome of dispatching an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Ignored,
    Handled { prevent_default: bool },
}

#[derive(Debug, Default)]
pub(crate) struct Bindings {
    keys_bound: bool,
    clicks: Vec<(ElementId, Action)>,
}

impl Bindings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.keys_bound = false;
        self.clicks.clear();
    }

    pub(crate) fn bind_keys(&mut self) {
        self.keys_bound = true;
    }

    pub(crate) fn bind_click(&mut self, target: ElementId, action: Action) {
        self.clicks.push((target, action));
    }

    /// Actions triggered by `event`, in the order they were bound.
    pub(crate) fn actions_for(&self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::Click(target) => self
                .clicks
                .iter()
                .filter(|(id, _)| *id == target)
                .map(|(_, action)| *action)
                .collect(),

            InputEvent::Key(key) if self.keys_bound => match key {
                Key::ArrowRight | Key::Space => vec![Action::Next],
                Key::ArrowLeft => vec![Action::Previous],
                Key::Other => vec![],
            },

            InputEvent::Key(_) => vec![],
        }
    }

    /// Whether the host's own handling of `event` should be suppressed once
    /// the slideshow has handled it.
    pub(crate) fn prevents_default(event: InputEvent) -> bool {
        matches!(event, InputEvent::Key(Key::ArrowLeft | Key::ArrowRight | Key::Space))
    }
}
