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

//! Screen regions of clickable elements, recorded while drawing.

use ratatui::layout::{Position, Rect};

use crate::document::ElementId;

#[derive(Debug, Default)]
pub(crate) struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records `area` as belonging to `element`. Later registrations sit on
    /// top of earlier ones.
    pub(crate) fn register(&mut self, area: Rect, element: ElementId) {
        if !area.is_empty() {
            self.regions.push((area, element));
        }
    }

    /// The topmost element covering the cell at `column`, `row`.
    pub(crate) fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, element)| *element)
    }
}
