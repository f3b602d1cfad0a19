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

//! The view of the document the slideshow controller works against.

use crate::document::{Document, ElementId};

/// Element queries and class mutations needed to drive a slideshow.
///
/// Every mutation on an element that does not exist is silently ignored.
pub(crate) trait Surface {
    fn select_all(&self, selector: &str) -> Vec<ElementId>;
    fn select(&self, selector: &str) -> Option<ElementId>;
    fn select_within(&self, root: ElementId, selector: &str) -> Vec<ElementId>;

    fn add_class(&mut self, id: ElementId, class: &str);
    fn remove_class(&mut self, id: ElementId, class: &str);
    fn toggle_class(&mut self, id: ElementId, class: &str, force: bool);

    /// Reads a `data-*` attribute, `key` given without the prefix.
    fn data(&self, id: ElementId, key: &str) -> Option<String>;

    /// Forces a layout read so that pending class changes are observed.
    fn force_layout(&mut self, id: ElementId);
}

impl Surface for Document {
    fn select_all(&self, selector: &str) -> Vec<ElementId> {
        self.query_all(selector)
    }

    fn select(&self, selector: &str) -> Option<ElementId> {
        self.query(selector)
    }

    fn select_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        self.query_all_within(root, selector)
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(classes) = self.class_list_mut(id) {
            classes.add(class);
        }
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(classes) = self.class_list_mut(id) {
            classes.remove(class);
        }
    }

    fn toggle_class(&mut self, id: ElementId, class: &str, force: bool) {
        if let Some(classes) = self.class_list_mut(id) {
            classes.toggle(class, force);
        }
    }

    fn data(&self, id: ElementId, key: &str) -> Option<String> {
        Document::data(self, id, key).map(str::to_string)
    }

    fn force_layout(&mut self, id: ElementId) {
        let _ = self.offset_width(id);
    }
}
