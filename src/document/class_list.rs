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

//! Ordered set of class names attached to an element.

/// The class markers of a single element.
///
/// Insertion order is kept so that rendering and debugging output is stable,
/// but a class name is never present twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a class list from a whitespace separated string, as found in a
    /// `class` attribute.
    pub(crate) fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for name in value.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Adds a class, returning `true` if it was not already present.
    pub(crate) fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Removes a class, returning `true` if it was present.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Forces the presence of a class to `force`.
    pub(crate) fn toggle(&mut self, name: &str, force: bool) {
        if force {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_and_deduplicates() {
        let list = ClassList::parse("nav-btn  prev nav-btn");
        assert_eq!(list.iter().count(), 2);
        assert!(list.contains("nav-btn"));
        assert!(list.contains("prev"));
    }

    #[test]
    fn add_and_remove_report_changes() {
        let mut list = ClassList::new();
        assert!(list.add("active"));
        assert!(!list.add("active"));
        assert!(list.remove("active"));
        assert!(!list.remove("active"));
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn toggle_forces_presence() {
        let mut list = ClassList::parse("nav-btn");
        list.toggle("hidden", true);
        list.toggle("hidden", true);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["nav-btn", "hidden"]);

        list.toggle("hidden", false);
        assert!(!list.contains("hidden"));
    }
}
