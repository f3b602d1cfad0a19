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

//! Unicode symbols for the navigation controls and progress dots.

// Text-style variants (Variation Selector-15 [\u{FE0E}]) so terminals draw
// the triangles as monochrome text that follows the TUI's colours.
pub(crate) const ICON_PREV: &str = "\u{25C0}\u{FE0E}";
pub(crate) const ICON_NEXT: &str = "\u{25B6}\u{FE0E}";

pub(crate) const DOT_FILLED: &str = "\u{25CF}";
pub(crate) const DOT_EMPTY: &str = "\u{25CB}";
