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

//! Class names and selectors shared by the deck builder, the slideshow
//! controller and the renderer.

// Structure
pub(crate) const SLIDE: &str = "slide";
pub(crate) const SLIDE_TITLE: &str = "slide-title";
pub(crate) const PROGRESS: &str = "progress";
pub(crate) const PROGRESS_DOT: &str = "progress-dot";
pub(crate) const NAV_BUTTON: &str = "nav-btn";
pub(crate) const CLICK_ZONE: &str = "click-zone";
pub(crate) const PREV: &str = "prev";
pub(crate) const NEXT: &str = "next";
pub(crate) const LEFT: &str = "left";
pub(crate) const RIGHT: &str = "right";
pub(crate) const INITIALLY_HIDDEN: &str = "initially-hidden";

// State markers
pub(crate) const ACTIVE: &str = "active";
pub(crate) const VISITED: &str = "visited";
pub(crate) const HIDDEN: &str = "hidden";

// Data attributes
pub(crate) const DATA_ANIMATION: &str = "animation";
pub(crate) const DATA_DELAY: &str = "delay";

pub(crate) const SLIDES: &str = ".slide";
pub(crate) const PROGRESS_DOTS: &str = ".progress-dot";
pub(crate) const PREV_BUTTON: &str = ".nav-btn.prev";
pub(crate) const NEXT_BUTTON: &str = ".nav-btn.next";
pub(crate) const LEFT_ZONE: &str = ".click-zone.left";
pub(crate) const RIGHT_ZONE: &str = ".click-zone.right";
pub(crate) const REVEALS: &str = ".initially-hidden";
