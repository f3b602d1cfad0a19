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

//! Slideshow navigation.
//!
//! The [`Slideshow`] controller owns the current slide index and the element
//! handles captured from the document. It never draws anything itself: every
//! visible change is expressed by toggling class markers (`active`,
//! `visited`, `hidden` and animation classes) through a [`Surface`].
//!
//! # Organization
//!
//! * [`bindings`]: the dispatch table from clicks and keys to navigation.
//! * [`markup`]: the class names the controller queries and sets.
//! * [`surface`]: the document view the controller is written against.

pub(crate) mod bindings;
pub(crate) mod markup;
pub(crate) mod surface;

use log::debug;

use crate::{
    document::ElementId,
    slideshow::{
        bindings::{Action, Bindings, Dispatch, InputEvent},
        surface::Surface,
    },
};

#[derive(Debug, Default)]
pub(crate) struct Slideshow {
    slides: Vec<ElementId>,
    indicators: Vec<ElementId>,
    prev_button: Option<ElementId>,
    next_button: Option<ElementId>,
    current: usize,
    bindings: Bindings,
}

impl Slideshow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Captures slides, indicators and controls from `surface`, rebinds
    /// input and shows the first slide.
    ///
    /// Safe to call again: previously captured handles and bindings are
    /// replaced, not added to.
    pub(crate) fn initialize<S: Surface>(&mut self, surface: &mut S) {
        self.slides = surface.select_all(markup::SLIDES);
        self.indicators = surface.select_all(markup::PROGRESS_DOTS);
        self.prev_button = surface.select(markup::PREV_BUTTON);
        self.next_button = surface.select(markup::NEXT_BUTTON);
        self.current = 0;

        // Markers left by an earlier run would otherwise survive the first
        // show_slide, which only clears the slide it is leaving.
        for &slide in &self.slides {
            surface.remove_class(slide, markup::ACTIVE);
        }
        for &dot in &self.indicators {
            surface.remove_class(dot, markup::ACTIVE);
            surface.remove_class(dot, markup::VISITED);
        }

        self.bindings.clear();
        for (index, &dot) in self.indicators.iter().enumerate() {
            self.bindings.bind_click(dot, Action::Show(index));
        }
        if let Some(prev) = self.prev_button {
            self.bindings.bind_click(prev, Action::Previous);
        }
        if let Some(next) = self.next_button {
            self.bindings.bind_click(next, Action::Next);
        }
        if let Some(left) = surface.select(markup::LEFT_ZONE) {
            self.bindings.bind_click(left, Action::Previous);
        }
        if let Some(right) = surface.select(markup::RIGHT_ZONE) {
            self.bindings.bind_click(right, Action::Next);
        }
        self.bindings.bind_keys();

        debug!(
            "slideshow: initialized slides={} indicators={}",
            self.slides.len(),
            self.indicators.len()
        );

        if !self.slides.is_empty() {
            self.show_slide(surface, 0);
        }
    }

    /// Makes slide `index` the active one. Indices outside the deck are
    /// ignored.
    pub(crate) fn show_slide<S: Surface>(&mut self, surface: &mut S, index: isize) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if index >= self.slides.len() {
            return;
        }

        if let Some(&slide) = self.slides.get(self.current) {
            surface.remove_class(slide, markup::ACTIVE);
        }
        if let Some(&dot) = self.indicators.get(self.current) {
            surface.remove_class(dot, markup::ACTIVE);
        }

        self.current = index;

        if let Some(&slide) = self.slides.get(self.current) {
            surface.add_class(slide, markup::ACTIVE);
        }
        if let Some(&dot) = self.indicators.get(self.current) {
            surface.add_class(dot, markup::ACTIVE);
        }

        for (position, &dot) in self.indicators.iter().enumerate() {
            surface.toggle_class(dot, markup::VISITED, position < self.current);
        }

        if let Some(prev) = self.prev_button {
            surface.toggle_class(prev, markup::HIDDEN, self.is_first());
        }
        if let Some(next) = self.next_button {
            surface.toggle_class(next, markup::HIDDEN, self.is_last());
        }

        debug!("slideshow: show slide {}/{}", self.current + 1, self.slides.len());

        self.trigger_slide_animations(surface, self.current);
    }

    pub(crate) fn next_slide<S: Surface>(&mut self, surface: &mut S) {
        if self.current + 1 < self.slides.len() {
            self.show_slide(surface, self.current as isize + 1);
        }
    }

    pub(crate) fn prev_slide<S: Surface>(&mut self, surface: &mut S) {
        if self.current > 0 {
            self.show_slide(surface, self.current as isize - 1);
        }
    }

    /// Restarts the reveal animation of every `.initially-hidden` element
    /// in slide `index` that declares one.
    ///
    /// Only ever called with an index `show_slide` has just validated.
    fn trigger_slide_animations<S: Surface>(&self, surface: &mut S, index: usize) {
        debug_assert!(index < self.slides.len(), "slide {} out of range", index);
        let Some(&slide) = self.slides.get(index) else {
            return;
        };

        for element in surface.select_within(slide, markup::REVEALS) {
            let Some(animation) = surface.data(element, markup::DATA_ANIMATION) else {
                continue;
            };
            if animation.is_empty() {
                continue;
            }

            // The layout read sits between remove and add so the style pass
            // sees the class go away before it comes back.
            surface.remove_class(element, &animation);
            surface.force_layout(element);
            surface.add_class(element, &animation);
        }
    }

    /// Runs the navigation bound to `event`, if any.
    pub(crate) fn dispatch<S: Surface>(&mut self, surface: &mut S, event: InputEvent) -> Dispatch {
        let actions = self.bindings.actions_for(event);
        if actions.is_empty() {
            return Dispatch::Ignored;
        }

        for action in actions {
            match action {
                Action::Show(index) => self.show_slide(surface, index as isize),
                Action::Next => self.next_slide(surface),
                Action::Previous => self.prev_slide(surface),
            }
        }

        Dispatch::Handled {
            prevent_default: Bindings::prevents_default(event),
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub(crate) fn is_first(&self) -> bool {
        self.current == 0
    }

    pub(crate) fn is_last(&self) -> bool {
        self.current + 1 == self.slides.len()
    }
}
