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

//! Keyframe animations known to the document's style system.
//!
//! A keyframe animation is started by the style pass when its class appears
//! on an element, and cancelled when the class disappears. The renderer reads
//! the resulting [`Animation`] to decide how much of a reveal to draw.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Keyframes {
    FadeIn,
    SlideUp,
    SlideIn,
    Typewriter,
    Pop,
}

impl Keyframes {
    pub(crate) const ALL: [Keyframes; 5] = [
        Keyframes::FadeIn,
        Keyframes::SlideUp,
        Keyframes::SlideIn,
        Keyframes::Typewriter,
        Keyframes::Pop,
    ];

    pub(crate) fn class_name(self) -> &'static str {
        match self {
            Keyframes::FadeIn => "fade-in",
            Keyframes::SlideUp => "slide-up",
            Keyframes::SlideIn => "slide-in",
            Keyframes::Typewriter => "typewriter",
            Keyframes::Pop => "pop",
        }
    }

    pub(crate) fn from_class(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.class_name() == name)
    }
}

/// A running (or finished) keyframe animation on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Animation {
    pub(crate) keyframes: Keyframes,
    /// Document-wide counter value at the moment this animation started.
    /// Every restart produces a strictly larger generation.
    pub(crate) generation: u64,
    pub(crate) started: Instant,
}

impl Animation {
    /// Fraction of the animation completed at `now`, in `0.0..=1.0`.
    ///
    /// The animation holds at `0.0` for `delay`, then runs linearly for
    /// `duration`. A zero duration completes immediately after the delay.
    pub(crate) fn progress(&self, now: Instant, delay: Duration, duration: Duration) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let Some(running) = elapsed.checked_sub(delay) else {
            return 0.0;
        };

        if duration.is_zero() {
            return 1.0;
        }

        (running.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
