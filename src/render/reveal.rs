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

//! How each keyframe animation looks at a given point of its progress.

use crate::document::animation::Keyframes;

const SLIDE_IN_CELLS: f32 = 8.0;
const SLIDE_UP_ROWS: f32 = 1.0;

/// One frame of a reveal: the text to draw and how to displace and tint it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RevealFrame {
    pub(crate) text: String,
    pub(crate) offset_x: u16,
    pub(crate) offset_y: u16,
    /// 0.0 is invisible (background colour), 1.0 is the full text colour.
    pub(crate) opacity: f32,
    pub(crate) emphasised: bool,
}

impl RevealFrame {
    pub(crate) fn settled(text: &str) -> Self {
        Self {
            text: text.to_string(),
            offset_x: 0,
            offset_y: 0,
            opacity: 1.0,
            emphasised: false,
        }
    }
}

pub(crate) fn reveal_frame(keyframes: Keyframes, text: &str, progress: f32) -> RevealFrame {
    let p = progress.clamp(0.0, 1.0);
    let remaining = 1.0 - p;

    match keyframes {
        Keyframes::FadeIn => RevealFrame {
            opacity: p,
            ..RevealFrame::settled(text)
        },

        Keyframes::SlideUp => RevealFrame {
            offset_y: (remaining * SLIDE_UP_ROWS).round() as u16,
            opacity: p,
            ..RevealFrame::settled(text)
        },

        Keyframes::SlideIn => RevealFrame {
            offset_x: (remaining * SLIDE_IN_CELLS).round() as u16,
            opacity: p,
            ..RevealFrame::settled(text)
        },

        Keyframes::Typewriter => {
            let total = text.chars().count();
            let shown = (p * total as f32).ceil() as usize;
            RevealFrame {
                text: text.chars().take(shown).collect(),
                ..RevealFrame::settled(text)
            }
        }

        Keyframes::Pop => RevealFrame {
            opacity: (p * 2.0).min(1.0),
            emphasised: p < 1.0,
            ..RevealFrame::settled(text)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reveal_settles_at_completion() {
        for keyframes in Keyframes::ALL {
            assert_eq!(
                reveal_frame(keyframes, "hello", 1.0),
                RevealFrame::settled("hello"),
                "{:?}",
                keyframes
            );
        }
    }

    #[test]
    fn fade_starts_invisible() {
        let frame = reveal_frame(Keyframes::FadeIn, "hello", 0.0);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.text, "hello");
    }

    #[test]
    fn typewriter_reveals_characters_progressively() {
        assert_eq!(reveal_frame(Keyframes::Typewriter, "abcd", 0.0).text, "");
        assert_eq!(reveal_frame(Keyframes::Typewriter, "abcd", 0.5).text, "ab");
        assert_eq!(reveal_frame(Keyframes::Typewriter, "abcd", 0.6).text, "abc");
    }

    #[test]
    fn slides_start_displaced() {
        assert_eq!(reveal_frame(Keyframes::SlideIn, "x", 0.0).offset_x, 8);
        assert_eq!(reveal_frame(Keyframes::SlideIn, "x", 0.5).offset_x, 4);
        assert_eq!(reveal_frame(Keyframes::SlideUp, "x", 0.0).offset_y, 1);
    }

    #[test]
    fn pop_is_emphasised_until_done() {
        let frame = reveal_frame(Keyframes::Pop, "x", 0.5);
        assert!(frame.emphasised);
        assert_eq!(frame.opacity, 1.0);
    }
}
