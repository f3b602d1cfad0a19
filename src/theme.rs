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

//! Colour palette for the presenter.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) dot_active_fg: Color,
    pub(crate) dot_visited_fg: Color,
    pub(crate) dot_pending_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(162, 161, 166),
            commander_colour: Color::Rgb(179, 157, 219),
            commander_bg: Color::Rgb(50, 30, 60),

            dot_active_fg: Color::Rgb(250, 189, 47),
            dot_visited_fg: Color::Rgb(179, 157, 219),
            dot_pending_fg: Color::Rgb(102, 102, 102),
        }
    }

    /// Blends `colour` towards the background by `amount` (0.0 is fully
    /// background, 1.0 is `colour` itself). Used to fade text in.
    pub(crate) fn fade(&self, colour: Color, amount: f32) -> Color {
        match (colour, self.background_colour) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let amount = amount.clamp(0.0, 1.0);
                let mix = |from: u8, to: u8| {
                    (from as f32 + (to as f32 - from as f32) * amount).round() as u8
                };
                Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b))
            }
            _ => colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_interpolates_from_background() {
        let theme = Theme::default();
        let text = theme.text_colour;
        assert_eq!(theme.fade(text, 0.0), theme.background_colour);
        assert_eq!(theme.fade(text, 1.0), text);
        assert_eq!(theme.fade(text, 2.0), text);
    }

    #[test]
    fn fade_leaves_named_colours_alone() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Red, 0.5), Color::Red);
    }
}
