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

//! Render the active slide.
//!
//! The slide's title is drawn first, then each item on its own row. Items
//! marked `initially-hidden` keep their row but are only drawn while an
//! animation class is applied to them, following the frame computed by
//! [`reveal_frame`].

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    document::{Document, ElementId},
    render::reveal::{RevealFrame, reveal_frame},
    slideshow::markup::{DATA_DELAY, INITIALLY_HIDDEN, SLIDE_TITLE},
    theme::Theme,
};

const ROW_SPACING: u16 = 2;

pub(crate) fn draw_slide(
    f: &mut Frame,
    area: Rect,
    doc: &Document,
    slide: ElementId,
    theme: &Theme,
    reveal_duration: Duration,
    now: Instant,
) {
    let mut y = area.y.saturating_add(1);

    for &child in doc.children(slide) {
        if y >= area.bottom() {
            break;
        }
        let Some(element) = doc.element(child) else {
            continue;
        };
        let text = element.text.as_deref().unwrap_or_default();

        if element.classes.contains(SLIDE_TITLE) {
            let title = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(title, Rect::new(area.x, y, area.width, 1));
            y = y.saturating_add(ROW_SPACING);
            continue;
        }

        let frame = if element.classes.contains(INITIALLY_HIDDEN) {
            element.animation().map(|animation| {
                let delay = doc
                    .data(child, DATA_DELAY)
                    .and_then(|d| d.parse::<u64>().ok())
                    .map(Duration::from_millis)
                    .unwrap_or_default();
                let progress = animation.progress(now, delay, reveal_duration);
                reveal_frame(animation.keyframes, text, progress)
            })
        } else {
            Some(RevealFrame::settled(text))
        };

        if let Some(frame) = frame {
            draw_item(f, area, y, text, &frame, theme);
        }
        y = y.saturating_add(ROW_SPACING);
    }
}

// Items are positioned from the width of their full text so that partial
// reveals (typewriter) grow in place instead of re-centring every frame.
fn draw_item(f: &mut Frame, area: Rect, y: u16, full_text: &str, frame: &RevealFrame, theme: &Theme) {
    let full_width = Line::from(full_text).width().min(area.width as usize) as u16;
    let x = (area.x + (area.width - full_width) / 2).saturating_add(frame.offset_x);
    let y = y.saturating_add(frame.offset_y);
    if x >= area.right() || y >= area.bottom() {
        return;
    }

    let mut style = Style::default().fg(theme.fade(theme.text_colour, frame.opacity));
    if frame.emphasised {
        style = style
            .fg(theme.fade(theme.accent_colour, frame.opacity))
            .add_modifier(Modifier::BOLD);
    }

    let row = Rect::new(x, y, area.right() - x, 1);
    f.render_widget(Paragraph::new(frame.text.as_str()).style(style), row);
}
