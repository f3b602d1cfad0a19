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

//! Render the navigation bar: previous button, progress dots, next button.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    document::{Document, ElementId},
    render::{
        hit_map::HitMap,
        icons::{DOT_EMPTY, DOT_FILLED, ICON_NEXT, ICON_PREV},
    },
    slideshow::markup::{ACTIVE, HIDDEN, NEXT_BUTTON, PREV_BUTTON, PROGRESS_DOTS, VISITED},
    theme::Theme,
};

pub(crate) fn draw_progress(f: &mut Frame, area: Rect, doc: &Document, theme: &Theme, hit_map: &mut HitMap) {
    if area.is_empty() {
        return;
    }

    let dots = doc.query_all(PROGRESS_DOTS);
    let total_width = (dots.len() * 2).saturating_sub(1).min(area.width as usize) as u16;
    let start = area.x + (area.width - total_width) / 2;

    for (i, &dot) in dots.iter().enumerate() {
        let x = start.saturating_add(i as u16 * 2);
        if x >= area.right() {
            break;
        }

        let (glyph, colour) = if doc.has_class(dot, ACTIVE) {
            (DOT_FILLED, theme.dot_active_fg)
        } else if doc.has_class(dot, VISITED) {
            (DOT_FILLED, theme.dot_visited_fg)
        } else {
            (DOT_EMPTY, theme.dot_pending_fg)
        };

        let cell = Rect::new(x, area.y, 1, 1);
        f.render_widget(Paragraph::new(glyph).style(Style::default().fg(colour)), cell);
        hit_map.register(cell, dot);
    }

    let style = Style::default()
        .fg(theme.accent_colour)
        .add_modifier(Modifier::BOLD);

    if let Some(prev) = doc.query(PREV_BUTTON).filter(|&id| !doc.has_class(id, HIDDEN)) {
        let label = format!("{} {}", ICON_PREV, button_text(doc, prev, "Prev"));
        let width = (Line::from(label.as_str()).width() as u16).min(area.width);
        let button = Rect::new(area.x + 1u16.min(area.width - width), area.y, width, 1);
        f.render_widget(Paragraph::new(label).style(style), button);
        hit_map.register(button, prev);
    }

    if let Some(next) = doc.query(NEXT_BUTTON).filter(|&id| !doc.has_class(id, HIDDEN)) {
        let label = format!("{} {}", button_text(doc, next, "Next"), ICON_NEXT);
        let width = (Line::from(label.as_str()).width() as u16).min(area.width);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let button = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(label).style(style), button);
        hit_map.register(button, next);
    }
}

fn button_text<'a>(doc: &'a Document, id: ElementId, fallback: &'a str) -> &'a str {
    doc.element(id)
        .and_then(|e| e.text.as_deref())
        .unwrap_or(fallback)
}
