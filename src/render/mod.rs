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

//! User interface rendering logic.
//!
//! This module translates the document tree into `ratatui` widgets. The
//! renderer never asks the slideshow which slide is current: it draws the
//! slide carrying the `active` class, the dots according to their `active`
//! and `visited` classes, and skips controls marked `hidden`, so that the
//! class markers are the only interface between the two.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, called after every
//! event. It commits the document frame (starting any reveal animations
//! whose classes were added since the last frame), rebuilds the hit map used
//! to resolve mouse clicks, and draws the header, slide, navigation bar and
//! command line.

mod commander;
pub(crate) mod hit_map;
mod icons;
mod progress;
mod reveal;
mod slide;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    render::{commander::draw_commander, progress::draw_progress, slide::draw_slide},
    slideshow::markup::{LEFT_ZONE, RIGHT_ZONE},
    util::format::format_position,
};

const ACTIVE_SLIDE: &str = ".slide.active";

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state; drawing commits
///   the document's style pass and records clickable regions.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let now = Instant::now();
    app.document.commit_frame(now);
    app.hit_map.clear();

    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, slide, navigation, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let slide_area = outer[1];
    register_click_zones(app, slide_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(2));
    let inner = block.inner(slide_area);
    f.render_widget(block, slide_area);

    match app.document.query(ACTIVE_SLIDE) {
        Some(slide) => draw_slide(
            f,
            inner,
            &app.document,
            slide,
            &app.theme,
            app.config.reveal_duration(),
            now,
        ),
        None => {
            let empty = Paragraph::new("This deck has no slides.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.muted_colour));
            f.render_widget(empty, inner);
        }
    }

    draw_progress(f, outer[2], &app.document, &app.theme, &mut app.hit_map);

    draw_commander(f, outer[3], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .horizontal_margin(1)
        .split(area);

    let title = Paragraph::new(app.document.title()).style(
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    let position = format_position(app.slideshow.current(), app.slideshow.len());
    let position = Paragraph::new(position)
        .alignment(Alignment::Right)
        .style(Style::default().fg(app.theme.muted_colour));
    f.render_widget(position, chunks[1]);
}

// The left and right thirds of the slide act as previous / next zones.
// They are registered first so the buttons and dots drawn later sit on top.
fn register_click_zones(app: &mut App, area: Rect) {
    let third = area.width / 3;

    if let Some(left) = app.document.query(LEFT_ZONE) {
        app.hit_map
            .register(Rect::new(area.x, area.y, third, area.height), left);
    }

    if let Some(right) = app.document.query(RIGHT_ZONE) {
        let x = area.right().saturating_sub(third);
        app.hit_map
            .register(Rect::new(x, area.y, third, area.height), right);
    }
}
