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

//! Builds the document tree for a deck using the slideshow markup.

use crate::{
    deck::Deck,
    document::Document,
    slideshow::markup::{
        CLICK_ZONE, DATA_ANIMATION, DATA_DELAY, INITIALLY_HIDDEN, LEFT, NAV_BUTTON, NEXT, PREV,
        PROGRESS, PROGRESS_DOT, RIGHT, SLIDE, SLIDE_TITLE,
    },
};

impl Deck {
    /// Emits one `section.slide` per slide followed by the progress dots,
    /// the navigation buttons and the two click zones.
    pub(crate) fn build_document(&self) -> Document {
        let mut doc = Document::new(&self.title);
        let root = doc.root();

        for slide in &self.slides {
            let section = doc.create_element(root, "section", SLIDE);

            let title = doc.create_element(section, "h1", SLIDE_TITLE);
            doc.set_text(title, &slide.title);

            for item in &slide.items {
                let paragraph = match &item.animation {
                    Some(animation) => {
                        let p = doc.create_element(section, "p", INITIALLY_HIDDEN);
                        doc.set_data(p, DATA_ANIMATION, animation);
                        if let Some(delay) = item.delay_ms {
                            doc.set_data(p, DATA_DELAY, &delay.to_string());
                        }
                        p
                    }
                    None => doc.create_element(section, "p", ""),
                };
                doc.set_text(paragraph, &item.text);
            }
        }

        let progress = doc.create_element(root, "nav", PROGRESS);
        for _ in &self.slides {
            doc.create_element(progress, "span", PROGRESS_DOT);
        }

        let prev = doc.create_element(root, "button", &format!("{NAV_BUTTON} {PREV}"));
        doc.set_text(prev, "Prev");
        let next = doc.create_element(root, "button", &format!("{NAV_BUTTON} {NEXT}"));
        doc.set_text(next, "Next");

        doc.create_element(root, "div", &format!("{CLICK_ZONE} {LEFT}"));
        doc.create_element(root, "div", &format!("{CLICK_ZONE} {RIGHT}"));

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deck::Item, deck::Slide, document::animation::Keyframes, slideshow::markup};

    fn deck() -> Deck {
        Deck {
            title: "Built".to_string(),
            slides: vec![
                Slide {
                    title: "First".to_string(),
                    items: vec![
                        Item::plain("always"),
                        Item::animated("later", Keyframes::SlideUp, 300),
                    ],
                },
                Slide {
                    title: "Second".to_string(),
                    items: vec![],
                },
            ],
        }
    }

    #[test]
    fn slides_and_dots_are_parallel() {
        let doc = deck().build_document();
        assert_eq!(doc.title(), "Built");
        assert_eq!(doc.query_all(markup::SLIDES).len(), 2);
        assert_eq!(doc.query_all(markup::PROGRESS_DOTS).len(), 2);
    }

    #[test]
    fn controls_are_present() {
        let doc = deck().build_document();
        for selector in [
            markup::PREV_BUTTON,
            markup::NEXT_BUTTON,
            markup::LEFT_ZONE,
            markup::RIGHT_ZONE,
        ] {
            assert!(doc.query(selector).is_some(), "missing {}", selector);
        }
    }

    #[test]
    fn animated_items_start_hidden_with_data() {
        let doc = deck().build_document();
        let first = doc.query(markup::SLIDES).unwrap();

        let reveals = doc.query_all_within(first, markup::REVEALS);
        assert_eq!(reveals.len(), 1);
        assert_eq!(doc.data(reveals[0], markup::DATA_ANIMATION), Some("slide-up"));
        assert_eq!(doc.data(reveals[0], markup::DATA_DELAY), Some("300"));
        assert_eq!(
            doc.element(reveals[0]).unwrap().text.as_deref(),
            Some("later")
        );

        let title = doc.query_all_within(first, ".slide-title")[0];
        assert_eq!(doc.element(title).unwrap().text.as_deref(), Some("First"));
    }
}
