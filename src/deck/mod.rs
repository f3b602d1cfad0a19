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

//! Slide decks.
//!
//! A deck is a TOML file listing slides, each with a title and a number of
//! text items. Items may name a reveal animation, in which case they start
//! hidden and are revealed each time their slide is shown:
//!
//! ```toml
//! title = "Quarterly review"
//!
//! [[slides]]
//! title = "Welcome"
//! items = [
//!   { text = "Always visible" },
//!   { text = "Fades in", animation = "fade-in" },
//!   { text = "Types out", animation = "typewriter", delay_ms = 400 },
//! ]
//! ```

mod builder;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::animation::Keyframes;

#[derive(Debug, Error)]
pub(crate) enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialise deck: {0}")]
    Serialise(#[from] toml::ser::Error),

    #[error("slide {slide}: unknown animation {animation:?}")]
    UnknownAnimation { slide: usize, animation: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub(crate) struct Deck {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) slides: Vec<Slide>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub(crate) struct Slide {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub(crate) struct Item {
    pub(crate) text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) animation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) delay_ms: Option<u64>,
}

impl Item {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            animation: None,
            delay_ms: None,
        }
    }

    pub(crate) fn animated(text: impl Into<String>, keyframes: Keyframes, delay_ms: u64) -> Self {
        Self {
            text: text.into(),
            animation: Some(keyframes.class_name().to_string()),
            delay_ms: (delay_ms > 0).then_some(delay_ms),
        }
    }
}

impl Deck {
    /// Parses and validates a deck from TOML source.
    pub(crate) fn from_toml(source: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(source)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Serialises the deck in the same format [`Deck::from_toml`] reads.
    pub(crate) fn to_toml(&self) -> Result<String, DeckError> {
        Ok(toml::to_string(self)?)
    }

    /// Every item animation must name a keyframe animation the document
    /// knows, otherwise the item would stay hidden forever.
    pub(crate) fn validate(&self) -> Result<(), DeckError> {
        for (index, slide) in self.slides.iter().enumerate() {
            for item in &slide.items {
                if let Some(animation) = &item.animation {
                    if Keyframes::from_class(animation).is_none() {
                        return Err(DeckError::UnknownAnimation {
                            slide: index + 1,
                            animation: animation.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Reads, parses and validates the deck at `path`.
pub(crate) fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let source = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = Deck::from_toml(&source)?;
    debug!("deck: loaded {:?} with {} slides", path, deck.slides.len());
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
title = "Sample"

[[slides]]
title = "One"
items = [
  { text = "plain" },
  { text = "fading", animation = "fade-in", delay_ms = 250 },
]

[[slides]]
title = "Two"
"#;

    #[test]
    fn parses_slides_and_items() {
        let deck = Deck::from_toml(SAMPLE).expect("valid deck");
        assert_eq!(deck.title, "Sample");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].items[0], Item::plain("plain"));
        assert_eq!(
            deck.slides[0].items[1],
            Item::animated("fading", Keyframes::FadeIn, 250)
        );
        assert!(deck.slides[1].items.is_empty());
    }

    #[test]
    fn empty_source_is_an_empty_deck() {
        let deck = Deck::from_toml("").expect("empty deck");
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn unknown_animation_is_rejected() {
        let source = r#"
[[slides]]
title = "A"
[[slides]]
title = "B"
items = [{ text = "x", animation = "wobble" }]
"#;
        match Deck::from_toml(source) {
            Err(DeckError::UnknownAnimation { slide, animation }) => {
                assert_eq!(slide, 2);
                assert_eq!(animation, "wobble");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Deck::from_toml("[[slides]\ntitle = 1"),
            Err(DeckError::Parse(_))
        ));
    }

    #[test]
    fn load_deck_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write deck");

        let deck = load_deck(file.path()).expect("load deck");
        assert_eq!(deck.slides.len(), 2);
    }

    #[test]
    fn load_deck_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        match load_deck(&missing) {
            Err(DeckError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
