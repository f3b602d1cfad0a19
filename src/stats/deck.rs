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

//! Presents [`GameStats`] as a deck, one statistic per slide.

use crate::{
    deck::{Deck, Item, Slide},
    document::animation::Keyframes,
    stats::{GameStats, NamedCount},
    util::format::{format_count, plural},
};

// Delay between successive items of a ranked list.
const STAGGER_MS: u64 = 150;

pub(crate) fn stats_deck(stats: &GameStats, username: &str) -> Deck {
    let mut slides = vec![Slide {
        title: format!("{username}'s year in chess"),
        items: vec![
            Item::animated(
                format!(
                    "{} {} played",
                    format_count(stats.total_games),
                    plural(stats.total_games, "game", "games")
                ),
                Keyframes::Pop,
                0,
            ),
            Item::animated("Let's look back.", Keyframes::FadeIn, 600),
        ],
    }];

    slides.push(ranked_slide(
        "Favourite openings",
        &stats.top_openings,
        "No openings recorded.",
    ));
    slides.push(ranked_slide(
        "Most frequent opponents",
        &stats.top_opponents,
        "Every opponent was anonymous.",
    ));

    slides.push(Slide {
        title: "Streaks".to_string(),
        items: vec![
            Item::animated(
                format!("Longest winning streak: {}", format_count(stats.max_win_streak)),
                Keyframes::SlideUp,
                0,
            ),
            Item::animated(
                format!("Longest losing streak: {}", format_count(stats.max_lose_streak)),
                Keyframes::SlideUp,
                400,
            ),
        ],
    });

    let time_control = &stats.favourite_time_control;
    slides.push(Slide {
        title: "Time control".to_string(),
        items: vec![
            Item::animated(
                format!("You mostly played {}", time_control.name),
                Keyframes::Typewriter,
                0,
            ),
            Item::animated(
                format!(
                    "{} {}",
                    format_count(time_control.count),
                    plural(time_control.count, "game", "games")
                ),
                Keyframes::FadeIn,
                800,
            ),
        ],
    });

    let longest = &stats.longest_game;
    let mut marathon = vec![Item::animated(
        format!(
            "Longest game: {} {}",
            format_count(longest.moves),
            plural(longest.moves, "move", "moves")
        ),
        Keyframes::Pop,
        0,
    )];
    if let Some(id) = &longest.game_id {
        marathon.push(Item::plain(format!("Game {id}")));
    }
    slides.push(Slide {
        title: "Marathon".to_string(),
        items: marathon,
    });

    slides.push(Slide {
        title: "See you next year".to_string(),
        items: vec![Item::animated("Thanks for playing!", Keyframes::FadeIn, 0)],
    });

    Deck {
        title: format!("Chess stats: {username}"),
        slides,
    }
}

fn ranked_slide(title: &str, ranking: &[NamedCount], empty: &str) -> Slide {
    let items = if ranking.is_empty() {
        vec![Item::plain(empty)]
    } else {
        ranking
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Item::animated(
                    format!(
                        "{}. {} ({} {})",
                        i + 1,
                        entry.name,
                        format_count(entry.count),
                        plural(entry.count, "game", "games")
                    ),
                    Keyframes::SlideIn,
                    i as u64 * STAGGER_MS,
                )
            })
            .collect()
    };

    Slide {
        title: title.to_string(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LongestGame;

    fn stats() -> GameStats {
        GameStats {
            total_games: 1234,
            top_openings: vec![
                NamedCount {
                    name: "Sicilian Defense".to_string(),
                    count: 40,
                },
                NamedCount {
                    name: "French Defense".to_string(),
                    count: 1,
                },
            ],
            top_opponents: vec![],
            max_win_streak: 7,
            max_lose_streak: 3,
            favourite_time_control: NamedCount {
                name: "blitz".to_string(),
                count: 900,
            },
            longest_game: LongestGame {
                moves: 142,
                game_id: Some("abcd1234".to_string()),
            },
        }
    }

    #[test]
    fn deck_is_valid_and_complete() {
        let deck = stats_deck(&stats(), "magnus");
        deck.validate().expect("generated deck validates");
        assert_eq!(deck.slides.len(), 7);
        assert_eq!(deck.slides[0].title, "magnus's year in chess");
        assert_eq!(deck.slides[0].items[0].text, "1,234 games played");
    }

    #[test]
    fn exported_deck_loads_back_unchanged() {
        let deck = stats_deck(&stats(), "magnus");
        assert!(deck.slides.iter().flat_map(|s| &s.items).any(|i| i.delay_ms.is_some()));
        assert!(deck.slides.iter().flat_map(|s| &s.items).any(|i| i.delay_ms.is_none()));

        let text = deck.to_toml().unwrap();
        assert!(text.contains("[[slides.items]]") || text.contains("items = ["));
        assert_eq!(Deck::from_toml(&text).unwrap(), deck);
    }

    #[test]
    fn ranked_items_are_numbered_and_staggered() {
        let deck = stats_deck(&stats(), "magnus");
        let openings = &deck.slides[1];
        assert_eq!(openings.items[0].text, "1. Sicilian Defense (40 games)");
        assert_eq!(openings.items[1].text, "2. French Defense (1 game)");
        assert_eq!(openings.items[0].delay_ms, None);
        assert_eq!(openings.items[1].delay_ms, Some(STAGGER_MS));
    }

    #[test]
    fn empty_ranking_gets_placeholder() {
        let deck = stats_deck(&stats(), "magnus");
        let opponents = &deck.slides[2];
        assert_eq!(opponents.items, vec![Item::plain("Every opponent was anonymous.")]);
    }
}
