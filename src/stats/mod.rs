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

//! Chess game statistics.
//!
//! Reads a newline-delimited JSON export of games (one game object per line,
//! in the shape produced by lichess) and summarizes one player's games:
//! favourite openings and opponents, streaks, preferred time control and the
//! longest game. The summary is presented as a deck by [`stats_deck`].

mod deck;

pub(crate) use deck::stats_deck;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

const TOP_COUNT: usize = 5;

const UNKNOWN_OPENING: &str = "Unknown";
const UNKNOWN_SPEED: &str = "unknown";
const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Error)]
pub(crate) enum StatsError {
    #[error("failed to read games {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed game: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no games found")]
    NoGames,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Side {
    White,
    Black,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Game {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) speed: Option<String>,
    #[serde(default)]
    pub(crate) winner: Option<Side>,
    #[serde(default)]
    pub(crate) moves: String,
    #[serde(default)]
    pub(crate) opening: Option<Opening>,
    #[serde(default)]
    pub(crate) players: Players,
    #[serde(default)]
    pub(crate) created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Opening {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Players {
    #[serde(default)]
    pub(crate) white: Player,
    #[serde(default)]
    pub(crate) black: Player,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Player {
    #[serde(default)]
    pub(crate) user: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct User {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl Player {
    fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or(ANONYMOUS)
    }

    fn id(&self) -> &str {
        self.user.as_ref().map(|u| u.id.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamedCount {
    pub(crate) name: String,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LongestGame {
    pub(crate) moves: usize,
    pub(crate) game_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameStats {
    pub(crate) total_games: usize,
    pub(crate) top_openings: Vec<NamedCount>,
    pub(crate) top_opponents: Vec<NamedCount>,
    pub(crate) max_win_streak: usize,
    pub(crate) max_lose_streak: usize,
    pub(crate) favourite_time_control: NamedCount,
    pub(crate) longest_game: LongestGame,
}

/// Counts occurrences by name, remembering first-seen order so that ties
/// rank in the order they were first encountered.
#[derive(Default)]
struct Tally {
    entries: Vec<NamedCount>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(NamedCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    fn ranked(mut self) -> Vec<NamedCount> {
        // Stable sort keeps first-seen order among equal counts.
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries
    }
}

/// Parses one game per non-empty line.
pub(crate) fn parse_games(text: &str) -> Result<Vec<Game>, StatsError> {
    let games = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Game>(line)
                .map_err(|source| StatsError::Malformed { line: i + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if games.is_empty() {
        return Err(StatsError::NoGames);
    }
    Ok(games)
}

/// Reads the export at `path`, keeping only games created at or after
/// `since` (milliseconds since the epoch) when given.
pub(crate) fn load_games(path: &Path, since: Option<i64>) -> Result<Vec<Game>, StatsError> {
    let text = fs::read_to_string(path).map_err(|source| StatsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut games = parse_games(&text)?;
    if let Some(since) = since {
        games.retain(|g| g.created_at.is_none_or(|created| created >= since));
    }
    debug!("stats: loaded {} games from {:?}", games.len(), path);

    if games.is_empty() {
        return Err(StatsError::NoGames);
    }
    Ok(games)
}

/// Summarizes `games` from the point of view of `username`.
///
/// The user plays white when the white player's id matches `username`
/// ignoring case, and black otherwise.
pub(crate) fn calculate_stats(games: &[Game], username: &str) -> GameStats {
    let username = username.to_lowercase();

    let mut openings = Tally::default();
    let mut opponents = Tally::default();
    let mut time_controls = Tally::default();
    let mut longest_game = LongestGame::default();

    let mut win_streak = 0;
    let mut lose_streak = 0;
    let mut max_win_streak = 0;
    let mut max_lose_streak = 0;

    for game in games {
        if let Some(opening) = &game.opening {
            openings.add(opening.name.as_deref().unwrap_or(UNKNOWN_OPENING));
        }

        let is_white = game.players.white.id().to_lowercase() == username;

        let opponent = if is_white {
            game.players.black.display_name()
        } else {
            game.players.white.display_name()
        };
        if opponent != ANONYMOUS {
            opponents.add(opponent);
        }

        time_controls.add(game.speed.as_deref().unwrap_or(UNKNOWN_SPEED));

        let moves = game.moves.split_whitespace().count();
        if moves > longest_game.moves {
            longest_game = LongestGame {
                moves,
                game_id: game.id.clone(),
            };
        }

        let user_side = if is_white { Side::White } else { Side::Black };
        match game.winner {
            Some(winner) if winner == user_side => {
                win_streak += 1;
                lose_streak = 0;
                max_win_streak = max_win_streak.max(win_streak);
            }
            Some(_) => {
                lose_streak += 1;
                win_streak = 0;
                max_lose_streak = max_lose_streak.max(lose_streak);
            }
            None => {
                win_streak = 0;
                lose_streak = 0;
            }
        }
    }

    let favourite_time_control = time_controls
        .ranked()
        .into_iter()
        .next()
        .unwrap_or(NamedCount {
            name: UNKNOWN_SPEED.to_string(),
            count: 0,
        });

    let mut top_openings = openings.ranked();
    top_openings.truncate(TOP_COUNT);
    let mut top_opponents = opponents.ranked();
    top_opponents.truncate(TOP_COUNT);

    GameStats {
        total_games: games.len(),
        top_openings,
        top_opponents,
        max_win_streak,
        max_lose_streak,
        favourite_time_control,
        longest_game,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(line: &str) -> Game {
        serde_json::from_str(line).expect("valid game")
    }

    fn played(white: &str, black: &str, winner: Option<&str>) -> String {
        let winner = winner
            .map(|w| format!(r#","winner":"{}""#, w))
            .unwrap_or_default();
        format!(
            r#"{{"id":"g","speed":"blitz","moves":"e4 e5","players":{{"white":{{"user":{{"id":"{w}","name":"{W}"}}}},"black":{{"user":{{"id":"{b}","name":"{B}"}}}}}}{winner}}}"#,
            w = white.to_lowercase(),
            W = white,
            b = black.to_lowercase(),
            B = black,
            winner = winner,
        )
    }

    #[test]
    fn parse_games_skips_blank_lines() {
        let text = format!("{}\n\n{}\n", played("Me", "Bob", None), played("Al", "Me", None));
        assert_eq!(parse_games(&text).unwrap().len(), 2);
    }

    #[test]
    fn parse_games_reports_line_number() {
        let text = format!("{}\nnot json\n", played("Me", "Bob", None));
        match parse_games(&text) {
            Err(StatsError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_export_has_no_games() {
        assert!(matches!(parse_games("\n  \n"), Err(StatsError::NoGames)));
    }

    #[test]
    fn streaks_track_wins_losses_and_draws() {
        let games: Vec<Game> = [
            played("Me", "Bob", Some("white")),
            played("Bob", "Me", Some("black")),
            played("Me", "Bob", Some("white")),
            played("Me", "Bob", Some("black")),
            played("Me", "Bob", Some("black")),
            played("Me", "Bob", None),
            played("Bob", "Me", Some("white")),
        ]
        .iter()
        .map(|l| game(l))
        .collect();

        let stats = calculate_stats(&games, "ME");
        assert_eq!(stats.total_games, 7);
        assert_eq!(stats.max_win_streak, 3);
        assert_eq!(stats.max_lose_streak, 2);
    }

    #[test]
    fn opponents_skip_anonymous_and_rank_ties_by_first_seen() {
        let anonymous = r#"{"speed":"rapid","moves":"","players":{"white":{"user":{"id":"me","name":"Me"}},"black":{}}}"#;
        let games: Vec<Game> = [
            played("Me", "Carol", None),
            played("Me", "Bob", None),
            anonymous.to_string(),
            played("Bob", "Me", None),
            played("Carol", "Me", None),
            played("Me", "Dave", None),
        ]
        .iter()
        .map(|l| game(l))
        .collect();

        let stats = calculate_stats(&games, "me");
        let names: Vec<_> = stats.top_opponents.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Dave"]);
        assert_eq!(stats.top_opponents[0].count, 2);
    }

    #[test]
    fn openings_default_to_unknown_and_keep_top_five() {
        let mut lines = Vec::new();
        for (name, times) in [("A", 1), ("B", 3), ("C", 2), ("D", 1), ("E", 1), ("F", 4)] {
            for _ in 0..times {
                lines.push(format!(r#"{{"opening":{{"name":"{}"}}}}"#, name));
            }
        }
        lines.push(r#"{"opening":{}}"#.to_string());
        lines.push(r#"{"moves":"e4"}"#.to_string());
        let games: Vec<Game> = lines.iter().map(|l| game(l)).collect();

        let stats = calculate_stats(&games, "me");
        let ranked: Vec<_> = stats
            .top_openings
            .iter()
            .map(|o| (o.name.as_str(), o.count))
            .collect();
        assert_eq!(ranked, vec![("F", 4), ("B", 3), ("C", 2), ("A", 1), ("D", 1)]);
        assert!(!ranked.iter().any(|(name, _)| *name == "Unknown"));
    }

    #[test]
    fn nameless_openings_are_counted_as_unknown() {
        let games: Vec<Game> = [
            r#"{"opening":{"name":"Italian Game"}}"#,
            r#"{"opening":{}}"#,
            r#"{"opening":{}}"#,
            r#"{"moves":"e4"}"#,
        ]
        .iter()
        .map(|l| game(l))
        .collect();

        let stats = calculate_stats(&games, "me");
        let ranked: Vec<_> = stats
            .top_openings
            .iter()
            .map(|o| (o.name.as_str(), o.count))
            .collect();
        assert_eq!(ranked, vec![("Unknown", 2), ("Italian Game", 1)]);
    }

    #[test]
    fn favourite_time_control_and_longest_game() {
        let games: Vec<Game> = [
            r#"{"id":"a","speed":"blitz","moves":"e4 e5 Nf3"}"#,
            r#"{"id":"b","speed":"rapid","moves":"d4 d5 c4 e6"}"#,
            r#"{"id":"c","speed":"rapid","moves":"c4 e5 Nc3 Nf6"}"#,
            r#"{"id":"d","moves":""}"#,
        ]
        .iter()
        .map(|l| game(l))
        .collect();

        let stats = calculate_stats(&games, "me");
        assert_eq!(
            stats.favourite_time_control,
            NamedCount {
                name: "rapid".to_string(),
                count: 2
            }
        );
        assert_eq!(stats.longest_game.moves, 4);
        assert_eq!(stats.longest_game.game_id.as_deref(), Some("b"));
    }

    #[test]
    fn no_games_yields_unknown_time_control() {
        let stats = calculate_stats(&[], "me");
        assert_eq!(stats.favourite_time_control.name, "unknown");
        assert_eq!(stats.favourite_time_control.count, 0);
        assert_eq!(stats.longest_game, LongestGame::default());
    }

    #[test]
    fn load_games_filters_by_creation_time() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("games.ndjson");
        fs::write(
            &path,
            "{\"id\":\"old\",\"createdAt\":100}\n{\"id\":\"new\",\"createdAt\":500}\n",
        )
        .expect("write games");

        let games = load_games(&path, Some(200)).expect("load games");
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id.as_deref(), Some("new"));

        assert!(matches!(
            load_games(&path, Some(1_000)),
            Err(StatsError::NoGames)
        ));
    }
}
