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

//! Application configuration.
//!
//! This module manages the application configuration file, stored by
//! `confy` in the platform configuration directory.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "deckui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Interval between redraws while idle, in milliseconds.
    pub tick_rate_ms: u64,
    /// Time a reveal animation takes to complete, in milliseconds.
    pub reveal_duration_ms: u64,
    pub show_key_hints: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tick_rate_ms: 50,
            reveal_duration_ms: 600,
            show_key_hints: true,
        }
    }
}

impl AppConfig {
    pub(crate) fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub(crate) fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the configuration file, also used to place the log file.
pub fn config_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 100").expect("valid config");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.reveal_duration_ms, 600);
        assert!(config.show_key_hints);
    }

    #[test]
    fn tick_rate_is_never_zero() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
