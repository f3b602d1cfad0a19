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

//! Log file setup.
//!
//! The terminal belongs to the UI, so log output goes to `deckui.log` next to
//! the configuration file. The level is taken from `RUST_LOG` and defaults to
//! `warn`.

use std::fs::{self, File};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::config_path;

const LOG_FILE_NAME: &str = "deckui.log";

pub(crate) fn init_logging() -> Result<()> {
    let dir = config_path()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
        .context("No configuration directory available")?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
