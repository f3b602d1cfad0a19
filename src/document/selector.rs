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

//! Compound selectors.
//!
//! Only the subset of selector syntax the presenter needs is supported: an
//! optional tag name followed by zero or more `.class` tokens, e.g.
//! `.nav-btn.prev` or `section.slide`. An element matches when its tag is the
//! one named (if any) and it carries every listed class.

use std::str::FromStr;

use thiserror::Error;

use crate::document::class_list::ClassList;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported selector syntax: {0:?}")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub(crate) fn matches(&self, tag: &str, classes: &ClassList) -> bool {
        self.tag.as_deref().is_none_or(|t| t.eq_ignore_ascii_case(tag))
            && self.classes.iter().all(|c| classes.contains(c))
    }
}

fn is_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut tokens = s.split('.');
        let tag = match tokens.next() {
            Some("") => None,
            Some(name) if is_name(name) => Some(name.to_string()),
            _ => return Err(SelectorError::Unsupported(s.to_string())),
        };

        let classes = tokens
            .map(|name| {
                if is_name(name) {
                    Ok(name.to_string())
                } else {
                    Err(SelectorError::Unsupported(s.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tag, classes })
    }
}
