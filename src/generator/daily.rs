/*
daily.rs

Copyright 2025 Hervé Quatremain

This file is part of Daily Drops.

Daily Drops is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Daily Drops is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Daily Drops. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Derive the daily drop from the calendar date.
//!
//! The date gives an 8-digit seed (`YYYYMMDD`).
//! The seeded stream then draws an adjective, a noun, and a [`Variant`], in that order.
//! Because nothing else feeds the stream, a drop can be regenerated byte for byte from its date.

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

use super::templates::Variant;
use crate::config;
use crate::error::DropError;
use crate::rng::SeededRng;

pub const ADJECTIVES: [&str; 12] = [
    "Amber", "Silent", "Crimson", "Velvet", "Neon", "Iron", "Arc", "Lunar", "Solar", "Obsidian",
    "Azure", "Golden",
];

pub const NOUNS: [&str; 12] = [
    "Circuit", "Glyph", "Maze", "Beacon", "Vault", "Echo", "Harbor", "Cipher", "Prism", "Lantern",
    "Anvil", "Signal",
];

/// Metadata of a published drop, as written to the status files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyDrop {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,

    /// Full game name, for example `Azure Prism: Signal Chase`.
    pub title: String,

    /// Path of the script, relative to the repository root.
    pub file: String,

    /// Path of the public copy, relative to the public directory.
    pub public_file: String,
}

/// Everything the seeded stream decides for a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPlan {
    pub date: NaiveDate,
    pub seed: i64,

    /// Adjective and noun, for example `Azure Prism`.
    pub title: String,
    pub variant: Variant,
}

impl DropPlan {
    /// Build the plan for the given date.
    pub fn for_date(date: NaiveDate) -> Self {
        let seed: i64 = date_seed(date);
        let mut rng = SeededRng::new(seed);

        // The draw order is part of the format: adjective, noun, then variant
        let adjective: &str = rng.choose(&ADJECTIVES).copied().unwrap_or(ADJECTIVES[0]);
        let noun: &str = rng.choose(&NOUNS).copied().unwrap_or(NOUNS[0]);
        let index: u32 = rng.below(Variant::ALL.len() as u32);
        let variant: Variant = Variant::from_repr(index as u8).unwrap_or(Variant::SignalChase);

        let plan = Self {
            date,
            seed,
            title: format!("{adjective} {noun}"),
            variant,
        };
        debug!(
            "Plan for {}: seed={} title={:?} variant={}",
            plan.date_str(),
            plan.seed,
            plan.title,
            plan.variant
        );
        plan
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Title followed by the variant label.
    pub fn game_name(&self) -> String {
        format!("{}: {}", self.title, self.variant.label())
    }

    /// File name of the generated script.
    pub fn filename(&self) -> String {
        format!("{}.py", slugify(&format!("{}_{}", self.date_str(), self.title)))
    }

    /// Path of the script relative to the repository root.
    pub fn rel_path(&self) -> String {
        format!("{}/{}", config::DAILY_DIR, self.filename())
    }

    /// Path of the public copy relative to the public directory.
    pub fn public_rel_path(&self) -> String {
        format!("daily/{}", self.filename())
    }

    /// Full content of the generated script: header comment and rendered template.
    pub fn script(&self) -> String {
        format!(
            "# Daily Terminal Drop\n# Date: {}\n# Title: {}\n\n{}",
            self.date_str(),
            self.game_name(),
            self.variant.render(self.seed)
        )
    }

    pub fn to_drop(&self) -> DailyDrop {
        DailyDrop {
            date: self.date_str(),
            title: self.game_name(),
            file: self.rel_path(),
            public_file: self.public_rel_path(),
        }
    }
}

/// Return the `YYYYMMDD` seed of a date.
pub fn date_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Return the current date in the given timezone.
///
/// # Errors
///
/// Fail when the timezone name is unknown.
pub fn today(timezone: &str) -> Result<NaiveDate, DropError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| DropError::UnknownTimezone(timezone.to_string()))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DropError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DropError::InvalidDate(value.to_string()))
}

/// Resolve the date of a run: the explicit date if given, otherwise today in the timezone.
///
/// The timezone is validated even when a date is given, so that a typo is never silently
/// ignored.
pub fn resolve_date(date: Option<NaiveDate>, timezone: &str) -> Result<NaiveDate, DropError> {
    let today: NaiveDate = today(timezone)?;
    Ok(date.unwrap_or(today))
}

/// Lowercase the text and collapse every run of characters other than `a-z` and `0-9` into a
/// single `_`. Leading and trailing `_` are removed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}
