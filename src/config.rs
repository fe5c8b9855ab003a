/*
config.rs

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

//! Build-time configuration and the layout of the generated files.
//!
//! All paths are relative to the repository root given with `--root`.

pub const PKGNAME: &str = "daily-drops";

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Timezone used to decide which day it is.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Directory that receives the generated scripts, the log, and the latest status file.
pub const DAILY_DIR: &str = "terminal/daily";

/// Public-facing copy of the generated scripts.
pub const PUBLIC_DAILY_DIR: &str = "public/daily";

pub const LOG_FILE: &str = "terminal/daily/LOG.md";
pub const LATEST_FILE: &str = "terminal/daily/.latest.json";
pub const PUBLIC_STATUS_FILE: &str = "public/daily.json";
pub const README_FILE: &str = "README.md";
pub const INDEX_FILE: &str = "public/index.html";

/// Default location of the dungeon leaderboard.
pub const SCORES_FILE: &str = "terminal/.scores.json";

pub const README_BLOCK_START: &str = "<!-- DAILY_DROP_START -->";
pub const README_BLOCK_END: &str = "<!-- DAILY_DROP_END -->";
pub const INDEX_BLOCK_START: &str = "<!-- DAILY_CARD_START -->";
pub const INDEX_BLOCK_END: &str = "<!-- DAILY_CARD_END -->";
