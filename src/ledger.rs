/*
ledger.rs

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

//! Idempotent updates of the drop ledgers.
//!
//! Three ledgers record the drops:
//!
//! * The log (`terminal/daily/LOG.md`) keeps the whole history, newest first.
//! * The README block, between two sentinel comments, only shows the latest drop.
//! * The index page card, between two sentinel comments, only shows the latest drop.
//!
//! The functions in this module take the current file contents and return the new contents.
//! See [`crate::saver::ledger`] for the file wrappers.

use crate::config;

pub const LOG_HEADER: &str = "# Daily Terminal Drops\n\n";
const LOG_TITLE: &str = "# Daily Terminal Drops";
const README_HEADING: &str = "## Daily Terminal Drops";
const CARDS_MARKER: &str = "      <section class=\"cards\">\n";

/// Return a log line for a drop.
pub fn log_entry(date: &str, title: &str, file: &str) -> String {
    format!("- {date} — {title} (`{file}`)\n")
}

/// Add a drop to the log.
///
/// `existing` is None when the log does not exist yet.
/// Return None when the log already mentions `file`, so that the caller can skip the write.
pub fn upsert_log(existing: Option<&str>, date: &str, title: &str, file: &str) -> Option<String> {
    let entry: String = log_entry(date, title, file);

    let Some(text) = existing else {
        return Some(format!("{LOG_HEADER}{entry}"));
    };

    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.iter().any(|line| line.contains(file)) {
        return None;
    }

    let mut out = String::with_capacity(text.len() + entry.len() + LOG_HEADER.len());
    if lines.first().is_some_and(|line| line.starts_with(LOG_TITLE)) {
        // Newest entry goes right below the title and its blank line
        let split: usize = lines.len().min(2);
        lines[..split].iter().for_each(|line| out.push_str(line));
        out.push_str(&entry);
        lines[split..].iter().for_each(|line| out.push_str(line));
    } else {
        out.push_str(LOG_HEADER);
        out.push_str(&entry);
        out.push_str(text);
    }
    Some(out)
}

/// Return the text before the first `start` and after the first `end` that follows it.
fn split_block<'a>(text: &'a str, start: &str, end: &str) -> Option<(&'a str, &'a str)> {
    let (before, rest) = text.split_once(start)?;
    let (_, after) = rest.split_once(end)?;
    Some((before, after))
}

/// Replace the region between `start` and `end` by `block`.
///
/// When one of the sentinels is missing, the block and its sentinels are appended to the text.
pub fn ensure_block(text: &str, start: &str, end: &str, block: &str) -> String {
    if let Some((before, after)) = split_block(text, start, end) {
        return format!("{before}{start}\n{block}\n{end}{after}");
    }
    format!("{}\n\n{start}\n{block}\n{end}\n", text.trim_end())
}

/// Return the README block for a drop.
pub fn readme_block(date: &str, title: &str, file: &str) -> String {
    format!(
        "Latest: {date} — {title} (`{file}`)\nSee `{}` for history.",
        config::LOG_FILE
    )
}

/// Show the drop in the README "Daily Terminal Drops" section.
///
/// The section heading is added when missing.
pub fn update_readme(text: &str, date: &str, title: &str, file: &str) -> String {
    let text: String = if text.contains(README_HEADING) {
        text.to_string()
    } else {
        format!("{}\n\n{README_HEADING}\n", text.trim_end())
    };
    ensure_block(
        &text,
        config::README_BLOCK_START,
        config::README_BLOCK_END,
        &readme_block(date, title, file),
    )
}

/// Return the index page card for a drop.
pub fn index_card(date: &str, title: &str, public_file: &str) -> String {
    format!(
        "        <article class=\"card\">
          <h2>Daily Terminal Drop</h2>
          <p>{title} — {date}. Fresh terminal game released each morning.</p>
          <div class=\"meta\">
            <span>Terminal</span>
            <span>Daily</span>
            <span>Creative</span>
          </div>
          <a class=\"cta\" href=\"{public_file}\">View Today's Game</a>
        </article>"
    )
}

/// Show the drop in the index page card.
///
/// When the card sentinels are missing, the card is inserted at the top of the cards section.
/// When the page has no cards section, the text is returned unchanged.
pub fn update_index(text: &str, date: &str, title: &str, public_file: &str) -> String {
    let start: &str = config::INDEX_BLOCK_START;
    let end: &str = config::INDEX_BLOCK_END;
    let card: String = index_card(date, title, public_file);

    if let Some((before, after)) = split_block(text, start, end) {
        return format!("{before}{start}\n{card}\n{end}{after}");
    }

    match text.split_once(CARDS_MARKER) {
        Some((before, after)) => format!("{before}{CARDS_MARKER}{start}\n{card}\n{end}\n{after}"),
        None => text.to_string(),
    }
}
