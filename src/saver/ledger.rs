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

//! Apply the ledger updates to the files under the repository root.
//!
//! The contents are computed by the functions of the [`crate::ledger`] module.
//! The README and the index page are optional: when they do not exist, the update is skipped.

use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::DropError;
use crate::generator::daily::DailyDrop;
use crate::ledger;

/// Object to update the ledger files.
pub struct SaverLedger {
    /// Repository root.
    root: PathBuf,
}

impl SaverLedger {
    /// Create a [`SaverLedger`] object for the given repository root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Read a file, or return None if it does not exist.
    fn read_optional(path: &Path) -> Result<Option<String>, DropError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(DropError::io(path, error)),
            },
        }
    }

    fn write(path: &Path, text: &str) -> Result<(), DropError> {
        fs::write(path, text).map_err(|e| DropError::io(path, e))
    }

    /// Add the drop to the log, unless the log already mentions it.
    ///
    /// Return whether the log was modified.
    pub fn update_log(&self, drop: &DailyDrop) -> Result<bool, DropError> {
        let path: PathBuf = self.root.join(config::LOG_FILE);
        let existing: Option<String> = Self::read_optional(&path)?;

        match ledger::upsert_log(existing.as_deref(), &drop.date, &drop.title, &drop.file) {
            Some(text) => {
                Self::write(&path, &text)?;
                info!("Added {} to {path:?}", drop.file);
                Ok(true)
            }
            None => {
                debug!("{path:?} already lists {}", drop.file);
                Ok(false)
            }
        }
    }

    /// Show the drop in the README block.
    ///
    /// Return whether the README exists (and therefore was rewritten).
    pub fn update_readme(&self, drop: &DailyDrop) -> Result<bool, DropError> {
        let path: PathBuf = self.root.join(config::README_FILE);
        let Some(text) = Self::read_optional(&path)? else {
            debug!("No {path:?}: skipping the README block");
            return Ok(false);
        };
        let text: String = ledger::update_readme(&text, &drop.date, &drop.title, &drop.file);
        Self::write(&path, &text)?;
        Ok(true)
    }

    /// Show the drop in the index page card.
    ///
    /// Return whether the index page exists (and therefore was rewritten).
    pub fn update_index(&self, drop: &DailyDrop) -> Result<bool, DropError> {
        let path: PathBuf = self.root.join(config::INDEX_FILE);
        let Some(text) = Self::read_optional(&path)? else {
            debug!("No {path:?}: skipping the index card");
            return Ok(false);
        };
        let text: String =
            ledger::update_index(&text, &drop.date, &drop.title, &drop.public_file);
        Self::write(&path, &text)?;
        Ok(true)
    }
}
