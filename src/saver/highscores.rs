/*
highscores.rs

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

//! Save and restore the dungeon leaderboard.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`]: a flat array of `{name, turns}` objects.

use log::{debug, warn};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::highscores::HighScores;

/// Object to save and restore the leaderboard.
pub struct SaverHighScores {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the score file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("High scores file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`HighScores`] object for the high scores file.
    ///
    /// Return the [`HighScores`] object or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let mut highscores: HighScores = serde_json::from_reader(reader)?;
        highscores.normalize();
        Ok(Some(highscores))
    }

    /// Retrieve the leaderboard, treating a missing or unreadable file as an empty board.
    pub fn load(&self) -> HighScores {
        match self.get_highscores() {
            Ok(Some(h)) => h,
            Ok(None) => HighScores::new(),
            Err(e) => {
                warn!("Ignoring unreadable scores {:?}: {e}", self.save_file);
                HighScores::new()
            }
        }
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.save_file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a run to the leaderboard and save it.
    ///
    /// Return the position of the run in the board, or None if it did not make it.
    pub fn save_score(&self, name: &str, turns: u32) -> Result<Option<usize>, Box<dyn Error>> {
        let mut highscores: HighScores = self.load();
        let position: Option<usize> = highscores.add_score(name, turns);
        self.save_highscores(&highscores)?;
        Ok(position)
    }

    /// Delete the high scores file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
