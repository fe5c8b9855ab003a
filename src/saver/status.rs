/*
status.rs

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

//! Save and restore the latest drop.
//!
//! The saved object is a serialization of the [`DailyDrop`] object in JSON format by using
//! [`serde`]. It is written twice: next to the scripts and in the public directory.

use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::DropError;
use crate::generator::daily::DailyDrop;

/// Object to save and restore the latest drop.
pub struct SaverStatus {
    /// Status file next to the scripts.
    latest_file: PathBuf,

    /// Status file read by the web page.
    public_file: PathBuf,
}

impl SaverStatus {
    /// Create a [`SaverStatus`] object for the given repository root.
    pub fn new(root: &Path) -> Self {
        let latest_file: PathBuf = root.join(config::LATEST_FILE);
        let public_file: PathBuf = root.join(config::PUBLIC_STATUS_FILE);
        debug!("Status files: {latest_file:?} {public_file:?}");
        Self {
            latest_file,
            public_file,
        }
    }

    /// Retrieve the latest [`DailyDrop`].
    ///
    /// Return None if no drop has been generated yet.
    pub fn get_latest(&self) -> Result<Option<DailyDrop>, DropError> {
        let file: File = match File::open(&self.latest_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(DropError::io(&self.latest_file, error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let drop: DailyDrop = serde_json::from_reader(reader)
            .map_err(|e| DropError::json(&self.latest_file, e))?;
        Ok(Some(drop))
    }

    /// Save the provided [`DailyDrop`] to both status files.
    pub fn save_latest(&self, drop: &DailyDrop) -> Result<(), DropError> {
        for path in [&self.latest_file, &self.public_file] {
            Self::write(path, drop)?;
        }
        Ok(())
    }

    fn write(path: &Path, drop: &DailyDrop) -> Result<(), DropError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DropError::io(parent, e))?;
        }
        let file: File = File::create(path).map_err(|e| DropError::io(path, e))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, drop).map_err(|e| DropError::json(path, e))?;
        writer.flush().map_err(|e| DropError::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "daily-drops-status-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn status_round_trip_and_format() {
        let root = temp_root("roundtrip");
        let saver = SaverStatus::new(&root);
        assert_eq!(saver.get_latest().unwrap(), None);

        let drop = DailyDrop {
            date: "2026-02-24".to_string(),
            title: "Azure Prism: Signal Chase".to_string(),
            file: "terminal/daily/2026_02_24_azure_prism.py".to_string(),
            public_file: "daily/2026_02_24_azure_prism.py".to_string(),
        };
        saver.save_latest(&drop).unwrap();
        assert_eq!(saver.get_latest().unwrap(), Some(drop));

        let text = std::fs::read_to_string(root.join(config::PUBLIC_STATUS_FILE)).unwrap();
        assert_eq!(
            text,
            "{\n  \"date\": \"2026-02-24\",\n  \"title\": \"Azure Prism: Signal Chase\",\n  \
             \"file\": \"terminal/daily/2026_02_24_azure_prism.py\",\n  \
             \"public_file\": \"daily/2026_02_24_azure_prism.py\"\n}"
        );
        let _ = std::fs::remove_dir_all(root);
    }
}
