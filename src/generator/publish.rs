/*
publish.rs

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

//! Publish a daily drop under a repository root.
//!
//! The script is written only when it does not exist yet, so re-running the generator on the same
//! day leaves it untouched.
//! The ledgers are then updated, the status files rewritten, and the script copied to the public
//! directory.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::daily::{DailyDrop, DropPlan};
use crate::config;
use crate::error::DropError;
use crate::saver::ledger::SaverLedger;
use crate::saver::status::SaverStatus;

/// What a generator run did.
#[derive(Debug)]
pub struct PublishReport {
    pub drop: DailyDrop,

    /// Whether the script was created by this run.
    pub created: bool,

    /// Whether the log received a new entry.
    pub logged: bool,
    pub readme_updated: bool,
    pub index_updated: bool,
}

fn create_dir(path: &Path) -> Result<(), DropError> {
    fs::create_dir_all(path).map_err(|e| DropError::io(path, e))
}

/// Run a side-file update. Failures are logged and reported as "not updated".
fn best_effort(what: &str, result: Result<bool, DropError>) -> bool {
    result.unwrap_or_else(|e| {
        warn!("Cannot update the {what}: {e}");
        false
    })
}

/// Publish the drop of the plan under `root`.
///
/// # Errors
///
/// Fail when the output directories, the script, its public copy, the log, or the status files
/// cannot be written.
pub fn publish(root: &Path, plan: &DropPlan) -> Result<PublishReport, DropError> {
    create_dir(&root.join(config::DAILY_DIR))?;

    let drop: DailyDrop = plan.to_drop();
    let script_path: PathBuf = root.join(&drop.file);
    let created: bool = !script_path.exists();
    if created {
        fs::write(&script_path, plan.script()).map_err(|e| DropError::io(&script_path, e))?;
        info!("Created {script_path:?}");
    } else {
        info!("{script_path:?} already exists");
    }

    let ledger = SaverLedger::new(root);
    let logged: bool = ledger.update_log(&drop)?;
    let readme_updated: bool = best_effort("README", ledger.update_readme(&drop));
    let index_updated: bool = best_effort("index page", ledger.update_index(&drop));

    SaverStatus::new(root).save_latest(&drop)?;

    let public_dir: PathBuf = root.join(config::PUBLIC_DAILY_DIR);
    create_dir(&public_dir)?;
    let public_path: PathBuf = public_dir.join(plan.filename());
    fs::copy(&script_path, &public_path).map_err(|e| DropError::io(&public_path, e))?;

    Ok(PublishReport {
        drop,
        created,
        logged,
        readme_updated,
        index_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::daily::parse_date;

    fn temp_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "daily-drops-publish-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn plan(date: &str) -> DropPlan {
        DropPlan::for_date(parse_date(date).unwrap())
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn publishing_twice_is_idempotent() {
        let root = temp_root("twice");
        let p = plan("2026-02-24");

        let first = publish(&root, &p).unwrap();
        assert!(first.created);
        assert!(first.logged);
        assert!(!first.readme_updated);
        assert!(!first.index_updated);
        let script = read(&root, &first.drop.file);
        let log = read(&root, config::LOG_FILE);

        let second = publish(&root, &p).unwrap();
        assert!(!second.created);
        assert!(!second.logged);
        assert_eq!(read(&root, &second.drop.file), script);
        assert_eq!(read(&root, config::LOG_FILE), log);
        assert_eq!(log.matches("2026_02_24_azure_prism.py").count(), 1);

        assert_eq!(
            script,
            include_str!("../../tests/fixtures/2026_02_24_azure_prism.py")
        );
        assert_eq!(read(&root, "public/daily/2026_02_24_azure_prism.py"), script);
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn existing_script_is_kept() {
        let root = temp_root("kept");
        let p = plan("2026-02-10");
        fs::create_dir_all(root.join(config::DAILY_DIR)).unwrap();
        fs::write(root.join(p.rel_path()), "hand edited\n").unwrap();

        let report = publish(&root, &p).unwrap();
        assert!(!report.created);
        assert_eq!(read(&root, &p.rel_path()), "hand edited\n");
        assert_eq!(read(&root, "public/daily/2026_02_10_lunar_cipher.py"), "hand edited\n");
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn side_files_are_updated_when_present() {
        let root = temp_root("side");
        fs::create_dir_all(root.join("public")).unwrap();
        fs::write(root.join(config::README_FILE), "# Games\n").unwrap();
        fs::write(
            root.join(config::INDEX_FILE),
            "<main>\n      <section class=\"cards\">\n      </section>\n</main>\n",
        )
        .unwrap();

        let report = publish(&root, &plan("2026-02-16")).unwrap();
        assert!(report.readme_updated);
        assert!(report.index_updated);

        let readme = read(&root, config::README_FILE);
        assert!(readme.contains(
            "Latest: 2026-02-16 — Obsidian Harbor: Word Forge \
             (`terminal/daily/2026_02_16_obsidian_harbor.py`)"
        ));
        let index = read(&root, config::INDEX_FILE);
        assert!(index.contains("href=\"daily/2026_02_16_obsidian_harbor.py\""));
        assert!(index.contains("<p>Obsidian Harbor: Word Forge — 2026-02-16."));

        publish(&root, &plan("2026-02-24")).unwrap();
        let readme = read(&root, config::README_FILE);
        assert!(!readme.contains("obsidian_harbor"));
        let log = read(&root, config::LOG_FILE);
        let lines: Vec<&str> = log.lines().collect();
        assert!(lines[2].contains("azure_prism"));
        assert!(lines[3].contains("obsidian_harbor"));

        let status = SaverStatus::new(&root).get_latest().unwrap().unwrap();
        assert_eq!(status.date, "2026-02-24");
        let _ = fs::remove_dir_all(root);
    }
}
