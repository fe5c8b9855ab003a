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

//! Manage the dungeon leaderboard.
//!
//! The main object, [`HighScores`], keeps the runs with the fewest turns.
//! This object is saved when the player escapes the dungeon, and is restored before saving a new
//! score or when the leaderboard is displayed.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use serde::{Deserialize, Serialize};

/// Number of entries in the leaderboard (number of top scores to keep).
pub const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Name that the player entered.
    pub name: String,

    /// Number of turns it took to escape.
    pub turns: u32,
}

/// Sorted list of the top scores.
///
/// Serialized as a flat JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HighScores {
    /// Scores sorted by ascending number of turns.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<ScoreEntry>,
}

impl HighScores {
    /// Create an empty [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Restore the ordering and size invariants, for lists that were edited by hand.
    ///
    /// The sort is stable: entries with the same number of turns keep their order.
    pub fn normalize(&mut self) {
        self.top.sort_by_key(|s| s.turns);
        self.top.truncate(BOARD_SIZE);
    }

    /// Add a score to the leaderboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    /// A new score ranks after the existing scores with the same number of turns.
    pub fn add_score(&mut self, name: &str, turns: u32) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<ScoreEntry> = Vec::with_capacity(BOARD_SIZE);
        let new_score = ScoreEntry {
            name: name.to_string(),
            turns,
        };

        for score in &self.top {
            // Insert the new score in the temporary board
            if turns < score.turns && new_score_position.is_none() {
                new_score_position = Some(tmp_top.len() + 1);
                tmp_top.push(new_score.clone());
            }
            // Do not add more scores than the board size
            if tmp_top.len() >= BOARD_SIZE {
                break;
            }
            tmp_top.push(score.clone());
        }
        // If the board is not full and the new score has not been added yet, then add the new
        // score at the end of the board
        if tmp_top.len() < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(tmp_top.len() + 1);
            tmp_top.push(new_score);
        }
        tmp_top.truncate(BOARD_SIZE);
        self.top = tmp_top;
        new_score_position
    }

    /// Return the list of [`ScoreEntry`], best first.
    pub fn get_scores(&self) -> &[ScoreEntry] {
        &self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Return the printable leaderboard.
    pub fn to_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["No scores yet. Be the first!".to_string()];
        }
        let mut lines: Vec<String> = Vec::with_capacity(self.top.len() + 1);
        lines.push("Top Runs (fewest turns):".to_string());
        for (i, s) in self.get_scores().iter().enumerate() {
            lines.push(format!("{}. {} - {} turns", i + 1, s.name, s.turns));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    fn is_sorted(scores: &[ScoreEntry]) -> bool {
        scores.windows(2).all(|w| w[0].turns <= w[1].turns)
    }

    #[test]
    fn board_stays_sorted_and_capped() {
        for seed in 0..20 {
            let mut rng = SeededRng::new(seed);
            let mut board = HighScores::new();
            for i in 0..40 {
                let turns = rng.below(100);
                board.add_score(&format!("p{i}"), turns);
                assert!(is_sorted(board.get_scores()));
                assert!(board.get_scores().len() <= BOARD_SIZE);
            }
            assert_eq!(board.get_scores().len(), BOARD_SIZE);
        }
    }

    #[test]
    fn positions_and_ties() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score("a", 30), Some(1));
        assert_eq!(board.add_score("b", 10), Some(1));
        assert_eq!(board.add_score("c", 30), Some(3));
        let names: Vec<&str> = board.get_scores().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn full_board_rejects_slow_runs() {
        let mut board = HighScores::new();
        for i in 0..BOARD_SIZE as u32 {
            board.add_score("fast", i);
        }
        assert_eq!(board.add_score("slow", 500), None);
        assert_eq!(board.add_score("best", 0), Some(2));
        assert_eq!(board.get_scores().len(), BOARD_SIZE);
        assert_eq!(board.get_scores().last().unwrap().turns, 8);
    }

    #[test]
    fn normalize_sorts_hand_edited_lists() {
        let mut board: HighScores =
            serde_json::from_str(r#"[{"name": "z", "turns": 9}, {"name": "y", "turns": 2}]"#)
                .unwrap();
        board.normalize();
        assert_eq!(board.get_scores()[0].name, "y");
    }

    #[test]
    fn leaderboard_lines() {
        let mut board = HighScores::new();
        assert_eq!(board.to_lines(), ["No scores yet. Be the first!"]);
        board.add_score("ana", 42);
        assert_eq!(board.to_lines(), ["Top Runs (fewest turns):", "1. ana - 42 turns"]);
    }
}
