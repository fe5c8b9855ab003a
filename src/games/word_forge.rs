/*
word_forge.rs

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

//! Word Forge: unscramble a word.
//!
//! The scramble is only printed on screen; nothing that reveals the word is written to disk.

use super::{MiniGame, Outcome};
use crate::generator::templates;
use crate::rng::SeededRng;

#[derive(Debug, Clone)]
pub struct WordForgeConfig {
    pub words: Vec<String>,
    pub tries: u32,
}

impl Default for WordForgeConfig {
    fn default() -> Self {
        Self {
            words: templates::words().iter().map(|w| w.to_string()).collect(),
            tries: 5,
        }
    }
}

pub struct WordForge {
    word: String,
    scrambled: String,
    tries_left: u32,
    feedback: Vec<String>,
}

/// Shuffle the letters of a word.
pub fn scramble(word: &str, rng: &mut SeededRng) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    rng.shuffle(&mut letters);
    letters.into_iter().collect()
}

impl WordForge {
    /// Pick a word and scramble it, both from the same seeded stream.
    pub fn new(seed: i64, config: WordForgeConfig) -> Self {
        let mut rng = SeededRng::new(seed);
        let word: String = rng.choose(&config.words).cloned().unwrap_or_default();
        let scrambled: String = scramble(&word, &mut rng);
        Self {
            word,
            scrambled,
            tries_left: config.tries,
            feedback: Vec::new(),
        }
    }
}

impl MiniGame for WordForge {
    fn intro(&self) -> Vec<String> {
        vec![
            "Word Forge".to_string(),
            "Unscramble the word. Type Q to quit.".to_string(),
            format!("Scramble: {}", self.scrambled),
        ]
    }

    fn render(&self) -> String {
        String::new()
    }

    fn prompt(&self) -> String {
        format!("[{} tries] > ", self.tries_left)
    }

    fn apply_command(&mut self, input: &str) -> Outcome {
        let guess: String = input.trim().to_lowercase();
        if guess == "q" {
            self.feedback.push("Forge cools.".to_string());
            return Outcome::Quit;
        }
        if guess == self.word {
            self.feedback.push("Word reforged. You win.".to_string());
            return Outcome::Won;
        }
        self.feedback.push("Not quite.".to_string());
        self.tries_left = self.tries_left.saturating_sub(1);

        if self.tries_left == 0 {
            self.feedback.push(format!("The word was '{}'.", self.word));
            return Outcome::Lost;
        }
        Outcome::Continue
    }

    fn take_feedback(&mut self) -> Vec<String> {
        std::mem::take(&mut self.feedback)
    }
}
