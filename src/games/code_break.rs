/*
code_break.rs

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

//! Vault Code: guess a digit code from exact and near hints.

use std::collections::HashMap;

use super::{MiniGame, Outcome};
use crate::rng::SeededRng;

#[derive(Debug, Clone)]
pub struct CodeBreakConfig {
    /// Number of digits in the code. Duplicates are allowed.
    pub length: usize,
    pub tries: u32,
}

impl Default for CodeBreakConfig {
    fn default() -> Self {
        Self {
            length: 4,
            tries: 8,
        }
    }
}

pub struct CodeBreak {
    config: CodeBreakConfig,
    secret: String,
    tries_left: u32,
    feedback: Vec<String>,
}

/// Score a guess against the secret.
///
/// Return the number of digits at the right position, and the number of the other digits that
/// are in the code (each secret digit is matched at most once).
pub fn score_guess(secret: &str, guess: &str) -> (usize, usize) {
    let exact: usize = secret
        .chars()
        .zip(guess.chars())
        .filter(|(a, b)| a == b)
        .count();

    let mut secret_counts: HashMap<char, usize> = HashMap::new();
    for c in secret.chars() {
        *secret_counts.entry(c).or_insert(0) += 1;
    }
    let mut guess_counts: HashMap<char, usize> = HashMap::new();
    for c in guess.chars() {
        *guess_counts.entry(c).or_insert(0) += 1;
    }
    let shared: usize = guess_counts
        .iter()
        .map(|(c, n)| (*n).min(secret_counts.get(c).copied().unwrap_or(0)))
        .sum();

    (exact, shared - exact)
}

impl CodeBreak {
    pub fn new(seed: i64, config: CodeBreakConfig) -> Self {
        let mut rng = SeededRng::new(seed);
        let secret: String = (0..config.length)
            .map(|_| rng.range_inclusive(0, 9).to_string())
            .collect();
        Self::with_secret(secret, config)
    }

    fn with_secret(secret: String, config: CodeBreakConfig) -> Self {
        Self {
            tries_left: config.tries,
            config,
            secret,
            feedback: Vec::new(),
        }
    }

    fn is_valid_guess(&self, guess: &str) -> bool {
        guess.chars().count() == self.config.length && guess.chars().all(|c| c.is_ascii_digit())
    }
}

impl MiniGame for CodeBreak {
    fn intro(&self) -> Vec<String> {
        vec![
            "Vault Code".to_string(),
            format!(
                "Guess the {}-digit code. Duplicates allowed.",
                self.config.length
            ),
        ]
    }

    fn render(&self) -> String {
        String::new()
    }

    fn prompt(&self) -> String {
        format!("[{} tries] > ", self.tries_left)
    }

    fn apply_command(&mut self, input: &str) -> Outcome {
        let guess: &str = input.trim();
        if guess.eq_ignore_ascii_case("q") {
            self.feedback.push("Vault sealed.".to_string());
            return Outcome::Quit;
        }
        if !self.is_valid_guess(guess) {
            self.feedback
                .push(format!("Enter exactly {} digits.", self.config.length));
            return Outcome::Continue;
        }

        let (exact, near) = score_guess(&self.secret, guess);
        if exact == self.config.length {
            self.feedback.push("Vault opened.".to_string());
            return Outcome::Won;
        }
        self.feedback.push(format!("Exact: {exact} | Near: {near}"));
        self.tries_left = self.tries_left.saturating_sub(1);

        if self.tries_left == 0 {
            self.feedback
                .push(format!("Lockdown. Code was {}.", self.secret));
            return Outcome::Lost;
        }
        Outcome::Continue
    }

    fn take_feedback(&mut self) -> Vec<String> {
        std::mem::take(&mut self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_for(rng: &mut SeededRng) -> String {
        (0..4).map(|_| rng.range_inclusive(0, 9).to_string()).collect()
    }

    #[test]
    fn secret_matches_the_published_script() {
        let game = CodeBreak::new(20_260_210, CodeBreakConfig::default());
        assert_eq!(game.secret, "7749");
    }

    #[test]
    fn scoring_examples() {
        assert_eq!(score_guess("1234", "1234"), (4, 0));
        assert_eq!(score_guess("1234", "4321"), (0, 4));
        assert_eq!(score_guess("1122", "1212"), (2, 2));
        assert_eq!(score_guess("7749", "7777"), (2, 0));
        assert_eq!(score_guess("7749", "0000"), (0, 0));
    }

    #[test]
    fn scoring_never_exceeds_code_length() {
        for seed in 0..200 {
            let secret = CodeBreak::new(seed, CodeBreakConfig::default()).secret;
            assert_eq!(score_guess(&secret, &secret), (4, 0));

            let mut rng = SeededRng::new(seed + 10_000);
            for _ in 0..20 {
                let guess = guess_for(&mut rng);
                let (exact, near) = score_guess(&secret, &guess);
                assert!(exact + near <= 4, "{secret} vs {guess}");
            }
        }
    }

    #[test]
    fn exact_guess_wins() {
        let mut game = CodeBreak::with_secret("1234".to_string(), CodeBreakConfig::default());
        assert_eq!(score_guess(&game.secret, "1234"), (4, 0));
        assert_eq!(game.apply_command(" 1234 "), Outcome::Won);
        assert_eq!(game.take_feedback(), ["Vault opened."]);
    }

    #[test]
    fn invalid_guesses_are_free() {
        let mut game = CodeBreak::with_secret("1234".to_string(), CodeBreakConfig::default());
        for bad in ["123", "12345", "12a4", ""] {
            assert_eq!(game.apply_command(bad), Outcome::Continue);
            assert_eq!(game.take_feedback(), ["Enter exactly 4 digits."]);
        }
        assert_eq!(game.tries_left, 8);
    }

    #[test]
    fn running_out_of_tries() {
        let mut game = CodeBreak::with_secret("1234".to_string(), CodeBreakConfig::default());
        for _ in 0..7 {
            assert_eq!(game.apply_command("4321"), Outcome::Continue);
            assert_eq!(game.take_feedback(), ["Exact: 0 | Near: 4"]);
        }
        assert_eq!(game.prompt(), "[1 tries] > ");
        assert_eq!(game.apply_command("1243"), Outcome::Lost);
        assert_eq!(
            game.take_feedback(),
            ["Exact: 2 | Near: 2", "Lockdown. Code was 1234."]
        );
    }
}
