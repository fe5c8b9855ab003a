/*
grid_chase.rs

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

//! Signal Chase: reach the signal on a small grid without stepping on a trap.

use std::collections::BTreeSet;

use super::{MiniGame, Outcome};
use crate::rng::SeededRng;

/// Board parameters.
#[derive(Debug, Clone)]
pub struct GridChaseConfig {
    pub width: i32,
    pub height: i32,
    pub traps: usize,
    pub moves: u32,
    pub player: char,
    pub target: char,
    pub trap: char,
    pub empty: char,
}

impl Default for GridChaseConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 7,
            traps: 8,
            moves: 18,
            player: '@',
            target: '*',
            trap: '^',
            empty: '.',
        }
    }
}

pub struct GridChase {
    config: GridChaseConfig,
    player: (i32, i32),
    target: (i32, i32),
    traps: BTreeSet<(i32, i32)>,
    moves_left: u32,
    feedback: Vec<String>,
}

impl GridChase {
    /// Create the board for the seed.
    ///
    /// The player starts in the bottom-left corner and the signal sits in the top-right corner.
    /// Traps are drawn inside the border.
    pub fn new(seed: i64, config: GridChaseConfig) -> Self {
        let mut rng = SeededRng::new(seed);
        let player: (i32, i32) = (0, config.height - 1);
        let target: (i32, i32) = (config.width - 1, 0);

        let inner: usize = ((config.width - 2).max(0) * (config.height - 2).max(0)) as usize;
        let count: usize = config.traps.min(inner);
        let mut traps: BTreeSet<(i32, i32)> = BTreeSet::new();
        while traps.len() < count {
            let x: i32 = rng.range_inclusive(1, config.width - 2);
            let y: i32 = rng.range_inclusive(1, config.height - 2);
            if (x, y) == player || (x, y) == target {
                continue;
            }
            traps.insert((x, y));
        }

        Self {
            moves_left: config.moves,
            config,
            player,
            target,
            traps,
            feedback: Vec::new(),
        }
    }

}

impl MiniGame for GridChase {
    fn render(&self) -> String {
        let mut board = format!("Moves left: {}\n", self.moves_left);
        for y in 0..self.config.height {
            let row: Vec<String> = (0..self.config.width)
                .map(|x| {
                    let cell: char = if (x, y) == self.player {
                        self.config.player
                    } else if (x, y) == self.target {
                        self.config.target
                    } else if self.traps.contains(&(x, y)) {
                        self.config.trap
                    } else {
                        self.config.empty
                    };
                    cell.to_string()
                })
                .collect();
            board.push_str(&row.join(" "));
            board.push('\n');
        }
        board
    }

    fn prompt(&self) -> String {
        "Move (W/A/S/D) or Q: ".to_string()
    }

    fn apply_command(&mut self, input: &str) -> Outcome {
        let cmd: String = input.trim().to_lowercase();
        let Some(first) = cmd.chars().next() else {
            return Outcome::Continue;
        };

        let (dx, dy): (i32, i32) = match first {
            'q' => {
                self.feedback.push("Signal lost.".to_string());
                return Outcome::Quit;
            }
            'w' => (0, -1),
            's' => (0, 1),
            'a' => (-1, 0),
            'd' => (1, 0),
            _ => {
                self.feedback.push("Unknown command.".to_string());
                return Outcome::Continue;
            }
        };

        self.player = (
            (self.player.0 + dx).clamp(0, self.config.width - 1),
            (self.player.1 + dy).clamp(0, self.config.height - 1),
        );
        self.moves_left = self.moves_left.saturating_sub(1);

        if self.traps.contains(&self.player) {
            self.feedback.push("You hit a trap. Signal lost.".to_string());
            return Outcome::Lost;
        }
        if self.player == self.target {
            self.feedback.push("Signal captured. You win.".to_string());
            return Outcome::Won;
        }
        if self.moves_left == 0 {
            self.feedback.push("Out of moves. Signal fades.".to_string());
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
    use crate::games::session;

    const SEED: i64 = 20_260_224;

    fn game() -> GridChase {
        GridChase::new(SEED, GridChaseConfig::default())
    }

    fn play(game: &mut GridChase, script: &str) -> (Outcome, String) {
        let mut input: &[u8] = script.as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let outcome = session::run(game, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn traps_match_the_published_script() {
        let traps: Vec<(i32, i32)> = game().traps.iter().copied().collect();
        assert_eq!(
            traps,
            [(1, 5), (2, 1), (4, 3), (4, 4), (5, 1), (6, 4), (6, 5), (7, 1)]
        );
    }

    #[test]
    fn first_board() {
        assert_eq!(
            game().render(),
            "Moves left: 18\n\
             . . . . . . . . *\n\
             . . ^ . . ^ . ^ .\n\
             . . . . . . . . .\n\
             . . . . ^ . . . .\n\
             . . . . ^ . ^ . .\n\
             . ^ . . . . ^ . .\n\
             @ . . . . . . . .\n"
        );
    }

    #[test]
    fn edge_route_wins() {
        let mut g = game();
        let (outcome, text) = play(&mut g, "d\nd\nd\nd\nd\nd\nd\nD\nw\nw\nw\nw\nw\nw\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(text.ends_with("Signal captured. You win.\n"));
        assert_eq!(g.moves_left, 4);
    }

    #[test]
    fn trap_loses() {
        let (outcome, text) = play(&mut game(), "w\nd\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(text.ends_with("You hit a trap. Signal lost.\n"));
    }

    #[test]
    fn clamped_moves_still_count() {
        let script = "a\n".repeat(18);
        let (outcome, text) = play(&mut game(), &script);
        assert_eq!(outcome, Outcome::Lost);
        assert!(text.ends_with("Out of moves. Signal fades.\n"));
    }

    #[test]
    fn bad_commands_do_not_spend_moves() {
        let mut g = game();
        assert_eq!(g.apply_command(""), Outcome::Continue);
        assert!(g.take_feedback().is_empty());
        assert_eq!(g.apply_command("x"), Outcome::Continue);
        assert_eq!(g.take_feedback(), ["Unknown command."]);
        assert_eq!(g.moves_left, 18);
        assert_eq!(g.apply_command("  Quit "), Outcome::Quit);
        assert_eq!(g.take_feedback(), ["Signal lost."]);
    }
}
