/*
dungeon.rs

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

//! Dungeon Dash: a tiny roguelike.
//!
//! Collect enough treasure and reach the exit while a shadow wanders the dungeon.
//! The shadow takes a random legal step (possibly staying in place) after every player turn; it
//! does not chase the player.

use super::{MiniGame, Outcome};
use crate::rng::SeededRng;

/// Dungeon parameters.
#[derive(Debug, Clone)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    pub wall: char,
    pub floor: char,
    pub player: char,
    pub treasure: char,
    pub trap: char,
    pub exit: char,
    pub enemy: char,

    /// Treasure needed to unlock the exit.
    pub treasure_target: u32,

    /// Treasure placed in addition to the target.
    pub spare_treasure: u32,
    pub max_hp: i32,

    /// Share of the cells turned into inner walls.
    pub wall_ratio: f64,

    /// Share of the cells turned into traps.
    pub trap_ratio: f64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 28,
            height: 14,
            wall: '#',
            floor: '.',
            player: '@',
            treasure: '$',
            trap: '^',
            exit: '>',
            enemy: 'E',
            treasure_target: 5,
            spare_treasure: 2,
            max_hp: 3,
            wall_ratio: 0.12,
            trap_ratio: 0.05,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

pub struct Dungeon {
    config: DungeonConfig,
    rng: SeededRng,
    grid: Vec<Vec<char>>,
    player: Pos,
    enemy: Pos,
    hp: i32,
    treasure: u32,
    turns: u32,

    /// Message shown under the board at the next render.
    message: String,
    feedback: Vec<String>,
}

const HELP: &str = "Controls: W/A/S/D to move, R to rest, Q to quit\n\
                    Goal: collect treasure and reach the exit. Avoid traps and the shadow.";

/// Enemy steps, including staying in place.
const ENEMY_STEPS: [(isize, isize); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

impl Dungeon {
    pub fn new(seed: i64, config: DungeonConfig) -> Self {
        let grid: Vec<Vec<char>> = vec![vec![config.floor; config.width]; config.height];
        let mut dungeon = Self {
            rng: SeededRng::new(seed),
            grid,
            player: Pos { x: 1, y: 1 },
            enemy: Pos { x: 1, y: 1 },
            hp: config.max_hp,
            treasure: 0,
            turns: 0,
            message: String::new(),
            feedback: Vec::new(),
            config,
        };
        dungeon.generate();
        dungeon
    }

    /// Lay out walls, traps, treasure, the exit, the player, and the enemy.
    ///
    /// Everything is drawn from the seeded stream, in that order.
    fn generate(&mut self) {
        let (w, h) = (self.config.width, self.config.height);
        for y in 0..h {
            for x in 0..w {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    self.grid[y][x] = self.config.wall;
                }
            }
        }

        let cells: f64 = (w * h) as f64;
        for _ in 0..(cells * self.config.wall_ratio) as usize {
            let pos: Pos = self.random_inner();
            self.grid[pos.y][pos.x] = self.config.wall;
        }

        self.place_items(self.config.trap, (cells * self.config.trap_ratio) as usize);
        self.place_items(
            self.config.treasure,
            (self.config.treasure_target + self.config.spare_treasure) as usize,
        );

        self.place_exit();
        self.player = self.random_empty(&[]);
        self.enemy = self.random_empty(&[self.player]);
    }

    fn random_inner(&mut self) -> Pos {
        let x: i32 = self.rng.range_inclusive(1, self.config.width as i32 - 2);
        let y: i32 = self.rng.range_inclusive(1, self.config.height as i32 - 2);
        Pos {
            x: x as usize,
            y: y as usize,
        }
    }

    fn place_items(&mut self, item: char, count: usize) {
        for _ in 0..count {
            let pos: Pos = self.random_empty(&[]);
            self.grid[pos.y][pos.x] = item;
        }
    }

    /// The exit goes in the bottom-right quarter.
    fn place_exit(&mut self) {
        loop {
            let pos: Pos = self.random_empty(&[]);
            if pos.x > self.config.width / 2 && pos.y > self.config.height / 2 {
                self.grid[pos.y][pos.x] = self.config.exit;
                return;
            }
        }
    }

    fn random_empty(&mut self, avoid: &[Pos]) -> Pos {
        loop {
            let pos: Pos = self.random_inner();
            if self.grid[pos.y][pos.x] != self.config.floor {
                continue;
            }
            if avoid.contains(&pos) {
                continue;
            }
            return pos;
        }
    }

    fn cell(&self, pos: Pos) -> char {
        self.grid[pos.y][pos.x]
    }

    fn offset(pos: Pos, dx: isize, dy: isize) -> Pos {
        Pos {
            x: pos.x.saturating_add_signed(dx),
            y: pos.y.saturating_add_signed(dy),
        }
    }

    fn move_player(&mut self, dx: isize, dy: isize) {
        let next: Pos = Self::offset(self.player, dx, dy);
        if self.cell(next) == self.config.wall {
            self.message = "You bump into a wall.".to_string();
            return;
        }
        self.player = next;

        let cell: char = self.cell(next);
        if cell == self.config.treasure {
            self.treasure += 1;
            self.grid[next.y][next.x] = self.config.floor;
            self.message = "Treasure collected.".to_string();
        } else if cell == self.config.trap {
            self.hp -= 1;
            self.grid[next.y][next.x] = self.config.floor;
            self.message = "A trap! You lose 1 HP.".to_string();
        } else if cell == self.config.exit {
            if self.treasure >= self.config.treasure_target {
                self.message = "You escape with the loot.".to_string();
            } else {
                self.message = format!(
                    "Exit locked. Need {} more treasure.",
                    self.config.treasure_target - self.treasure
                );
            }
        }
        self.check_caught();
    }

    fn move_enemy(&mut self) {
        let mut options: [(isize, isize); 5] = ENEMY_STEPS;
        self.rng.shuffle(&mut options);
        for (dx, dy) in options {
            let next: Pos = Self::offset(self.enemy, dx, dy);
            if self.cell(next) == self.config.wall {
                continue;
            }
            self.enemy = next;
            return;
        }
    }

    fn check_caught(&mut self) {
        if self.enemy == self.player {
            self.hp -= 1;
            self.message = "The shadow catches you! -1 HP.".to_string();
        }
    }

    pub fn is_won(&self) -> bool {
        self.cell(self.player) == self.config.exit && self.treasure >= self.config.treasure_target
    }

    pub fn is_lost(&self) -> bool {
        self.hp <= 0
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }


    fn status(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won
        } else if self.is_lost() {
            Outcome::Lost
        } else {
            Outcome::Continue
        }
    }
}

impl MiniGame for Dungeon {
    fn render(&self) -> String {
        let header = format!(
            "HP:{}  Treasure:{}/{}  Turns:{}",
            self.hp, self.treasure, self.config.treasure_target, self.turns
        );
        let mut board = format!("{header}\n{}\n", "-".repeat(header.chars().count()));
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = Pos { x, y };
                if pos == self.player {
                    board.push(self.config.player);
                } else if pos == self.enemy {
                    board.push(self.config.enemy);
                } else {
                    board.push(*cell);
                }
            }
            board.push('\n');
        }
        if !self.message.is_empty() {
            board.push('\n');
            board.push_str(&self.message);
            board.push('\n');
        }
        board
    }

    fn prompt(&self) -> String {
        format!("\n{HELP}\n> ")
    }

    fn apply_command(&mut self, input: &str) -> Outcome {
        self.message.clear();
        let cmd: String = input.trim().to_lowercase();
        let Some(first) = cmd.chars().next() else {
            return Outcome::Continue;
        };

        match first {
            'q' => {
                self.feedback.push("Goodbye.".to_string());
                return Outcome::Quit;
            }
            'r' => {
                self.turns += 1;
                self.move_enemy();
                self.check_caught();
            }
            'w' | 'a' | 's' | 'd' => {
                let (dx, dy) = match first {
                    'w' => (0, -1),
                    'a' => (-1, 0),
                    's' => (0, 1),
                    _ => (1, 0),
                };
                self.move_player(dx, dy);
                self.turns += 1;
                if !self.is_won() {
                    self.move_enemy();
                    self.check_caught();
                }
            }
            _ => {
                self.message = "Unknown command.".to_string();
            }
        }

        let outcome: Outcome = self.status();
        let verdict: &str = match outcome {
            Outcome::Won => "You win!",
            Outcome::Lost => "You were defeated. Try again.",
            _ => return outcome,
        };
        // Final board
        let board: String = self.render();
        self.feedback.push(board);
        self.feedback.push(verdict.to_string());
        outcome
    }

    fn take_feedback(&mut self) -> Vec<String> {
        std::mem::take(&mut self.feedback)
    }

    fn clears_screen(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(game: &Dungeon, c: char) -> usize {
        game.grid.iter().flatten().filter(|cell| **cell == c).count()
    }

    /// Open dungeon: border walls only, player in the top-left, enemy in the far corner.
    fn open_dungeon() -> Dungeon {
        let mut game = Dungeon::new(1, DungeonConfig::default());
        let (w, h) = (game.config.width, game.config.height);
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                game.grid[y][x] = game.config.floor;
            }
        }
        game.player = Pos { x: 2, y: 2 };
        game.enemy = Pos { x: w - 2, y: h - 2 };
        game
    }

    #[test]
    fn generation_layout() {
        for seed in 0..50 {
            let game = Dungeon::new(seed, DungeonConfig::default());
            let (w, h) = (game.config.width, game.config.height);
            for x in 0..w {
                assert_eq!(game.grid[0][x], '#');
                assert_eq!(game.grid[h - 1][x], '#');
            }
            assert_eq!(count(&game, '>'), 1);
            assert_eq!(count(&game, '$'), 7);
            assert_eq!(count(&game, '^'), 19);

            let exit = game
                .grid
                .iter()
                .enumerate()
                .find_map(|(y, row)| row.iter().position(|c| *c == '>').map(|x| Pos { x, y }))
                .unwrap();
            assert!(exit.x > w / 2 && exit.y > h / 2);

            assert_eq!(game.cell(game.player), '.');
            assert_eq!(game.cell(game.enemy), '.');
            assert_ne!(game.player, game.enemy);
        }
    }

    #[test]
    fn same_seed_same_dungeon() {
        let a = Dungeon::new(42, DungeonConfig::default());
        let b = Dungeon::new(42, DungeonConfig::default());
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn render_header() {
        let game = Dungeon::new(42, DungeonConfig::default());
        let text = game.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "HP:3  Treasure:0/5  Turns:0");
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
        assert_eq!(lines.len(), 2 + 14);
        assert!(lines[2..].iter().all(|l| l.chars().count() == 28));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
    }

    #[test]
    fn wall_bump_costs_a_turn() {
        let mut game = open_dungeon();
        game.player = Pos { x: 1, y: 1 };
        assert_eq!(game.apply_command("w"), Outcome::Continue);
        assert_eq!(game.player, Pos { x: 1, y: 1 });
        assert_eq!(game.turns(), 1);
        assert!(game.render().ends_with("\nYou bump into a wall.\n"));
    }

    #[test]
    fn treasure_and_traps() {
        let mut game = open_dungeon();
        game.grid[2][3] = '$';
        game.grid[2][4] = '^';
        game.apply_command("d");
        assert_eq!(game.treasure, 1);
        assert_eq!(game.grid[2][3], '.');
        assert!(game.render().contains("Treasure collected."));
        game.apply_command("D");
        assert_eq!(game.hp, 2);
        assert_eq!(game.grid[2][4], '.');
        assert!(game.render().contains("A trap! You lose 1 HP."));
    }

    #[test]
    fn locked_exit() {
        let mut game = open_dungeon();
        game.grid[2][3] = '>';
        game.treasure = 3;
        assert_eq!(game.apply_command("d"), Outcome::Continue);
        assert!(game.render().contains("Exit locked. Need 2 more treasure."));
    }

    #[test]
    fn escape_with_loot() {
        let mut game = open_dungeon();
        game.grid[2][3] = '>';
        game.treasure = 5;
        let enemy = game.enemy;
        assert_eq!(game.apply_command("d"), Outcome::Won);
        // The enemy does not move on the winning turn
        assert_eq!(game.enemy, enemy);
        let feedback = game.take_feedback();
        assert!(feedback[0].contains("You escape with the loot."));
        assert_eq!(feedback[1], "You win!");
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn defeat_on_last_hp() {
        let mut game = open_dungeon();
        game.hp = 1;
        game.grid[2][3] = '^';
        assert_eq!(game.apply_command("d"), Outcome::Lost);
        assert_eq!(game.take_feedback()[1], "You were defeated. Try again.");
    }

    #[test]
    fn shadow_contact_hurts() {
        let mut game = open_dungeon();
        game.enemy = Pos { x: 3, y: 2 };
        game.apply_command("d");
        assert!(game.hp <= 2);
    }

    #[test]
    fn rest_and_unknown_commands() {
        let mut game = open_dungeon();
        assert_eq!(game.apply_command("r"), Outcome::Continue);
        assert_eq!(game.turns(), 1);
        assert_eq!(game.apply_command("x"), Outcome::Continue);
        assert_eq!(game.turns(), 1);
        assert!(game.render().ends_with("\nUnknown command.\n"));
        assert_eq!(game.apply_command(""), Outcome::Continue);
        assert!(!game.render().contains("Unknown command."));
        assert_eq!(game.apply_command("q"), Outcome::Quit);
        assert_eq!(game.take_feedback(), ["Goodbye."]);
    }

    #[test]
    fn enemy_never_walks_into_walls() {
        let mut game = Dungeon::new(7, DungeonConfig::default());
        for _ in 0..500 {
            let before = game.enemy;
            game.move_enemy();
            assert_ne!(game.cell(game.enemy), '#');
            assert!(before.x.abs_diff(game.enemy.x) + before.y.abs_diff(game.enemy.y) <= 1);
        }
    }
}
