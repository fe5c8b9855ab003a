/*
games.rs

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

//! Terminal mini-games.
//!
//! Every game implements the [`MiniGame`] trait and is played with [`session::run`], which reads
//! one line per turn and prints the board and the feedback.
//! The games never read global state: board sizes, symbols, and budgets come from the
//! configuration object given to their constructor.

pub mod code_break;
pub mod dungeon;
pub mod grid_chase;
pub mod session;
pub mod word_forge;

use crate::generator::templates::Variant;

/// Result of a player command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game goes on.
    Continue,
    Won,
    Lost,
    /// The player left the game.
    Quit,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_over(self) -> bool {
        self != Outcome::Continue
    }
}

/// Turn-based game played one input line at a time.
pub trait MiniGame {
    /// Lines printed once, before the first turn.
    fn intro(&self) -> Vec<String> {
        Vec::new()
    }

    /// Board printed before each prompt. Can be empty.
    fn render(&self) -> String;

    /// Text printed right before reading the player input.
    fn prompt(&self) -> String;

    /// Process a line of player input.
    fn apply_command(&mut self, input: &str) -> Outcome;

    /// Return and clear the lines produced by the last command.
    fn take_feedback(&mut self) -> Vec<String>;

    /// Whether the screen is cleared before each render.
    fn clears_screen(&self) -> bool {
        false
    }
}

/// Build the game of a drop variant.
pub fn new_variant_game(variant: Variant, seed: i64) -> Box<dyn MiniGame> {
    match variant {
        Variant::SignalChase => Box::new(grid_chase::GridChase::new(
            seed,
            grid_chase::GridChaseConfig::default(),
        )),
        Variant::VaultCode => Box::new(code_break::CodeBreak::new(
            seed,
            code_break::CodeBreakConfig::default(),
        )),
        Variant::WordForge => Box::new(word_forge::WordForge::new(
            seed,
            word_forge::WordForgeConfig::default(),
        )),
    }
}

pub struct GameDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Return the list of the playable games.
pub fn registry() -> Vec<GameDescriptor> {
    let mut games: Vec<GameDescriptor> = Variant::ALL
        .iter()
        .map(|v| GameDescriptor {
            name: v.id(),
            description: v.description(),
        })
        .collect();
    games.push(GameDescriptor {
        name: "dungeon",
        description: "Collect the treasure and escape while a shadow roams the dungeon",
    });
    games
}
