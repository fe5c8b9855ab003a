/*
cli_options.rs

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

//! Process command-line options.
//!
//! The `generate` subcommand is the one run by the daily job. The other subcommands let players
//! run the games natively, without the generated scripts.
//!
//! # Examples
//!
//! Generate the drop for a given day under the current directory:
//!
//! ```
//! $ daily-drops generate --date 2026-02-24
//! Drop: 2026-02-24 Azure Prism: Signal Chase
//! Script: terminal/daily/2026_02_24_azure_prism.py (created)
//! Log: updated
//! README: skipped
//! Index: skipped
//! ```
//!
//! Play the vault of a known seed:
//!
//! ```
//! $ daily-drops play vault-code --seed 20260210
//! Vault Code
//! Guess the 4-digit code. Duplicates allowed.
//! [8 tries] >
//! ```
//!
//! List the games:
//!
//! ```
//! $ daily-drops list
//! signal_chase  Reach the signal on a trapped grid before the moves run out
//! vault_code    Crack a 4-digit code from exact and near hints
//! word_forge    Unscramble the forged word
//! dungeon       Collect the treasure and escape while a shadow roams the dungeon
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{self, COPYRIGHT_NOTICE, PKGNAME};
use crate::games::dungeon::{Dungeon, DungeonConfig};
use crate::games::{self, MiniGame, Outcome, session};
use crate::generator::daily::{self, DropPlan};
use crate::generator::publish::{self, PublishReport};
use crate::generator::templates::Variant;
use crate::highscores::HighScores;
use crate::rng::SeededRng;
use crate::saver::highscores::SaverHighScores;
use crate::saver::status::SaverStatus;

/// Generate the daily terminal game and play the games in the terminal.
#[derive(Parser)]
#[command(name = PKGNAME, about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the drop of the day and update the log, the README, and the index page
    Generate {
        /// Repository root that receives the generated files
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Day to generate, instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = daily::parse_date)]
        date: Option<NaiveDate>,

        /// Timezone that decides which day it is
        #[arg(short, long, default_value = config::DEFAULT_TIMEZONE)]
        timezone: String,
    },

    /// Play a drop variant
    Play {
        #[arg(value_enum)]
        variant: Variant,

        /// Seed of the game, instead of a random one
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i64>,
    },

    /// Play the drop of the day
    Today {
        /// Day to play, instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = daily::parse_date)]
        date: Option<NaiveDate>,

        /// Timezone that decides which day it is
        #[arg(short, long, default_value = config::DEFAULT_TIMEZONE)]
        timezone: String,
    },

    /// Play the dungeon crawler
    Dungeon {
        /// Seed of the dungeon, instead of a random one
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Print the leaderboard and exit
        #[arg(long, default_value_t = false, conflicts_with = "reset_scores")]
        scores: bool,

        /// Delete the leaderboard and exit
        #[arg(long, default_value_t = false)]
        reset_scores: bool,

        /// Leaderboard file
        #[arg(long, default_value = config::SCORES_FILE)]
        scores_file: PathBuf,
    },

    /// List the games
    List,

    /// Print the latest generated drop
    Latest {
        /// Repository root that holds the generated files
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

/// Leave quietly when the player presses Ctrl-C during a game.
fn install_interrupt_handler() {
    let ret = ctrlc::set_handler(|| {
        println!("\nInterrupted.");
        std::process::exit(0);
    });
    if let Err(e) = ret {
        debug!("Cannot install the Ctrl-C handler: {e}");
    }
}

/// Play a game on the terminal.
///
/// Standard output is locked per write, never across a read, so that the Ctrl-C handler can
/// always print.
fn play<G: MiniGame + ?Sized>(game: &mut G, input: &mut impl BufRead) -> Outcome {
    let mut output = io::stdout();
    match session::run(game, input, &mut output) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Terminal error: {e}");
            Outcome::Quit
        }
    }
}

fn yes_no(flag: bool, yes: &str, no: &str) -> String {
    if flag { yes.to_string() } else { no.to_string() }
}

fn generate(root: &Path, date: Option<NaiveDate>, timezone: &str) -> u8 {
    let date: NaiveDate = match daily::resolve_date(date, timezone) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    let plan = DropPlan::for_date(date);
    let report: PublishReport = match publish::publish(root, &plan) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    println!("Drop: {} {}", report.drop.date, report.drop.title);
    println!(
        "Script: {} ({})",
        report.drop.file,
        yes_no(report.created, "created", "unchanged")
    );
    println!("Log: {}", yes_no(report.logged, "updated", "unchanged"));
    println!("README: {}", yes_no(report.readme_updated, "updated", "skipped"));
    println!("Index: {}", yes_no(report.index_updated, "updated", "skipped"));
    0
}

/// Ask the winner for a name and add the run to the leaderboard.
///
/// An empty name, or the end of the input, is recorded as `anon`.
/// Return the position of the run in the leaderboard, or None if it did not make it.
fn record_win<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    saver: &SaverHighScores,
    turns: u32,
) -> Result<Option<usize>, Box<dyn Error>> {
    write!(output, "Name for leaderboard: ")?;
    output.flush()?;
    let name: String = match session::read_line(input)? {
        Some(line) if !line.trim().is_empty() => line.trim().to_string(),
        _ => "anon".to_string(),
    };
    let position: Option<usize> = saver.save_score(&name, turns)?;
    match position {
        Some(p) => debug!("{name} ranks #{p}"),
        None => debug!("{name} did not make the leaderboard"),
    }
    Ok(position)
}

fn dungeon(seed: Option<i64>, scores: bool, reset_scores: bool, scores_file: PathBuf) -> u8 {
    let saver = SaverHighScores::new(scores_file);
    if reset_scores {
        saver.delete_save();
        info!("Leaderboard deleted");
        println!("Scores cleared.");
        return 0;
    }
    if scores {
        let highscores: HighScores = saver.load();
        for line in highscores.to_lines() {
            println!("{line}");
        }
        return 0;
    }

    install_interrupt_handler();
    let seed: i64 = seed.unwrap_or_else(SeededRng::entropy_seed);
    let mut game = Dungeon::new(seed, DungeonConfig::default());
    let mut input = io::stdin().lock();
    if play(&mut game, &mut input) != Outcome::Won {
        return 0;
    }

    if let Err(e) = record_win(&mut input, &mut io::stdout(), &saver, game.turns()) {
        error!("Cannot save the score: {e}");
    }
    0
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match args.command {
        Command::Generate {
            root,
            date,
            timezone,
        } => generate(&root, date, &timezone),

        Command::Play { variant, seed } => {
            install_interrupt_handler();
            let seed: i64 = seed.unwrap_or_else(SeededRng::entropy_seed);
            debug!("Playing {variant} with seed {seed}");
            let mut game: Box<dyn MiniGame> = games::new_variant_game(variant, seed);
            play(game.as_mut(), &mut io::stdin().lock());
            0
        }

        Command::Today { date, timezone } => {
            let plan: DropPlan = match daily::resolve_date(date, &timezone) {
                Ok(d) => DropPlan::for_date(d),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            };
            install_interrupt_handler();
            println!("{} ({})", plan.game_name(), plan.date_str());
            let mut game: Box<dyn MiniGame> = games::new_variant_game(plan.variant, plan.seed);
            play(game.as_mut(), &mut io::stdin().lock());
            0
        }

        Command::Dungeon {
            seed,
            scores,
            reset_scores,
            scores_file,
        } => dungeon(seed, scores, reset_scores, scores_file),

        Command::List => {
            let games = games::registry();
            let width: usize = games.iter().map(|g| g.name.len()).max().unwrap_or(0);
            for g in games {
                println!("{:width$}  {}", g.name, g.description);
            }
            0
        }

        Command::Latest { root } => match SaverStatus::new(&root).get_latest() {
            Ok(Some(drop)) => {
                println!("{} {}", drop.date, drop.title);
                println!("{}", drop.file);
                0
            }
            Ok(None) => {
                println!("No drop generated yet.");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "daily-drops-win-{label}-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn win(
        label: &str,
        typed: &str,
        turns: u32,
    ) -> (Option<usize>, String, SaverHighScores, PathBuf) {
        let path = temp_file(label);
        let saver = SaverHighScores::new(path.clone());
        let mut input: &[u8] = typed.as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let position = record_win(&mut input, &mut output, &saver, turns).unwrap();
        (position, String::from_utf8(output).unwrap(), saver, path)
    }

    #[test]
    fn winner_name_is_saved() {
        let (position, prompt, saver, path) = win("named", "  ana \n", 42);
        assert_eq!(position, Some(1));
        assert_eq!(prompt, "Name for leaderboard: ");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"name\": \"ana\",\n    \"turns\": 42\n  }\n]"
        );
        saver.delete_save();
        assert!(!path.exists());
    }

    #[test]
    fn empty_name_is_anon() {
        for (label, typed) in [("empty", "\n"), ("blank", "   \n"), ("eof", "")] {
            let (position, _, saver, _) = win(label, typed, 17);
            assert_eq!(position, Some(1));
            assert_eq!(
                saver.load().to_lines(),
                ["Top Runs (fewest turns):", "1. anon - 17 turns"]
            );
            saver.delete_save();
        }
    }
}
