/*
session.rs

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

//! Console session: the read-eval-print loop shared by all the games.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use std::io::{self, BufRead, Write};

use super::{MiniGame, Outcome};

/// Read a line from the input, without the line terminator.
///
/// Return None at the end of the input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len: usize = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Play the game until it is over.
///
/// The end of the input counts as the player quitting.
pub fn run<G, R, W>(game: &mut G, input: &mut R, output: &mut W) -> io::Result<Outcome>
where
    G: MiniGame + ?Sized,
    R: BufRead,
    W: Write,
{
    for line in game.intro() {
        writeln!(output, "{line}")?;
    }

    loop {
        if game.clears_screen() {
            queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(output, "{}", game.render())?;
        write!(output, "{}", game.prompt())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("End of input: leaving the game");
            writeln!(output)?;
            return Ok(Outcome::Quit);
        };

        let outcome: Outcome = game.apply_command(&line);
        for message in game.take_feedback() {
            writeln!(output, "{message}")?;
        }
        if outcome.is_over() {
            debug!("Game over: {outcome:?}");
            output.flush()?;
            return Ok(outcome);
        }
    }
}
