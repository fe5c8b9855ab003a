/*
templates.rs

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

//! Template bank for the daily drop scripts.
//!
//! Each [`Variant`] owns a script template with the `__SEED__` placeholder.
//! The Word Forge template also has a `__WORDS__` placeholder that receives the literal word list.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

const SIGNAL_CHASE: &str = include_str!("templates/signal_chase.py.in");
const VAULT_CODE: &str = include_str!("templates/vault_code.py.in");
const WORD_FORGE: &str = include_str!("templates/word_forge.py.in");

const SEED_PLACEHOLDER: &str = "__SEED__";
const WORDS_PLACEHOLDER: &str = "__WORDS__";

/// Word bank for Word Forge. Only the words with [`MIN_WORD_LEN`] letters or more are used.
pub const WORD_LIST: [&str; 12] = [
    "signal", "cipher", "ember", "shadow", "orbit", "lantern", "starlit", "vector", "flux", "prism",
    "echo", "ember",
];

pub const MIN_WORD_LEN: usize = 4;

/// Game variant of a daily drop.
///
/// The order of the variants matters: the variant picker draws an index into [`Variant::ALL`].
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Variant {
    SignalChase,
    VaultCode,
    WordForge,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::SignalChase, Variant::VaultCode, Variant::WordForge];

    /// Identifier of the variant, as stored in the drop metadata.
    pub fn id(&self) -> &'static str {
        match self {
            Variant::SignalChase => "signal_chase",
            Variant::VaultCode => "vault_code",
            Variant::WordForge => "word_forge",
        }
    }

    /// Human-readable name, appended to the drop title.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::SignalChase => "Signal Chase",
            Variant::VaultCode => "Vault Code",
            Variant::WordForge => "Word Forge",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::SignalChase => "Reach the signal on a trapped grid before the moves run out",
            Variant::VaultCode => "Crack a 4-digit code from exact and near hints",
            Variant::WordForge => "Unscramble the forged word",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Variant::SignalChase => SIGNAL_CHASE,
            Variant::VaultCode => VAULT_CODE,
            Variant::WordForge => WORD_FORGE,
        }
    }

    /// Render the script of the variant for the given seed.
    pub fn render(&self, seed: i64) -> String {
        let script: String = self.template().replace(SEED_PLACEHOLDER, &seed.to_string());
        match self {
            Variant::WordForge => script.replace(WORDS_PLACEHOLDER, &word_list_literal(&words())),
            _ => script,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Return the words that Word Forge can pick from.
pub fn words() -> Vec<&'static str> {
    WORD_LIST
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .copied()
        .collect()
}

/// Format a word list as a list literal: `['signal', 'cipher']`.
fn word_list_literal(words: &[&str]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{w}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_order_matches_repr() {
        for (i, v) in Variant::ALL.iter().enumerate() {
            assert_eq!(Variant::from_repr(i as u8), Some(*v));
        }
        assert_eq!(Variant::from_repr(3), None);
    }

    #[test]
    fn render_substitutes_seed() {
        for v in Variant::ALL {
            let script = v.render(20_260_224);
            assert!(!script.contains(SEED_PLACEHOLDER));
            assert!(!script.contains(WORDS_PLACEHOLDER));
            assert!(script.contains("random.Random(20260224)"));
            assert!(script.starts_with("#!/usr/bin/env python3\n"));
        }
    }

    #[test]
    fn word_forge_embeds_word_list() {
        let script = Variant::WordForge.render(1);
        assert!(script.contains(
            "WORDS = ['signal', 'cipher', 'ember', 'shadow', 'orbit', 'lantern', 'starlit', \
             'vector', 'flux', 'prism', 'echo', 'ember']\n"
        ));
    }

    #[test]
    fn words_are_long_enough() {
        assert!(words().iter().all(|w| w.len() >= MIN_WORD_LEN));
        assert_eq!(words().len(), WORD_LIST.len());
    }
}
