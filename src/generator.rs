/*
generator.rs

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

//! Generate the daily drops.
//!
//! A drop is derived from a calendar date in three steps:
//!
//! * [`daily::DropPlan::for_date`] turns the date into a seed, and draws the title and the
//!   [`templates::Variant`] from the seeded stream.
//! * [`daily::DropPlan::script`] renders the script of the variant from its template.
//! * [`publish::publish`] writes the script when it does not exist yet, and threads the drop
//!   through the log, the README block, the index page card, and the status files.
//!
//! Running the generator several times on the same day gives the same files.

pub mod daily;
pub mod publish;
pub mod templates;
