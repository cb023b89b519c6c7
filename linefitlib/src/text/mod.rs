//
// linefit - text mod.
//
// Copyright 2024 The linefit contributors
//
// This file is part of linefit.
//
// linefit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// linefit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with linefit. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text processing stages: scanning, offsets, line breaking and rendering.

pub mod line_break;
pub mod offsets;
pub mod render;
pub mod scanner;
pub mod types;

pub use line_break::{optimize, partition_cost, BreakTables};
pub use offsets::{compute_offsets, Offsets};
pub use render::{print_lines, render_lines};
pub use scanner::{count_words, is_word_byte, scan_words, ScanState, WordSpanIter};
pub use types::*;
