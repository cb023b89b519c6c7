//
// linefit
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

//! Various utilities.

pub mod logging;

use crate::error::{Result, ResultIntoError};

/// Allocate a table of `len` copies of `fill` without aborting the process
/// when memory is exhausted.
///
/// `what` names the table in the error summary.
pub fn try_filled_vec<T: Clone>(len: usize, fill: T, what: &'static str) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .chain_err_summary(|| format!("Could not allocate {} table of {} entries.", what, len))?;
    table.resize(len, fill);
    Ok(table)
}
