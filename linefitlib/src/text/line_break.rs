//
// linefit - line breaking
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

//! Minimum raggedness line breaking.
//!
//! [`optimize`] partitions the words into consecutive lines so that the sum
//! of `(W - rendered_width)²` over all lines is minimal, where `W` is the
//! line width and `rendered_width` counts one space between adjacent words.
//! No line of two or more words may be wider than `W`. A word that is wider
//! than `W` on its own is set on a line by itself and adds nothing to the
//! cost.
//!
//! The optimizer fills two tables indexed by word count:
//!
//! - `minima[j]`: the least cost of setting the first `j` words, counted from
//!   the last overlong word before `j`,
//! - `breaks[j]`: the first word of the last line in that setting.
//!
//! Every partition breaks before and after an overlong word, so the cost
//! restarts from zero there without changing which breaks are optimal.
//! [`partition_cost`] gives the full cost of a reconstructed partition.
//!
//! [`BreakTables::reconstruct`] then walks `breaks` back from the last word
//! to recover where each line ends.

use super::{
    offsets::Offsets,
    types::{Cost, LineBreakList, Slack, UNREACHED},
};
use crate::{
    conf::LineWidth,
    error::{Error, ErrorKind, Result},
    utils::try_filled_vec,
};

#[inline]
fn squared_slack(width: usize, line_width: usize) -> Cost {
    let slack = (width - line_width) as Slack;
    Cost::from(slack * slack)
}

/// Cost and predecessor tables computed by [`optimize`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BreakTables {
    minima: Vec<Cost>,
    /// `None` only at index 0, the start of the text.
    breaks: Vec<Option<usize>>,
    max_cost: Cost,
}

/// Fill the cost and predecessor tables for `offsets` set at `width`.
///
/// For every line start `i` the candidate ends `j = i + 1, i + 2, ...` are
/// tried in order. The rendered width grows with `j`, so the scan stops at the
/// first candidate wider than `width`. This keeps the work proportional to
/// the number of words that fit on a line rather than quadratic.
///
/// `width` must not exceed [`LineWidth::MAX`], so that no sum of squared
/// slacks can overflow [`Cost`].
pub fn optimize(offsets: &Offsets, width: LineWidth) -> Result<BreakTables> {
    let width = width.check()?.get();
    let word_count = offsets.word_count();
    let mut minima = try_filled_vec(word_count + 1, UNREACHED, "cost")?;
    let mut breaks = try_filled_vec(word_count + 1, None, "predecessor")?;
    minima[0] = 0;

    let mut max_cost: Cost = 0;
    let mut candidates: usize = 0;

    for i in 0..word_count {
        let base = minima[i];
        debug_assert_ne!(base, UNREACHED, "word {} was never reached", i);
        if base == UNREACHED {
            continue;
        }
        for j in (i + 1)..=word_count {
            candidates += 1;
            let line_width = offsets.rendered_width(i, j);
            if line_width > width {
                if j == i + 1 {
                    // A lone overlong word: its line is forced and free.
                    minima[j] = 0;
                    breaks[j] = Some(i);
                }
                break;
            }
            let cost = base + squared_slack(width, line_width);
            max_cost = max_cost.max(cost);
            if cost < minima[j] {
                minima[j] = cost;
                breaks[j] = Some(i);
            }
        }
    }

    log::trace!(
        "optimized {} words at width {}: {} candidate lines, max cost {}",
        word_count,
        width,
        candidates,
        max_cost
    );

    Ok(BreakTables {
        minima,
        breaks,
        max_cost,
    })
}

/// Sum of the squared slack of every line of `lines`. A lone overlong word
/// costs nothing; an overlong line of several words is an error.
pub fn partition_cost(
    offsets: &Offsets,
    width: LineWidth,
    lines: &LineBreakList,
) -> Result<Cost> {
    let width = width.check()?.get();
    let mut total: Cost = 0;
    for range in lines.ranges() {
        if range.start >= range.end || range.end > offsets.word_count() {
            return Err(Error::new(format!(
                "Line of words {}..{} is not a line of {} words.",
                range.start,
                range.end,
                offsets.word_count()
            ))
            .set_kind(ErrorKind::Bug));
        }
        let line_width = offsets.rendered_width(range.start, range.end);
        if line_width <= width {
            total += squared_slack(width, line_width);
        } else if range.len() > 1 {
            return Err(Error::new(format!(
                "Line of words {}..{} is {} characters wide, over the line width {}.",
                range.start, range.end, line_width, width
            ))
            .set_kind(ErrorKind::Bug));
        }
    }
    Ok(total)
}

impl BreakTables {
    pub fn word_count(&self) -> usize {
        self.breaks.len() - 1
    }

    /// Largest candidate cost accepted during optimization. Diagnostic only.
    pub fn max_cost(&self) -> Cost {
        self.max_cost
    }

    pub fn minima(&self) -> &[Cost] {
        &self.minima
    }

    pub fn breaks(&self) -> &[Option<usize>] {
        &self.breaks
    }

    /// Start word of the last line of the first `pointer` words.
    ///
    /// Errors unless the predecessor exists and strictly precedes `pointer`,
    /// so every backward walk terminates.
    fn predecessor(&self, pointer: usize) -> Result<usize> {
        match self.breaks.get(pointer).copied() {
            Some(Some(prev)) if prev < pointer => Ok(prev),
            Some(Some(prev)) => Err(Error::new(format!(
                "Malformed line break table: predecessor {} of word {} does not precede it.",
                prev, pointer
            ))
            .set_kind(ErrorKind::Bug)),
            Some(None) | None => Err(Error::new(format!(
                "Malformed line break table: word {} has no predecessor.",
                pointer
            ))
            .set_kind(ErrorKind::Bug)),
        }
    }

    /// Number of lines of the optimal partition.
    pub fn line_count(&self) -> Result<usize> {
        let mut pointer = self.word_count();
        let mut line_count = 0;
        while pointer > 0 {
            pointer = self.predecessor(pointer)?;
            line_count += 1;
        }
        Ok(line_count)
    }

    /// Recover the end word of every line, consuming the tables.
    pub fn reconstruct(self) -> Result<LineBreakList> {
        let line_count = self.line_count()?;
        let mut ends = try_filled_vec(line_count, 0, "line break")?;
        let mut pointer = self.word_count();
        let mut line = line_count;
        while pointer > 0 {
            line -= 1;
            ends[line] = pointer;
            pointer = self.predecessor(pointer)?;
        }
        debug_assert_eq!(line, 0);
        Ok(LineBreakList::from(ends))
    }
}
