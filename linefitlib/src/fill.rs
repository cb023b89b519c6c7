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

//! The filling pipeline: scan, offsets, optimize, reconstruct.

use std::io::Write;

use crate::{
    conf::FillSettings,
    error::Result,
    text::{
        compute_offsets, optimize, partition_cost, print_lines, render_lines, scan_words, Cost,
        LineBreakList, WordSpan,
    },
};

/// Result of filling one buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filled {
    pub spans: Vec<WordSpan>,
    pub lines: LineBreakList,
    /// Largest candidate cost seen by the optimizer. Candidate costs restart
    /// from zero after every overlong word.
    pub max_cost: Cost,
    /// Sum of the squared slack of every line of the chosen partition.
    pub total_cost: Cost,
    pub has_overlong_word: bool,
}

impl Filled {
    pub fn word_count(&self) -> usize {
        self.spans.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Write the filled text of `buffer`, one line per computed line.
    ///
    /// `buffer` must be the buffer this value was computed from.
    pub fn print<W: Write>(&self, writer: &mut W, buffer: &[u8]) -> Result<()> {
        print_lines(writer, buffer, &self.spans, &self.lines)
    }

    pub fn render(&self, buffer: &[u8]) -> Result<Vec<String>> {
        render_lines(buffer, &self.spans, &self.lines)
    }
}

/// Break the words of `buffer` into lines of at most `settings.width`
/// characters with minimal total squared slack.
pub fn fill(buffer: &[u8], settings: &FillSettings) -> Result<Filled> {
    settings.check_supported()?;
    settings.width.check()?;

    let spans = scan_words(buffer)?;
    log::debug!("scanned {} words in {} bytes", spans.len(), buffer.len());

    let offsets = compute_offsets(&spans, settings.width)?;
    let has_overlong_word = offsets.has_overlong_word();
    if has_overlong_word {
        log::warn!(
            "some words are longer than the line width {}, each is set on a line of its own",
            settings.width
        );
    }

    let tables = optimize(&offsets, settings.width)?;
    let max_cost = tables.max_cost();
    let lines = tables.reconstruct()?;
    let total_cost = partition_cost(&offsets, settings.width, &lines)?;
    log::debug!(
        "filled {} words into {} lines, total cost {}",
        spans.len(),
        lines.len(),
        total_cost
    );

    Ok(Filled {
        spans,
        lines,
        max_cost,
        total_cost,
        has_overlong_word,
    })
}
