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

use super::types::WordSpan;
use crate::{conf::LineWidth, error::Result, utils::try_filled_vec};

/// Cumulative word lengths: `table[i]` is the number of word bytes before
/// word `i`, ignoring the gaps between words.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offsets {
    table: Vec<usize>,
    has_overlong_word: bool,
}

impl Offsets {
    pub fn word_count(&self) -> usize {
        self.table.len() - 1
    }

    /// Total number of word bytes.
    pub fn total(&self) -> usize {
        self.table[self.word_count()]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Whether some word alone is wider than the line width these offsets
    /// were computed for.
    pub fn has_overlong_word(&self) -> bool {
        self.has_overlong_word
    }

    pub fn word_len(&self, i: usize) -> usize {
        self.table[i + 1] - self.table[i]
    }

    /// Width of words `i..j` set on one line with single spaces between
    /// them. Requires `i < j`.
    #[inline]
    pub fn rendered_width(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j);
        self.table[j] - self.table[i] + (j - i - 1)
    }
}

pub fn compute_offsets(spans: &[WordSpan], width: LineWidth) -> Result<Offsets> {
    let mut table = try_filled_vec(spans.len() + 1, 0, "offset")?;
    let mut has_overlong_word = false;
    let mut acc = 0;
    for (i, span) in spans.iter().enumerate() {
        acc += span.len();
        table[i + 1] = acc;
        has_overlong_word |= span.len() > width.get();
    }
    Ok(Offsets {
        table,
        has_overlong_word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::scan_words;

    #[test]
    fn test_compute_offsets() {
        let buf = b"aa bbb c dddd";
        let spans = scan_words(buf).unwrap();
        let offsets = compute_offsets(&spans, LineWidth(4)).unwrap();
        assert_eq!(offsets.as_slice(), &[0, 2, 5, 6, 10]);
        assert_eq!(offsets.word_count(), 4);
        assert_eq!(offsets.total(), 10);
        assert_eq!(offsets.word_len(1), 3);
        assert!(!offsets.has_overlong_word());

        // "aa bbb" and "bbb c dddd"
        assert_eq!(offsets.rendered_width(0, 2), 6);
        assert_eq!(offsets.rendered_width(1, 4), 10);
        assert_eq!(offsets.rendered_width(3, 4), 4);

        assert!(compute_offsets(&spans, LineWidth(3))
            .unwrap()
            .has_overlong_word());
    }

    #[test]
    fn test_compute_offsets_empty() {
        let offsets = compute_offsets(&[], LineWidth(10)).unwrap();
        assert_eq!(offsets.as_slice(), &[0]);
        assert_eq!(offsets.word_count(), 0);
        assert_eq!(offsets.total(), 0);
        assert!(!offsets.has_overlong_word());
    }
}
