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

use std::ops::Range;

/// Unused columns at the end of one line. Slack never exceeds
/// [`LineWidth::MAX`](crate::conf::LineWidth::MAX), so its square fits too.
pub type Slack = u64;

/// Accumulated cost of a partition. Twice as wide as [`Slack`] so that
/// summing `word_count` squared slacks cannot overflow.
pub type Cost = u128;

/// Cost of a word index no partition has reached yet.
pub const UNREACHED: Cost = Cost::MAX;

/// Byte range `start..end` of a word inside the input buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The bytes of this word in `buffer`.
    #[inline]
    pub fn slice<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        &buffer[self.range()]
    }
}

/// Exclusive end word index of every line, in increasing order. The last
/// entry equals the word count.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineBreakList {
    ends: Vec<usize>,
}

impl LineBreakList {
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.ends
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.ends.iter()
    }

    /// Word index ranges of every line.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        std::iter::once(0)
            .chain(self.ends.iter().copied())
            .zip(self.ends.iter().copied())
            .map(|(start, end)| start..end)
    }
}

impl From<Vec<usize>> for LineBreakList {
    fn from(ends: Vec<usize>) -> Self {
        debug_assert!(ends.windows(2).all(|w| w[0] < w[1]));
        Self { ends }
    }
}

impl From<LineBreakList> for Vec<usize> {
    fn from(val: LineBreakList) -> Self {
        val.ends
    }
}

impl<'a> IntoIterator for &'a LineBreakList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_list_ranges() {
        let lines = LineBreakList::from(vec![2, 3, 7]);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.ranges().collect::<Vec<_>>(),
            vec![0..2, 2..3, 3..7]
        );
        assert_eq!(LineBreakList::default().ranges().count(), 0);
    }

    #[test]
    fn test_word_span() {
        let buf = b"  hello world";
        let span = WordSpan::new(2, 7);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.slice(buf), b"hello");
    }
}
