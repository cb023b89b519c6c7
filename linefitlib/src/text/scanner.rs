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

//! Word segmentation over raw bytes.
//!
//! A word is a maximal run of printable ASCII bytes (`0x21..=0x7E`). Every
//! other byte, including whitespace, control characters and anything with the
//! high bit set, separates words. Multi-byte UTF-8 sequences are therefore
//! treated as separators.

use super::types::WordSpan;
use crate::error::{Result, ResultIntoError};

#[inline]
pub const fn is_word_byte(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7E)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScanState {
    InWord,
    #[default]
    InSpace,
}

/// Effect of feeding one byte to a [`ScanState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transition {
    /// A word starts at this byte.
    Open,
    /// The current word ended just before this byte.
    Close,
    Stay,
}

impl ScanState {
    #[inline]
    pub const fn next(self, byte: u8) -> (Self, Transition) {
        match (self, is_word_byte(byte)) {
            (Self::InSpace, true) => (Self::InWord, Transition::Open),
            (Self::InWord, false) => (Self::InSpace, Transition::Close),
            (state, _) => (state, Transition::Stay),
        }
    }
}

/// Iterator over the [`WordSpan`]s of a byte buffer, in order.
#[derive(Clone, Debug)]
pub struct WordSpanIter<'a> {
    buffer: &'a [u8],
    pos: usize,
    state: ScanState,
    start: usize,
}

impl<'a> WordSpanIter<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        WordSpanIter {
            buffer,
            pos: 0,
            state: ScanState::default(),
            start: 0,
        }
    }
}

impl<'a> Iterator for WordSpanIter<'a> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.buffer.len() {
            let pos = self.pos;
            self.pos += 1;
            let (next, transition) = self.state.next(self.buffer[pos]);
            self.state = next;
            match transition {
                Transition::Open => self.start = pos,
                Transition::Close => return Some(WordSpan::new(self.start, pos)),
                Transition::Stay => {}
            }
        }
        // Close a word that runs up to the end of the buffer.
        if self.state == ScanState::InWord {
            self.state = ScanState::InSpace;
            return Some(WordSpan::new(self.start, self.buffer.len()));
        }
        None
    }
}

impl std::iter::FusedIterator for WordSpanIter<'_> {}

/// Count the words of `buffer` without storing them.
pub fn count_words(buffer: &[u8]) -> usize {
    buffer
        .iter()
        .fold((ScanState::default(), 0), |(state, count), &byte| {
            let (next, transition) = state.next(byte);
            (next, count + usize::from(transition == Transition::Open))
        })
        .1
}

/// Scan `buffer` into its word spans.
///
/// Counts first and reserves the word table once, so memory exhaustion is
/// reported as an error before any span is stored.
pub fn scan_words(buffer: &[u8]) -> Result<Vec<WordSpan>> {
    let word_count = count_words(buffer);
    let mut spans = Vec::new();
    if word_count == 0 {
        return Ok(spans);
    }
    spans
        .try_reserve_exact(word_count)
        .chain_err_summary(|| format!("Could not allocate word table for {} words.", word_count))?;
    spans.extend(WordSpanIter::new(buffer));
    debug_assert_eq!(spans.len(), word_count);
    Ok(spans)
}
