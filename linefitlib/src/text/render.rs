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

//! Rendering of computed lines.
//!
//! Spacing is normalized: words on a line are joined by exactly one space no
//! matter what separated them in the input.

use std::io::Write;

use super::{
    scanner::{ScanState, Transition},
    types::{LineBreakList, WordSpan},
};
use crate::error::{Error, ErrorKind, Result};

/// Append the rendering of `bytes` to `out`: word runs are copied, each
/// separator run between two words becomes one space, and leading or trailing
/// separators produce nothing.
fn render_range(bytes: &[u8], out: &mut Vec<u8>) {
    let mut state = ScanState::default();
    let mut started = false;
    for &byte in bytes {
        let (next, transition) = state.next(byte);
        if transition == Transition::Open && started {
            out.push(b' ');
        }
        if next == ScanState::InWord {
            out.push(byte);
            started = true;
        }
        state = next;
    }
}

/// Write every line of `lines` to `writer`, each terminated by a newline.
///
/// Line `i` covers the input bytes from the end of the previous line's last
/// word up to the end of its own last word.
pub fn print_lines<W: Write>(
    writer: &mut W,
    buffer: &[u8],
    spans: &[WordSpan],
    lines: &LineBreakList,
) -> Result<()> {
    let mut line = Vec::new();
    let mut line_start = 0;
    for &end_word in lines {
        let last_word = end_word
            .checked_sub(1)
            .and_then(|i| spans.get(i))
            .ok_or_else(|| {
                Error::new(format!(
                    "Line ends at word {} but there are {} words.",
                    end_word,
                    spans.len()
                ))
                .set_kind(ErrorKind::Bug)
            })?;
        let range = buffer.get(line_start..last_word.end).ok_or_else(|| {
            Error::new(format!(
                "Line byte range {}..{} is outside the input of {} bytes.",
                line_start,
                last_word.end,
                buffer.len()
            ))
            .set_kind(ErrorKind::Bug)
        })?;
        line.clear();
        render_range(range, &mut line);
        line.push(b'\n');
        writer.write_all(&line)?;
        line_start = last_word.end;
    }
    Ok(())
}

/// Render `lines` into owned strings, without line terminators.
pub fn render_lines(
    buffer: &[u8],
    spans: &[WordSpan],
    lines: &LineBreakList,
) -> Result<Vec<String>> {
    let mut out = Vec::new();
    print_lines(&mut out, buffer, spans, lines)?;
    let text = String::from_utf8(out)?;
    Ok(text.lines().map(str::to_string).collect())
}
