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

//! Filling a file and printing the run report.
//!
//! The report is `Max cost: <n>`, the filled lines if requested, an empty
//! line and the elapsed time of the fill in seconds with six decimals.
//! Only filling is timed, reading the input and printing are not.

use std::{io::Write, time::Instant};

use linefitlib::fill;

use super::*;
use crate::args::Opt;

pub fn reflow<W: Write>(opt: &Opt, out: &mut W) -> Result<()> {
    let buffer = std::fs::read(&opt.input)
        .chain_err_summary(|| format!("Could not read input file `{}`.", opt.input.display()))
        .chain_err_related_path(&opt.input)?;
    log::debug!(
        "read {} bytes from {}, width {}, {} mode",
        buffer.len(),
        opt.input.display(),
        opt.width,
        opt.mode
    );

    let start = Instant::now();
    let filled = fill(&buffer, &opt.settings())?;
    let elapsed = start.elapsed();

    writeln!(out, "Max cost: {}", filled.max_cost)?;
    if opt.print {
        filled.print(out, &buffer)?;
    }
    write!(out, "\nElapsed time: {:.6} seconds\n", elapsed.as_secs_f64())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use linefitlib::conf::{ExecutionMode, LineWidth};

    use super::*;

    fn opt_for(file: &tempfile::NamedTempFile, width: usize, print: bool) -> Opt {
        Opt {
            input: file.path().to_path_buf(),
            width: LineWidth(width),
            mode: ExecutionMode::Sequential,
            print,
            debug: 0,
        }
    }

    fn run(opt: &Opt) -> Result<String> {
        let mut out = Vec::new();
        reflow(opt, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_reflow_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"aa bb\n\ncc   dd\n").unwrap();

        let report = run(&opt_for(&file, 5, true)).unwrap();
        let (head, tail) = report.split_once("\n\nElapsed time: ").unwrap();
        assert_eq!(head, "Max cost: 18\naa bb\ncc dd");
        assert!(tail.ends_with(" seconds\n"), "{:?}", tail);
        let secs = tail.trim_end_matches(" seconds\n");
        assert_eq!(secs.split_once('.').unwrap().1.len(), 6);
        assert!(secs.parse::<f64>().is_ok());

        let report = run(&opt_for(&file, 5, false)).unwrap();
        assert!(report.starts_with("Max cost: 18\n\nElapsed time: "));
    }

    #[test]
    fn test_reflow_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let report = run(&opt_for(&file, 80, true)).unwrap();
        assert!(report.starts_with("Max cost: 0\n\nElapsed time: "));
    }

    #[test]
    fn test_reflow_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let opt = Opt {
            input: missing.clone(),
            width: LineWidth(10),
            mode: ExecutionMode::Sequential,
            print: false,
            debug: 0,
        };
        let err = run(&opt).unwrap_err();
        assert!(err.kind.is_oserror());
        assert_eq!(err.related_path.as_deref(), Some(missing.as_path()));

        let file = tempfile::NamedTempFile::new().unwrap();
        let opt = Opt {
            mode: ExecutionMode::Accelerated,
            ..opt_for(&file, 10, false)
        };
        let mut out = Vec::new();
        let err = reflow(&opt, &mut out).unwrap_err();
        assert!(err.kind.is_not_supported());
        assert!(out.is_empty());
    }
}
