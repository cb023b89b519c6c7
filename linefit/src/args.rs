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

//! Command line arguments.

use std::path::PathBuf;

use linefitlib::conf::{ExecutionMode, FillSettings, LineWidth};
use structopt::clap::AppSettings;

use super::*;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "linefit",
    about = "reflow plain text into lines of minimal raggedness",
    version_short = "v",
    setting = AppSettings::AllowNegativeNumbers
)]
pub struct Opt {
    /// text file to fill.
    #[structopt(value_name = "INPUT", parse(from_os_str))]
    pub input: PathBuf,

    /// maximum line width in characters.
    #[structopt(value_name = "WIDTH")]
    pub width: LineWidth,

    /// integer execution flag: 0 selects the sequential optimizer, any other
    /// value requests accelerated execution, which is not supported.
    #[structopt(value_name = "ACCELERATED")]
    pub mode: ExecutionMode,

    /// print the filled text after the cost.
    #[structopt(short, long)]
    pub print: bool,

    /// log more to stderr, repeat for more detail.
    #[structopt(short, long, parse(from_occurrences))]
    pub debug: u8,
}

impl Opt {
    pub fn settings(&self) -> FillSettings {
        FillSettings::new(self.width).with_mode(self.mode)
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::WARN.raise(self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opt() {
        let opt = Opt::from_iter_safe(["linefit", "in.txt", "72", "0"]).unwrap();
        assert_eq!(opt.input, PathBuf::from("in.txt"));
        assert_eq!(opt.width, LineWidth(72));
        assert_eq!(opt.mode, ExecutionMode::Sequential);
        assert!(!opt.print);
        assert_eq!(opt.log_level(), LogLevel::WARN);

        let opt = Opt::from_iter_safe(["linefit", "-p", "-dd", "in.txt", "5", "-1"]).unwrap();
        assert!(opt.print);
        assert_eq!(opt.mode, ExecutionMode::Accelerated);
        assert_eq!(opt.log_level(), LogLevel::DEBUG);
        assert!(opt.settings().check_supported().is_err());
    }

    #[test]
    fn test_parse_opt_rejects_bad_operands() {
        assert!(Opt::from_iter_safe(["linefit", "in.txt", "5"]).is_err());
        assert!(Opt::from_iter_safe(["linefit", "in.txt", "wide", "0"]).is_err());
        assert!(Opt::from_iter_safe(["linefit", "in.txt", "5", "yes"]).is_err());
        assert!(Opt::from_iter_safe(["linefit", "in.txt", "4294967296", "0"]).is_err());
        let opt = Opt::from_iter_safe(["linefit", "in.txt", "4294967295", "0"]).unwrap();
        assert_eq!(opt.width, LineWidth::MAX);
    }
}
