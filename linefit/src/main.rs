//
// linefit - main.rs
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

//! Command line client for optimal paragraph filling.

use std::io::BufWriter;

use linefit::{args::Opt, report::reflow, *};

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(opt: Opt) -> Result<()> {
    let _logger = StderrLogger::new(opt.log_level());
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    reflow(&opt, &mut out)
}
