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

use std::{
    ffi::OsStr,
    io::Write,
    path::{Path, PathBuf},
};

use assert_cmd::{assert::OutputAssertExt, Command};
use predicates::prelude::*;
use regex::Regex;
use rusty_fork::rusty_fork_test;
use tempfile::TempDir;

rusty_fork_test! {
#[test]
fn test_cli() {
    let tmp_dir = TempDir::new().unwrap();
    version();
    help();
    missing_operands(tmp_dir.path());
    fill_and_print(tmp_dir.path());
    runtime_errors(tmp_dir.path());
}
}

fn write_input(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

fn version() {
    // --version is successful
    for arg in ["--version", "-v"] {
        let mut cmd = Command::cargo_bin("linefit").unwrap();
        let output = cmd.arg(arg).output().unwrap().assert();
        output
            .code(0)
            .stdout(predicates::str::starts_with("linefit "));
    }
}

fn help() {
    // --help is successful
    for arg in ["--help", "-h"] {
        let mut cmd = Command::cargo_bin("linefit").unwrap();
        let output = cmd.arg(arg).output().unwrap().assert();
        output
            .code(0)
            .stdout(predicates::str::contains("minimal raggedness"))
            .stdout(predicates::str::contains("USAGE"))
            .stdout(predicates::str::contains("<INPUT>"))
            .stdout(predicates::str::contains("<WIDTH>"))
            .stdout(predicates::str::contains("<ACCELERATED>"))
            .stdout(predicates::str::contains("--print"))
            .stdout(predicates::str::contains("--debug"));
    }
}

fn missing_operands(dir: &Path) {
    let input = write_input(dir, "operands.txt", b"aa bb cc dd");
    let operands: [&[&OsStr]; 3] = [
        &[],
        &[input.as_os_str()],
        &[input.as_os_str(), OsStr::new("5")],
    ];
    for args in operands {
        let mut cmd = Command::cargo_bin("linefit").unwrap();
        let output = cmd.args(args).output().unwrap().assert();
        output
            .failure()
            .stdout(predicates::str::is_empty())
            .stderr(predicates::str::contains("USAGE"))
            .stderr(predicates::str::contains("<ACCELERATED>"));
    }
}

fn fill_and_print(dir: &Path) {
    let input = write_input(dir, "example.txt", b"aa bb cc dd\n");
    let report = Regex::new(r"^Max cost: 18\naa bb\ncc dd\n\nElapsed time: \d+\.\d{6} seconds\n$")
        .unwrap();

    for flag in ["-p", "--print"] {
        let mut cmd = Command::cargo_bin("linefit").unwrap();
        let output = cmd
            .arg(flag)
            .arg(&input)
            .arg("5")
            .arg("0")
            .output()
            .unwrap()
            .assert();
        output
            .code(0)
            .stdout(predicates::function::function(|out: &str| {
                report.is_match(out)
            }));
    }

    // Without --print only the cost and the time are reported.
    let mut cmd = Command::cargo_bin("linefit").unwrap();
    let output = cmd.arg(&input).arg("5").arg("0").output().unwrap().assert();
    output
        .code(0)
        .stdout(
            predicates::str::is_match(r"^Max cost: 18\n\nElapsed time: \d+\.\d{6} seconds\n$")
                .unwrap(),
        )
        .stdout(predicates::str::contains("aa").not());

    let empty = write_input(dir, "empty.txt", b"");
    let mut cmd = Command::cargo_bin("linefit").unwrap();
    let output = cmd
        .arg("--print")
        .arg(&empty)
        .arg("80")
        .arg("0")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::starts_with("Max cost: 0\n\nElapsed time: "));

    // A word wider than the line is set on its own line.
    let long = write_input(dir, "long.txt", b"ab floccinaucinihilipilification cd");
    let mut cmd = Command::cargo_bin("linefit").unwrap();
    let output = cmd
        .arg("-p")
        .arg(&long)
        .arg("6")
        .arg("0")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::starts_with(
            "Max cost: 16\nab\nfloccinaucinihilipilification\ncd\n\n",
        ));
}

fn runtime_errors(dir: &Path) {
    let missing = dir.join("does-not-exist.txt");
    let mut cmd = Command::cargo_bin("linefit").unwrap();
    let output = cmd.arg(&missing).arg("10").arg("0").output().unwrap().assert();
    output
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("does-not-exist.txt"));

    // Widths beyond 32 bits are rejected before the input is read.
    let mut cmd = Command::cargo_bin("linefit").unwrap();
    let output = cmd
        .arg(&missing)
        .arg("4294967296")
        .arg("0")
        .output()
        .unwrap()
        .assert();
    output
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("too large"))
        .stderr(predicates::str::contains("does-not-exist.txt").not());

    let input = write_input(dir, "accelerated.txt", b"aa bb cc dd");
    for flag in ["1", "-1"] {
        let mut cmd = Command::cargo_bin("linefit").unwrap();
        let output = cmd.arg(&input).arg("5").arg(flag).output().unwrap().assert();
        output
            .code(1)
            .stdout(predicates::str::is_empty())
            .stderr(predicates::str::contains("not supported"));
    }
}
