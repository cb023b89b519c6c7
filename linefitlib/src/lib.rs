//
// linefit - lib.rs
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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_code,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
    clippy::unused_enumerate_index,
    clippy::into_iter_without_iter,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]

//! A library for filling plain text into lines of minimal raggedness.
//!
//! The input is a byte buffer. Words are maximal runs of printable ASCII
//! bytes; everything else separates words. [`fill()`] breaks the words into
//! lines no wider than a given width, minimizing the sum over all lines of
//! the squared number of unused columns.
//!
//! ```rust
//! use linefitlib::{conf::{FillSettings, LineWidth}, fill};
//!
//! let text = b"aa bb cc dd";
//! let filled = fill(text, &FillSettings::new(LineWidth(5))).unwrap();
//! assert_eq!(filled.render(text).unwrap(), vec!["aa bb", "cc dd"]);
//! ```
//!
//! The stages are also usable on their own, see the [`text`] module.

pub mod conf;
pub mod error;
pub mod fill;
pub mod text;
pub mod utils;

pub use conf::{ExecutionMode, FillSettings, LineWidth};
pub use error::{Error, ErrorKind, IntoError, Result, ResultIntoError};
pub use fill::{fill, Filled};
pub use log;
pub use utils::logging::{LogLevel, StderrLogger};
