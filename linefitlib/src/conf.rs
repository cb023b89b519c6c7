//
// linefit - configuration module
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

//! Settings threaded through every filling stage.
//!
//! There is no configuration file or environment variable: the frontend
//! builds a [`FillSettings`] value and passes it down explicitly.

use std::{fmt, str::FromStr};

use crate::error::{Error, ErrorKind, IntoError, Result};

/// Maximum rendered width of a line, in characters.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LineWidth(pub usize);

impl LineWidth {
    pub const DEFAULT: Self = Self(80);

    /// Widest accepted line. Squared slack then fits in 64 bits and a sum of
    /// one per word in a [`Cost`](crate::text::Cost).
    pub const MAX: Self = Self(u32::MAX as usize);

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns `self` if it is at most [`LineWidth::MAX`].
    pub fn check(self) -> Result<Self> {
        if self > Self::MAX {
            return Err(Error::new(format!(
                "Line width {} is too large, the maximum is {}.",
                self,
                Self::MAX
            ))
            .set_kind(ErrorKind::ValueError));
        }
        Ok(self)
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for LineWidth {
    fn from(val: usize) -> Self {
        Self(val)
    }
}

impl fmt::Display for LineWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|err| err.set_err_summary(format!("`{}` is not a valid line width.", s)))?
            .check()
    }
}

/// Which implementation of the optimizer runs.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Offloaded execution. Recognised on the command line but not
    /// implemented; requesting it is an [`ErrorKind::NotSupported`] error.
    Accelerated,
}

impl ExecutionMode {
    pub const fn is_accelerated(self) -> bool {
        matches!(self, Self::Accelerated)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Accelerated => write!(f, "accelerated"),
        }
    }
}

/// Parses the integer flag of the command line: `0` selects the sequential
/// path, any other integer the accelerated one.
impl FromStr for ExecutionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let flag = s.trim().parse::<i64>().map_err(|err| {
            err.set_err_summary(format!(
                "`{}` is not a valid execution flag, expected an integer such as 0 or 1.",
                s
            ))
        })?;
        Ok(if flag == 0 {
            Self::Sequential
        } else {
            Self::Accelerated
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FillSettings {
    pub width: LineWidth,
    pub mode: ExecutionMode,
}

impl FillSettings {
    pub fn new(width: LineWidth) -> Self {
        Self {
            width,
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, new_val: ExecutionMode) -> Self {
        self.mode = new_val;
        self
    }

    /// Fail if these settings ask for something this build cannot do.
    pub fn check_supported(&self) -> Result<()> {
        if self.mode.is_accelerated() {
            return Err(Error::new("The accelerated execution path is not supported.")
                .set_details("Pass 0 as the execution flag to use the sequential path.")
                .set_kind(ErrorKind::NotSupported));
        }
        Ok(())
    }
}
