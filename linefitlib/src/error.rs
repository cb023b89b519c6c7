//
// linefit - error module
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

//! An error object for `linefitlib`

use std::{
    borrow::Cow,
    collections::TryReserveError,
    fmt, io,
    num::ParseIntError,
    path::{Path, PathBuf},
    result, string,
    sync::Arc,
};

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    None,
    /// An operating system call failed, eg. opening or reading the input.
    OSError(io::ErrorKind),
    /// A table could not be allocated.
    OutOfMemory,
    /// The requested operation is recognised but not available.
    NotSupported,
    /// A value supplied by the caller is invalid.
    ValueError,
    /// An internal invariant was violated.
    Bug,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::None => write!(fmt, "None"),
            Self::OSError(kind) => write!(fmt, "OS error ({})", kind),
            Self::OutOfMemory => write!(fmt, "Out of memory"),
            Self::NotSupported => write!(fmt, "Not supported"),
            Self::ValueError => write!(fmt, "Invalid value"),
            Self::Bug => write!(fmt, "Bug, please report this!"),
        }
    }
}

impl ErrorKind {
    pub const fn is_oserror(&self) -> bool {
        matches!(self, Self::OSError(_))
    }

    pub const fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory)
    }

    pub const fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported)
    }

    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::ValueError)
    }

    pub const fn is_bug(&self) -> bool {
        matches!(self, Self::Bug)
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Cow<'static, str>,
    pub details: Option<Cow<'static, str>>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub related_path: Option<PathBuf>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_related_path(self, p: &Path) -> Result<T>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_details(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for std::result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_details(msg_fn()))
    }

    #[inline]
    fn chain_err_related_path(self, p: &Path) -> Result<T> {
        self.map_err(|err| {
            let err: Error = err.into();
            err.set_related_path(Some(p))
        })
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: msg.into(),
            details: None,
            source: None,
            related_path: None,
            kind: ErrorKind::None,
        }
    }

    /// Replace the summary, keeping the previous one as details.
    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let previous = std::mem::replace(&mut self.summary, summary.into());
        if self.details.is_none() && !previous.is_empty() {
            self.details = Some(previous);
        }
        self
    }

    pub fn set_details<M>(mut self, details: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.details = Some(details.into());
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }

    pub fn set_related_path<P: Into<PathBuf>>(mut self, new_val: Option<P>) -> Self {
        self.related_path = new_val.map(Into::into);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(details) = self.details.as_ref() {
            if !details.trim().is_empty() {
                write!(f, "\n{}", details)?;
            }
        }
        if let Some(ref path) = self.related_path {
            write!(f, "\nRelated path: {}", path.display())?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        if self.kind != ErrorKind::None {
            write!(f, "\nError kind: {}", self.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        let kind = err.kind();
        Self::new(err.to_string())
            .set_kind(ErrorKind::OSError(kind))
            .set_source(Some(Arc::new(err)))
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(err: TryReserveError) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::OutOfMemory)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<ParseIntError> for Error {
    #[inline]
    fn from(err: ParseIntError) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<string::FromUtf8Error> for Error {
    #[inline]
    fn from(err: string::FromUtf8Error) -> Self {
        Self::new(err.to_string()).set_source(Some(Arc::new(err)))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(err: &str) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(err: String) -> Self {
        Self::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::new("Could not read input file.")
            .set_details("permission denied")
            .set_related_path(Some("/tmp/input.txt"))
            .set_kind(ErrorKind::OSError(io::ErrorKind::PermissionDenied));
        let s = err.to_string();
        assert!(s.starts_with("Could not read input file.\npermission denied"));
        assert!(s.contains("Related path: /tmp/input.txt"));
        assert!(s.contains("Error kind: OS error"));

        assert_eq!(Error::new("plain").to_string(), "plain");
    }

    #[test]
    fn test_error_chaining() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let err = res
            .chain_err_summary(|| "Could not read `missing.txt`")
            .unwrap_err();
        assert_eq!(err.summary, "Could not read `missing.txt`");
        assert_eq!(err.details.as_deref(), Some("no such file"));
        assert!(err.kind.is_oserror());
        assert!(std::error::Error::source(&err).is_some());

        let mut v: Vec<u8> = Vec::new();
        let err: Error = v.try_reserve_exact(usize::MAX).unwrap_err().into();
        assert!(err.kind.is_out_of_memory());

        let err: Error = "abc".parse::<usize>().unwrap_err().into();
        assert!(err.kind.is_value_error());

        let err = Err::<(), _>("table is malformed")
            .chain_err_kind(ErrorKind::Bug)
            .unwrap_err();
        assert!(err.kind.is_bug());
        assert_eq!(err.summary, "table is malformed");
    }
}
