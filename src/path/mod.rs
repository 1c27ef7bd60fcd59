//! `os.path`-style path algebra for POSIX and Windows-NT conventions
//!
//! Every operation exists in three forms:
//!
//! - `join`, `normpath`, ... follow the convention of the build target
//!   ([`Host`]), so results match what the host's Python would print.
//! - `join_posix`, `normpath_posix`, ... always use POSIX rules.
//! - `join_nt`, `normpath_nt`, ... always use Windows-NT rules.
//!
//! Nothing here touches the filesystem or the environment. [`abspath`] takes the
//! current directory as an argument instead of asking the OS for it.
//!
//! ```
//! use pystr_utils::path;
//!
//! assert_eq!(path::normpath_posix("///A//B"), "/A/B");
//! assert_eq!(path::join_posix("../a", "b"), "../a/b");
//! assert_eq!(
//!     path::splitdrive_nt("C:\\Users\\test"),
//!     ("C:".to_string(), "\\Users\\test".to_string())
//! );
//! ```

mod nt;
mod posix;

pub use nt::Nt;
pub use posix::Posix;

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::{Result, TextError};

/// One rule set for separators, drives and absoluteness
///
/// Implemented by [`Posix`] and [`Nt`]. The provided methods are shared by both
/// conventions and only rely on the required ones.
pub trait PathConvention {
    /// Name used in diagnostics and by [`Convention`]'s `Display`/`FromStr`.
    const NAME: &'static str;

    /// Separator written by `join` and `normpath`.
    const SEP: char;

    /// Split into `(drive, rest)` with `drive + rest == path`
    fn splitdrive(path: &str) -> (String, String);

    /// Split into `(head, tail)` where `tail` is the last path component
    fn split(path: &str) -> (String, String);

    /// Split into `(root, ext)` with `root + ext == path`
    fn splitext(path: &str) -> (String, String);

    fn isabs(path: &str) -> bool;

    /// Join two path segments
    fn join(base: &str, segment: &str) -> String;

    /// Collapse redundant separators and resolve `.` and `..` segments
    fn normpath(path: &str) -> String;

    /// Left fold of [`join`](Self::join) over `paths`; empty input gives `""`
    fn join_all<S: AsRef<str>>(paths: &[S]) -> String {
        let mut paths = paths.iter();
        match paths.next() {
            Some(first) => paths.fold(first.as_ref().to_string(), |joined, segment| {
                Self::join(&joined, segment.as_ref())
            }),
            None => String::new(),
        }
    }

    fn basename(path: &str) -> String {
        Self::split(path).1
    }

    fn dirname(path: &str) -> String {
        Self::split(path).0
    }

    /// Normalized absolute version of `path`, resolving relative input against `cwd`
    fn abspath(path: &str, cwd: &str) -> String {
        if Self::isabs(path) {
            return Self::normpath(path);
        }
        trace!("{}: resolving {:?} against cwd {:?}", Self::NAME, path, cwd);
        Self::normpath(&Self::join(cwd, path))
    }
}

/// The convention matching the build target
#[cfg(windows)]
pub type Host = Nt;

/// The convention matching the build target
#[cfg(not(windows))]
pub type Host = Posix;

/// Split `path` into `(root, ext)`, looking only at the part after the last separator
///
/// Leading dots of the final component never start an extension.
pub(crate) fn split_extension(path: &str, is_sep: fn(u8) -> bool) -> (String, String) {
    let bytes = path.as_bytes();
    let name_start = bytes.iter().rposition(|&b| is_sep(b)).map_or(0, |i| i + 1);

    if let Some(dot) = bytes.iter().rposition(|&b| b == b'.') {
        if dot >= name_start && bytes[name_start..dot].iter().any(|&b| b != b'.') {
            return (path[..dot].to_string(), path[dot..].to_string());
        }
    }

    (path.to_string(), String::new())
}

/// Runtime choice between the two conventions
///
/// Useful when the convention comes from configuration or user input rather than
/// from the build target.
///
/// # Examples
/// ```
/// use pystr_utils::path::Convention;
///
/// let nt: Convention = "windows".parse().unwrap();
/// assert_eq!(nt, Convention::Nt);
/// assert_eq!(nt.join("a", "b"), "a\\b");
/// assert_eq!(Convention::Posix.join("a", "b"), "a/b");
/// assert!("vms".parse::<Convention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    Posix,
    Nt,
}

impl Convention {
    /// The convention of the build target
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Nt
        } else {
            Self::Posix
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Posix => Posix::NAME,
            Self::Nt => Nt::NAME,
        }
    }

    pub fn sep(self) -> char {
        match self {
            Self::Posix => Posix::SEP,
            Self::Nt => Nt::SEP,
        }
    }

    pub fn splitdrive(self, path: &str) -> (String, String) {
        match self {
            Self::Posix => Posix::splitdrive(path),
            Self::Nt => Nt::splitdrive(path),
        }
    }

    pub fn split(self, path: &str) -> (String, String) {
        match self {
            Self::Posix => Posix::split(path),
            Self::Nt => Nt::split(path),
        }
    }

    pub fn splitext(self, path: &str) -> (String, String) {
        match self {
            Self::Posix => Posix::splitext(path),
            Self::Nt => Nt::splitext(path),
        }
    }

    pub fn isabs(self, path: &str) -> bool {
        match self {
            Self::Posix => Posix::isabs(path),
            Self::Nt => Nt::isabs(path),
        }
    }

    pub fn join(self, base: &str, segment: &str) -> String {
        match self {
            Self::Posix => Posix::join(base, segment),
            Self::Nt => Nt::join(base, segment),
        }
    }

    pub fn join_all<S: AsRef<str>>(self, paths: &[S]) -> String {
        match self {
            Self::Posix => Posix::join_all(paths),
            Self::Nt => Nt::join_all(paths),
        }
    }

    pub fn normpath(self, path: &str) -> String {
        match self {
            Self::Posix => Posix::normpath(path),
            Self::Nt => Nt::normpath(path),
        }
    }

    pub fn basename(self, path: &str) -> String {
        match self {
            Self::Posix => Posix::basename(path),
            Self::Nt => Nt::basename(path),
        }
    }

    pub fn dirname(self, path: &str) -> String {
        match self {
            Self::Posix => Posix::dirname(path),
            Self::Nt => Nt::dirname(path),
        }
    }

    pub fn abspath(self, path: &str, cwd: &str) -> String {
        match self {
            Self::Posix => Posix::abspath(path, cwd),
            Self::Nt => Nt::abspath(path, cwd),
        }
    }
}

impl Default for Convention {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = TextError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "nt" | "windows" => Ok(Self::Nt),
            "host" => Ok(Self::host()),
            _ => Err(TextError::UnknownConvention {
                name: name.to_string(),
            }),
        }
    }
}

/// Split `path` into `(drive, rest)` using the host convention
pub fn splitdrive(path: &str) -> (String, String) {
    Host::splitdrive(path)
}

pub fn splitdrive_posix(path: &str) -> (String, String) {
    Posix::splitdrive(path)
}

/// Split `path` into `(drive, rest)` recognising `X:` drives and `\\host\share` prefixes
pub fn splitdrive_nt(path: &str) -> (String, String) {
    Nt::splitdrive(path)
}

/// Split `path` into `(head, tail)` using the host convention
///
/// `tail` is everything after the last separator and never contains one. Trailing
/// separators are stripped from `head` unless it is the root.
pub fn split(path: &str) -> (String, String) {
    Host::split(path)
}

pub fn split_posix(path: &str) -> (String, String) {
    Posix::split(path)
}

pub fn split_nt(path: &str) -> (String, String) {
    Nt::split(path)
}

/// Split `path` into `(root, ext)` using the host convention
///
/// `ext` is empty or starts with a dot; leading dots of the file name are not an
/// extension, so `.cshrc` has none.
pub fn splitext(path: &str) -> (String, String) {
    Host::splitext(path)
}

pub fn splitext_posix(path: &str) -> (String, String) {
    Posix::splitext(path)
}

pub fn splitext_nt(path: &str) -> (String, String) {
    Nt::splitext(path)
}

/// True if `path` is absolute under the host convention
pub fn isabs(path: &str) -> bool {
    Host::isabs(path)
}

pub fn isabs_posix(path: &str) -> bool {
    Posix::isabs(path)
}

pub fn isabs_nt(path: &str) -> bool {
    Nt::isabs(path)
}

/// Join two segments using the host convention
///
/// An absolute `segment` discards `base`; otherwise exactly one separator ends up
/// between them. An empty `segment` leaves `base` unchanged.
pub fn join(base: &str, segment: &str) -> String {
    Host::join(base, segment)
}

pub fn join_posix(base: &str, segment: &str) -> String {
    Posix::join(base, segment)
}

pub fn join_nt(base: &str, segment: &str) -> String {
    Nt::join(base, segment)
}

/// Join any number of segments using the host convention
pub fn join_all<S: AsRef<str>>(paths: &[S]) -> String {
    Host::join_all(paths)
}

pub fn join_all_posix<S: AsRef<str>>(paths: &[S]) -> String {
    Posix::join_all(paths)
}

pub fn join_all_nt<S: AsRef<str>>(paths: &[S]) -> String {
    Nt::join_all(paths)
}

/// Normalize `path` using the host convention
pub fn normpath(path: &str) -> String {
    Host::normpath(path)
}

pub fn normpath_posix(path: &str) -> String {
    Posix::normpath(path)
}

pub fn normpath_nt(path: &str) -> String {
    Nt::normpath(path)
}

/// Last component of `path`; empty when `path` ends with a separator
pub fn basename(path: &str) -> String {
    Host::basename(path)
}

pub fn basename_posix(path: &str) -> String {
    Posix::basename(path)
}

pub fn basename_nt(path: &str) -> String {
    Nt::basename(path)
}

/// Everything before the last component of `path`
pub fn dirname(path: &str) -> String {
    Host::dirname(path)
}

pub fn dirname_posix(path: &str) -> String {
    Posix::dirname(path)
}

pub fn dirname_nt(path: &str) -> String {
    Nt::dirname(path)
}

/// Normalized absolute `path`, resolving relative input against `cwd`
///
/// Unlike Python's `os.path.abspath`, the current directory is an argument, which
/// keeps the function pure.
///
/// # Examples
/// ```
/// use pystr_utils::path::abspath_posix;
///
/// assert_eq!(
///     abspath_posix("../../../../tmp/a", "/net/soft_scratch/users/stevel"),
///     "/tmp/a"
/// );
/// ```
pub fn abspath(path: &str, cwd: &str) -> String {
    Host::abspath(path, cwd)
}

pub fn abspath_posix(path: &str, cwd: &str) -> String {
    Posix::abspath(path, cwd)
}

pub fn abspath_nt(path: &str, cwd: &str) -> String {
    Nt::abspath(path, cwd)
}
