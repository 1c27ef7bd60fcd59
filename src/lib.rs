//! # pystr-utils
//!
//! Python string-method and `os.path` semantics for Rust strings.
//!
//! Code ported from Python, or code that has to agree with tools written in it,
//! often depends on the exact behavior of `str.find`, `str.split` or
//! `os.path.normpath`: negative indices, `-1` sentinels, whitespace splitting,
//! drive letters and UNC shares. This crate reproduces those rules for `&str`
//! input and owned `String` output.
//!
//! ## Features
//!
//! - **Slice semantics**: Python index resolution for every ranged operation
//! - **Search and split**: `find`, `rfind`, `count`, `split`, `rsplit`, `partition` and friends
//! - **Transforms**: strip, case, padding, `replace` and byte translation tables
//! - **Path algebra**: POSIX and Windows-NT rules, selectable at runtime or fixed at compile time
//!
//! Positions are byte offsets into the UTF-8 text. Operations that can cut
//! through a multi-byte character decode the pieces lossily.
//!
//! ## Examples
//!
//! ### Searching and slicing
//!
//! ```rust
//! use pystr_utils::{find, rfind, slice, END};
//!
//! assert_eq!(find("0123456789", "4", 0, END), 4);
//! assert_eq!(find("0123456789", "4", 5, END), -1);
//! assert_eq!(rfind("01234567890123456789", "45", -5, END), -1);
//!
//! // Negative indices count from the end, out-of-range ones are clamped.
//! assert_eq!(slice("abcdef", -2, END), "ef");
//! assert_eq!(slice("abcdef", 1, 100), "bcdef");
//! ```
//!
//! ### Splitting
//!
//! ```rust
//! use pystr_utils::{split, rsplit, partition};
//!
//! // An empty separator splits on runs of whitespace.
//! assert_eq!(split("  a  b c ", "", -1), vec!["a", "b", "c"]);
//! assert_eq!(rsplit("/root/world", "/", 1), vec!["/root", "world"]);
//!
//! let (head, sep, tail) = partition("key=value", "=");
//! assert_eq!((head.as_str(), sep.as_str(), tail.as_str()), ("key", "=", "value"));
//! ```
//!
//! ### Paths
//!
//! ```rust
//! use pystr_utils::path::{self, Convention};
//!
//! assert_eq!(path::normpath_posix("A/foo/../B"), "A/B");
//! assert_eq!(path::join_nt("c:", "/a"), "c:/a");
//! assert_eq!(
//!     path::splitdrive_nt("\\\\host\\share\\dir"),
//!     ("\\\\host\\share".to_string(), "\\dir".to_string())
//! );
//!
//! let nt: Convention = "windows".parse().unwrap();
//! assert_eq!(nt.abspath("..\\b", "c:\\a\\x"), "c:\\a\\b");
//! ```

mod classify;
mod error;
pub mod path;
mod range;
mod search;
mod split;
mod transform;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use classify::{isalnum, isalpha, isdigit, islower, isspace, istitle, isupper};
pub use error::{Result, TextError};
pub use range::{adjust_indices, END};
pub use search::{count, endswith, find, index, rfind, rindex, slice, startswith};
pub use split::{join, partition, rpartition, rsplit, split, splitlines};
pub use transform::{
    capitalize, center, expandtabs, ljust, lower, lstrip, mul, replace, rjust, rstrip, strip,
    swapcase, title, translate, upper, zfill, TranslationTable,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
