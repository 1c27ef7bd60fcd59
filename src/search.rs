//! Bounded substring search and slicing
//!
//! All positions are byte offsets. Bounds follow slice notation: they are resolved
//! with [`adjust_indices`](crate::adjust_indices) first, so negative and
//! out-of-range values are accepted everywhere. A miss is reported with the `-1`
//! sentinel by [`find`]/[`rfind`] and with an error by [`index`]/[`rindex`].

use crate::error::{Result, TextError};
use crate::range::adjust_indices;

/// Leftmost occurrence of `needle` in `haystack`. The empty needle matches at 0.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Rightmost occurrence of `needle` in `haystack`. The empty needle matches at the end.
pub(crate) fn rfind_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .rposition(|window| window == needle)
}

fn resolve_window(text: &str, start: isize, end: isize) -> (usize, &[u8]) {
    let (lo, hi) = adjust_indices(text.len(), start, end);
    (lo, &text.as_bytes()[lo..hi])
}

/// Return the lowest index where `sub` is found inside `text[start:end]`, or -1
///
/// The occurrence must fit entirely inside the window. An empty `sub` matches at
/// the start of the resolved window.
///
/// # Examples
/// ```
/// use pystr_utils::{find, END};
///
/// assert_eq!(find("abcdef", "def", 0, END), 3);
/// assert_eq!(find("abcdef", "def", 4, END), -1);
/// assert_eq!(find("abcdef", "", -1, END), 5);
/// ```
pub fn find(text: &str, sub: &str, start: isize, end: isize) -> isize {
    let (lo, window) = resolve_window(text, start, end);
    match find_bytes(window, sub.as_bytes()) {
        Some(offset) => (lo + offset) as isize,
        None => -1,
    }
}

/// Return the highest index where `sub` is found inside `text[start:end]`, or -1
///
/// An empty `sub` matches at the end of the resolved window.
///
/// # Examples
/// ```
/// use pystr_utils::{rfind, END};
///
/// assert_eq!(rfind("abcabcabc", "bc", 0, END), 7);
/// assert_eq!(rfind("abcdef", "", 0, -1), 5);
/// ```
pub fn rfind(text: &str, sub: &str, start: isize, end: isize) -> isize {
    let (lo, window) = resolve_window(text, start, end);
    match rfind_bytes(window, sub.as_bytes()) {
        Some(offset) => (lo + offset) as isize,
        None => -1,
    }
}

/// Like [`find`], but a miss is an error instead of the `-1` sentinel
///
/// # Examples
/// ```
/// use pystr_utils::{index, END};
///
/// assert_eq!(index("abcdef", "cd", 0, END).unwrap(), 2);
/// assert!(index("abcdef", "xy", 0, END).is_err());
/// ```
pub fn index(text: &str, sub: &str, start: isize, end: isize) -> Result<usize> {
    let (lo, window) = resolve_window(text, start, end);
    find_bytes(window, sub.as_bytes())
        .map(|offset| lo + offset)
        .ok_or_else(|| TextError::SubstringNotFound {
            sub: sub.to_string(),
        })
}

/// Like [`rfind`], but a miss is an error instead of the `-1` sentinel
pub fn rindex(text: &str, sub: &str, start: isize, end: isize) -> Result<usize> {
    let (lo, window) = resolve_window(text, start, end);
    rfind_bytes(window, sub.as_bytes())
        .map(|offset| lo + offset)
        .ok_or_else(|| TextError::SubstringNotFound {
            sub: sub.to_string(),
        })
}

/// Count non-overlapping occurrences of `sub` in `text[start:end]`
///
/// The scan runs left to right and resumes after each match. An empty `sub`
/// matches between every pair of bytes and at both ends of the window.
///
/// # Examples
/// ```
/// use pystr_utils::{count, END};
///
/// assert_eq!(count("aaaa", "aa", 0, END), 2);
/// assert_eq!(count("abc", "", 0, END), 4);
/// ```
pub fn count(text: &str, sub: &str, start: isize, end: isize) -> usize {
    let (_, mut window) = resolve_window(text, start, end);
    let needle = sub.as_bytes();

    if needle.is_empty() {
        return window.len() + 1;
    }

    let mut matches = 0;
    while let Some(offset) = find_bytes(window, needle) {
        matches += 1;
        window = &window[offset + needle.len()..];
    }
    matches
}

/// Return true if `text[start:end]` starts with `prefix`
///
/// # Examples
/// ```
/// use pystr_utils::{startswith, END};
///
/// assert!(startswith("abcdef", "abc", 0, END));
/// assert!(!startswith("abcdef", "abc", 1, END));
/// assert!(startswith("abcdef", "bc", 1, END));
/// ```
pub fn startswith(text: &str, prefix: &str, start: isize, end: isize) -> bool {
    let (_, window) = resolve_window(text, start, end);
    window.starts_with(prefix.as_bytes())
}

/// Return true if `text[start:end]` ends with `suffix`
///
/// # Examples
/// ```
/// use pystr_utils::{endswith, END};
///
/// assert!(endswith("abcdef", "cdef", 2, END));
/// assert!(!endswith("abcdef", "cdef", 3, END));
/// assert!(endswith("abcdef", "cdef", -10, END));
/// ```
pub fn endswith(text: &str, suffix: &str, start: isize, end: isize) -> bool {
    let (_, window) = resolve_window(text, start, end);
    window.ends_with(suffix.as_bytes())
}

/// Return a copy of `text[start:end]`
///
/// Never fails: bounds are resolved like Python slice notation and a backwards
/// range gives an empty string. A bound that cuts through a multi-byte character
/// leaves the broken sequence as U+FFFD.
///
/// # Examples
/// ```
/// use pystr_utils::{slice, END};
///
/// assert_eq!(slice("abcdef", 2, -1), "cde");
/// assert_eq!(slice("abcdef", -2, END), "ef");
/// assert_eq!(slice("abcdef", 2, 1), "");
/// ```
pub fn slice(text: &str, start: isize, end: isize) -> String {
    let (_, window) = resolve_window(text, start, end);
    String::from_utf8_lossy(window).into_owned()
}
