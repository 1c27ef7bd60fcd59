//! Index resolution for Python-style `[start:end]` bounds
//!
//! Every bounded operation in this crate (slicing, searching, counting and the
//! prefix/suffix checks) funnels its signed `start`/`end` pair through
//! [`adjust_indices`] before touching the text. Resolution is total: any pair of
//! integers maps onto a valid half-open byte range, so none of those operations
//! can fail or panic on out-of-range input.

/// Sentinel for "up to the end of the text" in `end` position
///
/// Use `0` as the matching "from the beginning" value for `start`.
pub const END: isize = isize::MAX;

/// Resolve a signed `(start, end)` pair against a text of `len` bytes
///
/// Negative indices count from the end of the text (`len` is added once). Both
/// indices are then clamped to `[0, len]`. A backwards range resolves to the empty
/// range positioned at `start`, never to a reversed one.
///
/// The returned `(lo, hi)` always satisfies `lo <= hi <= len`.
///
/// # Examples
/// ```
/// use pystr_utils::{adjust_indices, END};
///
/// assert_eq!(adjust_indices(6, 2, -1), (2, 5));
/// assert_eq!(adjust_indices(6, -99, END), (0, 6));
/// assert_eq!(adjust_indices(6, 4, 1), (4, 4));
/// ```
pub fn adjust_indices(len: usize, start: isize, end: isize) -> (usize, usize) {
    let len = isize::try_from(len).unwrap_or(isize::MAX);

    let lo = clamp_index(start, len);
    let hi = clamp_index(end, len).max(lo);

    (lo as usize, hi as usize)
}

fn clamp_index(index: isize, len: isize) -> isize {
    let index = if index < 0 { index + len } else { index };
    index.clamp(0, len)
}
