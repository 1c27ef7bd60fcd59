//! Copy-producing text transforms
//!
//! Case mapping, padding, stripping, replacement and byte translation. Case
//! mapping only touches ASCII letters; everything else passes through unchanged.

use crate::classify::is_space_byte;
use crate::error::{Result, TextError};

/// Return a copy with the first character uppercased and the rest lowercased
///
/// # Examples
/// ```
/// use pystr_utils::capitalize;
///
/// assert_eq!(capitalize("hELLO world"), "Hello world");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = first.to_ascii_uppercase().to_string();
            capitalized.push_str(&chars.as_str().to_ascii_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

pub fn lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

pub fn upper(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Return a copy with uppercase letters lowercased and vice versa
pub fn swapcase(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Return a title-cased copy: words start uppercase, remaining letters are lowercase
///
/// A "word" starts at any letter that follows an uncased character.
///
/// # Examples
/// ```
/// use pystr_utils::title;
///
/// assert_eq!(title("hello wORLD"), "Hello World");
/// assert_eq!(title("they're bill's"), "They'Re Bill'S");
/// ```
pub fn title(text: &str) -> String {
    let mut previous_is_cased = false;
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                let c = if previous_is_cased {
                    c
                } else {
                    c.to_ascii_uppercase()
                };
                previous_is_cased = true;
                c
            } else if c.is_ascii_uppercase() {
                let c = if previous_is_cased {
                    c.to_ascii_lowercase()
                } else {
                    c
                };
                previous_is_cased = true;
                c
            } else {
                previous_is_cased = false;
                c
            }
        })
        .collect()
}

/// Return `text` centered in a field of `width` bytes, padded with spaces
///
/// When the padding is odd, the extra space goes on the left only if `width`
/// is odd as well.
///
/// # Examples
/// ```
/// use pystr_utils::center;
///
/// assert_eq!(center("ab", 5), "  ab ");
/// assert_eq!(center("abc", 6), " abc  ");
/// assert_eq!(center("abc", 2), "abc");
/// ```
pub fn center(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let margin = width - text.len();
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
}

/// Return `text` left justified in a field of `width` bytes
pub fn ljust(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.len());
    format!("{}{}", text, " ".repeat(fill))
}

/// Return `text` right justified in a field of `width` bytes
pub fn rjust(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.len());
    format!("{}{}", " ".repeat(fill), text)
}

/// Pad a numeric string on the left with zeros, keeping any sign in front
///
/// # Examples
/// ```
/// use pystr_utils::zfill;
///
/// assert_eq!(zfill("42", 5), "00042");
/// assert_eq!(zfill("-42", 5), "-0042");
/// assert_eq!(zfill("12345", 3), "12345");
/// ```
pub fn zfill(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.len());
    if fill == 0 {
        return text.to_string();
    }

    let zeros = "0".repeat(fill);
    match text.as_bytes().first() {
        Some(sign @ (b'+' | b'-')) => format!("{}{}{}", *sign as char, zeros, &text[1..]),
        _ => format!("{}{}", zeros, text),
    }
}

/// Replace each tab with spaces up to the next multiple of `tabsize`
///
/// The column restarts after `\n` and `\r`. A `tabsize` of zero or less removes
/// the tabs.
///
/// # Examples
/// ```
/// use pystr_utils::expandtabs;
///
/// assert_eq!(expandtabs("a\tb", 4), "a   b");
/// assert_eq!(expandtabs("abcd\tx", 4), "abcd    x");
/// ```
pub fn expandtabs(text: &str, tabsize: isize) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0usize;

    for c in text.chars() {
        match c {
            '\t' => {
                if let Ok(size) = usize::try_from(tabsize) {
                    if size > 0 {
                        let fill = size - column % size;
                        expanded.extend(std::iter::repeat(' ').take(fill));
                        column += fill;
                    }
                }
            }
            '\n' | '\r' => {
                expanded.push(c);
                column = 0;
            }
            _ => {
                expanded.push(c);
                column += 1;
            }
        }
    }

    expanded
}

/// Return `text` repeated `n` times; `n <= 0` gives the empty string
pub fn mul(text: &str, n: isize) -> String {
    text.repeat(usize::try_from(n).unwrap_or(0))
}

fn strip_bounds(bytes: &[u8], chars: &str, left: bool, right: bool) -> (usize, usize) {
    let strip_set = chars.as_bytes();
    let should_strip = |b: u8| {
        if strip_set.is_empty() {
            is_space_byte(b)
        } else {
            strip_set.contains(&b)
        }
    };

    let mut lo = 0;
    let mut hi = bytes.len();
    if left {
        while lo < hi && should_strip(bytes[lo]) {
            lo += 1;
        }
    }
    if right {
        while hi > lo && should_strip(bytes[hi - 1]) {
            hi -= 1;
        }
    }
    (lo, hi)
}

fn strip_impl(text: &str, chars: &str, left: bool, right: bool) -> String {
    let bytes = text.as_bytes();
    let (lo, hi) = strip_bounds(bytes, chars, left, right);
    String::from_utf8_lossy(&bytes[lo..hi]).into_owned()
}

/// Return a copy with leading and trailing bytes in `chars` removed
///
/// An empty `chars` strips whitespace.
///
/// # Examples
/// ```
/// use pystr_utils::strip;
///
/// assert_eq!(strip("\r\n a \r\n\t", ""), "a");
/// assert_eq!(strip("xxhixx", "x"), "hi");
/// ```
pub fn strip(text: &str, chars: &str) -> String {
    strip_impl(text, chars, true, true)
}

/// Like [`strip`], leading side only
pub fn lstrip(text: &str, chars: &str) -> String {
    strip_impl(text, chars, true, false)
}

/// Like [`strip`], trailing side only
pub fn rstrip(text: &str, chars: &str) -> String {
    strip_impl(text, chars, false, true)
}

/// Return a copy with occurrences of `old` replaced by `new`
///
/// Only the first `count` occurrences are replaced; a negative `count` replaces
/// all of them. An empty `old` inserts `new` before every character and at the end.
///
/// # Examples
/// ```
/// use pystr_utils::replace;
///
/// assert_eq!(replace("a.b.c", ".", "/", -1), "a/b/c");
/// assert_eq!(replace("a.b.c", ".", "/", 1), "a/b.c");
/// assert_eq!(replace("ab", "", "-", -1), "-a-b-");
/// ```
pub fn replace(text: &str, old: &str, new: &str, count: isize) -> String {
    let limit = usize::try_from(count).unwrap_or(usize::MAX);
    let mut replaced = String::with_capacity(text.len());
    let mut done = 0;

    if old.is_empty() {
        for c in text.chars() {
            if done < limit {
                replaced.push_str(new);
                done += 1;
            }
            replaced.push(c);
        }
        if done < limit {
            replaced.push_str(new);
        }
        return replaced;
    }

    let mut rest = text;
    while done < limit {
        let Some(pos) = rest.find(old) else {
            break;
        };
        replaced.push_str(&rest[..pos]);
        replaced.push_str(new);
        rest = &rest[pos + old.len()..];
        done += 1;
    }
    replaced.push_str(rest);
    replaced
}

/// A byte-to-byte mapping covering all 256 byte values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable([u8; 256]);

impl TranslationTable {
    /// Build a table from exactly 256 bytes, where entry `i` is the image of byte `i`
    ///
    /// # Examples
    /// ```
    /// use pystr_utils::TranslationTable;
    ///
    /// let raw: Vec<u8> = (0..=255).collect();
    /// assert!(TranslationTable::new(&raw).is_ok());
    /// assert!(TranslationTable::new(b"too short").is_err());
    /// ```
    pub fn new(table: &[u8]) -> Result<Self> {
        <[u8; 256]>::try_from(table)
            .map(Self)
            .map_err(|_| TextError::InvalidTranslationTable { len: table.len() })
    }

    /// The table mapping every byte to itself
    pub fn identity() -> Self {
        Self(std::array::from_fn(|i| i as u8))
    }

    /// Return this table with `from` remapped to `to`
    pub fn with_mapping(mut self, from: u8, to: u8) -> Self {
        self.0[usize::from(from)] = to;
        self
    }

    pub fn map(&self, b: u8) -> u8 {
        self.0[usize::from(b)]
    }
}

/// Drop the bytes in `deletechars`, then map every remaining byte through `table`
///
/// # Examples
/// ```
/// use pystr_utils::{translate, TranslationTable};
///
/// let table = TranslationTable::identity().with_mapping(b'e', b'o');
/// assert_eq!(translate("cheese", &table, ""), "chooso");
/// assert_eq!(translate("cheese", &TranslationTable::identity(), "e"), "chs");
/// ```
pub fn translate(text: &str, table: &TranslationTable, deletechars: &str) -> String {
    let delete = deletechars.as_bytes();
    let bytes: Vec<u8> = text
        .bytes()
        .filter(|b| !delete.contains(b))
        .map(|b| table.map(b))
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mapping() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("ABC def"), "Abc def");
        assert_eq!(lower("AbC1"), "abc1");
        assert_eq!(upper("AbC1"), "ABC1");
        assert_eq!(swapcase("AbC1"), "aBc1");
        assert_eq!(title(""), "");
        assert_eq!(title("a1b c"), "A1B C");
        assert_eq!(upper("é"), "é");
    }

    #[test]
    fn test_padding() {
        assert_eq!(center("", 3), "   ");
        assert_eq!(center("a", 4), " a  ");
        assert_eq!(center("a", 5), "  a  ");
        assert_eq!(ljust("ab", 4), "ab  ");
        assert_eq!(ljust("abcde", 4), "abcde");
        assert_eq!(rjust("ab", 4), "  ab");
        assert_eq!(rjust("abcde", 4), "abcde");
        assert_eq!(zfill("", 3), "000");
        assert_eq!(zfill("+7", 4), "+007");
        assert_eq!(zfill("-", 3), "-00");
    }

    #[test]
    fn test_expandtabs() {
        assert_eq!(expandtabs("\t", 8), "        ");
        assert_eq!(expandtabs("a\tb\nc\td", 4), "a   b\nc   d");
        assert_eq!(expandtabs("a\tb", 0), "ab");
        assert_eq!(expandtabs("a\tb", -1), "ab");
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul("ab", 3), "ababab");
        assert_eq!(mul("ab", 0), "");
        assert_eq!(mul("ab", -2), "");
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("", ""), "");
        assert_eq!(strip("a", ""), "a");
        assert_eq!(strip("a ", ""), "a");
        assert_eq!(strip(" a", ""), "a");
        assert_eq!(strip("\n a ", ""), "a");
        assert_eq!(strip("\r\n a \r\n", ""), "a");
        assert_eq!(strip("\r\n a \r\n\t", ""), "a");
        assert_eq!(lstrip("  a  ", ""), "a  ");
        assert_eq!(rstrip("  a  ", ""), "  a");
        assert_eq!(strip("//a/b//", "/"), "a/b");
        assert_eq!(lstrip("xyxa", "xy"), "a");
        assert_eq!(rstrip("axyx", "xy"), "a");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("", "a", "b", -1), "");
        assert_eq!(replace("", "", "x", -1), "x");
        assert_eq!(replace("aaa", "a", "bb", -1), "bbbbbb");
        assert_eq!(replace("aaa", "a", "b", 2), "bba");
        assert_eq!(replace("aaa", "a", "b", 0), "aaa");
        assert_eq!(replace("ab", "", "-", 2), "-a-b");
        assert_eq!(replace("abab", "ab", "", -1), "");
    }

    #[test]
    fn test_translate() {
        let identity = TranslationTable::identity();
        assert_eq!(translate("", &identity, ""), "");
        assert_eq!(translate("cheese", &identity, ""), "cheese");
        assert_eq!(translate("cheese", &identity, "e"), "chs");

        let e_to_o = TranslationTable::identity().with_mapping(101, 111);
        assert_eq!(translate("", &e_to_o, ""), "");
        assert_eq!(translate("cheese", &e_to_o, ""), "chooso");
    }

    #[test]
    fn test_translation_table_length() {
        assert_eq!(
            TranslationTable::new(&[0u8; 255]),
            Err(TextError::InvalidTranslationTable { len: 255 })
        );
        let raw: Vec<u8> = (0..=255u8).rev().collect();
        let reversed = TranslationTable::new(&raw).unwrap();
        assert_eq!(reversed.map(0), 255);
        assert_eq!(reversed.map(b'a'), 255 - b'a');
    }
}
