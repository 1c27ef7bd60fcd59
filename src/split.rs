//! Splitting and partitioning
//!
//! Two modes share each splitter: with a non-empty separator the text is cut at
//! every non-overlapping occurrence of it, with an empty separator it is cut at
//! runs of ASCII whitespace and leading/trailing runs produce no empty segments.
//! `maxsplit` caps the number of cuts; any negative value means "no limit".

use crate::classify::is_space_byte;
use crate::search::{find_bytes, rfind_bytes};

fn owned(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn split_limit(maxsplit: isize) -> usize {
    usize::try_from(maxsplit).unwrap_or(usize::MAX)
}

/// Split `text` into words using `sep` as the delimiter string
///
/// At most `maxsplit` splits are made from the left (negative for unlimited); the
/// rest of the text becomes the final segment unsplit. An empty `sep` splits on
/// runs of whitespace.
///
/// # Examples
/// ```
/// use pystr_utils::split;
///
/// assert_eq!(split("a,b,,c", ",", -1), vec!["a", "b", "", "c"]);
/// assert_eq!(split("a,b,c", ",", 1), vec!["a", "b,c"]);
/// assert_eq!(split("  hello   world ", "", -1), vec!["hello", "world"]);
/// ```
pub fn split(text: &str, sep: &str, maxsplit: isize) -> Vec<String> {
    let mut remaining = split_limit(maxsplit);
    let bytes = text.as_bytes();

    if sep.is_empty() {
        return split_whitespace(bytes, remaining);
    }

    let needle = sep.as_bytes();
    let mut result = Vec::new();
    let mut seg_start = 0;

    while remaining > 0 {
        let Some(offset) = find_bytes(&bytes[seg_start..], needle) else {
            break;
        };
        result.push(owned(&bytes[seg_start..seg_start + offset]));
        seg_start += offset + needle.len();
        remaining -= 1;
    }

    result.push(owned(&bytes[seg_start..]));
    result
}

fn split_whitespace(bytes: &[u8], mut remaining: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut i = 0;

    loop {
        while i < bytes.len() && is_space_byte(bytes[i]) {
            i += 1;
        }
        if i == bytes.len() {
            break;
        }
        if remaining == 0 {
            result.push(owned(&bytes[i..]));
            break;
        }

        let word_start = i;
        while i < bytes.len() && !is_space_byte(bytes[i]) {
            i += 1;
        }
        result.push(owned(&bytes[word_start..i]));
        remaining -= 1;
    }

    result
}

/// Split `text` like [`split`], but honour `maxsplit` from the right
///
/// The segments are still returned in left-to-right order. With a finite
/// `maxsplit`, the leftover prefix becomes the single leading segment.
///
/// # Examples
/// ```
/// use pystr_utils::rsplit;
///
/// assert_eq!(rsplit("/root/world", "/", 1), vec!["/root", "world"]);
/// assert_eq!(rsplit(" root world", "", 1), vec![" root", "world"]);
/// ```
pub fn rsplit(text: &str, sep: &str, maxsplit: isize) -> Vec<String> {
    let mut remaining = split_limit(maxsplit);
    let bytes = text.as_bytes();

    if sep.is_empty() {
        return rsplit_whitespace(bytes, remaining);
    }

    let needle = sep.as_bytes();
    let mut result = Vec::new();
    let mut seg_end = bytes.len();

    while remaining > 0 {
        let Some(pos) = rfind_bytes(&bytes[..seg_end], needle) else {
            break;
        };
        result.push(owned(&bytes[pos + needle.len()..seg_end]));
        seg_end = pos;
        remaining -= 1;
    }

    result.push(owned(&bytes[..seg_end]));
    result.reverse();
    result
}

fn rsplit_whitespace(bytes: &[u8], mut remaining: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut i = bytes.len();

    loop {
        while i > 0 && is_space_byte(bytes[i - 1]) {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        if remaining == 0 {
            result.push(owned(&bytes[..i]));
            break;
        }

        let word_end = i;
        while i > 0 && !is_space_byte(bytes[i - 1]) {
            i -= 1;
        }
        result.push(owned(&bytes[i..word_end]));
        remaining -= 1;
    }

    result.reverse();
    result
}

/// Split `text` around the first occurrence of `sep`
///
/// Always yields three parts: the text before `sep`, `sep` itself and the text
/// after it. If `sep` does not occur the result is `(text, "", "")`.
///
/// # Examples
/// ```
/// use pystr_utils::partition;
///
/// let (head, sep, tail) = partition("key=value=x", "=");
/// assert_eq!((head.as_str(), sep.as_str(), tail.as_str()), ("key", "=", "value=x"));
///
/// let (head, sep, tail) = partition("novalue", "=");
/// assert_eq!((head.as_str(), sep.as_str(), tail.as_str()), ("novalue", "", ""));
/// ```
pub fn partition(text: &str, sep: &str) -> (String, String, String) {
    let bytes = text.as_bytes();
    match find_bytes(bytes, sep.as_bytes()) {
        Some(pos) => (
            owned(&bytes[..pos]),
            sep.to_string(),
            owned(&bytes[pos + sep.len()..]),
        ),
        None => (text.to_string(), String::new(), String::new()),
    }
}

/// Split `text` around the last occurrence of `sep`
///
/// If `sep` does not occur the result is `("", "", text)`.
pub fn rpartition(text: &str, sep: &str) -> (String, String, String) {
    let bytes = text.as_bytes();
    match rfind_bytes(bytes, sep.as_bytes()) {
        Some(pos) => (
            owned(&bytes[..pos]),
            sep.to_string(),
            owned(&bytes[pos + sep.len()..]),
        ),
        None => (String::new(), String::new(), text.to_string()),
    }
}

/// Split `text` at line boundaries (`\n`, `\r` and `\r\n`)
///
/// Line breaks are kept on each line only when `keepends` is true. A trailing
/// line break does not start an extra empty line.
///
/// # Examples
/// ```
/// use pystr_utils::splitlines;
///
/// assert_eq!(splitlines("a\nb\r\nc", false), vec!["a", "b", "c"]);
/// assert_eq!(splitlines("a\nb\r\n", true), vec!["a\n", "b\r\n"]);
/// ```
pub fn splitlines(text: &str, keepends: bool) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut result = Vec::new();
    let mut line_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
            i += 1;
        }

        let mut line_end = i;
        if i < bytes.len() {
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 2;
            } else {
                i += 1;
            }
            if keepends {
                line_end = i;
            }
        }

        result.push(owned(&bytes[line_start..line_end]));
        line_start = i;
    }

    result
}

/// Concatenate the strings in `seq` with `sep` between consecutive elements
///
/// # Examples
/// ```
/// use pystr_utils::join;
///
/// assert_eq!(join(", ", &["a", "b", "c"]), "a, b, c");
/// assert_eq!(join("-", &[] as &[&str]), "");
/// ```
pub fn join<S: AsRef<str>>(sep: &str, seq: &[S]) -> String {
    let mut joined = String::new();
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            joined.push_str(sep);
        }
        joined.push_str(item.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_separator() {
        assert_eq!(split("", ",", -1), vec![""]);
        assert_eq!(split("abc", ",", -1), vec!["abc"]);
        assert_eq!(split(",", ",", -1), vec!["", ""]);
        assert_eq!(split("a,b,c", ",", -1), vec!["a", "b", "c"]);
        assert_eq!(split("a,b,c", ",", 0), vec!["a,b,c"]);
        assert_eq!(split("a,b,c", ",", 1), vec!["a", "b,c"]);
        assert_eq!(split("a,b,c", ",", 5), vec!["a", "b", "c"]);
        assert_eq!(split("a::b::c", "::", -1), vec!["a", "b", "c"]);
        assert_eq!(split("/root/world", "/", -1), vec!["", "root", "world"]);
    }

    #[test]
    fn test_split_overlapping_separator_scans_left_to_right() {
        assert_eq!(split("aaa", "aa", -1), vec!["", "a"]);
        assert_eq!(rsplit("aaa", "aa", -1), vec!["a", ""]);
    }

    #[test]
    fn test_split_whitespace() {
        assert_eq!(split("", "", -1), Vec::<String>::new());
        assert_eq!(split("   ", "", -1), Vec::<String>::new());
        assert_eq!(split(" root world", "", -1), vec!["root", "world"]);
        assert_eq!(split(" root world", "", 1), vec!["root", "world"]);
        assert_eq!(split("a b c ", "", 1), vec!["a", "b c "]);
        assert_eq!(split("a ", "", 0), vec!["a "]);
        assert_eq!(split(" \t a\n\x0bb\r\x0c", "", -1), vec!["a", "b"]);
    }

    #[test]
    fn test_rsplit_with_separator() {
        assert_eq!(rsplit("/root/world", "/", 1), vec!["/root", "world"]);
        assert_eq!(rsplit("/root/world", "/", 0), vec!["/root/world"]);
        assert_eq!(rsplit("/root/world", "/", -1), vec!["", "root", "world"]);
        assert_eq!(rsplit("a,b,c", ",", 1), vec!["a,b", "c"]);
        assert_eq!(rsplit("", ",", -1), vec![""]);
    }

    #[test]
    fn test_rsplit_whitespace() {
        assert_eq!(rsplit(" root world", "", 1), vec![" root", "world"]);
        assert_eq!(rsplit(" root world", "", -1), vec!["root", "world"]);
        assert_eq!(rsplit(" a b c", "", 1), vec![" a b", "c"]);
        assert_eq!(rsplit("  ", "", -1), Vec::<String>::new());
    }

    #[test]
    fn test_partition() {
        assert_eq!(
            partition("a/b/c", "/"),
            ("a".to_string(), "/".to_string(), "b/c".to_string())
        );
        assert_eq!(
            partition("abc", "/"),
            ("abc".to_string(), String::new(), String::new())
        );
        assert_eq!(
            partition("abc", ""),
            (String::new(), String::new(), "abc".to_string())
        );
    }

    #[test]
    fn test_rpartition() {
        assert_eq!(
            rpartition("a/b/c", "/"),
            ("a/b".to_string(), "/".to_string(), "c".to_string())
        );
        assert_eq!(
            rpartition("abc", "/"),
            (String::new(), String::new(), "abc".to_string())
        );
        assert_eq!(
            rpartition("abc", ""),
            ("abc".to_string(), String::new(), String::new())
        );
    }

    #[test]
    fn test_splitlines() {
        assert_eq!(splitlines("", false), Vec::<String>::new());
        assert_eq!(splitlines("abc", false), vec!["abc"]);
        assert_eq!(splitlines("a\n\nb", false), vec!["a", "", "b"]);
        assert_eq!(splitlines("a\rb\r\nc\n", false), vec!["a", "b", "c"]);
        assert_eq!(splitlines("a\rb\r\nc\n", true), vec!["a\r", "b\r\n", "c\n"]);
        assert_eq!(splitlines("\n", false), vec![""]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", &["a", "b"]), "a/b");
        assert_eq!(join("", &["a", "b"]), "ab");
        assert_eq!(join(", ", &vec!["x".to_string()]), "x");
    }
}
