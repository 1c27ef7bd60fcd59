//! Character-class predicates
//!
//! Classification is byte-wise and ASCII-only, like the C locale: bytes outside
//! the ASCII range are never letters, digits or whitespace. Every predicate is
//! false for the empty string.

/// Whitespace as C `isspace` sees it, vertical tab and form feed included.
pub(crate) fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn all_bytes(text: &str, pred: impl Fn(u8) -> bool) -> bool {
    !text.is_empty() && text.bytes().all(pred)
}

/// True if every byte is an ASCII letter or digit
pub fn isalnum(text: &str) -> bool {
    all_bytes(text, |b| b.is_ascii_alphanumeric())
}

/// True if every byte is an ASCII letter
pub fn isalpha(text: &str) -> bool {
    all_bytes(text, |b| b.is_ascii_alphabetic())
}

/// True if every byte is an ASCII digit
pub fn isdigit(text: &str) -> bool {
    all_bytes(text, |b| b.is_ascii_digit())
}

/// True if every byte is whitespace
pub fn isspace(text: &str) -> bool {
    all_bytes(text, is_space_byte)
}

/// True if there is at least one cased byte and all cased bytes are lowercase
///
/// # Examples
/// ```
/// use pystr_utils::islower;
///
/// assert!(islower("abc 123"));
/// assert!(!islower("123"));
/// assert!(!islower("aBc"));
/// ```
pub fn islower(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().any(u8::is_ascii_lowercase) && !bytes.iter().any(u8::is_ascii_uppercase)
}

/// True if there is at least one cased byte and all cased bytes are uppercase
pub fn isupper(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().any(u8::is_ascii_uppercase) && !bytes.iter().any(u8::is_ascii_lowercase)
}

/// True if the text is title-cased and has at least one cased byte
///
/// Uppercase letters may only follow uncased bytes and lowercase letters only
/// cased ones.
///
/// # Examples
/// ```
/// use pystr_utils::istitle;
///
/// assert!(istitle("Hello World"));
/// assert!(istitle("A1 B2"));
/// assert!(!istitle("Hello world"));
/// assert!(!istitle("HEllo"));
/// ```
pub fn istitle(text: &str) -> bool {
    let mut cased = false;
    let mut previous_is_cased = false;

    for b in text.bytes() {
        if b.is_ascii_uppercase() {
            if previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else if b.is_ascii_lowercase() {
            if !previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else {
            previous_is_cased = false;
        }
    }

    cased
}
