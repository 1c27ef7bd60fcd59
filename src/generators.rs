//! Property test generators for text and path operations
//!
//! Generators lean towards the inputs where Python semantics are easy to get
//! wrong: indices far outside the text, whitespace runs, separators at the ends,
//! drive prefixes and runs of `..`.

use proptest::prelude::*;

use crate::END;

/// Generators for string-method scenarios
pub struct TextGenerators;

impl TextGenerators {
    /// Short ASCII text with separators and whitespace mixed in
    pub fn ascii_text() -> impl Strategy<Value = String> {
        "[a-c ,/\t\n]{0,24}"
    }

    /// Text that may contain multi-byte characters
    pub fn unicode_text() -> impl Strategy<Value = String> {
        "[a-cé€ \t]{0,16}"
    }

    /// Any text the string operations should accept
    pub fn text() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::ascii_text(),
            1 => Self::unicode_text(),
        ]
    }

    /// A position argument, including the extremes and the "to the end" sentinel
    pub fn index() -> impl Strategy<Value = isize> {
        prop_oneof![
            6 => -40isize..40,
            1 => Just(isize::MIN),
            1 => Just(END),
        ]
    }

    /// A `(start, end)` pair, which may describe a backwards range
    pub fn index_pair() -> impl Strategy<Value = (isize, isize)> {
        (Self::index(), Self::index())
    }

    /// A one-byte separator; such a separator can never overlap itself
    pub fn single_byte_sep() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(",".to_string()),
            Just("/".to_string()),
            Just("a".to_string()),
            Just(" ".to_string()),
        ]
    }

    /// A `maxsplit` argument; negative means unlimited
    pub fn maxsplit() -> impl Strategy<Value = isize> {
        prop_oneof![
            3 => 0isize..6,
            1 => Just(-1isize),
            1 => Just(isize::MIN),
        ]
    }
}

/// Generators for path-algebra scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// A single component, including the special `.` and `..` names
    pub fn component() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => "[a-z][a-z0-9_.]{0,6}",
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just(String::new()),
        ]
    }

    /// POSIX paths: optional leading slashes, repeated and trailing separators
    pub fn posix_path() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(""), Just("/"), Just("//"), Just("///")],
            prop::collection::vec(Self::component(), 0..=6),
        )
            .prop_map(|(root, comps)| format!("{}{}", root, comps.join("/")))
    }

    /// A drive prefix as Windows spells them, or none at all
    pub fn nt_drive() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Just(String::new()),
            2 => "[a-zA-Z]:",
            1 => "(\\\\\\\\|//)[a-z]{1,4}[\\\\/][a-z]{1,4}",
        ]
    }

    /// Windows-NT paths mixing both separators after an optional drive
    pub fn nt_path() -> impl Strategy<Value = String> {
        (
            Self::nt_drive(),
            prop_oneof![Just(""), Just("\\"), Just("/"), Just("\\\\")],
            prop::collection::vec((Self::component(), prop::bool::ANY), 0..=6),
        )
            .prop_map(|(drive, root, comps)| {
                let mut path = format!("{}{}", drive, root);
                for (i, (comp, backslash)) in comps.iter().enumerate() {
                    if i > 0 {
                        path.push(if *backslash { '\\' } else { '/' });
                    }
                    path.push_str(comp);
                }
                path
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{self, PathConvention};
    use crate::{adjust_indices, find, split};

    proptest! {
        #[test]
        fn test_unicode_text_is_valid_input(text in TextGenerators::unicode_text()) {
            // A separator that never occurs leaves the text whole.
            prop_assert_eq!(split(&text, "\u{1}", -1), vec![text.clone()]);
        }

        #[test]
        fn test_index_pairs_resolve_inside_text(
            text in TextGenerators::text(),
            (start, end) in TextGenerators::index_pair()
        ) {
            let (lo, hi) = adjust_indices(text.len(), start, end);
            prop_assert!(lo <= hi && hi <= text.len());
        }

        #[test]
        fn test_empty_find_lands_on_resolved_start(
            text in TextGenerators::ascii_text(),
            (start, end) in TextGenerators::index_pair()
        ) {
            let (lo, _) = adjust_indices(text.len(), start, end);
            prop_assert_eq!(find(&text, "", start, end), lo as isize);
        }

        #[test]
        fn test_maxsplit_bounds_segment_count(
            text in TextGenerators::text(),
            sep in TextGenerators::single_byte_sep(),
            maxsplit in TextGenerators::maxsplit()
        ) {
            let parts = split(&text, &sep, maxsplit);
            prop_assert_eq!(parts.join(&sep), text);
            if maxsplit >= 0 {
                prop_assert!(parts.len() <= maxsplit as usize + 1);
            }
        }

        #[test]
        fn test_posix_paths_use_forward_slashes(p in PathGenerators::posix_path()) {
            prop_assert!(!p.contains('\\'));
        }

        #[test]
        fn test_nt_drive_is_recognized(drive in PathGenerators::nt_drive()) {
            let (found, rest) = path::Nt::splitdrive(&drive);
            prop_assert_eq!(found, drive);
            prop_assert_eq!(rest, "");
        }

        #[test]
        fn test_nt_splitdrive_covers_path(p in PathGenerators::nt_path()) {
            let (drive, rest) = path::Nt::splitdrive(&p);
            prop_assert_eq!(format!("{}{}", drive, rest), p);
        }
    }
}
