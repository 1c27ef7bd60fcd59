//! POSIX path rules: `/` is the only separator and there are no drives

use log::trace;

use super::{split_extension, PathConvention};

fn is_sep(b: u8) -> bool {
    b == b'/'
}

/// POSIX path convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posix;

impl PathConvention for Posix {
    const NAME: &'static str = "posix";
    const SEP: char = '/';

    fn splitdrive(path: &str) -> (String, String) {
        (String::new(), path.to_string())
    }

    fn split(path: &str) -> (String, String) {
        let tail_start = path.rfind('/').map_or(0, |i| i + 1);
        let (head, tail) = path.split_at(tail_start);

        // A head made only of slashes is the root and keeps all of them.
        let stripped = head.trim_end_matches('/');
        let head = if stripped.is_empty() { head } else { stripped };

        (head.to_string(), tail.to_string())
    }

    fn splitext(path: &str) -> (String, String) {
        split_extension(path, is_sep)
    }

    fn isabs(path: &str) -> bool {
        path.starts_with('/')
    }

    fn join(base: &str, segment: &str) -> String {
        if segment.starts_with('/') {
            return segment.to_string();
        }
        if segment.is_empty() {
            return base.to_string();
        }
        if base.is_empty() || base.ends_with('/') {
            format!("{}{}", base, segment)
        } else {
            format!("{}/{}", base, segment)
        }
    }

    fn normpath(path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }

        // POSIX gives exactly two leading slashes an implementation-defined
        // meaning; three or more are the same as one.
        let initial_slashes = if path.starts_with("//") && !path.starts_with("///") {
            2
        } else if path.starts_with('/') {
            1
        } else {
            0
        };

        let mut comps: Vec<&str> = Vec::new();
        for comp in path.split('/') {
            match comp {
                "" | "." => {}
                ".." => match comps.last() {
                    Some(&last) if last != ".." => {
                        comps.pop();
                    }
                    None if initial_slashes > 0 => {
                        trace!("posix: dropping '..' above the root of {:?}", path);
                    }
                    _ => comps.push(".."),
                },
                _ => comps.push(comp),
            }
        }

        let normalized = format!("{}{}", "/".repeat(initial_slashes), comps.join("/"));
        if normalized.is_empty() {
            ".".to_string()
        } else {
            normalized
        }
    }
}
