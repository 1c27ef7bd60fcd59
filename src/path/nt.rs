//! Windows-NT path rules
//!
//! Both `\` and `/` separate components, `\` is written. A path may start with a
//! drive: either a letter and colon (`C:`) or a UNC prefix (`\\host\share`).
//! Absoluteness is judged on what follows the drive, so `C:foo` is relative to
//! the current directory of drive `C:`.

use log::trace;

use super::{split_extension, PathConvention};

fn is_sep(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

const SEPS: &[char] = &['\\', '/'];

/// Byte length of the drive prefix of `path`, 0 when there is none
fn drive_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if bytes.len() < 2 {
        return 0;
    }

    if is_sep(bytes[0]) && is_sep(bytes[1]) && !bytes.get(2).copied().is_some_and(is_sep) {
        // \\host\share: the drive runs up to the separator after the share.
        let Some(host_end) = bytes[2..].iter().position(|&b| is_sep(b)).map(|i| i + 2) else {
            return 0;
        };
        return match bytes[host_end + 1..].iter().position(|&b| is_sep(b)) {
            Some(0) => 0,
            Some(i) => host_end + 1 + i,
            None => bytes.len(),
        };
    }

    if bytes[1] == b':' {
        return 2;
    }
    0
}

/// Split `path` into `(drive, root, rest)`, where `root` is the one separator
/// directly after the drive, if any.
fn split_root(path: &str) -> (&str, &str, &str) {
    let (drive, rest) = path.split_at(drive_len(path));
    let root_len = usize::from(rest.as_bytes().first().copied().is_some_and(is_sep));
    let (root, rest) = rest.split_at(root_len);
    (drive, root, rest)
}

/// Windows-NT path convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nt;

impl PathConvention for Nt {
    const NAME: &'static str = "nt";
    const SEP: char = '\\';

    fn splitdrive(path: &str) -> (String, String) {
        let (drive, rest) = path.split_at(drive_len(path));
        (drive.to_string(), rest.to_string())
    }

    fn split(path: &str) -> (String, String) {
        let (drive, rest) = path.split_at(drive_len(path));
        let tail_start = rest.rfind(SEPS).map_or(0, |i| i + 1);
        let (head, tail) = rest.split_at(tail_start);

        // Without a drive, a head such as `\\a\\` must keep its trailing
        // separators: stripped to `\\a`, it would rejoin as a UNC drive.
        let stripped = head.trim_end_matches(SEPS);
        let blocks_unc =
            drive.is_empty() && stripped.len() > 1 && stripped.bytes().take(2).all(is_sep);
        let head = if stripped.is_empty() || blocks_unc { head } else { stripped };

        (format!("{}{}", drive, head), tail.to_string())
    }

    fn splitext(path: &str) -> (String, String) {
        let (drive, rest) = path.split_at(drive_len(path));
        let (root, ext) = split_extension(rest, is_sep);
        (format!("{}{}", drive, root), ext)
    }

    fn isabs(path: &str) -> bool {
        let (_, root, _) = split_root(path);
        !root.is_empty()
    }

    fn join(base: &str, segment: &str) -> String {
        if segment.is_empty() {
            return base.to_string();
        }
        if base.is_empty() {
            return segment.to_string();
        }

        let (base_drive, _, _) = split_root(base);
        let (seg_drive, seg_root, seg_rest) = split_root(segment);

        if !seg_root.is_empty() {
            if !seg_drive.is_empty() || base_drive.is_empty() {
                return segment.to_string();
            }
            trace!("nt: keeping drive {:?} for rooted segment {:?}", base_drive, segment);
            return format!("{}{}", base_drive, segment);
        }

        let mut joined = base.to_string();
        if !seg_drive.is_empty() && seg_drive != base_drive {
            if !seg_drive.eq_ignore_ascii_case(base_drive) {
                trace!("nt: drive {:?} replaces {:?}", seg_drive, base);
                return segment.to_string();
            }
            joined = format!("{}{}", seg_drive, &base[base_drive.len()..]);
        }

        let (drive, root, rest) = split_root(&joined);
        let needs_sep = if rest.is_empty() {
            // Only a UNC drive needs a separator before a relative segment;
            // `C:` and a rooted prefix already end where the segment belongs.
            root.is_empty() && !drive.is_empty() && !drive.ends_with(':')
        } else {
            !rest.ends_with(SEPS)
        };
        if needs_sep && !seg_rest.is_empty() {
            joined.push('\\');
        }
        joined.push_str(seg_rest);
        joined
    }

    fn normpath(path: &str) -> String {
        // Device and verbatim paths are passed through untouched.
        if path.starts_with("\\\\.\\") || path.starts_with("\\\\?\\") {
            return path.to_string();
        }

        let path = path.replace('/', "\\");
        let (drive, rest) = path.split_at(drive_len(&path));

        let mut prefix = drive.to_string();
        let rest = if drive.is_empty() {
            // Without a drive, leading backslashes may be a UNC name that failed
            // to parse; keep all of them.
            let trimmed = rest.trim_start_matches('\\');
            prefix.push_str(&rest[..rest.len() - trimmed.len()]);
            trimmed
        } else if rest.starts_with('\\') {
            prefix.push('\\');
            rest.trim_start_matches('\\')
        } else {
            rest
        };

        let mut comps: Vec<&str> = Vec::new();
        for comp in rest.split('\\') {
            match comp {
                "" | "." => {}
                ".." => match comps.last() {
                    Some(&last) if last != ".." => {
                        comps.pop();
                    }
                    None if prefix.ends_with('\\') => {
                        trace!("nt: dropping '..' above the root of {:?}", path);
                    }
                    _ => comps.push(".."),
                },
                _ => comps.push(comp),
            }
        }

        if prefix.is_empty() && comps.is_empty() {
            return ".".to_string();
        }
        format!("{}{}", prefix, comps.join("\\"))
    }
}
