//! RPM-style version comparison.
//!
//! Implements the rpmvercmp segment ordering: versions split into alternating
//! numeric and alphabetic segments, numeric segments compare as integers
//! (leading zeros ignored), numeric segments sort above alphabetic ones, and
//! a tilde segment sorts below everything including the empty string.

use std::cmp::Ordering;

/// Compare two epoch:version-release strings the way rpm orders them:
/// numeric epoch first, then version, then release.
pub fn compare_evr(a: &str, b: &str) -> Ordering {
    let (epoch_a, vr_a) = split_epoch(a);
    let (epoch_b, vr_b) = split_epoch(b);

    match epoch_a.cmp(&epoch_b) {
        Ordering::Equal => {}
        other => return other,
    }

    let (ver_a, rel_a) = split_release(vr_a);
    let (ver_b, rel_b) = split_release(vr_b);

    match compare_versions(ver_a, ver_b) {
        Ordering::Equal => compare_versions(rel_a, rel_b),
        other => other,
    }
}

/// Compare two bare version (or release) strings.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut a = a;
    let mut b = b;

    loop {
        // Skip separator runs, but keep tildes: they carry ordering.
        a = a.trim_start_matches(|c: char| !c.is_ascii_alphanumeric() && c != '~');
        b = b.trim_start_matches(|c: char| !c.is_ascii_alphanumeric() && c != '~');

        // Tilde pre-release marker sorts below anything else, including the
        // end of the string.
        let a_tilde = a.starts_with('~');
        let b_tilde = b.starts_with('~');
        if a_tilde || b_tilde {
            match (a_tilde, b_tilde) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {
                    a = &a[1..];
                    b = &b[1..];
                    continue;
                }
            }
        }

        if a.is_empty() || b.is_empty() {
            return a.len().cmp(&b.len());
        }

        let (seg_a, rest_a, a_numeric) = take_segment(a);
        let (seg_b, rest_b, b_numeric) = take_segment(b);

        // A numeric segment always beats an alphabetic one.
        if a_numeric != b_numeric {
            return if a_numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let cmp = if a_numeric {
            compare_numeric(seg_a, seg_b)
        } else {
            seg_a.cmp(seg_b)
        };
        if cmp != Ordering::Equal {
            return cmp;
        }

        a = rest_a;
        b = rest_b;
    }
}

fn split_epoch(evr: &str) -> (u64, &str) {
    match evr.split_once(':') {
        Some((epoch, rest)) => (epoch.parse().unwrap_or(0), rest),
        None => (0, evr),
    }
}

fn split_release(vr: &str) -> (&str, &str) {
    match vr.split_once('-') {
        Some((version, release)) => (version, release),
        None => (vr, ""),
    }
}

/// Take the leading run of digits or of letters, returning the segment, the
/// remainder, and whether the segment was numeric.
fn take_segment(s: &str) -> (&str, &str, bool) {
    let numeric = s.as_bytes()[0].is_ascii_digit();
    let end = s
        .find(|c: char| {
            if numeric {
                !c.is_ascii_digit()
            } else {
                !c.is_ascii_alphabetic()
            }
        })
        .unwrap_or(s.len());
    (&s[..end], &s[end..], numeric)
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(compare_versions("1.2", "1.10"), Ordering::Less);
        assert_eq!(compare_versions("2.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.05", "1.5"), Ordering::Equal);
    }

    #[test]
    fn test_alpha_vs_numeric() {
        // Numeric segments sort above alphabetic ones: 1.0.1 > 1.0.a
        assert_eq!(compare_versions("1.0.1", "1.0.a"), Ordering::Greater);
        assert_eq!(compare_versions("1.0a", "1.0"), Ordering::Greater);
    }

    #[test]
    fn test_tilde_sorts_first() {
        assert_eq!(compare_versions("1.0~rc1", "1.0"), Ordering::Less);
        assert_eq!(compare_versions("1.0~rc1", "1.0~rc2"), Ordering::Less);
    }

    #[test]
    fn test_evr_with_epoch() {
        assert_eq!(compare_evr("1:1.0-1", "0:2.0-1"), Ordering::Greater);
        assert_eq!(compare_evr("0:1.0-2", "0:1.0-10"), Ordering::Less);
        assert_eq!(compare_evr("0:1.0-1", "0:1.0-1"), Ordering::Equal);
    }

    #[test]
    fn test_separator_runs_are_collapsed() {
        assert_eq!(compare_versions("1..2", "1.2"), Ordering::Equal);
        assert_eq!(compare_versions("1_2", "1.2"), Ordering::Equal);
    }
}
