//! `remove_dot_segments` and `merge` algorithms described in [RFC 3986 5.2].
//!
//! [RFC 3986 5.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2

use alloc::string::String;

use crate::parser::str::{find, rfind};

/// Removes `.` and `..` segments from the path.
///
/// This is the algorithm of [RFC 3986 section 5.2.4]. A `..` segment never climbs
/// above the root: `/a/../../g` becomes `/g`.
///
/// # Examples
///
/// ```
/// use nose_iri::normalize::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/b/c/.."), "/b/");
/// ```
///
/// [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut input = path;

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            // 2.A.
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            // 2.A.
            input = rest;
        } else if input.starts_with("/./") {
            // 2.B ("/./" to "/").
            input = &input[2..];
        } else if input == "/." {
            // 2.B.
            input = "/";
        } else if input.starts_with("/../") {
            // 2.C ("/../" to "/").
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            // 2.C.
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // 2.D.
            input = "";
        } else {
            // 2.E.
            let segment_start = usize::from(input.starts_with('/'));
            let segment_end = find(&input.as_bytes()[segment_start..], b'/')
                .map_or(input.len(), |pos| segment_start + pos);
            output.push_str(&input[..segment_end]);
            input = &input[segment_end..];
        }
    }

    output
}

/// Removes the last segment and its preceding slash (if any) from the output buffer.
fn pop_last_segment(output: &mut String) {
    match rfind(output.as_bytes(), b'/') {
        Some(slash_pos) => output.truncate(slash_pos),
        None => output.clear(),
    }
}

/// Merges a relative-path reference with the path of the base IRI.
///
/// This is the algorithm of [RFC 3986 section 5.2.3], where an empty `base_path`
/// stands for an absent one. The result is not dot-segment-free.
///
/// # Examples
///
/// ```
/// use nose_iri::normalize::merge_paths;
///
/// assert_eq!(merge_paths("/b/c/d;p", "g"), "/b/c/g");
/// assert_eq!(merge_paths("/b/c/", "../g"), "/b/c/../g");
/// assert_eq!(merge_paths("", "g"), "/g");
/// ```
///
/// [RFC 3986 section 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3
#[must_use]
pub fn merge_paths(base_path: &str, rel_path: &str) -> String {
    let mut merged = String::with_capacity(base_path.len() + rel_path.len() + 1);
    match rfind(base_path.as_bytes(), b'/') {
        Some(last_slash_pos) => merged.push_str(&base_path[..=last_slash_pos]),
        // Both an empty base and a base without slashes are replaced by a single slash.
        None => merged.push('/'),
    }
    merged.push_str(rel_path);

    merged
}
