//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use alloc::string::String;

use crate::parser::str::{find, rfind};

/// Removes `.` and `..` segments from the path.
///
/// The input buffer is consumed from left to right, and the output buffer
/// receives the segments which survive.
///
/// # Examples
///
/// ```
/// use uri_resolve::normalize::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// // `..` never goes beyond the root.
/// assert_eq!(remove_dot_segments("/../../g"), "/g");
/// // Empty segments are kept.
/// assert_eq!(remove_dot_segments("/a//../b/"), "/a/b/");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input
            .strip_prefix("../")
            .or_else(|| input.strip_prefix("./"))
        {
            // 2.A.
            input = rest;
        } else if input.starts_with("/./") {
            // 2.B ("/./").
            input = &input[2..];
        } else if input == "/." {
            // 2.B ("/.").
            input = "/";
        } else if input.starts_with("/../") {
            // 2.C ("/../").
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            // 2.C ("/..").
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // 2.D.
            input = "";
        } else {
            // 2.E.
            // The first slash (if any) belongs to the segment to be moved.
            let seg_end = match find(&input.as_bytes()[1..], b'/') {
                Some(pos) => pos + 1,
                None => input.len(),
            };
            output.push_str(&input[..seg_end]);
            input = &input[seg_end..];
        }
    }

    output
}

/// Removes the last segment and its preceding slash (if any) from the output buffer.
///
/// If the buffer has no slash, it becomes empty.
fn pop_last_segment(output: &mut String) {
    let new_len = rfind(output.as_bytes(), b'/').unwrap_or(0);
    output.truncate(new_len);
}
