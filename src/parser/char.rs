//! Helpers for characters.

/// Checks if the given character matches `unreserved` rule.
///
/// ```text
/// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// ```
#[inline]
#[must_use]
pub(crate) fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Checks if the given byte can be the first character of `scheme` rule.
#[inline]
#[must_use]
pub(crate) fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if the given byte can be a non-first character of `scheme` rule.
///
/// ```text
/// scheme      = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
#[inline]
#[must_use]
pub(crate) fn is_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Returns the value of the given hexadecimal digit.
#[inline]
#[must_use]
pub(crate) fn hexdigit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
