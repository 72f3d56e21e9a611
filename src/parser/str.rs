//! Functions for common string operations.

#[cfg(feature = "memchr")]
use memchr::{memchr, memchr3, memrchr};

/// Returns the position of the first occurrence of the given byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn memchr(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Returns the position of the first occurrence of any of the given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn memchr3(needle1: u8, needle2: u8, needle3: u8, haystack: &[u8]) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == needle1 || b == needle2 || b == needle3)
}

/// Returns the position of the last occurrence of the given byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn memrchr(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().rposition(|&b| b == needle)
}

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr(needle, haystack)
}

/// Returns the position of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    memrchr(needle, haystack)
}

/// Splits the string at the first occurrence of the given byte.
///
/// The needle is included in neither of the returned strings.
/// The needle must be an ASCII character.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii());
    let pos = memchr(needle, s.as_bytes())?;
    Some((&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of any of the given bytes.
///
/// The needle is included in the second string.
/// The needles must be ASCII characters.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii() && needle3.is_ascii());
    let pos = memchr3(needle1, needle2, needle3, s.as_bytes())?;
    Some(s.split_at(pos))
}
