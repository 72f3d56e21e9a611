//! Path segments.
//!
//! Conversion between an encoded `path-abempty` string and a sequence of
//! decoded segments.
//!
//! ```
//! use uri_resolve::segments::{decode_segments, encode_segments};
//!
//! let segments = decode_segments("/a%20b//c%2Fd/")?;
//! assert_eq!(segments, ["a b", "", "c/d", ""]);
//! assert_eq!(encode_segments(&segments)?, "/a%20b//c%2Fd/");
//! # Ok::<_, uri_resolve::Error>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::{Error, ErrorKind};
use crate::percent_encoding::{decode, PercentEncoded};

/// A value that can be used as a sequence of path segments.
///
/// Slices, arrays, and vectors of string-like values are sequences.
/// A single string is not a sequence: it would be ambiguous whether it is a
/// single segment or an already joined path.
pub trait AsSegments {
    /// Segment type.
    type Segment: AsRef<str>;

    /// Returns the segments, or `None` if the value is not a sequence.
    fn as_segments(&self) -> Option<&[Self::Segment]>;
}

impl<S: AsRef<str>> AsSegments for [S] {
    type Segment = S;

    #[inline]
    fn as_segments(&self) -> Option<&[S]> {
        Some(self)
    }
}

impl<S: AsRef<str>, const N: usize> AsSegments for [S; N] {
    type Segment = S;

    #[inline]
    fn as_segments(&self) -> Option<&[S]> {
        Some(self)
    }
}

impl<S: AsRef<str>> AsSegments for Vec<S> {
    type Segment = S;

    #[inline]
    fn as_segments(&self) -> Option<&[S]> {
        Some(self)
    }
}

impl AsSegments for str {
    type Segment = &'static str;

    #[inline]
    fn as_segments(&self) -> Option<&[&'static str]> {
        None
    }
}

impl AsSegments for String {
    type Segment = &'static str;

    #[inline]
    fn as_segments(&self) -> Option<&[&'static str]> {
        None
    }
}

/// Decodes the `path-abempty` string into segments.
///
/// The path must be empty or start with a slash. The empty string before the
/// leading slash is not a segment, but all other empty segments are kept.
///
/// # Failures
///
/// * [`ErrorKind::InvalidPath`] if the path is not empty and does not start
///   with a slash.
/// * [`ErrorKind::MalformedEscape`] if a segment is not correctly
///   percent-encoded.
///
/// # Examples
///
/// ```
/// use uri_resolve::segments::decode_segments;
///
/// assert_eq!(decode_segments("")?, Vec::<String>::new());
/// assert_eq!(decode_segments("/")?, [""]);
/// assert_eq!(decode_segments("/a/b/")?, ["a", "b", ""]);
/// assert_eq!(decode_segments(" /a").unwrap_err().to_string(), "path-abempty expected");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn decode_segments(encoded_path: &str) -> Result<Vec<String>, Error> {
    if encoded_path.is_empty() {
        return Ok(Vec::new());
    }
    let rest = encoded_path
        .strip_prefix('/')
        .ok_or_else(|| Error::new(ErrorKind::InvalidPath, "path-abempty expected"))?;
    rest.split('/').map(decode).collect()
}

/// Encodes the segments into a `path-abempty` string.
///
/// Each segment is percent-encoded (including slashes in it), and segments
/// are joined with slashes following a leading slash.
/// An empty sequence is encoded as `/`, same as a single empty segment.
///
/// # Failures
///
/// [`ErrorKind::InvalidArgument`] if the argument is not a sequence.
///
/// # Examples
///
/// ```
/// use uri_resolve::segments::encode_segments;
///
/// assert_eq!(encode_segments(&["a", "b c"])?, "/a/b%20c");
/// assert_eq!(encode_segments(&vec![String::new()])?, "/");
/// assert_eq!(encode_segments(&[] as &[&str])?, "/");
/// assert_eq!(
///     encode_segments("not a sequence").unwrap_err().to_string(),
///     "array of segments expected"
/// );
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn encode_segments<T: AsSegments + ?Sized>(segments: &T) -> Result<String, Error> {
    let segments = segments
        .as_segments()
        .ok_or_else(|| Error::new(ErrorKind::InvalidArgument, "array of segments expected"))?;

    let mut buf = String::from("/");
    for (i, segment) in segments.iter().enumerate() {
        if i != 0 {
            buf.push('/');
        }
        write!(buf, "{}", PercentEncoded::new(segment.as_ref()))
            .expect("[validity] writing to `String` should never fail");
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::borrow::ToOwned;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn decode_keeps_empty_segments() {
        assert_eq!(decode_segments("//").expect("valid"), ["", ""]);
        assert_eq!(decode_segments("/a//b").expect("valid"), ["a", "", "b"]);
    }

    #[test]
    fn decode_rejects_relative_path() {
        for path in [" /a", "a", "a/b", ".", "%2Fa"] {
            let err = decode_segments(path).expect_err("should fail");
            assert_eq!(err.kind(), ErrorKind::InvalidPath);
            assert_eq!(err.to_string(), "path-abempty expected");
        }
    }

    #[test]
    fn decode_malformed_segment() {
        let err = decode_segments("/a/%G0").expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::MalformedEscape);
    }

    #[test]
    fn encode_sequences() {
        assert_eq!(encode_segments(&[] as &[&str]).as_deref(), Ok("/"));
        assert_eq!(encode_segments(&[""]).as_deref(), Ok("/"));
        assert_eq!(encode_segments(&["a"]).as_deref(), Ok("/a"));
        assert_eq!(encode_segments(&["", ""]).as_deref(), Ok("//"));
        assert_eq!(
            encode_segments(&vec!["a/b".to_owned(), "\u{00E9}".to_owned()]).as_deref(),
            Ok("/a%2Fb/%C3%A9")
        );
    }

    #[test]
    fn encode_rejects_non_sequence() {
        let err = encode_segments("not a sequence").expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "array of segments expected");

        let err = encode_segments(&"/a/b".to_owned()).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn roundtrip() {
        for path in ["/", "/a", "/a/b/", "/%20%2F//x"] {
            let segments = decode_segments(path).expect("valid");
            assert_eq!(encode_segments(&segments).as_deref(), Ok(path));
        }
        // The empty path has no segments, and no segments are encoded as `/`.
        let segments = decode_segments("").expect("valid");
        assert!(segments.is_empty());
        assert_eq!(encode_segments(&segments).as_deref(), Ok("/"));
    }
}
