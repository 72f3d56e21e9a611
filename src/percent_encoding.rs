//! Percent encoding.
//!
//! Encoding is done per UTF-8 byte: every code point except `unreserved`
//! characters is written as one `%XX` triplet for each byte of its UTF-8
//! representation. Hexadecimal digits are written in uppercase.
//!
//! ```
//! use uri_resolve::percent_encoding::{decode, encode};
//!
//! assert_eq!(encode("alpha/\u{03B1}"), "alpha%2F%CE%B1");
//! assert_eq!(decode("alpha%2F%CE%B1")?, "alpha/\u{03B1}");
//! # Ok::<_, uri_resolve::Error>(())
//! ```

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::error::Error;
use crate::parser::char::{hexdigit_value, is_unreserved};
use crate::parser::str::find;

/// A proxy to percent-encode a string.
///
/// The raw value is encoded lazily when it is formatted, so it can be written
/// to any [`fmt::Write`] without an intermediate buffer.
///
/// # Examples
///
/// ```
/// use uri_resolve::percent_encoding::PercentEncoded;
///
/// let encoded = PercentEncoded::new("a b&c=\u{00E9}");
/// assert_eq!(encoded.to_string(), "a%20b%26c%3D%C3%A9");
///
/// // Any `Display` value can be encoded.
/// assert_eq!(PercentEncoded::new(-1.5).to_string(), "-1.5");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Raw value before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates an encoded string from a raw value.
    #[inline]
    #[must_use]
    pub fn new(raw: T) -> Self {
        Self { raw }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a string and writes it to the formatter.
        struct Filter<'a, 'b> {
            /// Destination.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                let mut rest = s;
                while !rest.is_empty() {
                    // Write the longest unreserved prefix at once.
                    let unreserved_len = rest
                        .find(|c: char| !is_unreserved(c))
                        .unwrap_or(rest.len());
                    let (unreserved, after) = rest.split_at(unreserved_len);
                    self.writer.write_str(unreserved)?;

                    let c = match after.chars().next() {
                        Some(c) => c,
                        None => break,
                    };
                    let mut buf = [0_u8; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        write!(self.writer, "%{:02X}", byte)?;
                    }
                    rest = &after[c.len_utf8()..];
                }
                Ok(())
            }
        }

        write!(Filter { writer: f }, "{}", self.raw)
    }
}

/// Percent-encodes the given string.
///
/// See [the module documentation][`self`] for detail.
#[must_use]
pub fn encode(value: &str) -> String {
    PercentEncoded::new(value).to_string()
}

/// Decodes the percent-encoded string.
///
/// # Failures
///
/// [`ErrorKind::MalformedEscape`][`crate::ErrorKind::MalformedEscape`] if a
/// `%` is not followed by two hexadecimal digits, or if the decoded bytes are
/// not valid UTF-8.
///
/// # Examples
///
/// ```
/// use uri_resolve::percent_encoding::decode;
/// use uri_resolve::ErrorKind;
///
/// assert_eq!(decode("%e3%81%82+%41")?, "\u{3042}+A");
/// assert_eq!(decode("%4").unwrap_err().kind(), ErrorKind::MalformedEscape);
/// assert_eq!(decode("%FF").unwrap_err().kind(), ErrorKind::MalformedEscape);
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn decode(value: &str) -> Result<String, Error> {
    if find(value.as_bytes(), b'%').is_none() {
        return Ok(value.to_owned());
    }

    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            decoded.push(b);
            i += 1;
            continue;
        }
        let upper = bytes.get(i + 1).copied().and_then(hexdigit_value);
        let lower = bytes.get(i + 2).copied().and_then(hexdigit_value);
        match (upper, lower) {
            (Some(upper), Some(lower)) => decoded.push((upper << 4) | lower),
            _ => {
                return Err(Error::malformed_escape(
                    "`%` must be followed by two hexadecimal digits",
                ))
            }
        }
        i += 3;
    }

    String::from_utf8(decoded)
        .map_err(|_| Error::malformed_escape("percent-decoded bytes are not valid UTF-8"))
}
