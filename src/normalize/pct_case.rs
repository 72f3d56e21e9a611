//! Percent-encoding normalization and case normalization.

use core::fmt::{self, Write as _};

use crate::parser::char::{hexdigit_value, is_unreserved};
use crate::parser::str::find_split_hole;

/// Writable as a percent-encoding normalized string.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode percent-encoded `unreserved` characters.
/// * Convert alphabetic characters uppercase in percent-encoded triplets.
///
/// A `%` not followed by two hexadecimal digits is written as is.
/// Note that this does not newly encode raw characters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a> {
    /// String to normalize.
    source: &'a str,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;

        while !rest.is_empty() {
            // Scan the next percent-encoded triplet.
            let (prefix, after_percent) = match find_split_hole(rest, b'%') {
                Some(v) => v,
                None => return f.write_str(rest),
            };
            // Write the string before the percent-encoded triplet.
            f.write_str(prefix)?;

            let bytes = after_percent.as_bytes();
            let decoded = match (
                bytes.first().copied().and_then(hexdigit_value),
                bytes.get(1).copied().and_then(hexdigit_value),
            ) {
                (Some(upper), Some(lower)) => (upper << 4) | lower,
                _ => {
                    // Not a triplet.
                    f.write_char('%')?;
                    rest = after_percent;
                    continue;
                }
            };
            rest = &after_percent[2..];

            let c = char::from(decoded);
            if decoded.is_ascii() && is_unreserved(c) {
                f.write_char(c)?;
            } else {
                write!(f, "%{:02X}", decoded)?;
            }
        }

        Ok(())
    }
}
