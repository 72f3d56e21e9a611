//! Decomposition, codec, and resolution error.

use core::fmt;

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The string does not match the generic URI syntax.
    Syntax,
    /// Invalid percent-encoded triplet, or decoded bytes are not valid UTF-8.
    MalformedEscape,
    /// The path does not match `path-abempty` rule.
    InvalidPath,
    /// The argument has unexpected shape.
    InvalidArgument,
    /// `authority` is inconsistent with `userinfo`, `host`, and `port`.
    AuthorityInvariant,
    /// `userinfo` or `port` is given without `host`.
    MissingHost,
    /// The base of the resolution has no scheme.
    MissingScheme,
}

/// An error of URI reference handling.
///
/// The message returned by `Display` is stable and can be compared by callers.
///
/// ```
/// use uri_resolve::segments::decode_segments;
/// use uri_resolve::ErrorKind;
///
/// let err = decode_segments("a/b").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidPath);
/// assert_eq!(err.to_string(), "path-abempty expected");
/// ```
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Human readable message.
    message: &'static str,
}

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub(crate) const fn syntax(message: &'static str) -> Self {
        Self::new(ErrorKind::Syntax, message)
    }

    /// Creates a malformed percent-encoding error.
    #[inline]
    #[must_use]
    pub(crate) const fn malformed_escape(message: &'static str) -> Self {
        Self::new(ErrorKind::MalformedEscape, message)
    }

    /// Creates an authority invariant violation error.
    #[inline]
    #[must_use]
    pub(crate) const fn authority_invariant() -> Self {
        Self::new(
            ErrorKind::AuthorityInvariant,
            "authority is inconsistent with userinfo, host, and port",
        )
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    ///
    /// This is what `Display` prints.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
