//! Reference resolution.
//!
//! Implements the reference resolution algorithm described in
//! [RFC 3986 section 5.2], in the strict mode (i.e. a reference with the
//! same scheme as the base is not treated as relative).
//!
//! # Resolution can fail on recomposition
//!
//! Though this is not explicitly stated in RFC 3986, the result of the
//! resolution cannot always be written as a string. Below are examples:
//!
//! * base=`scheme:`, ref=`.///bar`.
//!     + Resulting URI should have scheme `scheme` and path `//bar`, but does not have authority.
//! * base=`scheme:foo/bar`, ref=`..//baz`.
//!     + Resulting URI should have scheme `scheme` and path `//baz`, but does not have authority.
//!
//! A URI without authority (note that this is different from "with empty
//! authority") cannot have a path starting with `//`, since it would be
//! interpreted as a URI with authority.
//! [`resolve`] returns such components as is, and
//! [`recompose_components`][`crate::components::recompose_components`]
//! reports them as an error.
//!
//! # Examples
//!
//! ```
//! use uri_resolve::resolve::resolve_str;
//!
//! let base = "http://a/b/c/d;p?q";
//! assert_eq!(resolve_str(base, "g")?, "http://a/b/c/g");
//! assert_eq!(resolve_str(base, "../../../g")?, "http://a/g");
//! assert_eq!(resolve_str(base, "")?, "http://a/b/c/d;p?q");
//! assert_eq!(resolve_str(base, "#s")?, "http://a/b/c/d;p?q#s");
//! # Ok::<_, uri_resolve::Error>(())
//! ```
//!
//! [RFC 3986 section 5.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2


use alloc::string::String;

use crate::components::{decompose_components, recompose_components, DecomposedUri};
use crate::error::{Error, ErrorKind};
use crate::normalize::remove_dot_segments;
use crate::parser::str::rfind;

/// Returns the error for a base without scheme.
#[inline]
#[must_use]
fn missing_scheme() -> Error {
    Error::new(
        ErrorKind::MissingScheme,
        "Violation 5.2.1, scheme component required",
    )
}

/// A resolver against the fixed base.
///
/// # Examples
///
/// ```
/// use uri_resolve::resolve::Resolver;
///
/// let resolver = Resolver::new("http://example.com/base/".parse()?)?;
/// assert_eq!(resolver.resolve_str("../there")?, "http://example.com/there");
/// assert_eq!(resolver.resolve_str("here?q")?, "http://example.com/base/here?q");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    /// Components of the base URI.
    base: DecomposedUri,
}

impl Resolver {
    /// Creates a new resolver with the given base.
    ///
    /// # Failures
    ///
    /// [`ErrorKind::MissingScheme`] if the base has no scheme.
    pub fn new(base: DecomposedUri) -> Result<Self, Error> {
        if base.scheme.is_none() {
            return Err(missing_scheme());
        }
        Ok(Self { base })
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &DecomposedUri {
        &self.base
    }

    /// Resolves the given reference against the fixed base.
    #[must_use]
    pub fn resolve(&self, reference: &DecomposedUri) -> DecomposedUri {
        resolve_components(&self.base, reference)
    }

    /// Resolves the given reference string against the fixed base, and
    /// returns the recomposed result.
    pub fn resolve_str(&self, reference: &str) -> Result<String, Error> {
        let reference = decompose_components(reference)?;
        recompose_components(&self.resolve(&reference))
    }
}

/// Merges the reference path to the base path.
///
/// See [RFC 3986 section 5.2.3].
///
/// If the base has an authority and an empty path, the result is the
/// reference path with a slash prepended. Otherwise, the last segment of the
/// base path is replaced by the reference path (everything is replaced when
/// the base path has no slash).
///
/// # Examples
///
/// ```
/// use uri_resolve::resolve::merge;
/// use uri_resolve::DecomposedUri;
///
/// let base: DecomposedUri = "http://a/b/c/d;p?q".parse()?;
/// assert_eq!(merge(&base, "g"), "/b/c/g");
///
/// let base: DecomposedUri = "http://a".parse()?;
/// assert_eq!(merge(&base, "g"), "/g");
///
/// let base: DecomposedUri = "scheme:d;p".parse()?;
/// assert_eq!(merge(&base, "g"), "g");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
///
/// [RFC 3986 section 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3
#[must_use]
pub fn merge(base: &DecomposedUri, ref_path: &str) -> String {
    let prefix = if base.has_authority() && base.path.is_empty() {
        "/"
    } else {
        // The prefix is empty if there is no slash.
        let prefix_len = rfind(base.path.as_bytes(), b'/').map_or(0, |pos| pos + 1);
        &base.path[..prefix_len]
    };

    let mut merged = String::with_capacity(prefix.len() + ref_path.len());
    merged.push_str(prefix);
    merged.push_str(ref_path);
    merged
}

/// Resolves the reference against the base.
///
/// See [RFC 3986 section 5.2.2].
///
/// The resulting path has no dot segments, unless it is taken from the base
/// as is (i.e. the reference has no authority and an empty path).
/// The authority is always taken together with its sub-components.
///
/// # Failures
///
/// [`ErrorKind::MissingScheme`] if the base has no scheme.
/// To resolve against a base without scheme, use [`resolve_network_path`].
///
/// # Examples
///
/// ```
/// use uri_resolve::resolve::resolve;
/// use uri_resolve::{DecomposedUri, ErrorKind};
///
/// let base: DecomposedUri = "http://user@a:80/b/c/d;p?q".parse()?;
/// let resolved = resolve(&base, &"../g#s".parse()?)?;
/// assert_eq!(resolved.host.as_deref(), Some("a"));
/// assert_eq!(resolved.userinfo.as_deref(), Some("user"));
/// assert_eq!(resolved.path, "/b/g");
/// assert_eq!(resolved.query, None);
/// assert_eq!(resolved.fragment.as_deref(), Some("s"));
///
/// let scheme_less: DecomposedUri = "//a/b".parse()?;
/// let err = resolve(&scheme_less, &"g".parse()?).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingScheme);
/// assert_eq!(err.to_string(), "Violation 5.2.1, scheme component required");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
///
/// [RFC 3986 section 5.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2
pub fn resolve(base: &DecomposedUri, reference: &DecomposedUri) -> Result<DecomposedUri, Error> {
    if base.scheme.is_none() {
        return Err(missing_scheme());
    }
    Ok(resolve_components(base, reference))
}

/// Resolves the reference against the base which may lack a scheme.
///
/// This is intended for resolution in the context of a network-path
/// reference (such as `//example.com/a/b`). It behaves as if the base had a
/// placeholder scheme, which is then stripped from the result: the result has
/// a scheme only if the base or the reference has one.
///
/// If the base has a scheme, this is same as [`resolve`].
///
/// # Examples
///
/// ```
/// use uri_resolve::resolve::resolve_network_path;
/// use uri_resolve::DecomposedUri;
///
/// let base: DecomposedUri = "//example.com/a/b".parse()?;
/// let resolved = resolve_network_path(&base, &"../c?q".parse()?);
/// assert_eq!(resolved.recompose()?, "//example.com/c?q");
///
/// let resolved = resolve_network_path(&base, &"https:x".parse()?);
/// assert_eq!(resolved.recompose()?, "https:x");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
#[must_use]
pub fn resolve_network_path(base: &DecomposedUri, reference: &DecomposedUri) -> DecomposedUri {
    // No branch of the algorithm looks into the base scheme other than
    // copying it, so an absent scheme stands for the stripped placeholder.
    resolve_components(base, reference)
}

/// Resolves the reference string against the base string, and returns the
/// recomposed result.
///
/// # Failures
///
/// * Decomposition errors of the base and the reference.
/// * [`ErrorKind::MissingScheme`] if the base has no scheme.
/// * Recomposition errors of the result.
///   See [the module documentation][`self`].
pub fn resolve_str(base: &str, reference: &str) -> Result<String, Error> {
    let base = decompose_components(base)?;
    let reference = decompose_components(reference)?;
    recompose_components(&resolve(&base, &reference)?)
}

/// Runs the reference resolution algorithm.
///
/// The base scheme is only copied, never inspected.
// Same structure as the pseudocode in RFC 3986 section 5.2.2.
#[allow(clippy::collapsible_else_if)]
fn resolve_components(base: &DecomposedUri, reference: &DecomposedUri) -> DecomposedUri {
    let mut target = DecomposedUri::default();

    if reference.scheme.is_some() {
        target.scheme = reference.scheme.clone();
        target.set_authority_from(reference);
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else {
        if reference.has_authority() {
            target.set_authority_from(reference);
            target.path = remove_dot_segments(&reference.path);
            target.query = reference.query.clone();
        } else {
            if reference.path.is_empty() {
                target.path = base.path.clone();
                target.query = reference.query.clone().or_else(|| base.query.clone());
            } else {
                target.path = if reference.path.starts_with('/') {
                    remove_dot_segments(&reference.path)
                } else {
                    remove_dot_segments(&merge(base, &reference.path))
                };
                target.query = reference.query.clone();
            }
            target.set_authority_from(base);
        }
        target.scheme = base.scheme.clone();
    }
    target.fragment = reference.fragment.clone();

    target
}
