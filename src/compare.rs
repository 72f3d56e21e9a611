//! Comparison of URI references.
//!
//! `PartialEq` of [`DecomposedUri`] is simple component-wise string
//! comparison. The functions in this module compare references more
//! loosely:
//!
//! * [`equals`] compares references after syntax-based normalization.
//! * [`equals_query_str`] compares queries as multisets of pairs.
//! * [`is_subordinate`] checks whether a reference is under another.

use alloc::vec::Vec;

use crate::components::{decompose_components, DecomposedUri};
use crate::error::Error;
use crate::normalize::normalize;
use crate::query::split_pairs;

/// Compares two URI references.
///
/// Schemes, authorities, and paths are compared after the syntax-based
/// normalization (see [`normalize`]). Queries are compared as exact strings.
/// Fragments are compared as exact strings unless `ignore_fragment` is `true`.
///
/// # Failures
///
/// Returns an error if any of the strings cannot be decomposed.
///
/// # Examples
///
/// ```
/// use uri_resolve::compare::equals;
///
/// assert!(equals("HTTP://a.com/x/../y", "http://A.com/y", false)?);
/// assert!(!equals("http://a.com#foo", "http://a.com#bar", false)?);
/// assert!(equals("http://a.com#foo", "http://a.com#bar", true)?);
/// assert!(!equals("http://a.com/?a=1&b=2", "http://a.com/?b=2&a=1", false)?);
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn equals(a: &str, b: &str, ignore_fragment: bool) -> Result<bool, Error> {
    let a_raw = decompose_components(a)?;
    let b_raw = decompose_components(b)?;
    let a = normalize(&a_raw)?;
    let b = normalize(&b_raw)?;

    Ok(a.scheme == b.scheme
        && a.authority == b.authority
        && a.path == b.path
        && a_raw.query == b_raw.query
        && (ignore_fragment || a_raw.fragment == b_raw.fragment))
}

/// A query value, which may be absent in two different ways.
///
/// `Undefined` and `Null` are both absent, but they are distinct from each
/// other and from an empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryArg<'a> {
    /// The query is not specified at all.
    Undefined,
    /// The query is explicitly specified as nothing.
    Null,
    /// The query string (without the leading `?`).
    Str(&'a str),
}

impl<'a> From<&'a str> for QueryArg<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<Option<&'a str>> for QueryArg<'a> {
    /// Converts `None` into [`QueryArg::Null`].
    #[inline]
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Self::Null, Self::Str)
    }
}

/// Compares two queries as multisets of key-value pairs.
///
/// Absent queries are equal only to the same kind of absent queries.
/// Present queries are equal if they have the same set of keys, and each key
/// has the same values regardless of the order. The number of values matters:
/// `a=1&a=1` is different from `a=1`.
///
/// Keys and values are compared without percent-decoding.
///
/// # Examples
///
/// ```
/// use uri_resolve::compare::{equals_query_str, QueryArg};
///
/// assert!(equals_query_str("a=1&a=2&a=3", "a=3&a=2&a=1"));
/// assert!(equals_query_str("a=1&b=2", "b=2&a=1"));
/// assert!(!equals_query_str("a=1&a=2", "a=1"));
/// assert!(!equals_query_str(QueryArg::Undefined, QueryArg::Null));
/// assert!(equals_query_str(None::<&str>, QueryArg::Null));
/// assert!(!equals_query_str(None::<&str>, ""));
/// ```
#[must_use]
pub fn equals_query_str<'a, 'b>(q1: impl Into<QueryArg<'a>>, q2: impl Into<QueryArg<'b>>) -> bool {
    match (q1.into(), q2.into()) {
        (QueryArg::Undefined, QueryArg::Undefined) | (QueryArg::Null, QueryArg::Null) => true,
        (QueryArg::Str(q1), QueryArg::Str(q2)) => sorted_pairs(q1) == sorted_pairs(q2),
        _ => false,
    }
}

/// Returns the pairs of the query sorted by key and then by value.
///
/// Two queries have the same keys and the same per-key value multisets if and
/// only if their sorted pairs are equal.
fn sorted_pairs(query: &str) -> Vec<(&str, Option<&str>)> {
    let mut pairs: Vec<_> = if query.is_empty() {
        Vec::new()
    } else {
        split_pairs(query).collect()
    };
    pairs.sort_unstable();
    pairs
}

/// Checks whether `sub` is located under `parent`.
///
/// Returns `true` if all of the conditions below are satisfied:
///
/// * The schemes are the same (or both absent).
/// * If `parent` has an authority, `sub` has the same authority.
///   If `parent` has no authority, any authority of `sub` is accepted.
/// * The path of `sub` starts with the path of `parent`.
/// * `or_same` is `true`, or the paths have different lengths.
///
/// Paths are compared as plain strings, without normalization.
///
/// # Examples
///
/// ```
/// use uri_resolve::compare::is_subordinate;
/// use uri_resolve::DecomposedUri;
///
/// let sub: DecomposedUri = "//h/forum/questions/".parse()?;
/// let parent: DecomposedUri = "/forum/questions/".parse()?;
/// assert!(is_subordinate(&sub, &parent, true));
/// assert!(!is_subordinate(&sub, &parent, false));
///
/// let parent: DecomposedUri = "//other/forum/".parse()?;
/// assert!(!is_subordinate(&sub, &parent, true));
/// # Ok::<_, uri_resolve::Error>(())
/// ```
#[must_use]
pub fn is_subordinate(sub: &DecomposedUri, parent: &DecomposedUri, or_same: bool) -> bool {
    if sub.scheme != parent.scheme {
        return false;
    }
    if parent.authority.is_some() && sub.authority != parent.authority {
        return false;
    }
    sub.path.starts_with(parent.path.as_str()) && (or_same || sub.path.len() != parent.path.len())
}
