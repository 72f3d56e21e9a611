//! Query strings as ordered multimaps.
//!
//! A query is split into pairs by `&`, and each pair is split into a key and a
//! value at the first `=`. A pair without `=` has no value, which is different
//! from an empty value.
//!
//! ```
//! use uri_resolve::query::{parse_query, recompose_query};
//!
//! let map = parse_query(Some("tag=a&tag=b%20c&flag"), true)?.expect("query is given");
//! assert_eq!(map.get_all("tag").collect::<Vec<_>>(), [Some("a"), Some("b c")]);
//! assert_eq!(map.get("flag"), Some(None));
//! assert_eq!(recompose_query(&map, true), "tag=a&tag=b%20c&flag");
//! # Ok::<_, uri_resolve::Error>(())
//! ```

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::Error;
use crate::parser::str::find_split_hole;
use crate::percent_encoding::{decode, PercentEncoded};

/// Ordered key-value pairs of a query.
///
/// Keys may repeat, and the order of pairs is preserved.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryMultimap {
    /// Pairs.
    pairs: Vec<(String, Option<String>)>,
}

impl QueryMultimap {
    /// Creates an empty multimap.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair.
    #[inline]
    pub fn push(&mut self, key: String, value: Option<String>) {
        self.pairs.push((key, value));
    }

    /// Returns the number of pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator of the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Returns an iterator of all values for the key, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.iter().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns the first value for the key.
    ///
    /// Returns `None` if the key is absent, and `Some(None)` if the first pair
    /// with the key has no value.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> Option<Option<&'a str>> {
        self.get_all(key).next()
    }

    /// Returns the pairs as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[(String, Option<String>)] {
        &self.pairs
    }
}

impl FromIterator<(String, Option<String>)> for QueryMultimap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(String, Option<String>)>> for QueryMultimap {
    #[inline]
    fn from(pairs: Vec<(String, Option<String>)>) -> Self {
        Self { pairs }
    }
}

/// Splits the query into raw `(key, value)` pairs.
///
/// The query should not be empty: an empty query has no pairs, while this
/// returns one pair with an empty key.
pub(crate) fn split_pairs(query: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    query.split('&').map(|pair| match find_split_hole(pair, b'=') {
        Some((key, value)) => (key, Some(value)),
        None => (pair, None),
    })
}

/// Parses the query into a multimap.
///
/// Returns `Ok(None)` if the query is `None`, and an empty multimap if the
/// query is empty. If `decode` is `true`, keys and values are percent-decoded.
///
/// # Failures
///
/// [`ErrorKind::MalformedEscape`][`crate::ErrorKind::MalformedEscape`] if
/// `decode` is `true` and a key or a value is not correctly percent-encoded.
///
/// # Examples
///
/// ```
/// use uri_resolve::query::parse_query;
///
/// assert_eq!(parse_query(None, true)?, None);
/// assert!(parse_query(Some(""), true)?.expect("query is given").is_empty());
///
/// let map = parse_query(Some("a=1=2&b="), false)?.expect("query is given");
/// assert_eq!(map.iter().collect::<Vec<_>>(), [("a", Some("1=2")), ("b", Some(""))]);
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn parse_query(query: Option<&str>, decode: bool) -> Result<Option<QueryMultimap>, Error> {
    let query = match query {
        Some(query) => query,
        None => return Ok(None),
    };
    if query.is_empty() {
        return Ok(Some(QueryMultimap::new()));
    }

    let convert = |s: &str| -> Result<String, Error> {
        if decode {
            self::decode(s)
        } else {
            Ok(s.to_owned())
        }
    };
    split_pairs(query)
        .map(|(key, value)| -> Result<_, Error> {
            Ok((convert(key)?, value.map(&convert).transpose()?))
        })
        .collect::<Result<QueryMultimap, Error>>()
        .map(Some)
}

/// Recomposes the multimap into a query string.
///
/// Pairs are joined with `&` in order. A pair without value is written as its
/// key only. If `encode` is `true`, keys and values are percent-encoded.
///
/// # Examples
///
/// ```
/// use uri_resolve::query::{recompose_query, QueryMultimap};
///
/// let mut map = QueryMultimap::new();
/// map.push("q".to_owned(), Some("a&b".to_owned()));
/// map.push("lang".to_owned(), Some("ja".to_owned()));
/// assert_eq!(recompose_query(&map, true), "q=a%26b&lang=ja");
/// assert_eq!(recompose_query(&map, false), "q=a&b&lang=ja");
/// ```
#[must_use]
pub fn recompose_query(map: &QueryMultimap, encode: bool) -> String {
    let mut buf = String::new();
    let push = |buf: &mut String, s: &str| {
        if encode {
            write!(buf, "{}", PercentEncoded::new(s))
                .expect("[validity] writing to `String` should never fail");
        } else {
            buf.push_str(s);
        }
    };
    for (i, (key, value)) in map.iter().enumerate() {
        if i != 0 {
            buf.push('&');
        }
        push(&mut buf, key);
        if let Some(value) = value {
            buf.push('=');
            push(&mut buf, value);
        }
    }
    buf
}
