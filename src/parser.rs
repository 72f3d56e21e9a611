//! Parser.
//!
//! The parser decomposes a URI reference by the rule below (RFC 3986
//! section 4.1, with `hier-part` and `relative-part` merged):
//!
//! ```text
//! URI-reference = [ scheme ":" ] [ "//" authority ] path [ "?" query ] [ "#" fragment ]
//! authority     = [ userinfo "@" ] host [ ":" port ]
//! ```
//!
//! Each step eats a prefix of the input and returns the rest, and the whole
//! input must be consumed by the steps.
//! Characters inside path, query, and fragment are not validated; only the
//! delimiters decide the decomposition.

pub(crate) mod authority;
pub(crate) mod char;
pub(crate) mod str;

use crate::error::Error;

use self::authority::{decompose_authority, AuthorityComponents};
use self::char::{is_scheme_continue, is_scheme_start};
use self::str::{find_split3, find_split_hole};

/// Borrowed components of a URI reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some` with an empty authority string.
    pub(crate) authority: Option<AuthorityComponents<'a>>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
///
/// A colon before any of `/`, `?`, and `#` must terminate a valid scheme, since
/// the first segment of `path-noscheme` cannot contain a colon.
fn scheme_colon_opt(i: &str) -> Result<(&str, Option<&str>), Error> {
    let bytes = i.as_bytes();
    let colon_pos = match bytes
        .iter()
        .position(|&b| matches!(b, b':' | b'/' | b'?' | b'#'))
    {
        Some(pos) if bytes[pos] == b':' => pos,
        _ => return Ok((i, None)),
    };
    let scheme = &i[..colon_pos];
    let valid = match scheme.as_bytes().split_first() {
        Some((&first, rest)) => is_scheme_start(first) && rest.iter().all(|&b| is_scheme_continue(b)),
        None => false,
    };
    if !valid {
        return Err(Error::syntax(
            "colon in the first path segment of a reference without valid scheme",
        ));
    }
    Ok((&i[(colon_pos + 1)..], Some(scheme)))
}

/// Eats double slash and the following authority if available, and returns the authority.
fn slash_slash_authority_opt(i: &str) -> Result<(&str, Option<AuthorityComponents<'_>>), Error> {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return Ok((i, None)),
    };
    // A slash, question mark, and hash character won't appear in `authority`.
    let (authority, rest) = find_split3(s, b'/', b'?', b'#').unwrap_or((s, ""));
    Ok((rest, Some(decompose_authority(authority)?)))
}

/// Eats a path, and returns the rest and the path.
#[must_use]
fn path(i: &str) -> (&str, &str) {
    // `?` and `#` won't appear in the path.
    match i.as_bytes().iter().position(|&b| b == b'?' || b == b'#') {
        Some(pos) => (&i[pos..], &i[..pos]),
        None => ("", i),
    }
}

/// Eats a `?` and the following query if available, and returns the rest and the query.
#[must_use]
fn question_query_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix('?') {
        Some(rest) => rest,
        None => return (i, None),
    };
    match s.as_bytes().iter().position(|&b| b == b'#') {
        Some(pos) => (&s[pos..], Some(&s[..pos])),
        None => ("", Some(s)),
    }
}

/// Eats a `#` and the following fragment if available, and returns the rest and the fragment.
///
/// The fragment extends to the end of the input.
#[must_use]
fn hash_fragment_opt(i: &str) -> (&str, Option<&str>) {
    match find_split_hole(i, b'#') {
        Some(("", fragment)) => ("", Some(fragment)),
        _ => (i, None),
    }
}

/// Decomposes the given URI reference.
///
/// The whole input should be consumed. Otherwise, an error is returned.
pub(crate) fn decompose(i: &str) -> Result<RawComponents<'_>, Error> {
    let (i, scheme) = scheme_colon_opt(i)?;
    let (i, authority) = slash_slash_authority_opt(i)?;
    let (i, path) = path(i);
    let (i, query) = question_query_opt(i);
    let (i, fragment) = hash_fragment_opt(i);
    if !i.is_empty() {
        return Err(Error::syntax("unexpected trailing characters"));
    }

    Ok(RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ErrorKind;

    /// Decomposes the string into `(scheme, authority, path, query, fragment)`.
    fn parts(s: &str) -> (Option<&str>, Option<&str>, &str, Option<&str>, Option<&str>) {
        let c = decompose(s).expect("should be decomposable");
        (
            c.scheme,
            c.authority.map(|a| a.authority),
            c.path,
            c.query,
            c.fragment,
        )
    }

    #[test]
    fn absolute_slashes() {
        assert_eq!(parts("scheme:"), (Some("scheme"), None, "", None, None));
        assert_eq!(parts("scheme:/"), (Some("scheme"), None, "/", None, None));
        assert_eq!(parts("scheme://"), (Some("scheme"), Some(""), "", None, None));
        assert_eq!(parts("scheme:///"), (Some("scheme"), Some(""), "/", None, None));
        assert_eq!(parts("scheme:////"), (Some("scheme"), Some(""), "//", None, None));
        assert_eq!(parts("scheme://///"), (Some("scheme"), Some(""), "///", None, None));
    }

    #[test]
    fn relative_slashes() {
        assert_eq!(parts(""), (None, None, "", None, None));
        assert_eq!(parts("/"), (None, None, "/", None, None));
        assert_eq!(parts("//"), (None, Some(""), "", None, None));
        assert_eq!(parts("///"), (None, Some(""), "/", None, None));
        assert_eq!(parts("////"), (None, Some(""), "//", None, None));
    }

    #[test]
    fn query_and_fragment() {
        assert_eq!(parts("?"), (None, None, "", Some(""), None));
        assert_eq!(parts("#"), (None, None, "", None, Some("")));
        assert_eq!(parts("?#"), (None, None, "", Some(""), Some("")));
        assert_eq!(parts("a?b?c#d#e"), (None, None, "a", Some("b?c"), Some("d#e")));
        assert_eq!(parts("a#b?c"), (None, None, "a", None, Some("b?c")));
        assert_eq!(parts("//h#/p"), (None, Some("h"), "", None, Some("/p")));
    }

    #[test]
    fn colon_after_delimiter_is_not_scheme() {
        assert_eq!(parts("a/b:c"), (None, None, "a/b:c", None, None));
        assert_eq!(parts("?a:b"), (None, None, "", Some("a:b"), None));
        assert_eq!(parts("#a:b"), (None, None, "", None, Some("a:b")));
        assert_eq!(parts("g:h"), (Some("g"), None, "h", None, None));
    }

    #[test]
    fn invalid_scheme() {
        for s in [":", ":foo", "1a:b", "a b:c", "-x:y"] {
            let err = decompose(s).expect_err("should not be decomposable");
            assert_eq!(err.kind(), ErrorKind::Syntax, "input={s:?}");
        }
    }
}
