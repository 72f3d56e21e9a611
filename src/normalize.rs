//! Normalization.
//!
//! # Path normalization
//!
//! [`remove_dot_segments`] implements the algorithm described in
//! [RFC 3986 section 5.2.4], and is used by the reference resolution.
//!
//! # Syntax-based normalization
//!
//! [`normalize`] applies the syntax-based normalization described in
//! [RFC 3986 section 6.2.2] to decomposed components:
//!
//! * Case normalization: the scheme and the host are lowercased, and
//!   hexadecimal digits of percent-encoded triplets are uppercased.
//! * Percent-encoding normalization: percent-encoded `unreserved` characters
//!   are decoded.
//! * Path segment normalization: dot segments are removed from the path, but
//!   only when it can be done without changing the meaning of the reference
//!   (i.e. the reference has a scheme, or the path is absolute).
//!
//! Scheme-based normalization (such as removal of the default port) is not
//! applied, since this crate has no knowledge about schemes.
//!
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4
//! [RFC 3986 section 6.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2

mod pct_case;
mod remove_dot_segments;

use alloc::string::{String, ToString};

use crate::components::{recompose_authority_components, DecomposedUri};
use crate::error::Error;

use self::pct_case::PctCaseNormalized;

pub use self::remove_dot_segments::remove_dot_segments;

/// Returns the percent-encoding and case normalized string.
#[inline]
#[must_use]
fn pct_case(s: &str) -> String {
    PctCaseNormalized::new(s).to_string()
}

/// Normalizes the path.
///
/// Dot segments are removed after percent-encoding normalization, so that
/// `%2E%2E` is also recognized as `..`.
#[must_use]
fn normalize_path(path: &str, remove_dots: bool) -> String {
    let path = pct_case(path);
    if remove_dots {
        remove_dot_segments(&path)
    } else {
        path
    }
}

/// Applies syntax-based normalization to the components.
///
/// See [the module documentation][`self`] for detail.
///
/// # Failures
///
/// [`ErrorKind::AuthorityInvariant`][`crate::ErrorKind::AuthorityInvariant`] if
/// `authority` is inconsistent with its sub-components.
///
/// # Examples
///
/// ```
/// use uri_resolve::normalize::normalize;
/// use uri_resolve::DecomposedUri;
///
/// let d: DecomposedUri = "HTTP://User@Example.COM:80/a/%2e%2E/%7euser/./b?Q=%3a#%2F".parse()?;
/// let normalized = normalize(&d)?;
/// assert_eq!(
///     normalized.recompose()?,
///     "http://User@example.com:80/~user/b?Q=%3A#%2F"
/// );
///
/// // Dot segments in a relative path are kept.
/// let relative: DecomposedUri = "../a/./b".parse()?;
/// assert_eq!(normalize(&relative)?.path, "../a/./b");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn normalize(d: &DecomposedUri) -> Result<DecomposedUri, Error> {
    d.validate_authority()?;

    let userinfo = d.userinfo.as_deref().map(pct_case);
    let host = d
        .host
        .as_deref()
        .map(|host| pct_case(&host.to_ascii_lowercase()));
    let port = d.port.clone();
    let authority =
        recompose_authority_components(userinfo.as_deref(), host.as_deref(), port.as_deref())?;
    let remove_dots = d.scheme.is_some() || d.path.starts_with('/');

    Ok(DecomposedUri {
        scheme: d.scheme.as_deref().map(str::to_ascii_lowercase),
        authority,
        userinfo,
        host,
        port,
        path: normalize_path(&d.path, remove_dots),
        query: d.query.as_deref().map(pct_case),
        fragment: d.fragment.as_deref().map(pct_case),
    })
}
