//! Components of URI references.
//!
//! # Examples
//!
//! ```
//! use uri_resolve::components::{decompose_components, recompose_components};
//!
//! let s = "foo://example.com:8042/over/there?name=ferret#nose";
//! let d = decompose_components(s)?;
//! assert_eq!(d.host.as_deref(), Some("example.com"));
//! assert_eq!(recompose_components(&d)?, s);
//! # Ok::<_, uri_resolve::Error>(())
//! ```

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::parser::{self, RawComponents};

/// Components of a URI reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-3>.
///
/// `authority` must be consistent with `userinfo`, `host`, and `port`.
/// See [`validate_authority`][`Self::validate_authority`] for detail.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposedUri {
    /// Scheme, without the trailing colon.
    pub scheme: Option<String>,
    /// Authority, without the leading double slash.
    ///
    /// Note that this can be `Some("")`.
    pub authority: Option<String>,
    /// Userinfo, without the trailing `@`.
    pub userinfo: Option<String>,
    /// Host.
    ///
    /// Note that this can be `Some("")`.
    pub host: Option<String>,
    /// Port, without the leading colon.
    ///
    /// Note that this can be `Some("")`.
    pub port: Option<String>,
    /// Path.
    pub path: String,
    /// Query, without the leading `?`.
    pub query: Option<String>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl DecomposedUri {
    /// Returns `true` if the reference has a scheme.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns `true` if the authority or any of its sub-components is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.authority.is_some()
            || self.userinfo.is_some()
            || self.host.is_some()
            || self.port.is_some()
    }

    /// Checks the consistency between `authority` and its sub-components.
    ///
    /// `authority` must be `None` if and only if all of `userinfo`, `host`,
    /// and `port` are `None`. If `authority` is `Some(_)`, it must be exactly
    /// `[userinfo "@"] host [":" port]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_resolve::{DecomposedUri, ErrorKind};
    ///
    /// let mut d: DecomposedUri = "http://example.com:80/".parse()?;
    /// assert!(d.validate_authority().is_ok());
    ///
    /// d.port = Some("8080".to_owned());
    /// assert_eq!(
    ///     d.validate_authority().unwrap_err().kind(),
    ///     ErrorKind::AuthorityInvariant
    /// );
    /// # Ok::<_, uri_resolve::Error>(())
    /// ```
    pub fn validate_authority(&self) -> Result<(), Error> {
        let recomposed = recompose_authority_components(
            self.userinfo.as_deref(),
            self.host.as_deref(),
            self.port.as_deref(),
        )
        .map_err(|e| match e.kind() {
            // Sub-components are given but they do not form an authority.
            ErrorKind::MissingHost if self.authority.is_some() => Error::authority_invariant(),
            _ => e,
        })?;
        if recomposed.as_deref() == self.authority.as_deref() {
            Ok(())
        } else {
            Err(Error::authority_invariant())
        }
    }

    /// Recomposes the components into a string.
    ///
    /// This is same as [`recompose_components`].
    #[inline]
    pub fn recompose(&self) -> Result<String, Error> {
        recompose_components(self)
    }

    /// Sets the authority and its sub-components at once.
    pub(crate) fn set_authority_from(&mut self, other: &DecomposedUri) {
        self.authority = other.authority.clone();
        self.userinfo = other.userinfo.clone();
        self.host = other.host.clone();
        self.port = other.port.clone();
    }
}

impl<'a> From<RawComponents<'a>> for DecomposedUri {
    fn from(raw: RawComponents<'a>) -> Self {
        let authority = raw.authority;
        Self {
            scheme: raw.scheme.map(ToOwned::to_owned),
            authority: authority.map(|a| a.authority.to_owned()),
            userinfo: authority.and_then(|a| a.userinfo).map(ToOwned::to_owned),
            host: authority.map(|a| a.host.to_owned()),
            port: authority.and_then(|a| a.port).map(ToOwned::to_owned),
            path: raw.path.to_owned(),
            query: raw.query.map(ToOwned::to_owned),
            fragment: raw.fragment.map(ToOwned::to_owned),
        }
    }
}

impl FromStr for DecomposedUri {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decompose_components(s)
    }
}

impl TryFrom<&str> for DecomposedUri {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        decompose_components(s)
    }
}

/// Decomposes the given URI reference into components.
///
/// The whole string must match the `URI-reference` rule; no leading or
/// trailing characters are silently dropped.
///
/// # Failures
///
/// * [`ErrorKind::Syntax`] if the string does not match the generic syntax.
/// * [`ErrorKind::AuthorityInvariant`] if the extracted authority is
///   inconsistent with its sub-components.
///
/// # Examples
///
/// ```
/// use uri_resolve::components::decompose_components;
///
/// let d = decompose_components("//user@[::1]:8080")?;
/// assert_eq!(d.scheme, None);
/// assert_eq!(d.authority.as_deref(), Some("user@[::1]:8080"));
/// assert_eq!(d.userinfo.as_deref(), Some("user"));
/// assert_eq!(d.host.as_deref(), Some("[::1]"));
/// assert_eq!(d.port.as_deref(), Some("8080"));
/// assert_eq!(d.path, "");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn decompose_components(uri: &str) -> Result<DecomposedUri, Error> {
    let decomposed = DecomposedUri::from(parser::decompose(uri)?);
    decomposed.validate_authority()?;
    Ok(decomposed)
}

/// Recomposes the components into a URI reference string.
///
/// If `authority` is `None` but some of its sub-components are given, the
/// authority is recomposed from them.
///
/// # Failures
///
/// * [`ErrorKind::AuthorityInvariant`] if `authority` is inconsistent with
///   its sub-components.
/// * [`ErrorKind::MissingHost`] if `authority` is `None` and `userinfo` or
///   `port` is given without `host`.
/// * [`ErrorKind::Syntax`] if the path cannot be placed in the string without
///   being decomposed differently: a non-empty path not starting with `/`
///   after an authority, a path starting with `//` without an authority, or a
///   colon in the first segment of a relative path without scheme.
///
/// # Examples
///
/// ```
/// use uri_resolve::components::recompose_components;
/// use uri_resolve::DecomposedUri;
///
/// let d = DecomposedUri {
///     scheme: Some("https".to_owned()),
///     host: Some("example.com".to_owned()),
///     port: Some("8443".to_owned()),
///     path: "/index.html".to_owned(),
///     fragment: Some("top".to_owned()),
///     ..Default::default()
/// };
/// assert_eq!(recompose_components(&d)?, "https://example.com:8443/index.html#top");
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn recompose_components(d: &DecomposedUri) -> Result<String, Error> {
    let recomposed_authority;
    let authority = match &d.authority {
        Some(authority) => {
            d.validate_authority()?;
            Some(authority.as_str())
        }
        None => {
            recomposed_authority = recompose_authority_components(
                d.userinfo.as_deref(),
                d.host.as_deref(),
                d.port.as_deref(),
            )?;
            recomposed_authority.as_deref()
        }
    };

    validate_path(d.scheme.is_some(), authority.is_some(), &d.path)?;

    let mut buf = String::new();
    if let Some(scheme) = &d.scheme {
        buf.push_str(scheme);
        buf.push(':');
    }
    if let Some(authority) = authority {
        buf.push_str("//");
        buf.push_str(authority);
    }
    buf.push_str(&d.path);
    if let Some(query) = &d.query {
        buf.push('?');
        buf.push_str(query);
    }
    if let Some(fragment) = &d.fragment {
        buf.push('#');
        buf.push_str(fragment);
    }
    Ok(buf)
}

/// Checks that the path can be recomposed without changing the decomposition.
fn validate_path(has_scheme: bool, has_authority: bool, path: &str) -> Result<(), Error> {
    if has_authority {
        if !path.is_empty() && !path.starts_with('/') {
            return Err(Error::syntax(
                "path must be empty or start with `/` when authority is present",
            ));
        }
    } else if path.starts_with("//") {
        return Err(Error::syntax(
            "path must not start with `//` when authority is absent",
        ));
    }
    if !has_scheme && !has_authority {
        let first_segment = path.split('/').next().unwrap_or_default();
        if first_segment.contains(':') {
            return Err(Error::syntax(
                "colon in the first path segment of a reference without scheme",
            ));
        }
    }
    Ok(())
}

/// Recomposes the authority from its sub-components.
///
/// Returns `Ok(None)` if all of the sub-components are absent.
///
/// # Failures
///
/// [`ErrorKind::MissingHost`] if `userinfo` or `port` is given without `host`.
///
/// # Examples
///
/// ```
/// use uri_resolve::components::recompose_authority_components;
/// use uri_resolve::ErrorKind;
///
/// assert_eq!(
///     recompose_authority_components(Some("user"), Some("example.com"), Some("80"))?.as_deref(),
///     Some("user@example.com:80")
/// );
/// assert_eq!(recompose_authority_components(None, None, None)?, None);
/// assert_eq!(
///     recompose_authority_components(None, None, Some("80")).unwrap_err().kind(),
///     ErrorKind::MissingHost
/// );
/// # Ok::<_, uri_resolve::Error>(())
/// ```
pub fn recompose_authority_components(
    userinfo: Option<&str>,
    host: Option<&str>,
    port: Option<&str>,
) -> Result<Option<String>, Error> {
    let host = match host {
        Some(host) => host,
        None if userinfo.is_none() && port.is_none() => return Ok(None),
        None => {
            return Err(Error::new(
                ErrorKind::MissingHost,
                "host is required when userinfo or port is given",
            ))
        }
    };

    let mut buf = String::new();
    if let Some(userinfo) = userinfo {
        buf.push_str(userinfo);
        buf.push('@');
    }
    buf.push_str(host);
    if let Some(port) = port {
        buf.push(':');
        buf.push_str(port);
    }
    Ok(Some(buf))
}
