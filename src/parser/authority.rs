//! Parser for `authority` string.

use crate::error::Error;
use crate::parser::str::{find, find_split_hole};

/// Borrowed components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityComponents<'a> {
    /// Whole authority.
    pub(crate) authority: &'a str,
    /// Userinfo.
    pub(crate) userinfo: Option<&'a str>,
    /// Host.
    ///
    /// Note that this can be empty.
    pub(crate) host: &'a str,
    /// Port.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) port: Option<&'a str>,
}

/// Decomposes the authority into `userinfo`, `host`, and `port`.
///
/// ```text
/// authority   = [ userinfo "@" ] host [ ":" port ]
/// host        = IP-literal / IPv4address / reg-name
/// port        = *DIGIT
/// ```
///
/// `userinfo` cannot contain `@`, and `reg-name` cannot contain `@` nor `:`.
/// The content of `IP-literal` between the brackets is not validated.
pub(crate) fn decompose_authority(authority: &str) -> Result<AuthorityComponents<'_>, Error> {
    let (userinfo, host_port) = match find_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };

    let (host, colon_port) = if host_port.starts_with('[') {
        let close = find(host_port.as_bytes(), b']')
            .ok_or_else(|| Error::syntax("unterminated IP literal in authority"))?;
        host_port.split_at(close + 1)
    } else {
        match find(host_port.as_bytes(), b':') {
            Some(pos) => host_port.split_at(pos),
            None => (host_port, ""),
        }
    };
    if find(host.as_bytes(), b'@').is_some() {
        return Err(Error::syntax("host must not contain `@`"));
    }

    let port = if colon_port.is_empty() {
        None
    } else {
        let port = colon_port
            .strip_prefix(':')
            .ok_or_else(|| Error::syntax("IP literal must be followed by a port or nothing"))?;
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::syntax("port must consist of digits"));
        }
        Some(port)
    };

    Ok(AuthorityComponents {
        authority,
        userinfo,
        host,
        port,
    })
}
