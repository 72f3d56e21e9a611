//! URI references as decomposed components, following [RFC 3986].
//!
//! This crate decomposes URI references into their syntactic components,
//! recomposes them, normalizes paths, and resolves references against base
//! URIs.
//! It has no extra knowledge about protocols: only the generic syntax is
//! handled, and nothing scheme-specific (such as default ports) is applied.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//!
//! # Components
//!
//! A URI reference is decomposed into a [`DecomposedUri`](components::DecomposedUri):
//!
//! ```
//! use uri_resolve::components::decompose_components;
//!
//! let d = decompose_components("http://user@example.com:8080/a/b?q=1#frag")?;
//! assert_eq!(d.scheme.as_deref(), Some("http"));
//! assert_eq!(d.authority.as_deref(), Some("user@example.com:8080"));
//! assert_eq!(d.userinfo.as_deref(), Some("user"));
//! assert_eq!(d.host.as_deref(), Some("example.com"));
//! assert_eq!(d.port.as_deref(), Some("8080"));
//! assert_eq!(d.path, "/a/b");
//! assert_eq!(d.query.as_deref(), Some("q=1"));
//! assert_eq!(d.fragment.as_deref(), Some("frag"));
//! # Ok::<_, uri_resolve::Error>(())
//! ```
//!
//! # `std` support
//!
//! This crate supports `no_std` usage, but always requires the `alloc` crate.
//!
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * `memchr` feature:
//!     + Uses [`memchr`](https://crates.io/crates/memchr) crate for byte search.
//! * `serde` feature:
//!     + Implements `Serialize` and `Deserialize` for [`DecomposedUri`](components::DecomposedUri)
//!       and [`QueryMultimap`](query::QueryMultimap).
//!
//! # Authority and its sub-components
//!
//! `authority` and its sub-components (`userinfo`, `host`, and `port`) are
//! stored side by side. They must be consistent: `authority` is absent if and
//! only if all the sub-components are absent, and if present, it must be
//! exactly `[userinfo "@"] host [":" port]`.
//! This is checked both on decomposition and on recomposition.
//!
//! Note that an empty authority is different from an absent authority.
//! `file:///etc` has an empty authority (and an empty host), while
//! `file:/etc` has no authority.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod compare;
pub mod components;
mod error;
pub mod normalize;
pub(crate) mod parser;
pub mod percent_encoding;
pub mod query;
pub mod resolve;
pub mod segments;

pub use self::components::DecomposedUri;
pub use self::error::{Error, ErrorKind};
