//! A mutable value type for [RFC 3987 IRI][RFC 3987], with validated components and
//! [RFC 3986 reference resolution][RFC 3986 5].
//!
//! [`Iri`] stores its seven components (scheme, userinfo, host, port, path, query, and
//! fragment) separately. Every component is either absent or already valid and
//! normalized: setters validate the whole input against the component's grammar rule,
//! and uppercase the hex digits of percent-encoded triplets. Scheme and host are also
//! lowercased.
//!
//! Note that this crate does not have any extra knowledge about protocols.
//! There is no scheme-specific handling and no IDNA conversion for hosts.
//!
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//! [RFC 3986 5]: https://tools.ietf.org/html/rfc3986#section-5
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use nose_iri::Iri;
//!
//! let base = Iri::parse("HTTP://Example.COM/b/c/d;p?q")?;
//! assert_eq!(base.scheme(), Some("http"));
//! assert_eq!(base.host(), Some("example.com"));
//!
//! let reference = Iri::parse("../g")?;
//! let resolved = reference.resolve(&base)?;
//! assert_eq!(resolved.href(), "http://example.com/b/g");
//! # }
//! # Ok::<_, nose_iri::Error>(())
//! ```
//!
//! # `absent` and empty components
//!
//! Components are `Option`s, and absence is never represented as an empty string.
//! Setting an empty string stores `None`. For example, `http://example.com:/` has no port,
//! and `http://example.com/?` has no query.
//!
//! # Resolution never keeps fragments
//!
//! [`Iri::resolve`] always returns an IRI without a fragment, even when the reference has
//! one. RFC 3986 section 5.2.2 sets the target fragment to the reference fragment; this
//! crate intentionally differs. Callers that need the RFC behavior can copy the fragment
//! themselves:
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use nose_iri::Iri;
//!
//! let base = Iri::parse("http://a/b/c/d;p?q")?;
//! let reference = Iri::parse("g#s")?;
//! let mut resolved = reference.resolve(&base)?;
//! assert_eq!(resolved.href(), "http://a/b/c/g");
//!
//! resolved.set_fragment(reference.fragment())?;
//! assert_eq!(resolved.href(), "http://a/b/c/g#s");
//! # }
//! # Ok::<_, nose_iri::Error>(())
//! ```
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables types and functions which require memory allocation,
//!       e.g. [`Iri`], [`pct_encode`], and [`pct_decode`].
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * With neither of them:
//!     + Only [`CharSet`], the [`validate`] functions, and the [`Error`] type are available.
//!
//! `memchr` feature uses the `memchr` crate for byte searches, and `serde` feature
//! implements `Serialize` and `Deserialize` for [`Iri`] as its `href` string.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod components;
pub mod error;
#[cfg(feature = "alloc")]
pub mod normalize;
pub(crate) mod parser;
#[cfg(feature = "alloc")]
pub mod percent_encode;
#[cfg(feature = "alloc")]
pub mod resolve;
#[cfg(feature = "alloc")]
pub mod types;
pub mod validate;

pub use crate::error::{Error, ErrorKind};
pub use crate::parser::char::CharSet;
#[cfg(feature = "alloc")]
pub use crate::percent_encode::{pct_decode, pct_encode, CharPattern};
#[cfg(feature = "alloc")]
pub use crate::types::Iri;
