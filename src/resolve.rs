//! IRI resolver.
//!
//! Implements reference resolution of [RFC 3986 section 5.2.2], with one difference:
//! **the resolved IRI never has a fragment**, even when the reference has one.
//!
//! ```
//! use nose_iri::Iri;
//!
//! let base = Iri::parse("http://a/b/c/d;p?q")?;
//! for (reference, expected) in [
//!     ("g", "http://a/b/c/g"),
//!     ("../g", "http://a/b/g"),
//!     ("//g", "http://g"),
//!     ("?y", "http://a/b/c/d;p?y"),
//!     // RFC 3986 gives `http://a/b/c/d;p?q#s`.
//!     ("#s", "http://a/b/c/d;p?q"),
//! ] {
//!     let resolved = Iri::parse(reference)?.resolve(&base)?;
//!     assert_eq!(resolved.href(), expected);
//! }
//! # Ok::<_, nose_iri::Error>(())
//! ```
//!
//! # Paths of bases without authorities
//!
//! A relative path is merged with the base path as if the base had an authority:
//! when the base path is empty or has no slash, a slash is prepended. So `g` against
//! `scheme:` is `scheme:/g`, not `scheme:g`.
//!
//! A target path starting with `//` is written after an empty authority, so
//! `/..//g` against `foo:/x` is `foo:////g`.
//!
//! [RFC 3986 section 5.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2

#[cfg(test)]
mod tests;

use alloc::string::String;

use crate::error::{Error, ErrorKind};
use crate::normalize::{merge_paths, remove_dot_segments};
use crate::types::Iri;

/// Removes dot segments from the path, and returns `None` for the empty result.
fn resolved_path(path: &str) -> Option<String> {
    Some(remove_dot_segments(path)).filter(|path| !path.is_empty())
}

/// Resolves the reference against the base.
///
/// See [`Iri::resolve`].
///
/// # Failures
///
/// Fails with [`ErrorKind::InvalidBase`] if the base has no scheme.
pub fn resolve(reference: &Iri, base: &Iri) -> Result<Iri, Error> {
    let base_scheme = base
        .scheme
        .clone()
        .ok_or_else(|| Error::new(ErrorKind::InvalidBase))?;

    let reference_path = reference.path.as_deref().unwrap_or("");
    let target = if let Some(scheme) = &reference.scheme {
        Iri {
            scheme: Some(scheme.clone()),
            userinfo: reference.userinfo.clone(),
            host: reference.host.clone(),
            port: reference.port,
            path: resolved_path(reference_path),
            query: reference.query.clone(),
            fragment: None,
        }
    } else if reference.host.is_some() {
        Iri {
            scheme: Some(base_scheme),
            userinfo: reference.userinfo.clone(),
            host: reference.host.clone(),
            port: reference.port,
            path: resolved_path(reference_path),
            query: reference.query.clone(),
            fragment: None,
        }
    } else {
        let (path, query) = match &reference.path {
            None => (
                base.path.clone(),
                reference.query.clone().or_else(|| base.query.clone()),
            ),
            Some(path) if path.starts_with('/') => {
                (resolved_path(path), reference.query.clone())
            }
            Some(path) => {
                let base_path = base.path.as_deref().unwrap_or("");
                (
                    resolved_path(&merge_paths(base_path, path)),
                    reference.query.clone(),
                )
            }
        };
        Iri {
            scheme: Some(base_scheme),
            userinfo: base.userinfo.clone(),
            host: base.host.clone(),
            port: base.port,
            path,
            query,
            fragment: None,
        }
    };

    Ok(target)
}

impl Iri {
    /// Resolves the IRI as a reference against the base, and returns the target IRI.
    ///
    /// Dot segments are removed from the target path. The target never has a fragment.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidBase`] if the base has no scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::{ErrorKind, Iri};
    ///
    /// let base = Iri::parse("http://example.com/base/index.html")?;
    /// let reference = Iri::parse("../there#here")?;
    /// assert_eq!(reference.resolve(&base)?.href(), "http://example.com/there");
    ///
    /// let relative_base = Iri::parse("/base/")?;
    /// assert_eq!(
    ///     reference.resolve(&relative_base).map_err(|e| e.kind()),
    ///     Err(ErrorKind::InvalidBase)
    /// );
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    #[inline]
    pub fn resolve(&self, base: &Iri) -> Result<Iri, Error> {
        resolve(self, base)
    }
}
