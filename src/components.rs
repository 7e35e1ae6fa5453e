//! Components of IRIs.

use nom::combinator::all_consuming;

use crate::error::{Error, ErrorKind};
use crate::parser::details::decompose_iri_reference;

/// Components of an IRI reference, as they appear in the source string.
///
/// An optional part that does not appear is `None`, and a part that appears with
/// zero characters is `Some("")`. For example, `http://example.com:/?` has
/// `port == Some("")` and `query == Some("")`.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct IriComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Userinfo.
    pub(crate) userinfo: Option<&'a str>,
    /// Host.
    ///
    /// This is `Some(_)` if and only if the authority is present.
    pub(crate) host: Option<&'a str>,
    /// Port.
    pub(crate) port: Option<&'a str>,
    /// Path.
    ///
    /// The path rule always matches, possibly with the empty string.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> IriComponents<'a> {
    /// Parses the whole string as an IRI reference.
    pub(crate) fn parse(s: &'a str) -> Result<Self, Error> {
        all_consuming(decompose_iri_reference::<()>)(s)
            .map(|(_rest, components)| components)
            .map_err(|_| Error::new(ErrorKind::InvalidIri))
    }
}
