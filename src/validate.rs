//! Validators.
//!
//! Each validator checks that the *whole* string matches the grammar rule of the
//! component. Empty strings are accepted by every validator except [`scheme`].
//!
//! # Examples
//!
//! ```
//! use nose_iri::{validate, ErrorKind};
//!
//! assert!(validate::scheme("http").is_ok());
//! assert!(validate::host("r\u{E9}sum\u{E9}.example.org").is_ok());
//! assert!(validate::path("/a b").is_err());
//! assert_eq!(
//!     validate::query("a#b").map_err(|e| e.kind()),
//!     Err(ErrorKind::InvalidQuery)
//! );
//! ```

use nom::combinator::all_consuming;
use nom::IResult;

use crate::components::IriComponents;
use crate::error::{Error, ErrorKind};
use crate::parser::details;

/// Runs the parser over the whole string, and converts the failure into the given kind.
fn conv_err<'a, O>(
    parser: fn(&'a str) -> IResult<&'a str, O, ()>,
    s: &'a str,
    kind: ErrorKind,
) -> Result<(), Error> {
    match all_consuming(parser)(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::new(kind)),
    }
}

/// Validates [scheme][scheme].
///
/// [scheme]: https://tools.ietf.org/html/rfc3986#section-3.1
pub fn scheme(s: &str) -> Result<(), Error> {
    conv_err(details::scheme::<()>, s, ErrorKind::InvalidScheme)
}

/// Validates [IRI userinfo][userinfo].
///
/// [userinfo]: https://tools.ietf.org/html/rfc3986#section-3.2.1
pub fn userinfo(s: &str) -> Result<(), Error> {
    conv_err(details::userinfo::<()>, s, ErrorKind::InvalidUserinfo)
}

/// Validates [IRI host][host].
///
/// A host is either a registered name or a literal enclosed in brackets. The content of
/// a bracketed literal is checked by characters only, not as an IP address.
///
/// [host]: https://tools.ietf.org/html/rfc3986#section-3.2.2
pub fn host(s: &str) -> Result<(), Error> {
    conv_err(details::host::<()>, s, ErrorKind::InvalidHost)
}

/// Validates [port][port] syntax.
///
/// This only checks that the string consists of decimal digits. The range is checked
/// when the port is set to an [`Iri`][`crate::types::Iri`].
///
/// [port]: https://tools.ietf.org/html/rfc3986#section-3.2.3
pub fn port(s: &str) -> Result<(), Error> {
    conv_err(details::port::<()>, s, ErrorKind::InvalidPort)
}

/// Validates [IRI path][path].
///
/// Any sequence of `ipchar` and slashes is accepted.
///
/// [path]: https://tools.ietf.org/html/rfc3986#section-3.3
pub fn path(s: &str) -> Result<(), Error> {
    conv_err(details::path::<()>, s, ErrorKind::InvalidPath)
}

/// Validates [IRI query][query].
///
/// Note that the first `?` character in an IRI is not a part of a query.
///
/// [query]: https://tools.ietf.org/html/rfc3986#section-3.4
pub fn query(s: &str) -> Result<(), Error> {
    conv_err(details::query::<()>, s, ErrorKind::InvalidQuery)
}

/// Validates [IRI fragment][fragment].
///
/// Note that the first `#` character in an IRI is not a part of a fragment.
/// For example, `https://example.com/#foo` has a fragment `foo`, **not** `#foo`.
///
/// [fragment]: https://tools.ietf.org/html/rfc3986#section-3.5
pub fn fragment(s: &str) -> Result<(), Error> {
    conv_err(details::fragment::<()>, s, ErrorKind::InvalidFragment)
}

/// Validates [IRI reference][iri-reference], relative or not.
///
/// This is the rule [`Iri::parse`][`crate::types::Iri::parse`] decomposes strings with.
/// Percent-encoded triplets are not decoded before validation.
///
/// [iri-reference]: https://tools.ietf.org/html/rfc3987#section-2.2
pub fn iri_reference(s: &str) -> Result<(), Error> {
    IriComponents::parse(s).map(|_| ())
}
