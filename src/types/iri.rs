//! Owned IRI value.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::components::IriComponents;
use crate::error::{Error, ErrorKind};
use crate::normalize::{normalize_host, normalize_pct_case, normalize_scheme};
use crate::parser::char::CharSet;
use crate::percent_encode::{pct_decode, pct_encode};
use crate::validate;

/// Characters unescaped from the argument of [`Iri::set_href`].
const HREF_DECODE_SET: CharSet = CharSet::IUNRESERVED.or_pct_encoded();

/// Characters left raw by [`Iri::uri`].
const URI_ENCODE_SET: CharSet = CharSet::UNRESERVED
    .or(CharSet::RESERVED)
    .or_pct_encoded();

/// An IRI reference, stored as separate validated components.
///
/// Every component is either `None` or valid and normalized. The only way to change a
/// component is through its setter, which validates the whole new value and returns an
/// [`Error`] whose [kind][`Error::kind`] names the component on failure.
///
/// Setting `None` or an empty string removes the component.
///
/// # Examples
///
/// ```
/// use nose_iri::{ErrorKind, Iri};
///
/// let mut iri = Iri::new();
/// iri.set_scheme(Some("HTTPS"))?;
/// iri.set_host(Some("Example.ORG"))?;
/// iri.set_path(Some("/caf\u{E9}/%7euser"))?;
/// assert_eq!(iri.href(), "https://example.org/caf\u{E9}/%7Euser");
/// assert_eq!(iri.uri(), "https://example.org/caf%C3%A9/%7Euser");
///
/// assert_eq!(
///     iri.set_query(Some("a#b")).map_err(|e| e.kind()),
///     Err(ErrorKind::InvalidQuery)
/// );
/// # Ok::<_, nose_iri::Error>(())
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    /// Scheme, lowercased.
    pub(crate) scheme: Option<String>,
    /// Userinfo.
    pub(crate) userinfo: Option<String>,
    /// Host, lowercased.
    pub(crate) host: Option<String>,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path.
    pub(crate) path: Option<String>,
    /// Query.
    pub(crate) query: Option<String>,
    /// Fragment.
    pub(crate) fragment: Option<String>,
}

/// Returns `None` for an empty string.
#[inline]
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Validates and normalizes a non-empty component.
fn validated(
    s: Option<&str>,
    validate: fn(&str) -> Result<(), Error>,
    normalize: fn(&str) -> String,
) -> Result<Option<String>, Error> {
    match non_empty(s) {
        Some(s) => {
            validate(s)?;
            Ok(Some(normalize(s)))
        }
        None => Ok(None),
    }
}

impl Iri {
    /// Creates an empty IRI, with all components absent.
    ///
    /// Its `href` is the empty string, which is a valid relative reference.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the string as an IRI reference.
    ///
    /// This is the same as setting the string to an [empty IRI][`Self::new`] by
    /// [`set_href`][`Self::set_href`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::Iri;
    ///
    /// let iri = Iri::parse("HTTP://user@EXAMPLE.COM:8080/%7efoo?q#f")?;
    /// assert_eq!(iri.scheme(), Some("http"));
    /// assert_eq!(iri.userinfo(), Some("user"));
    /// assert_eq!(iri.host(), Some("example.com"));
    /// assert_eq!(iri.port(), Some(8080));
    /// assert_eq!(iri.path(), Some("/~foo"));
    /// assert_eq!(iri.query(), Some("q"));
    /// assert_eq!(iri.fragment(), Some("f"));
    ///
    /// assert!(Iri::parse("foo bar").is_err());
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, Error> {
        let mut iri = Self::new();
        iri.set_href(s)?;
        Ok(iri)
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the query.
    ///
    /// The leading `?` is not a part of the query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment.
    ///
    /// The leading `#` is not a part of the fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the authority, `[userinfo "@"] host [":" port]`, if `href` has one.
    ///
    /// The host is empty when it is absent but the userinfo or the port is present,
    /// or when the path starts with `//`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::Iri;
    ///
    /// let iri = Iri::parse("ftp://anonymous@ftp.example.com:21/pub")?;
    /// assert_eq!(iri.authority().as_deref(), Some("anonymous@ftp.example.com:21"));
    ///
    /// let iri = Iri::parse("http://:8080/")?;
    /// assert_eq!(iri.authority().as_deref(), Some(":8080"));
    ///
    /// let iri = Iri::parse("mailto:user@example.com")?;
    /// assert_eq!(iri.authority(), None);
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    #[must_use]
    pub fn authority(&self) -> Option<String> {
        if !self.has_authority() {
            return None;
        }
        let mut buf = String::new();
        self.write_authority(&mut buf).ok()?;
        Some(buf)
    }

    /// Sets the scheme.
    ///
    /// The scheme is lowercased.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidScheme`] if the scheme is invalid.
    pub fn set_scheme(&mut self, scheme: Option<&str>) -> Result<(), Error> {
        self.scheme = validated(scheme, validate::scheme, normalize_scheme)?;
        Ok(())
    }

    /// Sets the userinfo.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidUserinfo`] if the userinfo is invalid.
    pub fn set_userinfo(&mut self, userinfo: Option<&str>) -> Result<(), Error> {
        self.userinfo = validated(userinfo, validate::userinfo, normalize_pct_case)?;
        Ok(())
    }

    /// Sets the host.
    ///
    /// The host is lowercased, including non-ASCII characters.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidHost`] if the host is invalid.
    pub fn set_host(&mut self, host: Option<&str>) -> Result<(), Error> {
        self.host = validated(host, validate::host, normalize_host)?;
        Ok(())
    }

    /// Sets the port from its decimal representation.
    ///
    /// Leading zeros are allowed.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidPort`] if the string contains a character other
    /// than decimal digits (including signs), or if the number is greater than 65535.
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::{ErrorKind, Iri};
    ///
    /// let mut iri = Iri::new();
    /// iri.set_port(Some("0080"))?;
    /// assert_eq!(iri.port(), Some(80));
    ///
    /// assert_eq!(iri.set_port(Some("65536")).map_err(|e| e.kind()), Err(ErrorKind::InvalidPort));
    /// assert_eq!(iri.set_port(Some("-1")).map_err(|e| e.kind()), Err(ErrorKind::InvalidPort));
    /// // The old value is kept on failure.
    /// assert_eq!(iri.port(), Some(80));
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    pub fn set_port(&mut self, port: Option<&str>) -> Result<(), Error> {
        let port = match non_empty(port) {
            Some(s) => {
                validate::port(s)?;
                let number = s
                    .parse::<u16>()
                    .map_err(|_| Error::new(ErrorKind::InvalidPort))?;
                Some(number)
            }
            None => None,
        };
        self.port = port;
        Ok(())
    }

    /// Sets the port number.
    #[inline]
    pub fn set_port_number(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Sets the path.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidPath`] if the path is invalid.
    pub fn set_path(&mut self, path: Option<&str>) -> Result<(), Error> {
        self.path = validated(path, validate::path, normalize_pct_case)?;
        Ok(())
    }

    /// Sets the query.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidQuery`] if the query is invalid.
    pub fn set_query(&mut self, query: Option<&str>) -> Result<(), Error> {
        self.query = validated(query, validate::query, normalize_pct_case)?;
        Ok(())
    }

    /// Sets the fragment.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidFragment`] if the fragment is invalid.
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> Result<(), Error> {
        self.fragment = validated(fragment, validate::fragment, normalize_pct_case)?;
        Ok(())
    }

    /// Returns the IRI as a string.
    ///
    /// Absent components are omitted with their delimiters. The port is written only
    /// when the host is present.
    #[inline]
    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }

    /// Replaces all the components with those of the given IRI reference.
    ///
    /// Percent-encoded triplets for `iunreserved` characters are decoded first, so
    /// that URIs are accepted in IRI form. Then the string is decomposed, and each
    /// component is set through its setter.
    ///
    /// On failure, `self` is not modified.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidIri`] if the string is not an IRI reference,
    /// or with [`ErrorKind::InvalidPort`] if the port is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::Iri;
    ///
    /// let mut iri = Iri::parse("http://example.com/")?;
    /// iri.set_href("mailto:r%C3%A9sum%C3%A9@example.com")?;
    /// assert_eq!(iri.scheme(), Some("mailto"));
    /// assert_eq!(iri.host(), None);
    /// assert_eq!(iri.path(), Some("r\u{E9}sum\u{E9}@example.com"));
    ///
    /// assert!(iri.set_href("http://example.com:99999/").is_err());
    /// assert_eq!(iri.scheme(), Some("mailto"));
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    pub fn set_href(&mut self, href: &str) -> Result<(), Error> {
        let decoded = pct_decode(href, HREF_DECODE_SET);
        let components = IriComponents::parse(&decoded)?;

        let mut iri = Self::new();
        iri.set_scheme(components.scheme)?;
        iri.set_userinfo(components.userinfo)?;
        iri.set_host(components.host)?;
        iri.set_port(components.port)?;
        iri.set_path(Some(components.path))?;
        iri.set_query(components.query)?;
        iri.set_fragment(components.fragment)?;

        *self = iri;
        Ok(())
    }

    /// Returns the URI form of the IRI.
    ///
    /// Characters other than URI `unreserved` and `reserved` are percent-encoded as
    /// UTF-8. The result is ASCII-only.
    #[must_use]
    pub fn uri(&self) -> String {
        pct_encode(&self.href(), URI_ENCODE_SET)
    }

    /// Returns `true` if the scheme, the path, and the query are present and the
    /// fragment is absent.
    ///
    /// Note that an absent component and an empty one are the same for [`Iri`], so
    /// `http://example.com/` is not absolute in this sense (it has no query).
    ///
    /// # Examples
    ///
    /// ```
    /// use nose_iri::Iri;
    ///
    /// assert!(Iri::parse("http://example.com/?q")?.is_absolute());
    /// assert!(!Iri::parse("http://example.com/?q#f")?.is_absolute());
    /// assert!(!Iri::parse("http://example.com/")?.is_absolute());
    /// # Ok::<_, nose_iri::Error>(())
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
            && self.path.is_some()
            && self.query.is_some()
            && self.fragment.is_none()
    }

    /// Returns `true` if the scheme is absent.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns `true` if `href` needs an authority, possibly with an empty host.
    ///
    /// Without one, the userinfo and the port would be lost, and a path starting with
    /// `//` would be read back as an authority.
    fn has_authority(&self) -> bool {
        self.host.is_some()
            || self.userinfo.is_some()
            || self.port.is_some()
            || self.path.as_deref().map_or(false, |path| path.starts_with("//"))
    }

    /// Writes the authority.
    fn write_authority<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            w.write_str(userinfo)?;
            w.write_char('@')?;
        }
        w.write_str(self.host.as_deref().unwrap_or(""))?;
        if let Some(port) = self.port {
            write!(w, ":{}", port)?;
        }
        Ok(())
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }
        if self.has_authority() {
            f.write_str("//")?;
            self.write_authority(f)?;
        }
        if let Some(path) = &self.path {
            f.write_str(path)?;
        }
        if let Some(query) = &self.query {
            f.write_char('?')?;
            f.write_str(query)?;
        }
        if let Some(fragment) = &self.fragment {
            f.write_char('#')?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl FromStr for Iri {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = Error;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Iri> for String {
    #[inline]
    fn from(iri: Iri) -> Self {
        iri.href()
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Iri;

    use core::fmt;

    use alloc::string::String;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Iri {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.href())
        }
    }

    /// IRI string visitor.
    #[derive(Debug, Clone, Copy)]
    struct IriVisitor;

    impl<'de> Visitor<'de> for IriVisitor {
        type Value = Iri;

        #[inline]
        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an IRI reference")
        }

        #[inline]
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Iri::parse(v).map_err(E::custom)
        }

        #[inline]
        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Iri::parse(&v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Iri {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(IriVisitor)
        }
    }
}
