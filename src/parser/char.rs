//! Character classes of RFC 3986 and RFC 3987.
//!
//! Every class is a [`CharSet`] constant, and composite classes are built from the
//! simpler ones with [`CharSet::or`], so that a rule is written exactly once.
//! All tables are evaluated at compile time.

use core::fmt;

/// Mask for "percent-encoded triplets are allowed".
const FLAG_PCT_ENCODED: u8 = 1;
/// Mask for `ucschar` characters.
const FLAG_UCSCHAR: u8 = 1 << 1;
/// Mask for `iprivate` characters.
const FLAG_IPRIVATE: u8 = 1 << 2;

/// A set of characters, built from the ABNF rules of RFC 3986 and RFC 3987.
///
/// ASCII characters are stored as a bit table. Non-ASCII characters can only be
/// allowed as a whole class (`ucschar` or `iprivate`), since no other rule in the
/// IRI grammar refers to them.
///
/// A set can also allow percent-encoded triplets. For the percent-encoding codec, this
/// means a literal `%` in the input is passed through as is (it is the start of an
/// already encoded triplet), rather than encoded to `%25`.
///
/// # Examples
///
/// ```
/// use nose_iri::CharSet;
///
/// let set = CharSet::UNRESERVED.or(CharSet::new(b"/"));
/// assert!(set.allows('a'));
/// assert!(set.allows('/'));
/// assert!(!set.allows('?'));
/// assert!(!set.allows('\u{E9}'));
///
/// assert!(CharSet::IUNRESERVED.allows('\u{E9}'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharSet {
    /// Bit table of allowed ASCII characters.
    ascii: u128,
    /// Flags for non-ASCII classes and percent-encoded triplets.
    flags: u8,
}

impl CharSet {
    /// The set that allows nothing.
    pub const EMPTY: Self = Self { ascii: 0, flags: 0 };

    /// Creates a set that only allows the given ASCII characters.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or is `%`.
    /// Use [`or_pct_encoded`][`Self::or_pct_encoded`] to allow percent-encoded triplets.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut ascii = 0_u128;
        while let [cur, rest @ ..] = bytes {
            assert!(
                cur.is_ascii() && *cur != b'%',
                "[precondition] only ASCII characters other than `%` can be listed"
            );
            ascii |= 1_u128 << *cur;
            bytes = rest;
        }
        Self { ascii, flags: 0 }
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self {
            ascii: self.ascii | other.ascii,
            flags: self.flags | other.flags,
        }
    }

    /// Returns the set that additionally allows percent-encoded triplets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self {
            ascii: self.ascii,
            flags: self.flags | FLAG_PCT_ENCODED,
        }
    }

    /// Returns the set that additionally allows `ucschar` characters.
    #[must_use]
    pub const fn or_ucschar(self) -> Self {
        Self {
            ascii: self.ascii,
            flags: self.flags | FLAG_UCSCHAR,
        }
    }

    /// Returns the set that additionally allows `iprivate` characters.
    #[must_use]
    pub const fn or_iprivate(self) -> Self {
        Self {
            ascii: self.ascii,
            flags: self.flags | FLAG_IPRIVATE,
        }
    }

    /// Returns `true` if the set allows percent-encoded triplets.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.flags & FLAG_PCT_ENCODED != 0
    }

    /// Returns `true` if the given ASCII byte is in the set.
    #[inline]
    #[must_use]
    pub(crate) const fn allows_ascii(self, b: u8) -> bool {
        b.is_ascii() && (self.ascii & (1_u128 << b)) != 0
    }

    /// Returns `true` if the given character is in the set.
    ///
    /// `%` itself is never a member: it is only meaningful as the start of a
    /// percent-encoded triplet. See [`allows_pct_encoded`][`Self::allows_pct_encoded`].
    #[inline]
    #[must_use]
    pub const fn allows(self, c: char) -> bool {
        if c.is_ascii() {
            return self.allows_ascii(c as u8);
        }
        ((self.flags & FLAG_UCSCHAR) != 0 && is_ucschar(c))
            || ((self.flags & FLAG_IPRIVATE) != 0 && is_iprivate(c))
    }

    /// Returns `true` if every character of the string is in the set.
    ///
    /// Percent-encoded triplets are not interpreted.
    #[must_use]
    pub fn allows_all(self, s: &str) -> bool {
        s.chars().all(|c| self.allows(c))
    }
}

impl Default for CharSet {
    /// Returns [`CharSet::IUNRESERVED`], the default set of the percent-encoding codec.
    #[inline]
    fn default() -> Self {
        Self::IUNRESERVED
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Lists the allowed ASCII characters.
        struct AsciiList(u128);
        impl fmt::Debug for AsciiList {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"")?;
                for b in 0..128_u8 {
                    if self.0 & (1_u128 << b) != 0 {
                        write!(f, "{}", char::from(b).escape_debug())?;
                    }
                }
                f.write_str("\"")
            }
        }

        f.debug_struct("CharSet")
            .field("ascii", &AsciiList(self.ascii))
            .field("pct_encoded", &self.allows_pct_encoded())
            .field("ucschar", &(self.flags & FLAG_UCSCHAR != 0))
            .field("iprivate", &(self.flags & FLAG_IPRIVATE != 0))
            .finish()
    }
}

// Rules from RFC 3986.
impl CharSet {
    /// `ALPHA = %x41-5A / %x61-7A`
    pub const ALPHA: Self = Self::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

    /// `DIGIT = %x30-39`
    pub const DIGIT: Self = Self::new(b"0123456789");

    /// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
    ///
    /// Lowercase hex digits are also allowed, as ABNF strings are case-insensitive.
    pub const HEXDIG: Self = Self::DIGIT.or(Self::new(b"ABCDEFabcdef"));

    /// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
    pub const SUB_DELIMS: Self = Self::new(b"!$&'()*+,;=");

    /// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
    pub const GEN_DELIMS: Self = Self::new(b":/?#[]@");

    /// `reserved = gen-delims / sub-delims`
    pub const RESERVED: Self = Self::GEN_DELIMS.or(Self::SUB_DELIMS);

    /// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
    pub const UNRESERVED: Self = Self::ALPHA.or(Self::DIGIT).or(Self::new(b"-._~"));

    /// `pct-encoded = "%" HEXDIG HEXDIG`
    pub const PCT_ENCODED: Self = Self::EMPTY.or_pct_encoded();

    /// The first character of `scheme`: `ALPHA`.
    pub(crate) const SCHEME_START: Self = Self::ALPHA;

    /// The rest of `scheme`: `ALPHA / DIGIT / "+" / "-" / "."`.
    pub(crate) const SCHEME_CONTINUE: Self = Self::ALPHA.or(Self::DIGIT).or(Self::new(b"+-."));

    /// The inside of an IP literal: `unreserved / sub-delims / ":"`.
    pub(crate) const IP_LITERAL_INNER: Self =
        Self::UNRESERVED.or(Self::SUB_DELIMS).or(Self::new(b":"));
}

// Rules from RFC 3987.
impl CharSet {
    /// `ucschar`, the non-ASCII characters allowed in IRIs.
    pub const UCSCHAR: Self = Self::EMPTY.or_ucschar();

    /// `iprivate`, the private-use characters allowed in IRI queries.
    pub const IPRIVATE: Self = Self::EMPTY.or_iprivate();

    /// `iunreserved = ALPHA / DIGIT / "-" / "." / "_" / "~" / ucschar`
    pub const IUNRESERVED: Self = Self::UNRESERVED.or(Self::UCSCHAR);

    /// `ipchar = iunreserved / pct-encoded / sub-delims / ":" / "@"`
    pub const IPCHAR: Self = Self::IUNRESERVED
        .or(Self::PCT_ENCODED)
        .or(Self::SUB_DELIMS)
        .or(Self::new(b":@"));

    /// `iuserinfo = *( iunreserved / pct-encoded / sub-delims / ":" )`
    pub const USERINFO: Self = Self::IUNRESERVED
        .or(Self::PCT_ENCODED)
        .or(Self::SUB_DELIMS)
        .or(Self::new(b":"));

    /// `ireg-name = *( iunreserved / pct-encoded / sub-delims )`
    pub const REG_NAME: Self = Self::IUNRESERVED
        .or(Self::PCT_ENCODED)
        .or(Self::SUB_DELIMS);

    /// `ipath`, as a flat class: `"/" / ipchar`.
    pub const PATH: Self = Self::IPCHAR.or(Self::new(b"/"));

    /// `iquery = *( ipchar / iprivate / "/" / "?" )`
    pub const QUERY: Self = Self::IPCHAR.or(Self::IPRIVATE).or(Self::new(b"/?"));

    /// `ifragment = *( ipchar / "/" / "?" )`
    pub const FRAGMENT: Self = Self::IPCHAR.or(Self::new(b"/?"));
}

/// Checks if the given character matches `ucschar` rule.
pub(crate) const fn is_ucschar(c: char) -> bool {
    matches!(
        c as u32,
        0xA0..=0xD7FF
            | 0xF900..=0xFDCF
            | 0xFDF0..=0xFFEF
            | 0x1_0000..=0x1_FFFD
            | 0x2_0000..=0x2_FFFD
            | 0x3_0000..=0x3_FFFD
            | 0x4_0000..=0x4_FFFD
            | 0x5_0000..=0x5_FFFD
            | 0x6_0000..=0x6_FFFD
            | 0x7_0000..=0x7_FFFD
            | 0x8_0000..=0x8_FFFD
            | 0x9_0000..=0x9_FFFD
            | 0xA_0000..=0xA_FFFD
            | 0xB_0000..=0xB_FFFD
            | 0xC_0000..=0xC_FFFD
            | 0xD_0000..=0xD_FFFD
            | 0xE_1000..=0xE_FFFD
    )
}

/// Checks if the given character matches `iprivate` rule.
pub(crate) const fn is_iprivate(c: char) -> bool {
    matches!(
        c as u32,
        0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD
    )
}

/// Returns `true` if the given byte is a UTF-8 continue byte (`10xxxxxx`).
#[inline]
#[must_use]
pub(crate) const fn is_utf8_byte_continue(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

/// Returns the length of the UTF-8 sequence started by the given lead byte.
///
/// Returns `None` for continue bytes and bytes that never appear in UTF-8.
#[must_use]
pub(crate) const fn utf8_sequence_len(b: u8) -> Option<usize> {
    match b {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
