//! Percent encoding.
//!
//! [`pct_encode`] and [`pct_decode`] convert between raw text and percent-encoded
//! text. Both take a pattern of characters which are allowed to appear raw:
//!
//! * [`CharSet`] values, such as [`CharSet::IUNRESERVED`] (the default set,
//!   returned by `CharSet::default()`), or unions of them.
//! * Any `Fn(char) -> bool` closure.
//!
//! A set which [allows percent-encoded triplets][`CharSet::or_pct_encoded`] lets `%`
//! through the encoder as is, so already encoded triplets are not encoded twice.
//!
//! # Examples
//!
//! ```
//! use nose_iri::{pct_decode, pct_encode, CharSet};
//!
//! let raw = "r\u{E9}sum\u{E9} 1/2";
//! assert_eq!(pct_encode(raw, CharSet::UNRESERVED), "r%C3%A9sum%C3%A9%201%2F2");
//! assert_eq!(pct_encode(raw, CharSet::default()), "r\u{E9}sum\u{E9}%201%2F2");
//!
//! let decoded = pct_decode("r%C3%A9sum%c3%a9%201%2F2", CharSet::default());
//! assert_eq!(decoded, "r\u{E9}sum\u{E9}%201%2F2");
//! ```

use alloc::string::String;

use crate::normalize::normalize_pct_case;
use crate::parser::char::{is_utf8_byte_continue, utf8_sequence_len, CharSet};
use crate::parser::str::{decode_xdigits2, find_split_hole};

/// Uppercase hexadecimal digits.
const HEXDIG_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A pattern of characters allowed to appear unencoded.
pub trait CharPattern {
    /// Returns `true` if the character is allowed to appear unencoded.
    fn matches(&self, c: char) -> bool;
}

impl CharPattern for CharSet {
    #[inline]
    fn matches(&self, c: char) -> bool {
        if c == '%' {
            self.allows_pct_encoded()
        } else {
            self.allows(c)
        }
    }
}

impl<F: Fn(char) -> bool> CharPattern for F {
    #[inline]
    fn matches(&self, c: char) -> bool {
        self(c)
    }
}

/// Writes the percent-encoded triplet of the byte, with uppercase hex digits.
#[inline]
pub(crate) fn push_pct_encoded_byte(buf: &mut String, b: u8) {
    buf.push('%');
    buf.push(char::from(HEXDIG_UPPER[usize::from(b >> 4)]));
    buf.push(char::from(HEXDIG_UPPER[usize::from(b & 0x0F)]));
}

/// Writes the percent-encoded UTF-8 bytes of the character.
#[inline]
fn push_pct_encoded_char(buf: &mut String, c: char) {
    let mut utf8 = [0_u8; 4];
    c.encode_utf8(&mut utf8)
        .bytes()
        .for_each(|b| push_pct_encoded_byte(buf, b));
}

/// Percent-encodes every character not matched by the pattern.
///
/// The input is processed per character. A character matched by `allowed` is written
/// as is; any other character is written as percent-encoded triplets of its UTF-8
/// bytes. Hex digits of all triplets in the result are uppercase.
///
/// Pass `CharSet::default()` (that is [`CharSet::IUNRESERVED`]) for the default set.
///
/// # Examples
///
/// ```
/// use nose_iri::{pct_encode, CharSet};
///
/// // `%` is encoded unless the set allows percent-encoded triplets.
/// assert_eq!(pct_encode("100%", CharSet::default()), "100%25");
/// assert_eq!(
///     pct_encode("%e9t\u{E9}", CharSet::UNRESERVED.or_pct_encoded()),
///     "%E9t%C3%A9"
/// );
///
/// // Closures are patterns too.
/// assert_eq!(pct_encode("a b", |c: char| c != ' '), "a%20b");
/// ```
#[must_use]
pub fn pct_encode<P: CharPattern>(s: &str, allowed: P) -> String {
    let mut buf = String::with_capacity(s.len());
    for c in s.chars() {
        if allowed.matches(c) {
            buf.push(c);
        } else {
            push_pct_encoded_char(&mut buf, c);
        }
    }

    if allowed.matches('%') {
        // Triplets passed through as is may have lowercase hex digits.
        normalize_pct_case(&buf)
    } else {
        buf
    }
}

/// Percent-decodes the triplets whose decoded character is matched by the pattern.
///
/// Decoded octets are assembled into UTF-8 characters. A complete character matched by
/// `allowed` is written decoded; any other character, an incomplete sequence, and an
/// octet which is not valid UTF-8 stay percent-encoded. Nothing is dropped.
/// Characters outside percent-encoded triplets (including a `%` which does not start a
/// valid triplet) are written as is.
///
/// `%25` is never decoded, since a raw `%` would change the meaning of the following
/// characters. For the same reason, a hex digit is not decoded right after a `%` or
/// after a `%` and one hex digit: `%%34%31` decodes to `%%341`, not `%41`.
///
/// Hex digits of all triplets in the result are uppercase.
///
/// Pass `CharSet::default()` (that is [`CharSet::IUNRESERVED`]) for the default set.
///
/// # Examples
///
/// ```
/// use nose_iri::{pct_decode, CharSet};
///
/// // `%2F` is not `iunreserved`, so it is left encoded.
/// assert_eq!(pct_decode("%7euser%2fdir", CharSet::default()), "~user%2Fdir");
///
/// // An incomplete UTF-8 sequence is left encoded.
/// assert_eq!(pct_decode("%C3%A9%C3", CharSet::default()), "\u{E9}%C3");
/// ```
#[must_use]
pub fn pct_decode<P: CharPattern>(s: &str, allowed: P) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut assembler = Utf8Assembler::new();

    let mut rest = s;
    while let Some((prefix, after_percent)) = find_split_hole(rest, b'%') {
        if !prefix.is_empty() {
            assembler.flush(&mut buf);
            buf.push_str(prefix);
        }
        match decode_xdigits2(after_percent.as_bytes()) {
            Some(byte) => {
                assembler.push(byte, &mut buf, &allowed);
                // Two hex digits are ASCII, so this is a char boundary.
                rest = &after_percent[2..];
            }
            None => {
                assembler.flush(&mut buf);
                buf.push('%');
                rest = after_percent;
            }
        }
    }
    assembler.flush(&mut buf);
    buf.push_str(rest);

    buf
}

/// Assembler of percent-decoded octets into UTF-8 characters.
#[derive(Debug, Clone, Copy)]
struct Utf8Assembler {
    /// Octets read so far.
    bytes: [u8; 4],
    /// Number of octets read so far.
    len: usize,
    /// Expected length of the current sequence.
    expected: usize,
}

impl Utf8Assembler {
    /// Creates a new empty assembler.
    #[inline]
    #[must_use]
    fn new() -> Self {
        Self {
            bytes: [0; 4],
            len: 0,
            expected: 0,
        }
    }

    /// Writes the pending octets in percent-encoded form, and resets the assembler.
    fn flush(&mut self, buf: &mut String) {
        self.bytes[..self.len]
            .iter()
            .for_each(|&b| push_pct_encoded_byte(buf, b));
        self.len = 0;
        self.expected = 0;
    }

    /// Feeds a decoded octet.
    fn push<P: CharPattern>(&mut self, byte: u8, buf: &mut String, allowed: &P) {
        if is_utf8_byte_continue(byte) {
            if self.len == 0 {
                // A continue byte without a leading byte.
                push_pct_encoded_byte(buf, byte);
                return;
            }
            self.bytes[self.len] = byte;
            self.len += 1;
            if self.len == self.expected {
                self.complete(buf, allowed);
            }
            return;
        }

        // Any other byte starts a new character.
        self.flush(buf);
        match utf8_sequence_len(byte) {
            Some(1) => write_decoded(buf, char::from(byte), allowed),
            Some(expected) => {
                self.bytes[0] = byte;
                self.len = 1;
                self.expected = expected;
            }
            None => push_pct_encoded_byte(buf, byte),
        }
    }

    /// Writes the complete sequence, and resets the assembler.
    fn complete<P: CharPattern>(&mut self, buf: &mut String, allowed: &P) {
        match core::str::from_utf8(&self.bytes[..self.len]) {
            Ok(decoded) => {
                let mut chars = decoded.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    self.len = 0;
                    self.expected = 0;
                    write_decoded(buf, c, allowed);
                    return;
                }
                self.flush(buf);
            }
            // Overlong forms, surrogates, and out-of-range code points.
            Err(_) => self.flush(buf),
        }
    }
}

/// Writes the decoded character raw if allowed, or percent-encoded if not.
///
/// `%` and a hex digit following a `%` (and one hex digit) already written are never
/// decoded, since they would form a new triplet.
fn write_decoded<P: CharPattern>(buf: &mut String, c: char, allowed: &P) {
    let forms_triplet = c == '%' || (c.is_ascii_hexdigit() && ends_with_partial_triplet(buf));
    if !forms_triplet && allowed.matches(c) {
        buf.push(c);
    } else {
        push_pct_encoded_char(buf, c);
    }
}

/// Returns `true` if the string ends with `%` or with `%` followed by a hex digit.
fn ends_with_partial_triplet(s: &str) -> bool {
    match s.as_bytes() {
        [.., b'%'] => true,
        [.., b'%', last] => last.is_ascii_hexdigit(),
        _ => false,
    }
}
