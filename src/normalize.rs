//! Normalization.
//!
//! This crate performs only the normalizations that never change what an IRI
//! identifies:
//!
//! * Hex digits in percent-encoded triplets are uppercased ([`normalize_pct_case`]).
//! * Schemes are lowercased (they are ASCII-only).
//! * Hosts are lowercased, including non-ASCII characters.
//!
//! Dot segments in paths are removed only during [resolution][`crate::types::Iri::resolve`],
//! by [`remove_dot_segments`].
//!
//! # Examples
//!
//! ```
//! use nose_iri::normalize::normalize_pct_case;
//!
//! assert_eq!(normalize_pct_case("%7bfoo%7D"), "%7Bfoo%7D");
//! // Invalid triplets are left as is.
//! assert_eq!(normalize_pct_case("%zz%a"), "%zz%a");
//! ```

mod remove_dot_segments;

use alloc::string::String;

use crate::parser::str::{decode_xdigits2, find_split_hole};
use crate::percent_encode::push_pct_encoded_byte;

pub use self::remove_dot_segments::{merge_paths, remove_dot_segments};

/// Uppercases the hex digits of every percent-encoded triplet.
///
/// Characters outside triplets (including the case of decoded characters) are not
/// changed, and nothing is decoded.
#[must_use]
pub fn normalize_pct_case(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut rest = s;
    while let Some((prefix, after_percent)) = find_split_hole(rest, b'%') {
        buf.push_str(prefix);
        match decode_xdigits2(after_percent.as_bytes()) {
            Some(byte) => {
                push_pct_encoded_byte(&mut buf, byte);
                rest = &after_percent[2..];
            }
            None => {
                buf.push('%');
                rest = after_percent;
            }
        }
    }
    buf.push_str(rest);

    buf
}

/// Normalizes a valid scheme.
#[inline]
#[must_use]
pub(crate) fn normalize_scheme(scheme: &str) -> String {
    scheme.to_ascii_lowercase()
}

/// Normalizes a valid host.
///
/// The host is lowercased first, so that the hex digits of triplets end up uppercase.
#[inline]
#[must_use]
pub(crate) fn normalize_host(host: &str) -> String {
    normalize_pct_case(&host.to_lowercase())
}
