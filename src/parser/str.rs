//! Functions for common string operations.

/// Returns the first position of the given byte in the bytes.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the last position of the given byte in the bytes.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Splits the string at the first occurrence of the byte, and removes the byte.
///
/// # Precondition
///
/// `needle` should be ASCII.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] `needle` should be ASCII");
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Decodes two hexadecimal digits at the head of the bytes.
///
/// Returns `None` if the bytes do not start with two hex digits.
#[inline]
#[must_use]
pub(crate) fn decode_xdigits2(bytes: &[u8]) -> Option<u8> {
    /// Decodes a single hexadecimal digit.
    fn xdigit(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    match bytes {
        [upper, lower, ..] => Some((xdigit(*upper)? << 4) | xdigit(*lower)?),
        _ => None,
    }
}
