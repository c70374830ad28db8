//! Code point constants and validity.

/// Highest valid Unicode code point.
pub const UNICODE_MAX_VALUE: u32 = 0x10_FFFF;

/// Low end of the surrogate range, reserved for UTF-16 pairs and never valid
/// as a standalone code point.
pub const UNICODE_SURROGATE_LO: u32 = 0xD800;

/// High end of the surrogate range.
pub const UNICODE_SURROGATE_HI: u32 = 0xDFFF;

/// Code point substituted by [`encode`](crate::encode) for invalid input.
pub const UNICODE_REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Sentinel yielded by [`decode`](crate::decode) for a malformed sequence.
///
/// Not a code point itself, so it can never collide with decoded data.
pub const UNICODE_ERROR: u32 = 0xFFFF_FFFF;

/// The UTF-8 encoding of [`UNICODE_REPLACEMENT_CHARACTER`].
pub const UTF8_REPLACEMENT_CHAR: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Minimum destination capacity required by [`encode`](crate::encode).
///
/// Four bytes cover every code point up to [`UNICODE_MAX_VALUE`]; the extra
/// margin is kept from the original UTF-8 definition, which allowed
/// sequences of up to six bytes. No code point ever encodes to more than
/// four.
pub const UTF8_ENCODE_BUF_LEN: usize = 6;

/// Returns `true` iff `cp` is a valid code point: at most
/// [`UNICODE_MAX_VALUE`] and outside the surrogate range.
#[inline]
#[must_use]
pub const fn is_valid_code_point(cp: u32) -> bool {
    !((cp >= UNICODE_SURROGATE_LO && cp <= UNICODE_SURROGATE_HI) || cp > UNICODE_MAX_VALUE)
}
