//! Single code point encoding.

use crate::codepoint::{UTF8_ENCODE_BUF_LEN, UTF8_REPLACEMENT_CHAR, is_valid_code_point};

/// Number of bytes [`encode`] writes for `cp`.
///
/// Invalid code points count as the three-byte replacement character, so the
/// result always matches what [`encode`] actually writes.
#[inline]
#[must_use]
pub const fn encoded_len(cp: u32) -> usize {
    if !is_valid_code_point(cp) {
        UTF8_REPLACEMENT_CHAR.len()
    } else if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x1_0000 {
        3
    } else {
        4
    }
}

/// Encodes `cp` into the front of `dst` and returns the number of bytes
/// written.
///
/// Invalid code points (surrogate halves, values past
/// [`UNICODE_MAX_VALUE`](crate::UNICODE_MAX_VALUE)) are not reported:
/// they write the encoding of U+FFFD and return 3, so an encoding pass
/// never aborts on a bad scalar.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`UTF8_ENCODE_BUF_LEN`] bytes. The
/// capacity contract is deliberately wider than any sequence the encoder
/// emits; see [`UTF8_ENCODE_BUF_LEN`].
pub fn encode(dst: &mut [u8], cp: u32) -> usize {
    assert!(
        dst.len() >= UTF8_ENCODE_BUF_LEN,
        "encode destination shorter than UTF8_ENCODE_BUF_LEN"
    );

    if !is_valid_code_point(cp) {
        dst[..3].copy_from_slice(&UTF8_REPLACEMENT_CHAR);
        return 3;
    }

    if cp < 0x80 {
        dst[0] = cp as u8;
        1
    } else if cp < 0x800 {
        dst[0] = 0xC0 | (cp >> 6) as u8;
        dst[1] = 0x80 | (cp & 0x3F) as u8;
        2
    } else if cp < 0x1_0000 {
        dst[0] = 0xE0 | (cp >> 12) as u8;
        dst[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        dst[2] = 0x80 | (cp & 0x3F) as u8;
        3
    } else {
        dst[0] = 0xF0 | (cp >> 18) as u8;
        dst[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
        dst[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        dst[3] = 0x80 | (cp & 0x3F) as u8;
        4
    }
}
