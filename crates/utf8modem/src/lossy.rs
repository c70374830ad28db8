//! Lossy conversion of arbitrary bytes into text.

use alloc::string::String;

use crate::code_points::code_points;
use crate::codepoint::UNICODE_ERROR;

/// Decodes `bytes`, substituting U+FFFD for every rejected byte.
///
/// Each malformed byte becomes its own replacement character: a three-byte
/// sequence truncated after two bytes produces two markers, not one. Callers
/// that want the maximal-subpart policy should use
/// `String::from_utf8_lossy` instead; this adapter mirrors the one-byte
/// resynchronization of [`decode`](crate::decode) so the output length in
/// characters always matches the scan's unit count.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for cp in code_points(bytes) {
        if cp == UNICODE_ERROR {
            out.push(char::REPLACEMENT_CHARACTER);
        } else {
            // `decode` only yields scalar values or the sentinel.
            out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    out
}
