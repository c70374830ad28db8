use thiserror::Error;

/// An invalid UTF-8 sequence was encountered.
///
/// Returned by [`validate`](crate::validate); the stepwise
/// [`decode`](crate::decode) reports the same condition through the
/// [`UNICODE_ERROR`](crate::UNICODE_ERROR) sentinel instead, so a scan can
/// keep going.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid utf-8 byte {byte:#04x} at offset {valid_up_to}")]
pub struct Utf8Error {
    /// Offset of the first byte of the rejected sequence. Everything before
    /// it is well-formed.
    pub valid_up_to: usize,
    /// The byte at that offset.
    pub byte: u8,
}
