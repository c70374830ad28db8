//! A single-code-point UTF-8 encoder and decoder.
//!
//! The codec converts between Unicode code points and their byte-level UTF-8
//! encoding one step at a time. Callers own the buffers and drive the scan:
//! [`decode`] consumes one sequence from the front of a slice and reports how
//! far it got, [`encode`] writes one sequence into a caller-provided buffer,
//! and [`code_points`] wraps the stepwise decode into an iterator. Nothing
//! here allocates, blocks, or keeps state between calls.
//!
//! Malformed input never aborts a pass. Decoding a bad sequence yields the
//! [`UNICODE_ERROR`] sentinel and advances exactly one byte so the scan can
//! resynchronize; encoding an invalid code point (a surrogate half, or a
//! value past [`UNICODE_MAX_VALUE`]) writes the replacement character
//! instead. Callers that have already validated their input can use the
//! unchecked fast path, [`decode_unchecked`].

#![no_std]

#[cfg(any(test, feature = "lossy"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_points;
mod codepoint;
mod decode;
mod encode;
mod error;

#[cfg(feature = "lossy")]
mod lossy;

#[cfg(test)]
mod tests;

pub use code_points::{CodePoints, code_points};
pub use codepoint::{
    UNICODE_ERROR, UNICODE_MAX_VALUE, UNICODE_REPLACEMENT_CHARACTER, UNICODE_SURROGATE_HI,
    UNICODE_SURROGATE_LO, UTF8_ENCODE_BUF_LEN, UTF8_REPLACEMENT_CHAR, is_valid_code_point,
};
pub use decode::{code_point_count, decode, decode_unchecked, is_start_byte, sequence_len, validate};
pub use encode::{encode, encoded_len};
pub use error::Utf8Error;
#[cfg(feature = "lossy")]
pub use lossy::decode_lossy;
