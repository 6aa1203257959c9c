//! Byte-exact comparison of stored buffers against their logical values.
//!
//! The `actual` side is an `Option` because a message field may never have
//! been populated. An absent field is equal to an expected value of zero
//! length: unset and explicitly empty are the same thing on the wire. The
//! `expected` side is always materialized.

use crate::{ByteBuffer, encode};

/// Compares a stored buffer with an expected one.
///
/// Returns `true` when `actual` is absent and `expected` is empty, or when
/// both hold the same bytes. Lengths are compared before any byte is read.
#[must_use]
pub fn array_equals(actual: Option<&ByteBuffer>, expected: &ByteBuffer) -> bool {
    let Some(actual) = actual else {
        if !expected.is_empty() {
            tracing::trace!(expected = expected.size(), "absent buffer, expected bytes");
        }
        return expected.is_empty();
    };

    if actual.size() != expected.size() {
        tracing::trace!(
            actual = actual.size(),
            expected = expected.size(),
            "buffer length mismatch"
        );
        return false;
    }

    match actual
        .iter()
        .zip(expected.iter())
        .position(|(a, e)| a != e)
    {
        Some(index) => {
            tracing::trace!(index, "buffer byte mismatch");
            false
        }
        None => true,
    }
}

/// Compares a stored buffer with the UTF-8 encoding of `text`.
///
/// `None` is encoded as the empty string first. Returns `false` if the
/// expected buffer cannot be allocated.
#[must_use]
pub fn string_equals(actual: Option<&ByteBuffer>, text: Option<&str>) -> bool {
    match encode::encode_text(text) {
        Ok(expected) => array_equals(actual, &expected),
        Err(error) => {
            tracing::warn!(%error, "cannot materialize expected string");
            false
        }
    }
}

/// Compares a stored buffer with `data`.
///
/// Returns `false` if the expected buffer cannot be allocated.
#[must_use]
pub fn data_equals(actual: Option<&ByteBuffer>, data: &[u8]) -> bool {
    match encode::encode_bytes(data) {
        Ok(expected) => array_equals(actual, &expected),
        Err(error) => {
            tracing::warn!(%error, "cannot materialize expected data");
            false
        }
    }
}
