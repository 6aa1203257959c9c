//! Building [`ByteBuffer`]s from text and binary values.
//!
//! Text is always encoded as UTF-8. A null text value (`None`) is normalized
//! to the empty string, so both produce a zero-length buffer.
//!
//! # Example
//!
//! ```
//! use pbbytes::encode::{encode_bytes, encode_text};
//!
//! let buffer = encode_bytes(&[0x01, 0x02]).unwrap();
//! assert_eq!(buffer.as_bytes(), &[0x01, 0x02]);
//!
//! assert_eq!(encode_text(None).unwrap().size(), 0);
//! assert_eq!(encode_text(Some("")).unwrap().size(), 0);
//! ```

use alloc::vec::Vec;

use crate::{AllocError, ByteBuffer, EncodeOptions};

/// Encoder with configurable limits.
///
/// The free functions in this module use `Encoder::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Creates an encoder with the given options.
    #[must_use]
    pub const fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// The options this encoder was created with.
    #[must_use]
    pub const fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Copies `data` verbatim into a buffer sized exactly to `data.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the length exceeds the configured size width
    /// or the allocator cannot satisfy the request.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<ByteBuffer, AllocError> {
        let requested = data.len();
        let max = self.options.size_width.max_len();
        if requested > max {
            tracing::warn!(requested, max, "buffer length exceeds size width");
            return Err(AllocError::SizeOverflow { requested, max });
        }

        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(requested).is_err() {
            tracing::warn!(requested, "failed to allocate buffer");
            return Err(AllocError::OutOfMemory { requested });
        }
        bytes.extend_from_slice(data);

        Ok(ByteBuffer::from_exact(bytes))
    }

    /// Encodes `value` as UTF-8, treating `None` as the empty string.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode_bytes`].
    pub fn encode_text(&self, value: Option<&str>) -> Result<ByteBuffer, AllocError> {
        self.encode_bytes(value.unwrap_or_default().as_bytes())
    }

    /// Shorthand for `encode_text(Some(value))`.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode_bytes`].
    pub fn encode_str(&self, value: &str) -> Result<ByteBuffer, AllocError> {
        self.encode_text(Some(value))
    }
}

/// Copies `data` into a new buffer using the default options.
///
/// # Errors
///
/// Returns [`AllocError`] only when the buffer cannot be allocated.
pub fn encode_bytes(data: &[u8]) -> Result<ByteBuffer, AllocError> {
    Encoder::default().encode_bytes(data)
}

/// Encodes text as UTF-8 using the default options; `None` encodes as empty.
///
/// # Errors
///
/// Returns [`AllocError`] only when the buffer cannot be allocated.
pub fn encode_text(value: Option<&str>) -> Result<ByteBuffer, AllocError> {
    Encoder::default().encode_text(value)
}

/// Encodes a string as UTF-8 using the default options.
///
/// # Errors
///
/// Returns [`AllocError`] only when the buffer cannot be allocated.
pub fn encode_str(value: &str) -> Result<ByteBuffer, AllocError> {
    Encoder::default().encode_str(value)
}
