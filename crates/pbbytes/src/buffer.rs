use alloc::vec::Vec;
use core::{fmt, ops::Deref};

use bstr::BStr;

/// An owned, immutable `bytes` payload: a `size` and exactly `size` bytes.
///
/// Buffers are only created by the [`encode`](crate::encode) functions, which
/// size the allocation to the input exactly. The contents never change after
/// construction and the allocation is released when the buffer is dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Wraps bytes the encoder has already copied into an exact allocation.
    pub(crate) fn from_exact(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of bytes held, i.e. the value written as the wire length prefix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the buffer holds zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Releases the buffer, handing its storage to the caller.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<str> for ByteBuffer {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("size", &self.size())
            .field("bytes", &BStr::new(&self.bytes))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.bytes)
    }
}
