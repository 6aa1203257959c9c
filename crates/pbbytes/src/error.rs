use thiserror::Error;

/// The encoder could not produce a buffer.
///
/// This is the only failure the encoder reports; every text and binary input
/// is otherwise valid, including empty and null values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator refused to provide `requested` bytes.
    #[error("out of memory allocating {requested} bytes")]
    OutOfMemory {
        /// Length of the payload that was being copied.
        requested: usize,
    },
    /// The payload length does not fit the configured wire `size` field.
    #[error("{requested} bytes exceed the maximum buffer size of {max}")]
    SizeOverflow {
        /// Length of the payload that was being copied.
        requested: usize,
        /// Largest length the configured size width can represent.
        max: usize,
    },
}

impl AllocError {
    /// Length of the payload the failed allocation was for.
    #[must_use]
    pub fn requested(&self) -> usize {
        match *self {
            AllocError::OutOfMemory { requested } | AllocError::SizeOverflow { requested, .. } => {
                requested
            }
        }
    }
}
