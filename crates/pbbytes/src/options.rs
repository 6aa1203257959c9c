/// Configuration for [`Encoder`](crate::Encoder).
///
/// # Examples
///
/// ```rust
/// use pbbytes::{EncodeOptions, Encoder, SizeWidth};
///
/// let encoder = Encoder::new(EncodeOptions {
///     size_width: SizeWidth::U16,
/// });
/// assert!(encoder.encode_bytes(&[0; 70_000]).is_err());
/// ```
///
/// # Default
///
/// A 32-bit `size` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Width of the length field the wire encoder stores next to the bytes.
    ///
    /// Payloads longer than [`SizeWidth::max_len`] are rejected with
    /// [`AllocError::SizeOverflow`](crate::AllocError::SizeOverflow) rather
    /// than having their length truncated.
    ///
    /// # Default
    ///
    /// [`SizeWidth::U32`]
    pub size_width: SizeWidth,
}

/// Integer width of a buffer's `size` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeWidth {
    /// 8-bit sizes, for the smallest embedded message layouts.
    U8,
    /// 16-bit sizes.
    U16,
    /// 32-bit sizes.
    #[default]
    U32,
}

impl SizeWidth {
    /// Largest payload length this width can represent.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            SizeWidth::U8 => u8::MAX as usize,
            SizeWidth::U16 => u16::MAX as usize,
            // usize is narrower than u32 only on 16-bit targets
            SizeWidth::U32 => {
                if usize::BITS < u32::BITS {
                    usize::MAX
                } else {
                    u32::MAX as usize
                }
            }
        }
    }
}
