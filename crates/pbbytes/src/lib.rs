//! Length-prefixed byte buffers for protobuf `bytes` and `string` fields.
//!
//! The [`encode`] functions turn text or binary values into an owned
//! [`ByteBuffer`] (a `size` plus exactly `size` bytes), ready to be framed by a
//! wire encoder. The [`compare`] functions check a stored buffer against the
//! logical value it is supposed to hold, treating a field that was never
//! populated the same as one holding an empty value.
//!
//! ```rust
//! use pbbytes::{encode_text, string_equals};
//!
//! let buffer = encode_text(Some("hello")).unwrap();
//! assert_eq!(buffer.size(), 5);
//! assert!(string_equals(Some(&buffer), Some("hello")));
//!
//! // A field that was never set matches an empty or null value.
//! assert!(string_equals(None, None));
//! assert!(string_equals(None, Some("")));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
pub mod compare;
pub mod encode;
mod error;
mod options;
pub mod session;


pub use buffer::ByteBuffer;
pub use compare::{array_equals, data_equals, string_equals};
pub use encode::{Encoder, encode_bytes, encode_str, encode_text};
pub use error::AllocError;
pub use options::{EncodeOptions, SizeWidth};
pub use session::{EventType, IdentifierProvider, SessionEvent, TimeProvider};
