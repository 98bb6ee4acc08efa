//! # Field encoders
//!
//! Every encoder family comes as a pair:
//! - `*_size(field, value)` returns the exact byte count the field occupies, tag included.
//! - `*_marshal(field, buf, value)` writes that many bytes to the front of `buf`
//!   and returns the count written.
//!
//! Singular fields holding their type's zero value occupy zero bytes.
//! Elements of repeated fields, and members of a oneof, are always written.
//!
//! ```text
//! varint field:           tag(field, 0)   varint(value)
//! fixed64 field:          tag(field, 1)   [u8; 8] little-endian
//! length-delimited field: tag(field, 2)   varint(len)   [u8; len]
//! nested message:         tag(field, 2)   varint(len)   message's own fields
//! repeated field:         one of the above per element, never packed
//! ```

mod delimited;
mod fields;
mod nested;
mod repeated;
mod scalar;

pub use delimited::*;
pub use fields::*;
pub use nested::*;
pub use repeated::*;
pub use scalar::*;
