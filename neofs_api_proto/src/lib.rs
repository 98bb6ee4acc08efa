//! Stable protobuf wire encoding for the storage network API.
//!
//! Messages implement [`StableSize`] and [`StableMarshal`] by calling the field encoders in
//! [`proto`] in ascending field-number order. The result is byte-identical to what any
//! conforming protobuf encoder emits for the same field values, which lets signatures be
//! computed over, and checked against, the encoded bytes.

pub mod config;
mod error;
pub mod pool;
pub mod proto;
pub mod signature;
mod stable;
pub mod varint;
pub mod wire;

pub use config::{DecodeConfig, PoolConfig};
pub use error::*;
pub use pool::BufferPool;
pub use stable::*;
