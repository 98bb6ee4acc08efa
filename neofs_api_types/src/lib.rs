//! Message types of the storage network API.
//!
//! Every message encodes deterministically ([`StableMarshal`]), decodes through its
//! transport mirror in [`grpc`] ([`Unmarshal`]), and maps to and from JSON ([`ToJson`], [`FromJson`]).

#[macro_use]
mod macros;

pub mod convert;
pub mod enums;
pub mod field;
pub mod grpc;
pub mod json;
pub mod signature;
pub mod unmarshal;

pub mod acl;
pub mod audit;
pub mod container;
pub mod link;
pub mod lock;
pub mod netmap;
pub mod object;
pub mod refs;
pub mod session;
pub mod status;
pub mod storagegroup;
pub mod tombstone;

pub use convert::{FromGrpc, IntoGrpc};
pub use enums::ProtoEnum;
pub use json::{FromJson, ToJson};
pub use neofs_api_proto::{Error, Result, StableMarshal, StableSize};
pub use unmarshal::Unmarshal;
