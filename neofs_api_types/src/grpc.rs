//! Transport mirrors of the message types, in the shape protobuf code generation emits
//! them. prost encodes and decodes these. Field names and numbers match the message types
//! one to one; enum fields are carried as raw `int32`.

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
