//! Storage groups: sets of objects audited together.

use crate::grpc;
use crate::refs::{Checksum, ObjectId};

stable_message! {
    /// `validation_hash` is the homomorphic hash over the payloads of `members`.
    pub struct StorageGroup => grpc::storagegroup::StorageGroup {
        validation_data_size: u64 = 1 => uint64,
        validation_hash: Option<Checksum> = 2 => message,
        expiration_epoch: u64 = 3 => uint64,
        members: Vec<ObjectId> = 4 => repeated_message,
    }
}
