use crate::grpc;
use crate::refs::ObjectId;

stable_message! {
    /// Marks `members` as removed until `expiration_epoch`.
    pub struct Tombstone => grpc::tombstone::Tombstone {
        expiration_epoch: u64 = 1 => uint64,
        split_id: Vec<u8> = 2 => bytes as "splitID",
        members: Vec<ObjectId> = 3 => repeated_message,
    }
}
