use super::refs::{Checksum, ObjectId};

#[derive(Clone, PartialEq, prost::Message)]
pub struct StorageGroup {
    #[prost(uint64, tag = "1")]
    pub validation_data_size: u64,
    #[prost(message, optional, tag = "2")]
    pub validation_hash: Option<Checksum>,
    #[prost(uint64, tag = "3")]
    pub expiration_epoch: u64,
    #[prost(message, repeated, tag = "4")]
    pub members: Vec<ObjectId>,
}
