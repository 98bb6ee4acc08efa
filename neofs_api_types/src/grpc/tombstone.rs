use super::refs::ObjectId;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Tombstone {
    #[prost(uint64, tag = "1")]
    pub expiration_epoch: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub split_id: Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub members: Vec<ObjectId>,
}
