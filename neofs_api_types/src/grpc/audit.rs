use super::refs::{ContainerId, ObjectId, Version};

#[derive(Clone, PartialEq, prost::Message)]
pub struct DataAuditResult {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(fixed64, tag = "2")]
    pub audit_epoch: u64,
    #[prost(message, optional, tag = "3")]
    pub container_id: Option<ContainerId>,
    #[prost(bytes = "vec", tag = "4")]
    pub public_key: Vec<u8>,
    #[prost(bool, tag = "5")]
    pub complete: bool,
    #[prost(uint32, tag = "6")]
    pub requests: u32,
    #[prost(uint32, tag = "7")]
    pub retries: u32,
    #[prost(message, repeated, tag = "8")]
    pub pass_sg: Vec<ObjectId>,
    #[prost(message, repeated, tag = "9")]
    pub fail_sg: Vec<ObjectId>,
    #[prost(uint32, tag = "10")]
    pub hit: u32,
    #[prost(uint32, tag = "11")]
    pub miss: u32,
    #[prost(uint32, tag = "12")]
    pub fail: u32,
    #[prost(bytes = "vec", repeated, tag = "13")]
    pub pass_nodes: Vec<Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "14")]
    pub fail_nodes: Vec<Vec<u8>>,
}
