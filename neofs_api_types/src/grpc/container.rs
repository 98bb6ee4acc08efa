use super::netmap::PlacementPolicy;
use super::refs::{OwnerId, Version};

#[derive(Clone, PartialEq, prost::Message)]
pub struct ContainerAttribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Container {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub owner_id: Option<OwnerId>,
    #[prost(bytes = "vec", tag = "3")]
    pub nonce: Vec<u8>,
    #[prost(uint32, tag = "4")]
    pub basic_acl: u32,
    #[prost(message, repeated, tag = "5")]
    pub attributes: Vec<ContainerAttribute>,
    #[prost(message, optional, tag = "6")]
    pub placement_policy: Option<PlacementPolicy>,
}
