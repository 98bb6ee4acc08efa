use super::refs::{ContainerId, OwnerId, Signature, Version};

#[derive(Clone, PartialEq, prost::Message)]
pub struct HeaderFilter {
    #[prost(int32, tag = "1")]
    pub header_type: i32,
    #[prost(int32, tag = "2")]
    pub match_type: i32,
    #[prost(string, tag = "3")]
    pub key: String,
    #[prost(string, tag = "4")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Target {
    #[prost(int32, tag = "1")]
    pub role: i32,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub keys: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Record {
    #[prost(int32, tag = "1")]
    pub operation: i32,
    #[prost(int32, tag = "2")]
    pub action: i32,
    #[prost(message, repeated, tag = "3")]
    pub filters: Vec<HeaderFilter>,
    #[prost(message, repeated, tag = "4")]
    pub targets: Vec<Target>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Table {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub container_id: Option<ContainerId>,
    #[prost(message, repeated, tag = "3")]
    pub records: Vec<Record>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TokenLifetime {
    #[prost(uint64, tag = "1")]
    pub exp: u64,
    #[prost(uint64, tag = "2")]
    pub nbf: u64,
    #[prost(uint64, tag = "3")]
    pub iat: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BearerTokenBody {
    #[prost(message, optional, tag = "1")]
    pub eacl_table: Option<Table>,
    #[prost(message, optional, tag = "2")]
    pub owner_id: Option<OwnerId>,
    #[prost(message, optional, tag = "3")]
    pub lifetime: Option<TokenLifetime>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BearerToken {
    #[prost(message, optional, tag = "1")]
    pub body: Option<BearerTokenBody>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
}
