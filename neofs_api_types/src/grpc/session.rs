use super::acl::BearerToken;
use super::refs::{Address, ContainerId, OwnerId, Signature, Version};
use super::status::Status;

#[derive(Clone, PartialEq, prost::Message)]
pub struct ObjectSessionContext {
    #[prost(int32, tag = "1")]
    pub verb: i32,
    #[prost(message, optional, tag = "2")]
    pub address: Option<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ContainerSessionContext {
    #[prost(int32, tag = "1")]
    pub verb: i32,
    #[prost(bool, tag = "2")]
    pub wildcard: bool,
    #[prost(message, optional, tag = "3")]
    pub container_id: Option<ContainerId>,
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
pub struct SessionTokenBody {
    #[prost(bytes = "vec", tag = "1")]
    pub id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub owner_id: Option<OwnerId>,
    #[prost(message, optional, tag = "3")]
    pub lifetime: Option<TokenLifetime>,
    #[prost(bytes = "vec", tag = "4")]
    pub session_key: Vec<u8>,
    #[prost(oneof = "session_token_body::Context", tags = "5, 6")]
    pub context: Option<session_token_body::Context>,
}

pub mod session_token_body {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Context {
        #[prost(message, tag = "5")]
        Object(super::ObjectSessionContext),
        #[prost(message, tag = "6")]
        Container(super::ContainerSessionContext),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SessionToken {
    #[prost(message, optional, tag = "1")]
    pub body: Option<SessionTokenBody>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct XHeader {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RequestMetaHeader {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(uint64, tag = "2")]
    pub epoch: u64,
    #[prost(uint32, tag = "3")]
    pub ttl: u32,
    #[prost(message, repeated, tag = "4")]
    pub x_headers: Vec<XHeader>,
    #[prost(message, optional, tag = "5")]
    pub session_token: Option<SessionToken>,
    #[prost(message, optional, tag = "6")]
    pub bearer_token: Option<BearerToken>,
    #[prost(message, optional, tag = "7")]
    pub origin: Option<Box<RequestMetaHeader>>,
    #[prost(uint64, tag = "8")]
    pub magic_number: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResponseMetaHeader {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(uint64, tag = "2")]
    pub epoch: u64,
    #[prost(uint32, tag = "3")]
    pub ttl: u32,
    #[prost(message, repeated, tag = "4")]
    pub x_headers: Vec<XHeader>,
    #[prost(message, optional, tag = "5")]
    pub origin: Option<Box<ResponseMetaHeader>>,
    #[prost(message, optional, tag = "6")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RequestVerificationHeader {
    #[prost(message, optional, tag = "1")]
    pub body_signature: Option<Signature>,
    #[prost(message, optional, tag = "2")]
    pub meta_signature: Option<Signature>,
    #[prost(message, optional, tag = "3")]
    pub origin_signature: Option<Signature>,
    #[prost(message, optional, tag = "4")]
    pub origin: Option<Box<RequestVerificationHeader>>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResponseVerificationHeader {
    #[prost(message, optional, tag = "1")]
    pub body_signature: Option<Signature>,
    #[prost(message, optional, tag = "2")]
    pub meta_signature: Option<Signature>,
    #[prost(message, optional, tag = "3")]
    pub origin_signature: Option<Signature>,
    #[prost(message, optional, tag = "4")]
    pub origin: Option<Box<ResponseVerificationHeader>>,
}
