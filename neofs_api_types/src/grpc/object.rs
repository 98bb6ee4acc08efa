use super::refs::{Address, Checksum, ContainerId, ObjectId, OwnerId, Signature, Version};
use super::session::SessionToken;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShortHeader {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(uint64, tag = "2")]
    pub creation_epoch: u64,
    #[prost(message, optional, tag = "3")]
    pub owner_id: Option<OwnerId>,
    #[prost(int32, tag = "4")]
    pub object_type: i32,
    #[prost(uint64, tag = "5")]
    pub payload_length: u64,
    #[prost(message, optional, tag = "6")]
    pub payload_hash: Option<Checksum>,
    #[prost(message, optional, tag = "7")]
    pub homomorphic_hash: Option<Checksum>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Header {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub container_id: Option<ContainerId>,
    #[prost(message, optional, tag = "3")]
    pub owner_id: Option<OwnerId>,
    #[prost(uint64, tag = "4")]
    pub creation_epoch: u64,
    #[prost(uint64, tag = "5")]
    pub payload_length: u64,
    #[prost(message, optional, tag = "6")]
    pub payload_hash: Option<Checksum>,
    #[prost(int32, tag = "7")]
    pub object_type: i32,
    #[prost(message, optional, tag = "8")]
    pub homomorphic_hash: Option<Checksum>,
    #[prost(message, optional, tag = "9")]
    pub session_token: Option<SessionToken>,
    #[prost(message, repeated, tag = "10")]
    pub attributes: Vec<Attribute>,
    #[prost(message, optional, tag = "11")]
    pub split: Option<Split>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Split {
    #[prost(message, optional, tag = "1")]
    pub parent: Option<ObjectId>,
    #[prost(message, optional, tag = "2")]
    pub previous: Option<ObjectId>,
    #[prost(message, optional, tag = "3")]
    pub parent_signature: Option<Signature>,
    #[prost(message, optional, tag = "4")]
    pub parent_header: Option<Box<Header>>,
    #[prost(message, repeated, tag = "5")]
    pub children: Vec<ObjectId>,
    #[prost(bytes = "vec", tag = "6")]
    pub split_id: Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub first: Option<ObjectId>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Object {
    #[prost(message, optional, tag = "1")]
    pub object_id: Option<ObjectId>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
    #[prost(message, optional, tag = "3")]
    pub header: Option<Header>,
    #[prost(bytes = "vec", tag = "4")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub split_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub last_part: Option<ObjectId>,
    #[prost(message, optional, tag = "3")]
    pub link: Option<ObjectId>,
    #[prost(message, optional, tag = "4")]
    pub first_part: Option<ObjectId>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HeaderWithSignature {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Range {
    #[prost(uint64, tag = "1")]
    pub offset: u64,
    #[prost(uint64, tag = "2")]
    pub length: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchFilter {
    #[prost(int32, tag = "1")]
    pub match_type: i32,
    #[prost(string, tag = "2")]
    pub key: String,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRequestBody {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(bool, tag = "2")]
    pub raw: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetObjectInit {
    #[prost(message, optional, tag = "1")]
    pub object_id: Option<ObjectId>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
    #[prost(message, optional, tag = "3")]
    pub header: Option<Header>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetResponseBody {
    #[prost(oneof = "get_response_body::ObjectPart", tags = "1, 2, 3")]
    pub object_part: Option<get_response_body::ObjectPart>,
}

pub mod get_response_body {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum ObjectPart {
        #[prost(message, tag = "1")]
        Init(super::GetObjectInit),
        #[prost(bytes = "vec", tag = "2")]
        Chunk(Vec<u8>),
        #[prost(message, tag = "3")]
        SplitInfo(super::SplitInfo),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PutObjectInit {
    #[prost(message, optional, tag = "1")]
    pub object_id: Option<ObjectId>,
    #[prost(message, optional, tag = "2")]
    pub signature: Option<Signature>,
    #[prost(message, optional, tag = "3")]
    pub header: Option<Header>,
    #[prost(uint32, tag = "4")]
    pub copies_number: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PutRequestBody {
    #[prost(oneof = "put_request_body::ObjectPart", tags = "1, 2")]
    pub object_part: Option<put_request_body::ObjectPart>,
}

pub mod put_request_body {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum ObjectPart {
        #[prost(message, tag = "1")]
        Init(super::PutObjectInit),
        #[prost(bytes = "vec", tag = "2")]
        Chunk(Vec<u8>),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PutResponseBody {
    #[prost(message, optional, tag = "1")]
    pub object_id: Option<ObjectId>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRequestBody {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteResponseBody {
    #[prost(message, optional, tag = "1")]
    pub tombstone: Option<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HeadRequestBody {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(bool, tag = "2")]
    pub main_only: bool,
    #[prost(bool, tag = "3")]
    pub raw: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HeadResponseBody {
    #[prost(oneof = "head_response_body::Head", tags = "1, 2, 3")]
    pub head: Option<head_response_body::Head>,
}

pub mod head_response_body {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Head {
        #[prost(message, tag = "1")]
        Header(super::HeaderWithSignature),
        #[prost(message, tag = "2")]
        ShortHeader(super::ShortHeader),
        #[prost(message, tag = "3")]
        SplitInfo(super::SplitInfo),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchRequestBody {
    #[prost(message, optional, tag = "1")]
    pub container_id: Option<ContainerId>,
    #[prost(uint32, tag = "2")]
    pub version: u32,
    #[prost(message, repeated, tag = "3")]
    pub filters: Vec<SearchFilter>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchResponseBody {
    #[prost(message, repeated, tag = "1")]
    pub id_list: Vec<ObjectId>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRangeRequestBody {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, optional, tag = "2")]
    pub range: Option<Range>,
    #[prost(bool, tag = "3")]
    pub raw: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRangeResponseBody {
    #[prost(oneof = "get_range_response_body::RangePart", tags = "1, 2")]
    pub range_part: Option<get_range_response_body::RangePart>,
}

pub mod get_range_response_body {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum RangePart {
        #[prost(bytes = "vec", tag = "1")]
        Chunk(Vec<u8>),
        #[prost(message, tag = "2")]
        SplitInfo(super::SplitInfo),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRangeHashRequestBody {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, repeated, tag = "2")]
    pub ranges: Vec<Range>,
    #[prost(bytes = "vec", tag = "3")]
    pub salt: Vec<u8>,
    #[prost(int32, tag = "4")]
    pub checksum_type: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRangeHashResponseBody {
    #[prost(int32, tag = "1")]
    pub checksum_type: i32,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub hash_list: Vec<Vec<u8>>,
}
