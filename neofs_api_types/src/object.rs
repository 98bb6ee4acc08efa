//! Objects, their headers, and the bodies of the object service requests and responses.

use crate::grpc;
use crate::grpc::object::{
    get_range_response_body, get_response_body, head_response_body, put_request_body,
};
use crate::refs::{
    Address, Checksum, ChecksumType, ContainerId, ObjectId, OwnerId, Signature, Version,
};
use crate::session::SessionToken;

proto_enum! {
    pub enum ObjectType => "neo.fs.v2.object.ObjectType" {
        Regular = 0 => "REGULAR",
        Tombstone = 1 => "TOMBSTONE",
        StorageGroup = 2 => "STORAGE_GROUP",
        Lock = 3 => "LOCK",
        Link = 4 => "LINK",
    }
}

proto_enum! {
    pub enum MatchType => "neo.fs.v2.object.MatchType" {
        Unspecified = 0 => "MATCH_TYPE_UNSPECIFIED",
        StringEqual = 1 => "STRING_EQUAL",
        StringNotEqual = 2 => "STRING_NOT_EQUAL",
        NotPresent = 3 => "NOT_PRESENT",
        CommonPrefix = 4 => "COMMON_PREFIX",
    }
}

/* Headers. */

stable_message! {
    pub struct Attribute => grpc::object::Attribute {
        key: String = 1 => string,
        value: String = 2 => string,
    }
}

stable_message! {
    /// The header fields a node can answer with without the full header.
    pub struct ShortHeader => grpc::object::ShortHeader {
        version: Option<Version> = 1 => message,
        creation_epoch: u64 = 2 => uint64,
        owner_id: Option<OwnerId> = 3 => message as "ownerID",
        object_type: ObjectType = 4 => enumeration,
        payload_length: u64 = 5 => uint64,
        payload_hash: Option<Checksum> = 6 => message,
        homomorphic_hash: Option<Checksum> = 7 => message,
    }
}

stable_message! {
    pub struct Header => grpc::object::Header {
        version: Option<Version> = 1 => message,
        container_id: Option<ContainerId> = 2 => message as "containerID",
        owner_id: Option<OwnerId> = 3 => message as "ownerID",
        creation_epoch: u64 = 4 => uint64,
        payload_length: u64 = 5 => uint64,
        payload_hash: Option<Checksum> = 6 => message,
        object_type: ObjectType = 7 => enumeration,
        homomorphic_hash: Option<Checksum> = 8 => message,
        session_token: Option<SessionToken> = 9 => message,
        attributes: Vec<Attribute> = 10 => repeated_message,
        split: Option<Split> = 11 => message,
    }
}

stable_message! {
    /// Position of a child object in a split chain. The parent header nests a full
    /// [`Header`], which may itself carry a split.
    pub struct Split => grpc::object::Split {
        parent: Option<ObjectId> = 1 => message,
        previous: Option<ObjectId> = 2 => message,
        parent_signature: Option<Signature> = 3 => message,
        parent_header: Option<Box<Header>> = 4 => message,
        children: Vec<ObjectId> = 5 => repeated_message,
        split_id: Vec<u8> = 6 => bytes as "splitID",
        first: Option<ObjectId> = 7 => message,
    }
}

stable_message! {
    pub struct Object => grpc::object::Object {
        object_id: Option<ObjectId> = 1 => message as "objectID",
        signature: Option<Signature> = 2 => message,
        header: Option<Header> = 3 => message,
        payload: Vec<u8> = 4 => bytes,
    }
}

stable_message! {
    pub struct SplitInfo => grpc::object::SplitInfo {
        split_id: Vec<u8> = 1 => bytes as "splitID",
        last_part: Option<ObjectId> = 2 => message,
        link: Option<ObjectId> = 3 => message,
        first_part: Option<ObjectId> = 4 => message,
    }
}

stable_message! {
    pub struct HeaderWithSignature => grpc::object::HeaderWithSignature {
        header: Option<Header> = 1 => message,
        signature: Option<Signature> = 2 => message,
    }
}

stable_message! {
    pub struct Range => grpc::object::Range {
        offset: u64 = 1 => uint64,
        length: u64 = 2 => uint64,
    }
}

stable_message! {
    pub struct SearchFilter => grpc::object::SearchFilter {
        match_type: MatchType = 1 => enumeration,
        key: String = 2 => string,
        value: String = 3 => string,
    }
}

/* Get. */

stable_message! {
    pub struct GetRequestBody => grpc::object::GetRequestBody {
        address: Option<Address> = 1 => message,
        raw: bool = 2 => boolean,
    }
}

stable_message! {
    pub struct GetObjectInit => grpc::object::GetObjectInit {
        object_id: Option<ObjectId> = 1 => message as "objectID",
        signature: Option<Signature> = 2 => message,
        header: Option<Header> = 3 => message,
    }
}

stable_oneof! {
    /// One message of a get response stream: the object header first, then payload chunks.
    pub enum GetObjectPart => get_response_body::ObjectPart {
        Init(GetObjectInit) = 1 => message as init,
        Chunk(Vec<u8>) = 2 => bytes as chunk,
        SplitInfo(SplitInfo) = 3 => message as split_info,
    }
}

stable_message! {
    pub struct GetResponseBody => grpc::object::GetResponseBody {
        object_part: Option<GetObjectPart> = 1 => oneof,
    }
}

/* Put. */

stable_message! {
    pub struct PutObjectInit => grpc::object::PutObjectInit {
        object_id: Option<ObjectId> = 1 => message as "objectID",
        signature: Option<Signature> = 2 => message,
        header: Option<Header> = 3 => message,
        copies_number: u32 = 4 => uint32,
    }
}

stable_oneof! {
    pub enum PutObjectPart => put_request_body::ObjectPart {
        Init(PutObjectInit) = 1 => message as init,
        Chunk(Vec<u8>) = 2 => bytes as chunk,
    }
}

stable_message! {
    pub struct PutRequestBody => grpc::object::PutRequestBody {
        object_part: Option<PutObjectPart> = 1 => oneof,
    }
}

stable_message! {
    pub struct PutResponseBody => grpc::object::PutResponseBody {
        object_id: Option<ObjectId> = 1 => message as "objectID",
    }
}

/* Delete. */

stable_message! {
    pub struct DeleteRequestBody => grpc::object::DeleteRequestBody {
        address: Option<Address> = 1 => message,
    }
}

stable_message! {
    pub struct DeleteResponseBody => grpc::object::DeleteResponseBody {
        tombstone: Option<Address> = 1 => message,
    }
}

/* Head. */

stable_message! {
    pub struct HeadRequestBody => grpc::object::HeadRequestBody {
        address: Option<Address> = 1 => message,
        main_only: bool = 2 => boolean,
        raw: bool = 3 => boolean,
    }
}

stable_oneof! {
    pub enum HeadPart => head_response_body::Head {
        Header(HeaderWithSignature) = 1 => message as header,
        ShortHeader(ShortHeader) = 2 => message as short_header,
        SplitInfo(SplitInfo) = 3 => message as split_info,
    }
}

stable_message! {
    pub struct HeadResponseBody => grpc::object::HeadResponseBody {
        head: Option<HeadPart> = 1 => oneof,
    }
}

/* Search. */

stable_message! {
    pub struct SearchRequestBody => grpc::object::SearchRequestBody {
        container_id: Option<ContainerId> = 1 => message as "containerID",
        version: u32 = 2 => uint32,
        filters: Vec<SearchFilter> = 3 => repeated_message,
    }
}

stable_message! {
    pub struct SearchResponseBody => grpc::object::SearchResponseBody {
        id_list: Vec<ObjectId> = 1 => repeated_message,
    }
}

/* Range. */

stable_message! {
    pub struct GetRangeRequestBody => grpc::object::GetRangeRequestBody {
        address: Option<Address> = 1 => message,
        range: Option<Range> = 2 => message,
        raw: bool = 3 => boolean,
    }
}

stable_oneof! {
    pub enum RangePart => get_range_response_body::RangePart {
        Chunk(Vec<u8>) = 1 => bytes as chunk,
        SplitInfo(SplitInfo) = 2 => message as split_info,
    }
}

stable_message! {
    pub struct GetRangeResponseBody => grpc::object::GetRangeResponseBody {
        range_part: Option<RangePart> = 1 => oneof,
    }
}

stable_message! {
    pub struct GetRangeHashRequestBody => grpc::object::GetRangeHashRequestBody {
        address: Option<Address> = 1 => message,
        ranges: Vec<Range> = 2 => repeated_message,
        salt: Vec<u8> = 3 => bytes,
        checksum_type: ChecksumType = 4 => enumeration as "type",
    }
}

stable_message! {
    pub struct GetRangeHashResponseBody => grpc::object::GetRangeHashResponseBody {
        checksum_type: ChecksumType = 1 => enumeration as "type",
        hash_list: Vec<Vec<u8>> = 2 => repeated_bytes,
    }
}
