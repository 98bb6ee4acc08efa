//! Extended ACL tables and bearer tokens.
//!
//! Only the data model lives here; evaluating a table against a request is left to the node.

use crate::grpc;
use crate::refs::{ContainerId, OwnerId, Signature, Version};

proto_enum! {
    pub enum Role => "neo.fs.v2.acl.Role" {
        Unspecified = 0 => "ROLE_UNSPECIFIED",
        User = 1 => "USER",
        System = 2 => "SYSTEM",
        Others = 3 => "OTHERS",
    }
}

proto_enum! {
    pub enum MatchType => "neo.fs.v2.acl.MatchType" {
        Unspecified = 0 => "MATCH_TYPE_UNSPECIFIED",
        StringEqual = 1 => "STRING_EQUAL",
        StringNotEqual = 2 => "STRING_NOT_EQUAL",
    }
}

proto_enum! {
    pub enum Operation => "neo.fs.v2.acl.Operation" {
        Unspecified = 0 => "OPERATION_UNSPECIFIED",
        Get = 1 => "GET",
        Head = 2 => "HEAD",
        Put = 3 => "PUT",
        Delete = 4 => "DELETE",
        Search = 5 => "SEARCH",
        GetRange = 6 => "GETRANGE",
        GetRangeHash = 7 => "GETRANGEHASH",
    }
}

proto_enum! {
    pub enum Action => "neo.fs.v2.acl.Action" {
        Unspecified = 0 => "ACTION_UNSPECIFIED",
        Allow = 1 => "ALLOW",
        Deny = 2 => "DENY",
    }
}

proto_enum! {
    pub enum HeaderType => "neo.fs.v2.acl.HeaderType" {
        Unspecified = 0 => "HEADER_UNSPECIFIED",
        Request = 1 => "REQUEST",
        Object = 2 => "OBJECT",
        Service = 3 => "SERVICE",
    }
}

stable_message! {
    pub struct HeaderFilter => grpc::acl::HeaderFilter {
        header_type: HeaderType = 1 => enumeration,
        match_type: MatchType = 2 => enumeration,
        key: String = 3 => string,
        value: String = 4 => string,
    }
}

stable_message! {
    /// Subjects of a record: everyone in `role`, or the holders of `keys`.
    pub struct Target => grpc::acl::Target {
        role: Role = 1 => enumeration,
        keys: Vec<Vec<u8>> = 2 => repeated_bytes,
    }
}

stable_message! {
    pub struct Record => grpc::acl::Record {
        operation: Operation = 1 => enumeration,
        action: Action = 2 => enumeration,
        filters: Vec<HeaderFilter> = 3 => repeated_message,
        targets: Vec<Target> = 4 => repeated_message,
    }
}

stable_message! {
    pub struct Table => grpc::acl::Table {
        version: Option<Version> = 1 => message,
        container_id: Option<ContainerId> = 2 => message as "containerID",
        records: Vec<Record> = 3 => repeated_message,
    }
}

stable_message! {
    pub struct TokenLifetime => grpc::acl::TokenLifetime {
        exp: u64 = 1 => uint64,
        nbf: u64 = 2 => uint64,
        iat: u64 = 3 => uint64,
    }
}

stable_message! {
    pub struct BearerTokenBody => grpc::acl::BearerTokenBody {
        eacl_table: Option<Table> = 1 => message,
        owner_id: Option<OwnerId> = 2 => message as "ownerID",
        lifetime: Option<TokenLifetime> = 3 => message,
    }
}

stable_message! {
    /// Grants the rules of `eacl_table` to `owner_id`, signed by the container owner.
    pub struct BearerToken => grpc::acl::BearerToken {
        body: Option<BearerTokenBody> = 1 => message,
        signature: Option<Signature> = 2 => message,
    }
}
