//! Session tokens and the meta and verification headers every request and response carries.

use crate::acl::BearerToken;
use crate::grpc;
use crate::grpc::session::session_token_body;
use crate::refs::{Address, ContainerId, OwnerId, Signature, Version};
use crate::status::Status;

proto_enum! {
    pub enum ObjectSessionVerb => "neo.fs.v2.session.ObjectSessionContext.Verb" {
        Unspecified = 0 => "VERB_UNSPECIFIED",
        Put = 1 => "PUT",
        Get = 2 => "GET",
        Head = 3 => "HEAD",
        Search = 4 => "SEARCH",
        Delete = 5 => "DELETE",
        Range = 6 => "RANGE",
        RangeHash = 7 => "RANGEHASH",
    }
}

proto_enum! {
    pub enum ContainerSessionVerb => "neo.fs.v2.session.ContainerSessionContext.Verb" {
        Unspecified = 0 => "VERB_UNSPECIFIED",
        Put = 1 => "PUT",
        Delete = 2 => "DELETE",
        SetEacl = 3 => "SETEACL",
    }
}

stable_message! {
    pub struct ObjectSessionContext => grpc::session::ObjectSessionContext {
        verb: ObjectSessionVerb = 1 => enumeration,
        address: Option<Address> = 2 => message,
    }
}

stable_message! {
    /// With `wildcard` set the session covers every container of the owner.
    pub struct ContainerSessionContext => grpc::session::ContainerSessionContext {
        verb: ContainerSessionVerb = 1 => enumeration,
        wildcard: bool = 2 => boolean,
        container_id: Option<ContainerId> = 3 => message as "containerID",
    }
}

stable_message! {
    /// Epochs bounding the validity of a token: expiration, not-before, issued-at.
    pub struct TokenLifetime => grpc::session::TokenLifetime {
        exp: u64 = 1 => uint64,
        nbf: u64 = 2 => uint64,
        iat: u64 = 3 => uint64,
    }
}

stable_oneof! {
    pub enum SessionContext => session_token_body::Context {
        Object(ObjectSessionContext) = 5 => message as object,
        Container(ContainerSessionContext) = 6 => message as container,
    }
}

stable_message! {
    pub struct SessionTokenBody => grpc::session::SessionTokenBody {
        id: Vec<u8> = 1 => bytes,
        owner_id: Option<OwnerId> = 2 => message as "ownerID",
        lifetime: Option<TokenLifetime> = 3 => message,
        session_key: Vec<u8> = 4 => bytes,
        context: Option<SessionContext> = 5 => oneof,
    }
}

stable_message! {
    pub struct SessionToken => grpc::session::SessionToken {
        body: Option<SessionTokenBody> = 1 => message,
        signature: Option<Signature> = 2 => message,
    }
}

stable_message! {
    pub struct XHeader => grpc::session::XHeader {
        key: String = 1 => string,
        value: String = 2 => string,
    }
}

stable_message! {
    /// `origin` holds the meta header of the request this one was forwarded from.
    pub struct RequestMetaHeader => grpc::session::RequestMetaHeader {
        version: Option<Version> = 1 => message,
        epoch: u64 = 2 => uint64,
        ttl: u32 = 3 => uint32,
        x_headers: Vec<XHeader> = 4 => repeated_message,
        session_token: Option<SessionToken> = 5 => message,
        bearer_token: Option<BearerToken> = 6 => message,
        origin: Option<Box<RequestMetaHeader>> = 7 => message,
        magic_number: u64 = 8 => uint64,
    }
}

stable_message! {
    pub struct ResponseMetaHeader => grpc::session::ResponseMetaHeader {
        version: Option<Version> = 1 => message,
        epoch: u64 = 2 => uint64,
        ttl: u32 = 3 => uint32,
        x_headers: Vec<XHeader> = 4 => repeated_message,
        origin: Option<Box<ResponseMetaHeader>> = 5 => message,
        status: Option<Status> = 6 => message,
    }
}

stable_message! {
    pub struct RequestVerificationHeader => grpc::session::RequestVerificationHeader {
        body_signature: Option<Signature> = 1 => message,
        meta_signature: Option<Signature> = 2 => message,
        origin_signature: Option<Signature> = 3 => message,
        origin: Option<Box<RequestVerificationHeader>> = 4 => message,
    }
}

stable_message! {
    pub struct ResponseVerificationHeader => grpc::session::ResponseVerificationHeader {
        body_signature: Option<Signature> = 1 => message,
        meta_signature: Option<Signature> = 2 => message,
        origin_signature: Option<Signature> = 3 => message,
        origin: Option<Box<ResponseVerificationHeader>> = 4 => message,
    }
}

impl RequestMetaHeader {
    /// Depth of the `origin` chain, counting `self`.
    pub fn hops(&self) -> usize {
        1 + self.origin.as_ref().map_or(0, |o| o.hops())
    }
}
