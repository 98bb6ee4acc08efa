//! Identifiers, versions, checksums and signatures shared by every other package.

use crate::grpc;

proto_enum! {
    pub enum ChecksumType => "neo.fs.v2.refs.ChecksumType" {
        Unspecified = 0 => "CHECKSUM_TYPE_UNSPECIFIED",
        Tz = 1 => "TZ",
        Sha256 = 2 => "SHA256",
    }
}

proto_enum! {
    pub enum SignatureScheme => "neo.fs.v2.refs.SignatureScheme" {
        EcdsaSha512 = 0 => "ECDSA_SHA512",
        EcdsaRfc6979Sha256 = 1 => "ECDSA_RFC6979_SHA256",
        EcdsaRfc6979Sha256WalletConnect = 2 => "ECDSA_RFC6979_SHA256_WALLET_CONNECT",
        N3 = 3 => "N3",
    }
}

stable_message! {
    /// 32-byte object identifier.
    pub struct ObjectId => grpc::refs::ObjectId {
        value: Vec<u8> = 1 => bytes,
    }
}

stable_message! {
    pub struct ContainerId => grpc::refs::ContainerId {
        value: Vec<u8> = 1 => bytes,
    }
}

stable_message! {
    pub struct OwnerId => grpc::refs::OwnerId {
        value: Vec<u8> = 1 => bytes,
    }
}

stable_message! {
    /// An object within a container.
    pub struct Address => grpc::refs::Address {
        container_id: Option<ContainerId> = 1 => message as "containerID",
        object_id: Option<ObjectId> = 2 => message as "objectID",
    }
}

stable_message! {
    pub struct Version => grpc::refs::Version {
        major: u32 = 1 => uint32,
        minor: u32 = 2 => uint32,
    }
}

stable_message! {
    pub struct Signature => grpc::refs::Signature {
        key: Vec<u8> = 1 => bytes,
        sign: Vec<u8> = 2 => bytes,
        scheme: SignatureScheme = 3 => enumeration,
    }
}

stable_message! {
    /// Signature without a scheme, always deterministic ECDSA with SHA-256.
    pub struct SignatureRfc6979 => grpc::refs::SignatureRfc6979 {
        key: Vec<u8> = 1 => bytes,
        sign: Vec<u8> = 2 => bytes,
    }
}

stable_message! {
    pub struct Checksum => grpc::refs::Checksum {
        checksum_type: ChecksumType = 1 => enumeration as "type",
        sum: Vec<u8> = 2 => bytes,
    }
}

impl ObjectId {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ContainerId {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl OwnerId {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Address {
    pub fn new(container_id: ContainerId, object_id: ObjectId) -> Self {
        Self {
            container_id: Some(container_id),
            object_id: Some(object_id),
        }
    }
}
