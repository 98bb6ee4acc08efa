#[derive(Clone, PartialEq, prost::Message)]
pub struct ObjectId {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ContainerId {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OwnerId {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Address {
    #[prost(message, optional, tag = "1")]
    pub container_id: Option<ContainerId>,
    #[prost(message, optional, tag = "2")]
    pub object_id: Option<ObjectId>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Version {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Signature {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub sign: Vec<u8>,
    #[prost(int32, tag = "3")]
    pub scheme: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SignatureRfc6979 {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub sign: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Checksum {
    #[prost(int32, tag = "1")]
    pub checksum_type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub sum: Vec<u8>,
}
