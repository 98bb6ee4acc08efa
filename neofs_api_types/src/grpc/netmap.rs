#[derive(Clone, PartialEq, prost::Message)]
pub struct Replica {
    #[prost(uint32, tag = "1")]
    pub count: u32,
    #[prost(string, tag = "2")]
    pub selector: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Selector {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub count: u32,
    #[prost(int32, tag = "3")]
    pub clause: i32,
    #[prost(string, tag = "4")]
    pub attribute: String,
    #[prost(string, tag = "5")]
    pub filter: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Filter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub key: String,
    #[prost(int32, tag = "3")]
    pub op: i32,
    #[prost(string, tag = "4")]
    pub value: String,
    #[prost(message, repeated, tag = "5")]
    pub filters: Vec<Filter>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlacementPolicy {
    #[prost(message, repeated, tag = "1")]
    pub replicas: Vec<Replica>,
    #[prost(uint32, tag = "2")]
    pub container_backup_factor: u32,
    #[prost(message, repeated, tag = "3")]
    pub selectors: Vec<Selector>,
    #[prost(message, repeated, tag = "4")]
    pub filters: Vec<Filter>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NodeAttribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(string, repeated, tag = "3")]
    pub parents: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NodeInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,
    #[prost(string, repeated, tag = "2")]
    pub addresses: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub attributes: Vec<NodeAttribute>,
    #[prost(int32, tag = "4")]
    pub state: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Netmap {
    #[prost(uint64, tag = "1")]
    pub epoch: u64,
    #[prost(message, repeated, tag = "2")]
    pub nodes: Vec<NodeInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NetworkParameter {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NetworkConfig {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<NetworkParameter>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NetworkInfo {
    #[prost(uint64, tag = "1")]
    pub current_epoch: u64,
    #[prost(uint64, tag = "2")]
    pub magic_number: u64,
    #[prost(int64, tag = "3")]
    pub ms_per_block: i64,
    #[prost(message, optional, tag = "4")]
    pub network_config: Option<NetworkConfig>,
}
