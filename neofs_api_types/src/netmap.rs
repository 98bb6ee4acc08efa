//! Network map: storage nodes, placement policies and network parameters.

use crate::grpc;

proto_enum! {
    pub enum Operation => "neo.fs.v2.netmap.Operation" {
        Unspecified = 0 => "OPERATION_UNSPECIFIED",
        Eq = 1 => "EQ",
        Ne = 2 => "NE",
        Gt = 3 => "GT",
        Ge = 4 => "GE",
        Lt = 5 => "LT",
        Le = 6 => "LE",
        Or = 7 => "OR",
        And = 8 => "AND",
    }
}

proto_enum! {
    pub enum Clause => "neo.fs.v2.netmap.Clause" {
        Unspecified = 0 => "CLAUSE_UNSPECIFIED",
        Same = 1 => "SAME",
        Distinct = 2 => "DISTINCT",
    }
}

proto_enum! {
    pub enum NodeState => "neo.fs.v2.netmap.NodeInfo.State" {
        Unspecified = 0 => "UNSPECIFIED",
        Online = 1 => "ONLINE",
        Offline = 2 => "OFFLINE",
        Maintenance = 3 => "MAINTENANCE",
    }
}

stable_message! {
    pub struct Replica => grpc::netmap::Replica {
        count: u32 = 1 => uint32,
        selector: String = 2 => string,
    }
}

stable_message! {
    pub struct Selector => grpc::netmap::Selector {
        name: String = 1 => string,
        count: u32 = 2 => uint32,
        clause: Clause = 3 => enumeration,
        attribute: String = 4 => string,
        filter: String = 5 => string,
    }
}

stable_message! {
    /// `OR` and `AND` filters combine their nested `filters` and ignore `key` and `value`.
    pub struct Filter => grpc::netmap::Filter {
        name: String = 1 => string,
        key: String = 2 => string,
        op: Operation = 3 => enumeration,
        value: String = 4 => string,
        filters: Vec<Filter> = 5 => repeated_message,
    }
}

stable_message! {
    pub struct PlacementPolicy => grpc::netmap::PlacementPolicy {
        replicas: Vec<Replica> = 1 => repeated_message,
        container_backup_factor: u32 = 2 => uint32,
        selectors: Vec<Selector> = 3 => repeated_message,
        filters: Vec<Filter> = 4 => repeated_message,
    }
}

stable_message! {
    pub struct NodeAttribute => grpc::netmap::NodeAttribute {
        key: String = 1 => string,
        value: String = 2 => string,
        parents: Vec<String> = 3 => repeated_string,
    }
}

stable_message! {
    pub struct NodeInfo => grpc::netmap::NodeInfo {
        public_key: Vec<u8> = 1 => bytes,
        addresses: Vec<String> = 2 => repeated_string,
        attributes: Vec<NodeAttribute> = 3 => repeated_message,
        state: NodeState = 4 => enumeration,
    }
}

stable_message! {
    pub struct Netmap => grpc::netmap::Netmap {
        epoch: u64 = 1 => uint64,
        nodes: Vec<NodeInfo> = 2 => repeated_message,
    }
}

stable_message! {
    pub struct NetworkParameter => grpc::netmap::NetworkParameter {
        key: Vec<u8> = 1 => bytes,
        value: Vec<u8> = 2 => bytes,
    }
}

stable_message! {
    pub struct NetworkConfig => grpc::netmap::NetworkConfig {
        parameters: Vec<NetworkParameter> = 1 => repeated_message,
    }
}

stable_message! {
    pub struct NetworkInfo => grpc::netmap::NetworkInfo {
        current_epoch: u64 = 1 => uint64,
        magic_number: u64 = 2 => uint64,
        ms_per_block: i64 = 3 => int64,
        network_config: Option<NetworkConfig> = 4 => message,
    }
}

impl NetworkConfig {
    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_slice())
    }
}
