//! Container descriptors.

use crate::grpc;
use crate::netmap::PlacementPolicy;
use crate::refs::{OwnerId, Version};

stable_message! {
    pub struct ContainerAttribute => grpc::container::ContainerAttribute {
        key: String = 1 => string,
        value: String = 2 => string,
    }
}

stable_message! {
    pub struct Container => grpc::container::Container {
        version: Option<Version> = 1 => message,
        owner_id: Option<OwnerId> = 2 => message as "ownerID",
        nonce: Vec<u8> = 3 => bytes,
        basic_acl: u32 = 4 => uint32 as "basicACL",
        attributes: Vec<ContainerAttribute> = 5 => repeated_message,
        placement_policy: Option<PlacementPolicy> = 6 => message,
    }
}

impl Container {
    /// Value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}
