//! Link objects list the children of a split object together with their sizes.

use crate::grpc;
use crate::refs::ObjectId;

stable_message! {
    pub struct MeasuredObject => grpc::link::MeasuredObject {
        id: Option<ObjectId> = 1 => message,
        size: u32 = 2 => uint32,
    }
}

stable_message! {
    pub struct Link => grpc::link::Link {
        children: Vec<MeasuredObject> = 1 => repeated_message,
    }
}

impl Link {
    /// Payload size of the parent object.
    pub fn total_size(&self) -> u64 {
        self.children.iter().map(|c| u64::from(c.size)).sum()
    }
}
