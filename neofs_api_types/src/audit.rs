//! Results of a data audit session over one container.

use crate::grpc;
use crate::refs::{ContainerId, ObjectId, Version};

stable_message! {
    pub struct DataAuditResult => grpc::audit::DataAuditResult {
        version: Option<Version> = 1 => message,
        /// Carried as fixed64.
        audit_epoch: u64 = 2 => fixed64,
        container_id: Option<ContainerId> = 3 => message as "containerID",
        public_key: Vec<u8> = 4 => bytes,
        complete: bool = 5 => boolean,
        requests: u32 = 6 => uint32,
        retries: u32 = 7 => uint32,
        pass_sg: Vec<ObjectId> = 8 => repeated_message as "passSG",
        fail_sg: Vec<ObjectId> = 9 => repeated_message as "failSG",
        hit: u32 = 10 => uint32,
        miss: u32 = 11 => uint32,
        fail: u32 = 12 => uint32,
        pass_nodes: Vec<Vec<u8>> = 13 => repeated_bytes,
        fail_nodes: Vec<Vec<u8>> = 14 => repeated_bytes,
    }
}
