use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

pub const DEFAULT_MAX_POOLED: usize = 64;
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 4 * 1024 * 1024;

/// Limits applied before untrusted bytes are decoded.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(default)]
pub struct DecodeConfig {
    pub max_message_size: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

/// Bounds on what a [`crate::BufferPool`] keeps around between uses.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(default)]
pub struct PoolConfig {
    /// Released buffers beyond this count are dropped.
    pub max_pooled: usize,
    /// Released buffers whose capacity exceeds this are dropped.
    pub max_retained_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pooled: DEFAULT_MAX_POOLED,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }
}
