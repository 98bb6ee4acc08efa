use crate::config::PoolConfig;
use derive_more::{Deref, From};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static SHARED: Lazy<BufferPool> = Lazy::new(|| BufferPool::new(PoolConfig::default()));

/// Count of buffers currently held by a pool.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct PooledLen(usize);

/// A free list of byte buffers, for the scratch space that signing and verification need.
///
/// [`BufferPool::acquire`] hands out an owned buffer; [`BufferPool::release`] takes it back.
/// Releasing moves the buffer, so nothing can observe it after it re-enters the pool.
pub struct BufferPool {
    config: PoolConfig,
    free: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            free: Mutex::new(Vec::with_capacity(config.max_pooled)),
        }
    }

    /// The process-wide pool, with default limits.
    pub fn shared() -> &'static BufferPool {
        &SHARED
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// A zero-filled buffer of exactly `size` bytes.
    ///
    /// Reuses the smallest pooled buffer whose capacity suffices, or allocates.
    pub fn acquire(&self, size: usize) -> Vec<u8> {
        let reused = {
            let mut free = self.free.lock();
            let best = free
                .iter()
                .enumerate()
                .filter(|(_, buf)| buf.capacity() >= size)
                .min_by_key(|(_, buf)| buf.capacity())
                .map(|(i, _)| i);
            best.map(|i| free.swap_remove(i))
        };

        match reused {
            Some(mut buf) => {
                tracing::trace!(size, capacity = buf.capacity(), "reusing pooled buffer");
                buf.clear();
                buf.resize(size, 0);
                buf
            }
            None => {
                tracing::trace!(size, "allocating buffer");
                vec![0u8; size]
            }
        }
    }

    pub fn release(&self, buf: Vec<u8>) {
        if buf.capacity() > self.config.max_retained_capacity {
            tracing::debug!(
                capacity = buf.capacity(),
                max = self.config.max_retained_capacity,
                "dropping oversized buffer"
            );
            return;
        }

        let mut free = self.free.lock();
        if free.len() >= self.config.max_pooled {
            tracing::trace!(pooled = free.len(), "pool full, dropping buffer");
            return;
        }
        free.push(buf);
    }

    pub fn pooled(&self) -> PooledLen {
        PooledLen(self.free.lock().len())
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}
