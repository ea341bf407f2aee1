use crate::tiles::{TileUid, DEFAULT_ID_PREFIX};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique tile identifiers.
///
/// Swap in [`SequentialIdGenerator`] wherever ids need to be predictable.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier. Never returns the same value twice.
    fn next_id(&self) -> TileUid;
}

/// Random version 4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TileUid {
        TileUid::new(Uuid::new_v4().to_string())
    }
}

/// Counter based ids of the form `<prefix>-<n>`, starting at 1
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> TileUid {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TileUid::new(format!("{}-{}", self.prefix, n))
    }
}
