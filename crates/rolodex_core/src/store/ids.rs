//! Injected id generation for contacts and notes.
//!
//! The persisted schema allows arbitrary string ids, so generation is a
//! store capability rather than a model concern. The default generator is
//! random UUIDs; deterministic callers (tests) inject a counter.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh unique string ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUID ids. Collision-safe under concurrent and rapid-fire calls.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids ("1", "2", ...), for deterministic tests.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
