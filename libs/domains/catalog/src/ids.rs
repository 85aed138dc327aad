//! Identifier generation for newly created records.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Length of every identifier handed out by a generator
pub const ID_LENGTH: usize = 36;

/// Generates unique identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier, `ID_LENGTH` characters long
    fn generate_id(&self) -> String;
}

/// Time-ordered UUID (v7) identifiers in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOrderedIds;

impl IdGenerator for TimeOrderedIds {
    fn generate_id(&self) -> String {
        Uuid::now_v7().hyphenated().to_string()
    }
}

/// Predictable identifiers for tests: `00000000-0000-0000-0000-000000000001`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("00000000-0000-0000-0000-{:012x}", n)
    }
}
