//! Record ID generation.
//!
//! IDs are decimal-digit strings derived from Unix time in milliseconds, the
//! format the rest of the system (and its stored data) assumes. A plain
//! timestamp can collide when two records are created within the same
//! millisecond, so the generator keeps an atomic high-water mark and bumps
//! past it: ids are strictly increasing even under a same-millisecond burst.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Next id: current time in milliseconds, or last-issued + 1 if the clock
    /// hasn't moved (or moved backwards) since the previous call.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;

        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}
