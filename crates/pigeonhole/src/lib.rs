//! Stable pigeonhole sort over caller-derived integer keys.
//!
//! Elements are distributed into one bucket per key value in `0..=max`,
//! then the buckets are concatenated in key order. Runs in `O(n + max)`
//! time and space, which beats comparison sorts exactly when the key range
//! is small relative to the input; a sparse range degrades it badly.

mod observe;
mod sort;
mod table;

pub use observe::{NoopObserver, SortObserver};
pub use sort::{sort_by_key, sort_by_key_observed, sort_ints};

use thiserror::Error;

/// Errors surfaced by the sort entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// An element mapped to a negative key, which has no bucket index.
    /// Detected during the initial scan, before any element is moved.
    #[error("element at index {index} has negative key {key}")]
    InvalidKey { index: usize, key: i64 },
}
