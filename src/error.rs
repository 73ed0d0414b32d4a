//! Error types surfaced by `HashTable`.

use thiserror::Error;

/// Failure of a read-only lookup.
///
/// Only `get`/`get_mut` report this; `clear_key` and
/// `get_or_insert_default` treat a missing key as a no-op and an insert
/// respectively.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("key not found")]
    KeyNotFound,
}

/// Rejected construction parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    #[error("hash table capacity must be at least one bucket")]
    Zero,
}
