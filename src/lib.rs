//! strategy-table: a single-threaded chained hash table whose hashing and
//! key equality are runtime-pluggable strategy objects.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: map keys to values where "same key" and "which bucket" are
//!   decided by caller-supplied objects rather than by `K: Hash + Eq`.
//! - Layers:
//!   - `HashStrategy<K>` / `EqualityStrategy<K>`: the two policies, held as
//!     `Rc<dyn _>` so one instance can serve many tables.
//!   - `Bucket`: an insertion-ordered chain of storage slots that share one
//!     reduced hash.
//!   - `HashTable<K, V>`: a fixed array of buckets over `slotmap` entry
//!     storage, exposing set/get/clear and default-inserting access plus
//!     generational `Handle`s to individual entries.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` (strategies are `Rc`-shared).
//! - Capacity (bucket count) is fixed at construction; there is no
//!   rehashing, so heavily loaded buckets degrade to linear scans.
//! - Keys are unique per table as judged by the equality strategy; `set`
//!   and `get_or_insert_*` always scan before appending.
//! - Strategies only ever see `&self` of the table. Every structural change
//!   takes `&mut self`, so a strategy can at most run nested reads, which
//!   behave like any other read.
//!
//! Hash reduction
//! - `HashStrategy::hash` returns `i64`. The table reinterprets it as `u64`
//!   before taking it modulo the bucket count, so negative hashes still land
//!   in range.
//!
//! Lookup asymmetry
//! - `get`/`get_mut` fail with `LookupError::KeyNotFound` on a missing key.
//! - `clear_key` on a missing key does nothing.
//! - `get_or_insert_default` on a missing key inserts `V::default()`; even a
//!   pure read through it leaves the key present afterward.
//!
//! Copying
//! - `Clone` deep-copies buckets and entries but shares the strategy
//!   instances with the source table. Handles minted by the source also
//!   resolve in the copy, to the copy's own entry.
//!
//! Notes and non-goals
//! - No resizing, no concurrent access, no persistence.
//! - Iteration order across buckets is unspecified.
//! - The table never logs; errors are returned to the caller.

pub mod bucket;
pub mod error;
pub mod hash_table;
#[cfg(test)]
mod hash_table_proptest;
pub mod strategy;
pub mod strings;

// Public surface
pub use bucket::Bucket;
pub use error::{CapacityError, LookupError};
pub use hash_table::{Handle, HashTable, Iter, IterMut, DEFAULT_CAPACITY};
pub use strategy::{BuildHasherStrategy, EqualityStrategy, HashStrategy, PartialEqStrategy};
pub use strings::{StringEquality, StringHasher};
