//! Strategy traits: the two policies a `HashTable` is parameterized with at
//! runtime, plus adapters over the standard `Hash`/`PartialEq` machinery.
//!
//! Contract shared by both traits
//! - Pure and deterministic for the lifetime of every table that uses them.
//! - Consistent with each other: `is_equal(a, b)` implies
//!   `hash(a) == hash(b)`. The table does not check this; a violation
//!   leaves keys stranded in the wrong bucket.
//! - Invoked only through `&self`. Strategies carry no mutable state, so
//!   one instance can be shared by any number of tables.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use hashbrown::hash_map::DefaultHashBuilder;

/// Computes an integer hash for a key.
///
/// Negative results are allowed; the table reinterprets them as unsigned
/// before reducing to a bucket index.
pub trait HashStrategy<K: ?Sized> {
    fn hash(&self, key: &K) -> i64;
}

/// Decides whether two keys are the same key, independently of any
/// `PartialEq` the key type may have.
pub trait EqualityStrategy<K: ?Sized> {
    fn is_equal(&self, a: &K, b: &K) -> bool;
}

/// `HashStrategy` backed by a `BuildHasher` and `K: Hash`.
///
/// Pair with `PartialEqStrategy` to get the usual `Hash + Eq` behavior.
/// The 64-bit hash is reinterpreted as `i64` bit for bit.
pub struct BuildHasherStrategy<S = DefaultHashBuilder> {
    build: S,
}

impl BuildHasherStrategy {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl Default for BuildHasherStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> BuildHasherStrategy<S> {
    pub fn with_hasher(build: S) -> Self {
        Self { build }
    }
}

impl<S> fmt::Debug for BuildHasherStrategy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildHasherStrategy").finish_non_exhaustive()
    }
}

impl<K, S> HashStrategy<K> for BuildHasherStrategy<S>
where
    K: ?Sized + Hash,
    S: BuildHasher,
{
    fn hash(&self, key: &K) -> i64 {
        self.build.hash_one(key) as i64
    }
}

/// `EqualityStrategy` deferring to `K: PartialEq`.
pub struct PartialEqStrategy<K: ?Sized> {
    _pd: PhantomData<fn(&K)>,
}

impl<K: ?Sized> PartialEqStrategy<K> {
    pub const fn new() -> Self {
        Self { _pd: PhantomData }
    }
}

impl<K: ?Sized> Default for PartialEqStrategy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> fmt::Debug for PartialEqStrategy<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartialEqStrategy")
    }
}

impl<K: ?Sized + PartialEq> EqualityStrategy<K> for PartialEqStrategy<K> {
    fn is_equal(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
