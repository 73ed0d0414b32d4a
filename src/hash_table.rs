//! HashTable: fixed-capacity chained table driven by injected strategies.

use crate::bucket::Bucket;
use crate::error::{CapacityError, LookupError};
use crate::strategy::{EqualityStrategy, HashStrategy};
use core::fmt;
use slotmap::{DefaultKey, SlotMap};
use std::rc::Rc;

/// Bucket count used by `HashTable::new`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Stable, generational identifier of one entry.
///
/// Resolves while the entry lives. Once the entry is removed (by
/// `clear_key`, `remove` or `clear`) the handle never resolves again, even
/// if its storage slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    pub fn key<'a, K, V>(&self, table: &'a HashTable<K, V>) -> Option<&'a K> {
        table.handle_key(*self)
    }

    pub fn value<'a, K, V>(&self, table: &'a HashTable<K, V>) -> Option<&'a V> {
        table.handle_value(*self)
    }

    pub fn value_mut<'a, K, V>(&self, table: &'a mut HashTable<K, V>) -> Option<&'a mut V> {
        table.handle_value_mut(*self)
    }
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    // Bucket the entry is linked from; lets handle removal skip the hasher.
    bucket: usize,
}

/// Outcome of scanning the bucket a key reduces to.
struct Probe {
    index: usize,
    // (position within the bucket, storage slot)
    found: Option<(usize, DefaultKey)>,
}

/// Chained hash table whose hashing and key equality are supplied as
/// shared strategy objects.
///
/// The bucket array is sized once at construction and never grows; heavily
/// loaded buckets degrade to linear scans.
pub struct HashTable<K, V> {
    equality: Rc<dyn EqualityStrategy<K>>,
    hasher: Rc<dyn HashStrategy<K>>,
    buckets: Box<[Bucket]>,
    slots: SlotMap<DefaultKey, Entry<K, V>>,
}

impl<K, V> HashTable<K, V> {
    /// Table with `DEFAULT_CAPACITY` buckets.
    pub fn new(
        equality: Rc<dyn EqualityStrategy<K>>,
        hasher: Rc<dyn HashStrategy<K>>,
    ) -> Self {
        Self::with_capacity(equality, hasher, DEFAULT_CAPACITY)
    }

    /// Table with exactly `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(
        equality: Rc<dyn EqualityStrategy<K>>,
        hasher: Rc<dyn HashStrategy<K>>,
        capacity: usize,
    ) -> Self {
        assert!(capacity > 0, "hash table capacity must be at least one bucket");
        Self::build(equality, hasher, capacity)
    }

    /// Like `with_capacity`, but reports a zero capacity as an error.
    pub fn try_with_capacity(
        equality: Rc<dyn EqualityStrategy<K>>,
        hasher: Rc<dyn HashStrategy<K>>,
        capacity: usize,
    ) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        Ok(Self::build(equality, hasher, capacity))
    }

    fn build(
        equality: Rc<dyn EqualityStrategy<K>>,
        hasher: Rc<dyn HashStrategy<K>>,
        capacity: usize,
    ) -> Self {
        Self {
            equality,
            hasher,
            buckets: (0..capacity).map(|_| Bucket::new()).collect(),
            slots: SlotMap::with_key(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets; fixed for the lifetime of the table.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn hasher(&self) -> &Rc<dyn HashStrategy<K>> {
        &self.hasher
    }

    pub fn equality(&self) -> &Rc<dyn EqualityStrategy<K>> {
        &self.equality
    }

    /// True when both tables use the very same strategy instances.
    pub fn shares_strategies_with(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.hasher), Rc::as_ptr(&other.hasher))
            && core::ptr::addr_eq(Rc::as_ptr(&self.equality), Rc::as_ptr(&other.equality))
    }

    // Negative hashes are reinterpreted as unsigned before the reduction.
    fn index_of(&self, key: &K) -> usize {
        let hash = self.hasher.hash(key) as u64;
        (hash % self.buckets.len() as u64) as usize
    }

    fn locate(&self, key: &K) -> Probe {
        let index = self.index_of(key);
        let found = self.buckets[index]
            .slots()
            .iter()
            .enumerate()
            .find(|&(_, &slot)| {
                self.slots
                    .get(slot)
                    .map(|e| self.equality.is_equal(key, &e.key))
                    .unwrap_or(false)
            })
            .map(|(pos, &slot)| (pos, slot));
        Probe { index, found }
    }

    /// Index of the bucket `key` reduces to.
    pub fn bucket_index(&self, key: &K) -> usize {
        self.index_of(key)
    }

    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// The `(key, value)` pairs of one bucket in insertion order, resolved
    /// from slot storage. Empty for an out-of-range index.
    pub fn bucket_entries(&self, index: usize) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.get(index).into_iter().flat_map(move |b| {
            b.slots()
                .iter()
                .filter_map(move |&slot| self.slots.get(slot).map(|e| (&e.key, &e.value)))
        })
    }

    pub fn find(&self, key: &K) -> Option<Handle> {
        self.locate(key).found.map(|(_, slot)| Handle::new(slot))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).found.is_some()
    }

    /// Associate `value` with `key`.
    ///
    /// If an equivalent key is present its value is overwritten and the
    /// stored key is kept; otherwise a new entry is appended to the bucket.
    pub fn set(&mut self, key: K, value: V) -> Handle {
        let probe = self.locate(&key);
        if let Some((_, slot)) = probe.found {
            let entry = self
                .slots
                .get_mut(slot)
                .expect("bucket must only link live slots");
            entry.value = value;
            return Handle::new(slot);
        }
        let slot = self.slots.insert(Entry {
            key,
            value,
            bucket: probe.index,
        });
        self.buckets[probe.index].push(slot);
        Handle::new(slot)
    }

    /// Borrow the value stored for `key`.
    pub fn get(&self, key: &K) -> Result<&V, LookupError> {
        let (_, slot) = self.locate(key).found.ok_or(LookupError::KeyNotFound)?;
        self.slots
            .get(slot)
            .map(|e| &e.value)
            .ok_or(LookupError::KeyNotFound)
    }

    /// Mutably borrow the value stored for `key`. Writes go straight into
    /// the table.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, LookupError> {
        let (_, slot) = self.locate(key).found.ok_or(LookupError::KeyNotFound)?;
        self.slots
            .get_mut(slot)
            .map(|e| &mut e.value)
            .ok_or(LookupError::KeyNotFound)
    }

    /// Indexed access: the value for `key`, inserting `default()` first when
    /// the key is absent. `default` only runs on insertion.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let probe = self.locate(&key);
        let slot = match probe.found {
            Some((_, slot)) => slot,
            None => {
                let slot = self.slots.insert(Entry {
                    key,
                    value: default(),
                    bucket: probe.index,
                });
                self.buckets[probe.index].push(slot);
                slot
            }
        };
        &mut self
            .slots
            .get_mut(slot)
            .expect("slot was just found or inserted")
            .value
    }

    /// Indexed access with a default-constructed value.
    ///
    /// Reading through this method still inserts the key when it is absent,
    /// so a later `get` succeeds.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Remove the entry for `key`, returning it. Absent keys are a no-op.
    pub fn clear_key(&mut self, key: &K) -> Option<(K, V)> {
        let probe = self.locate(key);
        let (pos, slot) = probe.found?;
        let unlinked = self.buckets[probe.index].unlink_at(pos);
        debug_assert_eq!(unlinked, slot);
        let entry = self
            .slots
            .remove(slot)
            .expect("bucket must only link live slots");
        Some((entry.key, entry.value))
    }

    /// Remove every entry. The bucket count is kept; all handles go stale.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.slots.clear();
    }

    /// Remove the entry behind `handle` without consulting the strategies.
    pub fn remove(&mut self, handle: Handle) -> Option<(K, V)> {
        let entry = self.slots.remove(handle.raw_handle())?;
        let unlinked = self.buckets[entry.bucket].unlink(handle.raw_handle());
        debug_assert!(unlinked, "live entry must be linked from its bucket");
        Some((entry.key, entry.value))
    }

    pub(crate) fn handle_key(&self, h: Handle) -> Option<&K> {
        self.slots.get(h.raw_handle()).map(|e| &e.key)
    }

    pub(crate) fn handle_value(&self, h: Handle) -> Option<&V> {
        self.slots.get(h.raw_handle()).map(|e| &e.value)
    }

    pub(crate) fn handle_value_mut(&mut self, h: Handle) -> Option<&mut V> {
        self.slots.get_mut(h.raw_handle()).map(|e| &mut e.value)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            it: self.slots.iter_mut(),
        }
    }
}

/// Deep-copies every entry; the copy shares the strategy instances.
impl<K: Clone, V: Clone> Clone for HashTable<K, V> {
    fn clone(&self) -> Self {
        Self {
            equality: Rc::clone(&self.equality),
            hasher: Rc::clone(&self.hasher),
            buckets: self.buckets.clone(),
            slots: self.slots.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.values().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

/// Iterator over entries in unspecified order.
pub struct Iter<'a, K, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Handle, &'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|(k, e)| (Handle::new(k), &e.key, &e.value))
    }
}

/// Iterator over entries with mutable values, in unspecified order.
pub struct IterMut<'a, K, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (Handle, &'a K, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|(k, e)| (Handle::new(k), &e.key, &mut e.value))
    }
}
