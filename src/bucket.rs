//! Bucket: the ordered chain of entries sharing one reduced hash.
//!
//! The `(key, value)` pairs themselves live in the table's slot storage; a
//! bucket holds the slot keys of its entries, in insertion order. Read the
//! pairs through `HashTable::bucket_entries`. A bucket knows nothing about
//! strategies; the table scans it and decides what is a match. Key
//! uniqueness within a bucket is the table's job.

use slotmap::DefaultKey;

/// Insertion-ordered links to the entries of one bucket. `len` counts
/// entries; the pairs are reached through the owning table.
#[derive(Debug, Default, Clone)]
pub struct Bucket {
    chain: Vec<DefaultKey>,
}

impl Bucket {
    pub(crate) const fn new() -> Self {
        Self { chain: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub(crate) fn slots(&self) -> &[DefaultKey] {
        &self.chain
    }

    pub(crate) fn push(&mut self, slot: DefaultKey) {
        self.chain.push(slot);
    }

    /// Unlink the entry at `pos`, keeping the order of the rest.
    pub(crate) fn unlink_at(&mut self, pos: usize) -> DefaultKey {
        self.chain.remove(pos)
    }

    /// Unlink `slot` if present.
    pub(crate) fn unlink(&mut self, slot: DefaultKey) -> bool {
        match self.chain.iter().position(|&s| s == slot) {
            Some(pos) => {
                self.chain.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.chain.clear();
    }
}
