#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// bucket contents directly.

use crate::error::LookupError;
use crate::hash_table::{Handle, HashTable};
use crate::strategy::HashStrategy;
use crate::strings::{StringEquality, StringHasher};
use proptest::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

// Folds hashes into a handful of values so buckets hold several keys.
struct CoarseHasher(u8);
impl HashStrategy<String> for CoarseHasher {
    fn hash(&self, key: &String) -> i64 {
        HashStrategy::<str>::hash(&StringHasher, key.as_str()) % i64::from(self.0)
    }
}

// Pool-indexed operations: indices shrink toward earlier keys.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Access(usize),
    Bump(usize, i32),
    ClearKey(usize),
    ClearAll,
    Remove(usize),
}

fn arb_scenario() -> impl Strategy<Value = (usize, u8, Vec<String>, Vec<Op>)> {
    (1usize..=12, 1u8..=5, proptest::collection::vec("[a-z]{0,4}", 1..=10)).prop_flat_map(
        |(capacity, spread, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
                3 => idx.clone().prop_map(Op::Get),
                2 => idx.clone().prop_map(Op::Access),
                2 => (idx.clone(), -100i32..100).prop_map(|(i, d)| Op::Bump(i, d)),
                2 => idx.clone().prop_map(Op::ClearKey),
                1 => Just(Op::ClearAll),
                1 => idx.clone().prop_map(Op::Remove),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, spread, pool.clone(), ops))
        },
    )
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - set overwrites in place; get mirrors the model, KeyNotFound when absent.
// - get_or_insert_default inserts 0 for absent keys and leaves them present.
// - clear_key / remove drop exactly one entry; clearing absent keys is a no-op.
// - every key sits in bucket `hash mod capacity` exactly once.
// - handles for removed entries never resolve again.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, spread, pool, ops) in arb_scenario()) {
        let mut sut: HashTable<String, i32> = HashTable::with_capacity(
            Rc::new(StringEquality),
            Rc::new(CoarseHasher(spread)),
            capacity,
        );
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut stale: Vec<Handle> = Vec::new();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let k = pool[i].clone();
                    sut.set(k.clone(), v);
                    model.insert(k, v);
                }
                Op::Get(i) => {
                    let k = &pool[i];
                    match model.get(k) {
                        Some(v) => prop_assert_eq!(sut.get(k), Ok(v)),
                        None => prop_assert_eq!(sut.get(k), Err(LookupError::KeyNotFound)),
                    }
                }
                Op::Access(i) => {
                    let k = pool[i].clone();
                    let expected = *model.entry(k.clone()).or_default();
                    prop_assert_eq!(*sut.get_or_insert_default(k), expected);
                }
                Op::Bump(i, d) => {
                    let k = &pool[i];
                    match sut.get_mut(k) {
                        Ok(v) => {
                            *v = v.wrapping_add(d);
                            let m = model.get_mut(k).expect("model has key");
                            *m = m.wrapping_add(d);
                        }
                        Err(LookupError::KeyNotFound) => prop_assert!(!model.contains_key(k)),
                    }
                }
                Op::ClearKey(i) => {
                    let k = &pool[i];
                    let h = sut.find(k);
                    let removed = sut.clear_key(k).map(|(_, v)| v);
                    prop_assert_eq!(removed, model.remove(k));
                    stale.extend(h);
                }
                Op::ClearAll => {
                    stale.extend(sut.iter().map(|(h, _, _)| h));
                    sut.clear();
                    model.clear();
                }
                Op::Remove(i) => {
                    let k = &pool[i];
                    if let Some(h) = sut.find(k) {
                        let (rk, rv) = sut.remove(h).expect("live handle");
                        prop_assert_eq!(&rk, k);
                        prop_assert_eq!(Some(rv), model.remove(k));
                        stale.push(h);
                    } else {
                        prop_assert!(!model.contains_key(k));
                    }
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.capacity(), capacity);
            for h in &stale {
                prop_assert!(h.value(&sut).is_none(), "stale handle must not resolve");
            }
        }

        for (k, v) in &model {
            let idx = sut.bucket_index(k);
            let hits: Vec<&i32> = sut
                .bucket_entries(idx)
                .filter(|(bk, _)| *bk == k)
                .map(|(_, bv)| bv)
                .collect();
            prop_assert_eq!(hits, vec![v]);
        }
        let total: usize = (0..capacity)
            .map(|i| sut.bucket(i).map(|b| b.len()).unwrap_or(0))
            .sum();
        prop_assert_eq!(total, model.len());
    }
}
