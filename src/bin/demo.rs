//! Walks a string-keyed table through set, get, indexed access and both
//! clear forms, reporting each step as a tracing event.

use std::rc::Rc;
use strategy_table::{HashTable, LookupError, StringEquality, StringHasher};
use tracing::{info, warn};

fn report(table: &HashTable<String, i32>, key: &str) {
    match table.get(&key.to_string()) {
        Ok(value) => info!(key, value = *value, "lookup"),
        Err(LookupError::KeyNotFound) => warn!(key, "not in the hash table"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let hasher = Rc::new(StringHasher);
    let equality = Rc::new(StringEquality);
    let mut table: HashTable<String, i32> = HashTable::with_capacity(equality, hasher, 10);
    info!(capacity = table.capacity(), "created table");

    for (key, value) in [("apple", 5), ("banana", 10), ("orange", 15)] {
        let bucket = table.bucket_index(&key.to_string());
        table.set(key.to_string(), value);
        info!(key, value, bucket, "set");
    }
    for key in ["apple", "banana", "orange"] {
        report(&table, key);
    }

    *table.get_or_insert_default("pear".to_string()) = 20;
    info!(value = *table.get_or_insert_default("pear".to_string()), "pear via indexed access");

    table.clear_key(&"banana".to_string());
    info!("cleared banana");
    report(&table, "banana");

    table.clear();
    info!(len = table.len(), "cleared all entries");
    for key in ["apple", "orange"] {
        report(&table, key);
    }
}
