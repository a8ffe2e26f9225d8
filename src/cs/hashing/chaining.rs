//! # Chained Hash Table
//!
//! A fixed number of **buckets**, each a vector of `(key, value)` entries. A key always goes to
//! the bucket its [`HashFunction`] picks, so insertion never fails and the number of entries is
//! unbounded relative to the number of buckets.
//!
//! Entries are append-only: inserting an existing key adds a second entry to the same bucket and
//! lookups return the earliest one.

use std::collections::HashSet;

use log::{debug, trace};

use super::functions::{HashAlgorithm, HashFunction};
use super::table::{start_index, HashTable};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// A "bucket" is a vector of entries for separate chaining.
type Bucket<V> = Vec<Entry<V>>;

/// Separate chaining over a fixed bucket array.
#[derive(Debug, Clone)]
pub struct ChainedTable<V, H = HashAlgorithm> {
    buckets: Vec<Bucket<V>>,
    /// Number of stored entries, duplicates included.
    len: usize,
    /// Distinct keys in first-insertion order.
    keys: Vec<String>,
    /// Membership index over `keys`.
    seen: HashSet<String>,
    hasher: H,
}

impl<V, H: HashFunction> ChainedTable<V, H> {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        debug!("created chained table with {} buckets", capacity);
        Ok(Self {
            buckets,
            len: 0,
            keys: Vec::new(),
            seen: HashSet::new(),
            hasher,
        })
    }

    /// Number of buckets. Never changes.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries. May exceed [`capacity`](Self::capacity).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct keys in the order they were first inserted.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of entries in each bucket, in bucket order.
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Appends `(key, value)` to the key's bucket. Always returns `Ok(true)`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<bool> {
        let key = key.into();
        let idx = start_index(&self.hasher, &key, self.capacity())?;
        trace!("appending {:?} to bucket {}", key, idx);

        if !self.seen.contains(&key) {
            self.seen.insert(key.clone());
            self.keys.push(key.clone());
        }
        self.buckets[idx].push(Entry { key, value });
        self.len += 1;
        Ok(true)
    }

    /// Returns the value of the earliest entry with `key` in the key's bucket.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        let idx = start_index(&self.hasher, key, self.capacity())?;
        Ok(self.buckets[idx]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value))
    }

    /// Iterates all entries, bucket by bucket, each bucket in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (entry.key.as_str(), &entry.value)))
    }
}

impl<V, H: HashFunction> HashTable<V> for ChainedTable<V, H> {
    fn insert(&mut self, key: &str, value: V) -> Result<bool> {
        ChainedTable::insert(self, key, value)
    }

    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        self.get(key)
    }

    fn occupied_count(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }
}
