//! The interface shared by both collision strategies, and a builder that picks one at runtime.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::chaining::ChainedTable;
use super::functions::{HashAlgorithm, HashFunction};
use super::linear_probing::LinearProbingTable;
use crate::error::{Error, Result};

/// A fixed-capacity table from string keys to `V`.
///
/// Hash function failures are returned as errors from [`insert`](Self::insert) and
/// [`lookup`](Self::lookup). A full table and a missing key are ordinary values.
pub trait HashTable<V> {
    /// Stores `(key, value)`. Returns `Ok(false)` if the table has no room for it.
    fn insert(&mut self, key: &str, value: V) -> Result<bool>;

    /// Returns the value stored for `key`, if any.
    fn lookup(&self, key: &str) -> Result<Option<&V>>;

    /// Number of stored entries.
    fn occupied_count(&self) -> usize;

    /// Number of slots (linear probing) or buckets (chaining).
    fn capacity(&self) -> usize;

    /// Keys recorded at insertion time.
    fn keys(&self) -> &[String];

    /// `occupied_count / capacity`. Can exceed 1 for chained tables.
    fn load_factor(&self) -> f64 {
        self.occupied_count() as f64 / self.capacity() as f64
    }
}

/// Hashes `key` and checks the index against `capacity`.
pub(super) fn start_index<H: HashFunction>(
    hasher: &H,
    key: &str,
    capacity: usize,
) -> Result<usize> {
    let index = hasher.hash(key, capacity)?;
    if index >= capacity {
        return Err(Error::IndexOutOfRange { index, capacity });
    }
    Ok(index)
}

/// How collisions are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionStrategy {
    /// [`LinearProbingTable`]
    #[default]
    LinearProbing,
    /// [`ChainedTable`]
    Chaining,
}

impl CollisionStrategy {
    pub const ALL: [CollisionStrategy; 2] =
        [CollisionStrategy::LinearProbing, CollisionStrategy::Chaining];

    /// The command-line name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            CollisionStrategy::LinearProbing => "linear_probing",
            CollisionStrategy::Chaining => "chaining",
        }
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollisionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CollisionStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::UnknownCollisionStrategy(s.to_string()))
    }
}

/// A builder for the tables.
/// Typically you'll call `.with_capacity(...)`, `.with_hash_function(...)`, `.with_strategy(...)`,
/// then `.build()`.
#[derive(Debug, Clone, Default)]
pub struct HashTableBuilder {
    capacity: usize,
    hash: HashAlgorithm,
    strategy: CollisionStrategy,
}

impl HashTableBuilder {
    /// Creates a builder for a zero-capacity ascii-sum linear probing table.
    /// A capacity must be set before building.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed number of slots or buckets.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_hash_function(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_strategy(mut self, strategy: CollisionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds a linear probing table, ignoring the configured strategy.
    pub fn build_linear_probing<V>(&self) -> Result<LinearProbingTable<V>> {
        LinearProbingTable::new(self.capacity, self.hash)
    }

    /// Builds a chained table, ignoring the configured strategy.
    pub fn build_chained<V>(&self) -> Result<ChainedTable<V>> {
        ChainedTable::new(self.capacity, self.hash)
    }

    /// Builds the table selected by the configured strategy.
    pub fn build<V: 'static>(&self) -> Result<Box<dyn HashTable<V>>> {
        debug!(
            "building {} table, hash {}, capacity {}",
            self.strategy, self.hash, self.capacity
        );
        let table: Box<dyn HashTable<V>> = match self.strategy {
            CollisionStrategy::LinearProbing => Box::new(self.build_linear_probing::<V>()?),
            CollisionStrategy::Chaining => Box::new(self.build_chained::<V>()?),
        };
        Ok(table)
    }
}

/// Creates a table of `capacity` slots using `hash` and `strategy`.
pub fn new_table<V: 'static>(
    capacity: usize,
    hash: HashAlgorithm,
    strategy: CollisionStrategy,
) -> Result<Box<dyn HashTable<V>>> {
    HashTableBuilder::new()
        .with_capacity(capacity)
        .with_hash_function(hash)
        .with_strategy(strategy)
        .build()
}
