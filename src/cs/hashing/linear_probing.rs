//! # Linear Probing Hash Table
//!
//! A fixed-capacity **open addressing** table for string keys. Each slot holds at most one entry.
//! A key is placed in the first empty slot of its slot sequence
//! `start, start + 1, ..., start + capacity - 1` (all modulo `capacity`), where `start` is the
//! index given by the table's [`HashFunction`].
//!
//! Properties:
//! - **No resizing**: once every slot is occupied, [`LinearProbingTable::insert`] returns `Ok(false)`
//!   for the rest of the table's lifetime.
//! - **No deletion**: slots are never emptied, so a lookup can stop at the first empty slot.
//! - **No overwrite**: inserting an existing key takes another slot further along its slot sequence.
//!   Lookups keep returning the entry met first, which is the original one.

use log::{debug, trace};

use super::functions::{HashAlgorithm, HashFunction};
use super::table::{start_index, HashTable};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Open addressing with stride-1 probing over a fixed slot array.
#[derive(Debug, Clone)]
pub struct LinearProbingTable<V, H = HashAlgorithm> {
    slots: Vec<Option<Entry<V>>>,
    /// Number of occupied slots.
    len: usize,
    /// Keys in insertion order.
    keys: Vec<String>,
    hasher: H,
}

impl<V, H: HashFunction> LinearProbingTable<V, H> {
    /// Creates a table with `capacity` empty slots.
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        debug!("created linear probing table with {} slots", capacity);
        Ok(Self {
            slots,
            len: 0,
            keys: Vec::new(),
            hasher,
        })
    }

    /// Number of slots. Never changes.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true once every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Keys in the order they were inserted, duplicates included.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Stores `(key, value)` in the first empty slot of the key's slot sequence.
    ///
    /// Returns `Ok(false)` without touching the table if every slot is occupied.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<bool> {
        let key = key.into();
        let capacity = self.capacity();
        let start = start_index(&self.hasher, &key, capacity)?;

        for idx in slot_sequence(start, capacity) {
            if self.slots[idx].is_none() {
                trace!("inserting {:?} at slot {} (start {})", key, idx, start);
                self.keys.push(key.clone());
                self.slots[idx] = Some(Entry { key, value });
                self.len += 1;
                return Ok(true);
            }
        }

        debug!(
            "linear probing table full ({} slots), rejected {:?}",
            capacity, key
        );
        Ok(false)
    }

    /// Returns the value of the first entry with `key` along the key's slot sequence.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        let capacity = self.capacity();
        let start = start_index(&self.hasher, key, capacity)?;

        for idx in slot_sequence(start, capacity) {
            match &self.slots[idx] {
                // nothing is ever removed, so no entry for `key` lies past a gap
                None => return Ok(None),
                Some(entry) if entry.key == key => return Ok(Some(&entry.value)),
                Some(_) => {}
            }
        }
        Ok(None)
    }

    /// Iterates occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }
}

/// Slot indices visited from `start`: stride 1, wrapping at `capacity`, each slot once.
///
/// `start` must be below `capacity`.
fn slot_sequence(start: usize, capacity: usize) -> impl Iterator<Item = usize> {
    (start..capacity).chain(0..start)
}

impl<V, H: HashFunction> HashTable<V> for LinearProbingTable<V, H> {
    fn insert(&mut self, key: &str, value: V) -> Result<bool> {
        LinearProbingTable::insert(self, key, value)
    }

    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        self.get(key)
    }

    fn occupied_count(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sends every key to the same start slot.
    fn constant_hash(start: usize) -> impl Fn(&str, usize) -> Result<usize> {
        move |_, capacity| Ok(start % capacity)
    }

    #[test]
    fn insert_and_get() {
        let mut table = LinearProbingTable::new(10, HashAlgorithm::Ascii).unwrap();
        assert!(table.is_empty());
        assert!(table.insert("cat", "X").unwrap());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("cat").unwrap(), Some(&"X"));
        assert_eq!(table.get("dog").unwrap(), None);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = LinearProbingTable::<u32>::new(0, HashAlgorithm::Multiplicative);
        assert!(matches!(result, Err(Error::ZeroCapacity)));
    }

    #[test]
    fn colliding_keys_wrap_around_then_fill() {
        let capacity = 5;
        let mut table = LinearProbingTable::new(capacity, constant_hash(3)).unwrap();
        for i in 0..capacity {
            assert!(table.insert(format!("k{i}"), i).unwrap());
        }
        assert!(table.is_full());

        // start 3, so slots are taken in order 3, 4, 0, 1, 2
        let order: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["k2", "k3", "k4", "k0", "k1"]);

        assert!(!table.insert("extra", 99).unwrap());
        assert_eq!(table.len(), capacity);
        assert_eq!(table.get("extra").unwrap(), None);
        for i in 0..capacity {
            assert_eq!(table.get(&format!("k{i}")).unwrap(), Some(&i));
        }
    }

    #[test]
    fn full_table_stays_full() {
        let mut table = LinearProbingTable::new(2, HashAlgorithm::Rolling).unwrap();
        assert!(table.insert("a", 1).unwrap());
        assert!(table.insert("b", 2).unwrap());
        for _ in 0..3 {
            assert!(!table.insert("c", 3).unwrap());
        }
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys(), ["a", "b"]);
    }

    #[test]
    fn miss_stops_at_first_empty_slot() {
        let mut table = LinearProbingTable::new(10, constant_hash(4)).unwrap();
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        // slots 4 and 5 are taken, slot 6 is the gap
        assert_eq!(table.get("never").unwrap(), None);
    }

    #[test]
    fn miss_on_full_table_sweeps_everything() {
        let mut table = LinearProbingTable::new(3, constant_hash(0)).unwrap();
        for key in ["x", "y", "z"] {
            table.insert(key, ()).unwrap();
        }
        assert_eq!(table.get("w").unwrap(), None);
    }

    #[test]
    fn duplicate_key_takes_new_slot_and_first_wins() {
        let mut table = LinearProbingTable::new(4, constant_hash(1)).unwrap();
        assert!(table.insert("dup", "first").unwrap());
        assert!(table.insert("dup", "second").unwrap());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("dup").unwrap(), Some(&"first"));
        assert_eq!(table.keys(), ["dup", "dup"]);
    }

    #[test]
    fn hash_errors_propagate() {
        let failing = |_: &str, _: usize| -> Result<usize> {
            Err(Error::DivisionByZero { function: "broken" })
        };
        let mut table = LinearProbingTable::new(4, failing).unwrap();
        assert!(matches!(
            table.insert("k", 1),
            Err(Error::DivisionByZero { .. })
        ));
        assert!(table.is_empty());
        assert!(table.keys().is_empty());
        assert!(matches!(table.get("k"), Err(Error::DivisionByZero { .. })));
    }

    #[test]
    fn out_of_range_hash_is_an_error() {
        let past_end = |_: &str, capacity: usize| -> Result<usize> { Ok(capacity) };
        let mut table = LinearProbingTable::new(4, past_end).unwrap();
        assert!(matches!(
            table.insert("k", 1),
            Err(Error::IndexOutOfRange {
                index: 4,
                capacity: 4
            })
        ));
        assert!(table.is_empty());
        assert!(table.keys().is_empty());
        assert!(matches!(
            table.get("k"),
            Err(Error::IndexOutOfRange { .. })
        ));

        let overflowing = |_: &str, _: usize| -> Result<usize> { Ok(usize::MAX) };
        let mut huge = LinearProbingTable::new(3, overflowing).unwrap();
        assert!(matches!(
            huge.insert("k", 1),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn works_through_trait_object() {
        let mut table: Box<dyn HashTable<i32>> =
            Box::new(LinearProbingTable::<i32>::new(8, HashAlgorithm::Multiplicative).unwrap());
        assert!(table.insert("one", 1).unwrap());
        assert!(table.insert("two", 2).unwrap());
        assert_eq!(table.lookup("one").unwrap(), Some(&1));
        assert_eq!(table.occupied_count(), 2);
        assert_eq!(table.capacity(), 8);
        assert!((table.load_factor() - 0.25).abs() < f64::EPSILON);
    }
}
