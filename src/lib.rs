//! Fixed-capacity hash tables for string keys.
//!
//! Two collision strategies, [`LinearProbingTable`](cs::hashing::LinearProbingTable) and
//! [`ChainedTable`](cs::hashing::ChainedTable), share the [`HashTable`](cs::hashing::HashTable)
//! trait and take any [`HashFunction`](cs::hashing::HashFunction). The
//! [`harness`](cs::hashing::harness) module times lookups against the load factor.
//!
//! ```rust
//! use hashbench::cs::hashing::{new_table, CollisionStrategy, HashAlgorithm};
//!
//! let mut table = new_table(10, HashAlgorithm::Ascii, CollisionStrategy::LinearProbing)?;
//! assert!(table.insert("cat", "X")?);
//! assert_eq!(table.lookup("cat")?, Some(&"X"));
//! assert_eq!(table.lookup("dog")?, None);
//! # Ok::<(), hashbench::Error>(())
//! ```

pub mod cs;
pub mod error;

pub use cs::hashing;
pub use error::{Error, Result};
