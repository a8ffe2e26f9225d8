pub mod chaining;
pub mod functions;
pub mod harness;
pub mod linear_probing;
pub mod table;

// Re-export the tables, hash functions and benchmark driver with descriptive names
pub use chaining::ChainedTable;
pub use functions::{
    ascii_sum_hash, multiplicative_hash, rolling_polynomial, rolling_polynomial_hash,
    HashAlgorithm, HashFunction,
};
pub use harness::{
    read_key_file, read_keys, write_sample_file, write_samples, LoadSample, SearchBenchmark,
};
pub use linear_probing::LinearProbingTable;
pub use table::{new_table, CollisionStrategy, HashTable, HashTableBuilder};
