//! Crate-wide error type.

use thiserror::Error;

/// Errors produced by the hash functions, the tables and the benchmark driver.
#[derive(Debug, Error)]
pub enum Error {
    /// A hash function that reduces with integer modulo was asked for an index into zero slots.
    ///
    /// This is a configuration error: no table using that hash function can make progress.
    #[error("{function}: cannot perform integer division or modulo by zero")]
    DivisionByZero { function: &'static str },

    /// A hash function returned an index outside the table.
    #[error("hash index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// A table was requested with no slots.
    #[error("hash table capacity must be positive")]
    ZeroCapacity,

    #[error("unknown hash algorithm `{0}` (expected h_ascii, h_rolling or h_mult)")]
    UnknownHashAlgorithm(String),

    #[error("unknown collision strategy `{0}` (expected linear_probing or chaining)")]
    UnknownCollisionStrategy(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors after which the table that raised them cannot be used.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::DivisionByZero { .. } | Error::ZeroCapacity)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
