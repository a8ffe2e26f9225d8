//! # String Hash Functions
//!
//! Three small hash functions that map a string key straight to a bucket index in `[0, capacity)`.
//! They are deliberately simple so that the behaviour of the collision strategies built on top of
//! them can be compared under very different key distributions:
//!
//! - [`ascii_sum_hash`]: sum of character codes, reduced modulo the capacity. Anagrams collide.
//! - [`rolling_polynomial_hash`]: `sum(code(c_i) * 53^i) mod 2^64`, then reduced modulo the capacity.
//! - [`multiplicative_hash`]: Knuth's multiplicative method over the character-code sum,
//!   `floor(capacity * frac(sum * A))` with `A = (sqrt(5) - 1) / 2`.
//!
//! A character code is the Unicode scalar value of each `char` in the key.
//!
//! The two modulo-based functions return [`Error::DivisionByZero`] for a capacity of zero.
//! The multiplicative method has no modulo by the capacity, so a capacity of zero yields index 0.
//!
//! Functions can be used directly, through the [`HashFunction`] trait, or selected by name through
//! [`HashAlgorithm`]:
//!
//! ```rust
//! use hashbench::cs::hashing::{HashAlgorithm, HashFunction};
//!
//! let algo: HashAlgorithm = "h_rolling".parse().unwrap();
//! let idx = algo.hash("cat", 10).unwrap();
//! assert!(idx < 10);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Base of the rolling polynomial.
pub const ROLLING_BASE: u64 = 53;

/// `(sqrt(5) - 1) / 2`, the fractional part of the golden ratio.
pub const KNUTH_MULTIPLIER: f64 = 0.618_033_988_749_894_9;

/// A mapping from `(key, capacity)` to a bucket index in `[0, capacity)`.
///
/// Implementations must be deterministic: the tables recompute the index on every lookup.
pub trait HashFunction {
    fn hash(&self, key: &str, capacity: usize) -> Result<usize>;
}

impl<F> HashFunction for F
where
    F: Fn(&str, usize) -> Result<usize>,
{
    fn hash(&self, key: &str, capacity: usize) -> Result<usize> {
        self(key, capacity)
    }
}

/// Sum of the character codes of `key`.
fn code_sum(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))))
}

/// Sums the character codes of `key` and reduces modulo `capacity`.
pub fn ascii_sum_hash(key: &str, capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(Error::DivisionByZero {
            function: HashAlgorithm::Ascii.name(),
        });
    }
    Ok((code_sum(key) % capacity as u64) as usize)
}

/// The polynomial `sum(code(c_i) * 53^i)` reduced modulo `2^64`.
///
/// Every step uses unsigned 64-bit wrapping arithmetic, so the result is exactly the value of the
/// polynomial modulo `2^64`.
pub fn rolling_polynomial(key: &str) -> u64 {
    let mut acc = 0u64;
    let mut power = 1u64;
    for c in key.chars() {
        acc = acc.wrapping_add(u64::from(u32::from(c)).wrapping_mul(power));
        power = power.wrapping_mul(ROLLING_BASE);
    }
    acc
}

/// [`rolling_polynomial`] reduced modulo `capacity`.
pub fn rolling_polynomial_hash(key: &str, capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(Error::DivisionByZero {
            function: HashAlgorithm::Rolling.name(),
        });
    }
    Ok((rolling_polynomial(key) % capacity as u64) as usize)
}

/// Multiplicative hashing over the character-code sum.
///
/// Never fails. A capacity of zero maps every key to index 0.
pub fn multiplicative_hash(key: &str, capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Ok(0);
    }
    let frac = (code_sum(key) as f64 * KNUTH_MULTIPLIER) % 1.0;
    let idx = (capacity as f64 * frac).floor() as usize;
    // frac < 1, but the product can round up to `capacity` once it exceeds f64 precision
    Ok(idx.min(capacity - 1))
}

/// The built-in hash functions, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// [`ascii_sum_hash`]
    #[default]
    Ascii,
    /// [`rolling_polynomial_hash`]
    Rolling,
    /// [`multiplicative_hash`]
    Multiplicative,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Ascii,
        HashAlgorithm::Rolling,
        HashAlgorithm::Multiplicative,
    ];

    /// The command-line name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Ascii => "h_ascii",
            HashAlgorithm::Rolling => "h_rolling",
            HashAlgorithm::Multiplicative => "h_mult",
        }
    }
}

impl HashFunction for HashAlgorithm {
    fn hash(&self, key: &str, capacity: usize) -> Result<usize> {
        match self {
            HashAlgorithm::Ascii => ascii_sum_hash(key, capacity),
            HashAlgorithm::Rolling => rolling_polynomial_hash(key, capacity),
            HashAlgorithm::Multiplicative => multiplicative_hash(key, capacity),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| Error::UnknownHashAlgorithm(s.to_string()))
    }
}
