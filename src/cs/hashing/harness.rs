//! # Search Benchmark
//!
//! Measures how lookup latency grows with the load factor of a table. Keys are read one per line,
//! inserted with a placeholder value, and after each insertion the key just inserted is looked up
//! while a wall-clock timer runs. Every lookup produces one [`LoadSample`].
//!
//! The samples are written as whitespace-separated `load_factor seconds` pairs by
//! [`write_samples`], ready for any external plotting tool.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use super::table::HashTable;
use crate::error::Result;

/// Value stored for every key inserted by the benchmark.
pub const PLACEHOLDER_VALUE: &str = "Value";

/// One timed lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSample {
    /// `occupied_count / capacity` at the time of the lookup.
    pub load_factor: f64,
    pub elapsed: Duration,
}

/// Reads keys from a line-oriented text source, stripping line terminators.
pub fn read_keys<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    // `lines` strips both "\n" and "\r\n"
    reader.lines()
}

/// Opens `path` and returns its keys.
pub fn read_key_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let keys = read_keys(BufReader::new(file)).collect::<io::Result<Vec<_>>>()?;
    debug!("read {} keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Drives insertions and timed lookups against a table.
#[derive(Debug, Clone, Copy)]
pub struct SearchBenchmark {
    /// Stop as soon as the table holds this many entries.
    key_limit: usize,
}

impl SearchBenchmark {
    pub fn new(key_limit: usize) -> Self {
        Self { key_limit }
    }

    pub fn key_limit(&self) -> usize {
        self.key_limit
    }

    /// Feeds `keys` into `table` until it holds `key_limit` entries or the keys run out.
    ///
    /// The insertion that reaches the limit is not followed by a lookup. A rejected insertion
    /// (full table) still is, so a full linear probing table keeps producing samples at load
    /// factor 1. Hash function errors abort the run.
    pub fn run<I, S>(
        &self,
        table: &mut dyn HashTable<&'static str>,
        keys: I,
    ) -> Result<Vec<LoadSample>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut samples = Vec::new();
        let mut rejected = 0usize;

        for key in keys {
            let key = key.as_ref();
            if !table.insert(key, PLACEHOLDER_VALUE)? {
                rejected += 1;
            }
            if table.occupied_count() == self.key_limit {
                break;
            }

            let start = Instant::now();
            std::hint::black_box(table.lookup(key)?);
            let elapsed = start.elapsed();

            samples.push(LoadSample {
                load_factor: table.load_factor(),
                elapsed,
            });
        }

        info!(
            "benchmark finished: {} samples, {} entries, {} rejected insertions",
            samples.len(),
            table.occupied_count(),
            rejected
        );
        Ok(samples)
    }
}

/// Writes a `# title` header, an `# x_label y_label` header, then one `load_factor seconds` line
/// per sample.
pub fn write_samples<W: Write>(mut out: W, title: &str, samples: &[LoadSample]) -> Result<()> {
    writeln!(out, "# {}", title)?;
    writeln!(out, "# Load factor\tTime to search")?;
    for sample in samples {
        writeln!(
            out,
            "{}\t{:.9}",
            sample.load_factor,
            sample.elapsed.as_secs_f64()
        )?;
    }
    out.flush()?;
    Ok(())
}

/// [`write_samples`] into a new file at `path`.
pub fn write_sample_file(
    path: impl AsRef<Path>,
    title: &str,
    samples: &[LoadSample],
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_samples(io::BufWriter::new(file), title, samples)
}
