//! Times lookups against the load factor of a table filled from a key file.
//!
//! ```text
//! hash_bench keys.txt 10000 h_rolling chaining 8000 samples.tsv
//! ```

use std::process;

use clap::Parser;
use env_logger::Builder;
use hashbench::cs::hashing::{
    new_table, read_key_file, write_sample_file, CollisionStrategy, HashAlgorithm, SearchBenchmark,
};
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hash table input", long_about = None)]
struct Args {
    /// Name of the file containing keys
    data_file: String,

    /// Hash table size (n)
    table_size: usize,

    /// Hashing algorithm: h_ascii, h_rolling or h_mult
    hash_alg: HashAlgorithm,

    /// Collision resolution strategy: linear_probing or chaining
    collision_strategy: CollisionStrategy,

    /// Number of keys to add
    num_new_keys: usize,

    /// File name of the load factor / search time samples
    out_file: String,
}

fn initialize_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

fn run(args: &Args) -> hashbench::Result<()> {
    let mut table =
        new_table::<&'static str>(args.table_size, args.hash_alg, args.collision_strategy)?;
    let keys = read_key_file(&args.data_file)?;

    let samples = SearchBenchmark::new(args.num_new_keys).run(table.as_mut(), &keys)?;

    let title = format!(
        "Search Performance: {} {}",
        args.collision_strategy, args.hash_alg
    );
    write_sample_file(&args.out_file, &title, &samples)?;
    info!("wrote {} samples to {}", samples.len(), args.out_file);
    Ok(())
}

fn main() {
    initialize_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        if e.is_fatal() {
            error!("Run-Time Error: {}", e);
        } else {
            error!("{}", e);
        }
        process::exit(1);
    }
}
