use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashbench::cs::hashing::{new_table, CollisionStrategy, HashAlgorithm, HashFunction};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_keys(count: usize, len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count)
        .map(|_| (0..len).map(|_| rng.sample(Alphanumeric) as char).collect())
        .collect()
}

fn bench_hash_functions(c: &mut Criterion) {
    let keys = random_keys(1_000, 16);
    let mut group = c.benchmark_group("hash_functions");

    for algo in HashAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algo), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(algo.hash(black_box(key), 10_007).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_lookup_by_load_factor(c: &mut Criterion) {
    let capacity = 4_096;
    let keys = random_keys(capacity, 12);
    let mut group = c.benchmark_group("lookup_by_load_factor");

    for strategy in CollisionStrategy::ALL {
        for algo in HashAlgorithm::ALL {
            for load in [25usize, 50, 75, 95] {
                let filled = capacity * load / 100;
                let mut table = new_table::<usize>(capacity, algo, strategy).unwrap();
                for (i, key) in keys.iter().take(filled).enumerate() {
                    table.insert(key, i).unwrap();
                }

                let id = BenchmarkId::new(format!("{strategy}/{algo}"), load);
                group.bench_with_input(id, &keys[..filled], |b, present| {
                    b.iter(|| {
                        for key in present {
                            black_box(table.lookup(black_box(key)).unwrap());
                        }
                    })
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_hash_functions, bench_lookup_by_load_factor);
criterion_main!(benches);
