use batchbench::bench::{chunked_batch_insert, generate_data};
use batchbench::{Engine, LevelDb, Store, WriteOptions};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use tempfile::TempDir;

// 100k records, keys up to 9 bytes and values up to 11
const RECORDS: usize = 100_000;
const BATCH_SIZES: [usize; 4] = [100, 1_000, 10_000, RECORDS];

fn bench_engine<E: Engine>(c: &mut Criterion) {
    let (keys, values) = generate_data(RECORDS);

    let mut group = c.benchmark_group(format!("{}_batch_insert", E::NAME));
    group.sample_size(10);

    for &batch_size in &BATCH_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter_batched(
                    || {
                        let dir = TempDir::new().unwrap();
                        let store = Store::<E>::open(dir.path().join("db")).unwrap();
                        (dir, store)
                    },
                    |(_dir, store)| {
                        chunked_batch_insert(
                            &store,
                            &keys,
                            &values,
                            batch_size,
                            WriteOptions::default(),
                        )
                        .unwrap();
                    },
                    BatchSize::PerIteration,
                );
            },
        );
    }

    group.finish();
}

fn batch_insert(c: &mut Criterion) {
    bench_engine::<LevelDb>(c);
    #[cfg(feature = "rocksdb")]
    bench_engine::<batchbench::RocksDb>(c);
}

criterion_group!(benches, batch_insert);
criterion_main!(benches);
