use criterion::{criterion_group, criterion_main, Criterion};
use filestore::FileStore;
use keyfmt::KeyFormat;
use tempfile::tempdir;

fn filestore_add_benchmark(c: &mut Criterion) {
    c.bench_function("filestore_add_100", |b| {
        b.iter(|| {
            let dir = tempdir().unwrap();
            let mut store = FileStore::open(dir.path().join("bench.txt"), KeyFormat::FiveDigit);
            for i in 0..100u32 {
                store.add(format!("{i:05}"), "value".to_string()).unwrap();
            }
        });
    });
}

fn filestore_search_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path().join("bench.txt"), KeyFormat::FiveDigit);
    for i in 0..1_000u32 {
        store.add(format!("{i:05}"), "value".to_string()).unwrap();
    }

    c.bench_function("filestore_search_1k", |b| {
        b.iter(|| {
            for i in 0..1_000u32 {
                assert!(store.search(&format!("{i:05}")).is_some());
            }
        });
    });
}

criterion_group!(benches, filestore_add_benchmark, filestore_search_benchmark);
criterion_main!(benches);
