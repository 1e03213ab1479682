//! Cache performance benchmarks
//!
//! The LRU store promises O(1) amortized operations; these benchmarks watch
//! for throughput degrading with store size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use memocache::{MemoCache, OrderedStore};

fn bench_ordered_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_store");

    for &size in &[64usize, 1024, 16384] {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("get_hit", size), &size, |b, &size| {
            let mut store = OrderedStore::new(size).unwrap();
            for i in 0..size {
                store.insert(i, i);
            }
            let mut counter = 0usize;
            b.iter(|| {
                let key = counter % size;
                counter += 1;
                black_box(store.get(&key));
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_evict", size), &size, |b, &size| {
            let mut store = OrderedStore::new(size).unwrap();
            for i in 0..size {
                store.insert(i, i);
            }
            // Every insert beyond this point evicts the LRU entry.
            let mut counter = size;
            b.iter(|| {
                store.insert(black_box(counter), counter);
                counter += 1;
            });
        });
    }

    group.finish();
}

fn bench_memo_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo_cache");
    group.throughput(Throughput::Elements(1));

    group.bench_function("lookup_hit_bounded", |b| {
        let mut cache: MemoCache<u64, u64> = MemoCache::bounded(1024).unwrap();
        for i in 0..1024u64 {
            cache.record(i, i * 2).unwrap();
        }
        let mut counter = 0u64;
        b.iter(|| {
            let key = counter % 1024;
            counter += 1;
            black_box(cache.lookup(&key).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ordered_store, bench_memo_cache);
criterion_main!(benches);
