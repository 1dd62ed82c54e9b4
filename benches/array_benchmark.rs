use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use keyarray::prelude::*;
use rand::Rng;
use std::collections::BTreeMap;
use std::hint::black_box;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 1_000;
    let keys: Vec<u64> = (0..count).map(|_| rng.random()).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("SortedArray::insert", |b| {
        b.iter_batched(
            SortedArray::new,
            |mut array| {
                for &k in &keys {
                    array.insert(black_box(k), k);
                }
                array
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("SortedArray::bulk_load", |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<Vec<_>>(),
            |pairs| new_sorted_array_from(black_box(pairs)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("BTreeMap::insert", |b| {
        b.iter_batched(
            BTreeMap::new,
            |mut map| {
                for &k in &keys {
                    map.insert(black_box(k), k);
                }
                map
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lookup");

    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..1_000).map(|_| rng.random()).collect();
    let array = new_sorted_array_from(keys.iter().map(|&k| (k, k)));
    let shared = ConcurrentSortedArray::from(array.clone());
    let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

    group.bench_function("SortedArray::get", |b| {
        b.iter(|| keys.iter().filter(|&&k| array.get(black_box(k)).is_some()).count())
    });

    group.bench_function("ConcurrentSortedArray::get", |b| {
        b.iter(|| keys.iter().filter(|&&k| shared.get(black_box(k)).is_some()).count())
    });

    group.bench_function("BTreeMap::get", |b| {
        b.iter(|| keys.iter().filter(|&&k| map.get(&black_box(k)).is_some()).count())
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
