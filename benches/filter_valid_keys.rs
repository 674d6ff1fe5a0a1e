/// Key filtering benchmarks
///
/// Compares the borrowing (clone) and owning (move) forms across map sizes,
/// with a fixed share of absent and empty keys.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keyfilter::{FilterValidKeys, IntoValidKeys};
use std::collections::HashMap;
use std::time::Duration;

/// Build a map where one key in ten is absent and one in ten is empty
fn build_map(size: usize) -> HashMap<Option<String>, String> {
    let mut map = HashMap::with_capacity(size);
    for i in 0..size {
        let key = match i % 10 {
            0 => None,
            1 => Some(String::new()),
            _ => Some(format!("key_{}", i)),
        };
        map.insert(key, format!("value_{}", i));
    }
    map
}

fn bench_filter_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_valid_keys");
    group.measurement_time(Duration::from_secs(5));

    for size in [16, 256, 4096, 65536].iter() {
        let map = build_map(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("borrowed", size), &map, |b, map| {
            b.iter(|| black_box(map.filter_valid_keys()));
        });

        group.bench_with_input(BenchmarkId::new("owned", size), &map, |b, map| {
            b.iter_batched(
                || map.clone(),
                |m| black_box(m.into_valid_keys()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_sizes);
criterion_main!(benches);
