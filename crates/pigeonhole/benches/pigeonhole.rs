use std::hint::black_box;
use std::time::Duration;

use bench::{nearly_sorted_keys, random_keys, rng_for};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use pigeonhole::sort_ints;

const BENCH_SIZES: [usize; 3] = [4096, 65536, 262144];

#[derive(Clone, Copy)]
struct KeyTrack {
    max_key: i64,
    label: &'static str,
}

const TRACKS: [KeyTrack; 2] = [
    KeyTrack {
        max_key: (1 << 10) - 1,
        label: "bounded_u10",
    },
    KeyTrack {
        max_key: (1 << 20) - 1,
        label: "bounded_u20",
    },
];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    fn generate(self, track: KeyTrack, size: usize, seed: u64) -> Vec<i64> {
        let mut rng = rng_for(seed);
        match self {
            Self::RandomUniform => random_keys(&mut rng, size, track.max_key),
            Self::NearlySorted1pctSwaps => nearly_sorted_keys(&mut rng, size, track.max_key),
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

fn bench_pigeonhole(c: &mut Criterion) {
    for &track in &TRACKS {
        for &dist in &DISTRIBUTIONS {
            let mut group = c.benchmark_group(format!("sort/{}/{}", track.label, dist.label()));

            for &size in &BENCH_SIZES {
                apply_runtime(&mut group, size);
                let seed = (track.max_key as u64) ^ ((size as u64) << 24);
                let base = dist.generate(track, size, seed);

                group.bench_function(BenchmarkId::new("pigeonhole", size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            sort_ints(&mut data).unwrap();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });

                group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            data.sort();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });

                group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            data.sort_unstable();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.finish();
        }
    }
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16384 {
        bench::apply_small_runtime_config(group);
    } else if size <= 65536 {
        bench::apply_medium_runtime_config(group);
    } else {
        bench::apply_large_runtime_config(group);
    }
}

criterion_group!(benches, bench_pigeonhole);
criterion_main!(benches);
