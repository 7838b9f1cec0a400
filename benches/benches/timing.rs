// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_timing::{Debounce, Throttle};

fn bench_timing(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_timing");

    group.bench_function("debounce_burst_10k", |b| {
        b.iter(|| {
            let mut debounce = Debounce::new(250);
            let mut fired = 0_u32;
            for now in 0..10_000_u64 {
                if now % 400 < 100 {
                    debounce.trigger(now);
                }
                if debounce.poll(now) {
                    fired += 1;
                }
            }
            black_box(fired)
        });
    });

    group.bench_function("throttle_10k", |b| {
        b.iter(|| {
            let mut throttle = Throttle::new(100);
            let passed = (0..10_000_u64)
                .filter(|&now| throttle.try_acquire(now))
                .count();
            black_box(passed)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_timing);
criterion_main!(benches);
