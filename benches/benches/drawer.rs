// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_drawer::snap::decide;
use understory_drawer::{Drawer, DrawerConfig};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

/// Pointer samples for one drag: a jittery walk across the panel width.
fn drag_path(samples: usize, seed: u64) -> Vec<(Point, u64)> {
    let mut rng = Lcg::new(seed);
    let mut x = 0.0;
    (0..samples)
        .map(|i| {
            x += rng.next_f64() * 12.0 - 4.0;
            (Point::new(x, 300.0), (i as u64 + 1) * 8)
        })
        .collect()
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/drag_session");

    // Hypothesis: per-sample cost is constant, so throughput is flat in path length.
    for samples in [16_usize, 128, 1_024] {
        let path = drag_path(samples, 0x5eed);
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &path, |b, path| {
            b.iter_batched(
                Drawer::default,
                |mut drawer| {
                    drawer.begin_drag(Point::new(0.0, 300.0), 0);
                    for &(pos, time) in path {
                        drawer.pointer_move(pos, time);
                    }
                    black_box(drawer.pointer_up(path.len() as u64 * 8));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/hover");
    let path: Vec<Point> = (0..512)
        .map(|i| Point::new(f64::from(i % 120), 200.0))
        .collect();
    group.throughput(Throughput::Elements(path.len() as u64));

    group.bench_function("edge_peek", |b| {
        b.iter_batched(
            Drawer::default,
            |mut drawer| {
                for (i, &pos) in path.iter().enumerate() {
                    drawer.pointer_move(pos, i as u64);
                }
                black_box(drawer.revision());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_snap_decision(c: &mut Criterion) {
    let config = DrawerConfig::default();
    let mut rng = Lcg::new(42);
    let inputs: Vec<(f64, f64)> = (0..1_024)
        .map(|_| (-280.0 * rng.next_f64(), rng.next_f64() * 4.0 - 2.0))
        .collect();

    let mut group = c.benchmark_group("drawer/snap");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("decide", |b| {
        b.iter(|| {
            for &(offset, velocity) in &inputs {
                black_box(decide(black_box(offset), black_box(velocity), &config));
            }
        });
    });
    group.finish();
}

fn bench_presentation_sampling(c: &mut Criterion) {
    let mut drawer = Drawer::default();
    drawer.open(0);

    c.bench_function("drawer/offset_at_mid_transition", |b| {
        b.iter(|| {
            for now in (0..300).step_by(4) {
                black_box(drawer.offset_at(black_box(now)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_drag_session,
    bench_hover,
    bench_snap_decision,
    bench_presentation_sampling
);
criterion_main!(benches);
