// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_event_state::drag::DragState;

fn bench_drag_updates(c: &mut Criterion) {
    let path: Vec<(Point, u64)> = (0..1_024_u32)
        .map(|i| (Point::new(f64::from(i) * 0.75, 10.0), u64::from(i / 2)))
        .collect();

    // Half the samples share a timestamp, exercising the zero-interval guard.
    c.bench_function("event_state/drag_update", |b| {
        b.iter(|| {
            let mut drag = DragState::default();
            drag.start(Point::new(0.0, 10.0), 0);
            for &(pos, time) in &path {
                black_box(drag.update(pos, time));
            }
            black_box(drag.velocity())
        });
    });
}

criterion_group!(benches, bench_drag_updates);
criterion_main!(benches);
