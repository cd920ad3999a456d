// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use quarry_view2d::OrthoCamera;

fn bounded_camera() -> OrthoCamera {
    let mut camera = OrthoCamera::new(Point::new(500.0, 500.0), 0);
    camera.set_world_bounds(Some(Rect::new(0.0, 0.0, 1_000.0, 1_000.0)));
    camera.set_view_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
    camera
}

fn bench_conversions(c: &mut Criterion) {
    let camera = bounded_camera();
    let pts: Vec<Point> = (0..1_024)
        .map(|i| Point::new(f64::from(i % 32) * 25.0, f64::from(i / 32) * 25.0))
        .collect();

    c.bench_function("camera/world_to_view_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &pts {
                acc += camera.world_to_view(black_box(p)).x;
            }
            black_box(acc)
        });
    });

    c.bench_function("camera/round_trip_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &pts {
                acc += camera.view_to_world(camera.world_to_view(black_box(p))).y;
            }
            black_box(acc)
        });
    });
}

fn bench_navigation(c: &mut Criterion) {
    // Each step re-clamps against the world bounds.
    c.bench_function("camera/zoom_pan_sweep", |b| {
        b.iter(|| {
            let mut camera = bounded_camera();
            for step in 0..64 {
                let anchor = Point::new(f64::from(step * 12), f64::from(step * 9));
                camera.zoom(if step % 3 == 0 { -1 } else { 1 }, Some(anchor));
                camera.move_by(Vec2::new(7.0, -5.0));
            }
            black_box(camera.focus())
        });
    });
}

criterion_group!(benches, bench_conversions, bench_navigation);
criterion_main!(benches);
