// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use quarry_editor::{EditorView, PointerEvent};
use quarry_surface::RecordingSurface;
use quarry_world::World;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1_024.0, 768.0);

fn grid_world(n: u32) -> World {
    let mut world = World::new();
    world.set_bounds(Some(Rect::new(0.0, 0.0, 2_048.0, 2_048.0)));
    let spacing = 2_048.0 / f64::from(n);
    let mut prev = None;
    for j in 0..n {
        for i in 0..n {
            let id = world.add_point(
                Point::new(f64::from(i) * spacing, f64::from(j) * spacing),
                format!("p{}", j * n + i),
            );
            if i > 0
                && let Some(prev) = prev
            {
                world.add_line(prev, id);
            }
            prev = Some(id);
        }
    }
    world
}

fn view_for(world: &World) -> EditorView {
    let mut view = EditorView::new(Point::new(1_024.0, 1_024.0), 0);
    view.set_viewport(world, VIEWPORT);
    view
}

fn bench_box_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor/box_select");

    for n in [16u32, 32, 64] {
        let world = grid_world(n);
        group.throughput(Throughput::Elements(u64::from(n * n)));

        group.bench_with_input(BenchmarkId::from_parameter(n * n), &world, |b, world| {
            b.iter_batched(
                || (view_for(world), world.clone()),
                |(mut view, mut world)| {
                    view.primary_pressed(&world, &PointerEvent::new(Point::new(1.0, 1.0)));
                    for step in 1..=16_i32 {
                        let d = f64::from(step) * 60.0;
                        view.primary_dragged(&world, &PointerEvent::new(Point::new(d, d * 0.75)));
                    }
                    view.primary_released(&mut world);
                    black_box(view.selection().len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor/render");

    for n in [8u32, 16, 32] {
        let world = grid_world(n);
        let mut view = view_for(&world);
        group.throughput(Throughput::Elements(u64::from(n * n)));

        group.bench_with_input(BenchmarkId::from_parameter(n * n), &world, |b, world| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                view.render(world, &mut surface, VIEWPORT, 0.0, Some(Point::new(400.0, 300.0)));
                black_box(surface.events().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_box_select, bench_render);
criterion_main!(benches);
