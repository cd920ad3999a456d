// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use quarry_world::{PointId, World, geometry};

fn grid(world: &mut World, n: u32, spacing: f64) -> Vec<PointId> {
    let mut ids = Vec::new();
    for j in 0..n {
        for i in 0..n {
            let pos = Point::new(f64::from(i) * spacing, f64::from(j) * spacing);
            ids.push(world.add_point(pos, format!("p{}", j * n + i)));
        }
    }
    ids
}

#[test]
fn handles_stay_valid_across_moves() {
    let mut world = World::new();
    let ids = grid(&mut world, 3, 10.0);
    let line = world.add_line(ids[0], ids[8]);
    assert_eq!(world.point_count(), 9);

    world.shift_points([ids[0], ids[4]], Vec2::new(1.0, -1.0));

    let segment = world.line_segment(&world.lines()[line]);
    assert_eq!(segment.p0, Point::new(1.0, -1.0));
    assert_eq!(segment.p1, Point::new(20.0, 20.0));
    assert_eq!(world.get(ids[4]).unwrap().label, "p4");
    assert_eq!(world.position(ids[4]), Some(Point::new(11.0, 9.0)));
}

#[test]
fn area_query_matches_grid_cells() {
    let mut world = World::new();
    let ids = grid(&mut world, 4, 10.0);

    let found = world.points_in(Point::new(25.0, 5.0), Point::new(5.0, 25.0));
    assert_eq!(found, [ids[5], ids[6], ids[9], ids[10]]);

    // Edges are inclusive.
    let edge = world.points_in(Point::new(10.0, 10.0), Point::new(10.0, 20.0));
    assert_eq!(edge, [ids[5], ids[9]]);
}

#[test]
fn pick_prefers_the_closest_candidate() {
    let mut world = World::new();
    let ids = grid(&mut world, 2, 3.0);

    assert_eq!(world.point_at(Point::new(2.0, 2.0), 4.0), Some(ids[3]));
    assert_eq!(world.point_at(Point::new(1.0, 1.0), 4.0), Some(ids[0]));
    assert_eq!(world.point_at(Point::new(20.0, 20.0), 4.0), None);
}

#[test]
fn unknown_handles_are_ignored() {
    let mut world = World::new();
    let a = world.add_point(Point::new(1.0, 1.0), "a");
    world.shift_points([PointId(42), a], Vec2::new(1.0, 0.0));

    assert_eq!(world.point_count(), 1);
    assert!(!world.contains(PointId(42)));
    assert_eq!(world.position(a), Some(Point::new(2.0, 1.0)));
}

#[test]
#[should_panic(expected = "line endpoints must be vertices of this world")]
fn lines_require_known_endpoints() {
    let mut world = World::new();
    let a = world.add_point(Point::ORIGIN, "a");
    world.add_line(a, PointId(7));
}

#[test]
fn world_segments_feed_geometry_helpers() {
    let mut world = World::new();
    world.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
    let a = world.add_point(Point::new(0.0, 0.0), "a");
    let b = world.add_point(Point::new(10.0, 10.0), "b");
    let c = world.add_point(Point::new(0.0, 10.0), "c");
    let d = world.add_point(Point::new(10.0, 0.0), "d");
    let l0 = world.add_line(a, b);
    let l1 = world.add_line(c, d);

    let s0 = world.line_segment(&world.lines()[l0]);
    let s1 = world.line_segment(&world.lines()[l1]);
    let hit = geometry::segment_intersection(s0, s1).unwrap();
    assert!((hit - Point::new(5.0, 5.0)).hypot() < 1e-9);

    // Moving one endpoint away breaks the crossing.
    world.shift_points([d], Vec2::new(0.0, 20.0));
    let s1 = world.line_segment(&world.lines()[l1]);
    assert!(!geometry::segments_intersect(s0, s1));
}
