// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment helpers used by editor overlays.
//!
//! All helpers operate on resolved [`kurbo::Line`] segments (see
//! [`World::line_segment`](crate::World::line_segment)) and return new,
//! free‑standing segments. Nothing here mutates a world.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurveNearest, Point, Vec2};

/// Cross products below this magnitude are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Returns the distance from `pt` to the closest point of the segment.
#[must_use]
pub fn segment_distance(segment: Line, pt: Point) -> f64 {
    segment.nearest(pt, 0.).distance_sq.sqrt()
}

/// Returns the crossing point of two segments, if they intersect.
///
/// Endpoints count as part of a segment. Parallel segments, including
/// collinear overlapping ones, report no crossing.
#[must_use]
pub fn segment_intersection(a: Line, b: Line) -> Option<Point> {
    let (t, u) = crossing_params(a, b)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a.p0 + (a.p1 - a.p0) * t)
    } else {
        None
    }
}

/// Returns `true` if the two segments cross or touch.
#[must_use]
pub fn segments_intersect(a: Line, b: Line) -> bool {
    segment_intersection(a, b).is_some()
}

/// Mirrors `pt` across the infinite line through `mirror`.
///
/// A zero‑length mirror leaves the point unchanged.
#[must_use]
pub fn reflect_point(mirror: Line, pt: Point) -> Point {
    let dir = mirror.p1 - mirror.p0;
    let len_sq = dir.hypot2();
    if len_sq == 0.0 {
        return pt;
    }
    let foot = mirror.p0 + dir * ((pt - mirror.p0).dot(dir) / len_sq);
    foot + (foot - pt)
}

/// Mirrors both endpoints of `segment` across the infinite line through `mirror`.
#[must_use]
pub fn reflect(segment: Line, mirror: Line) -> Line {
    Line::new(
        reflect_point(mirror, segment.p0),
        reflect_point(mirror, segment.p1),
    )
}

/// Bounces `segment` off `wall`, treating the segment as a path from `p0` to `p1`.
///
/// If the segment crosses the wall, the result runs from the crossing point to
/// where `p1` would end up after reflecting off the wall. Returns `None` when
/// the segment does not reach the wall.
#[must_use]
pub fn bounce_off(segment: Line, wall: Line) -> Option<Line> {
    let hit = segment_intersection(segment, wall)?;
    Some(Line::new(hit, reflect_point(wall, segment.p1)))
}

/// Bounces the ray starting at `segment.p0` through `segment.p1` off `wall`.
///
/// Unlike [`bounce_off`] the ray continues past `p1`. The returned segment
/// starts where the ray hits the wall and heads off in the reflected direction
/// with the same length as the input segment. Returns `None` if the ray misses
/// the wall or the input segment has zero length.
#[must_use]
pub fn bounce_off_ray(segment: Line, wall: Line) -> Option<Line> {
    let dir = segment.p1 - segment.p0;
    if dir.hypot2() == 0.0 {
        return None;
    }
    let (t, u) = crossing_params(segment, wall)?;
    if t < 0.0 || !(0.0..=1.0).contains(&u) {
        return None;
    }
    let hit = segment.p0 + dir * t;
    let reflected = reflect_direction(wall, dir);
    Some(Line::new(hit, hit + reflected))
}

/// Reflects a direction vector across the direction of `mirror`.
fn reflect_direction(mirror: Line, dir: Vec2) -> Vec2 {
    let axis = mirror.p1 - mirror.p0;
    let len_sq = axis.hypot2();
    if len_sq == 0.0 {
        return dir;
    }
    let along = axis * (dir.dot(axis) / len_sq);
    along * 2.0 - dir
}

/// Solves `a.p0 + t * da == b.p0 + u * db`, returning `(t, u)`.
fn crossing_params(a: Line, b: Line) -> Option<(f64, f64)> {
    let da = a.p1 - a.p0;
    let db = b.p1 - b.p0;
    let denom = da.cross(db);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let offset = b.p0 - a.p0;
    let t = offset.cross(db) / denom;
    let u = offset.cross(da) / denom;
    Some((t, u))
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point};

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let seg = Line::new((0.0, 0.0), (10.0, 0.0));
        assert!((segment_distance(seg, Point::new(5.0, 3.0)) - 3.0).abs() < 1e-9);
        assert!((segment_distance(seg, Point::new(13.0, 4.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn crossing_segments_intersect_at_expected_point() {
        let a = Line::new((0.0, 0.0), (10.0, 10.0));
        let b = Line::new((0.0, 10.0), (10.0, 0.0));
        let hit = segment_intersection(a, b).unwrap();
        assert!(close(hit, Point::new(5.0, 5.0)));
    }

    #[test]
    fn disjoint_and_parallel_segments_do_not_intersect() {
        let a = Line::new((0.0, 0.0), (1.0, 1.0));
        let b = Line::new((5.0, 0.0), (6.0, -3.0));
        assert!(!segments_intersect(a, b));

        let c = Line::new((0.0, 1.0), (1.0, 2.0));
        assert!(!segments_intersect(a, c));
    }

    #[test]
    fn reflect_mirrors_across_horizontal_axis() {
        let mirror = Line::new((0.0, 0.0), (1.0, 0.0));
        let seg = Line::new((2.0, 3.0), (4.0, -1.0));
        let r = reflect(seg, mirror);
        assert!(close(r.p0, Point::new(2.0, -3.0)));
        assert!(close(r.p1, Point::new(4.0, 1.0)));
    }

    #[test]
    fn bounce_off_requires_crossing() {
        let wall = Line::new((0.0, 0.0), (10.0, 0.0));
        let through = Line::new((2.0, 2.0), (4.0, -2.0));
        let bounced = bounce_off(through, wall).unwrap();
        assert!(close(bounced.p0, Point::new(3.0, 0.0)));
        assert!(close(bounced.p1, Point::new(4.0, 2.0)));

        let short = Line::new((2.0, 4.0), (3.0, 2.0));
        assert!(bounce_off(short, wall).is_none());
    }

    #[test]
    fn bounce_off_ray_extends_past_segment_end() {
        let wall = Line::new((0.0, 0.0), (10.0, 0.0));
        let short = Line::new((2.0, 4.0), (3.0, 2.0));
        let bounced = bounce_off_ray(short, wall).unwrap();
        assert!(close(bounced.p0, Point::new(4.0, 0.0)));
        assert!(close(bounced.p1, Point::new(5.0, 2.0)));

        let away = Line::new((3.0, 2.0), (2.0, 4.0));
        assert!(bounce_off_ray(away, wall).is_none());
    }
}
