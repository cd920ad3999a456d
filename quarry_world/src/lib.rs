// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry World: the level geometry store edited by Quarry.
//!
//! A [`World`] owns:
//! - An arena of [`Vertex`] values addressed by stable [`PointId`] handles.
//! - A list of [`Line`]s, each joining two vertices by handle.
//! - Optional axis‑aligned bounds, used by cameras to limit panning and zooming.
//!
//! Everything that refers to a vertex (lines, selections, in‑flight gestures)
//! stores its [`PointId`], never a copy of its position. Moving a vertex with
//! [`World::shift_points`] is therefore visible everywhere at once.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use quarry_world::World;
//!
//! let mut world = World::new();
//! world.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! let a = world.add_point(Point::new(5.0, 5.0), "a");
//! let b = world.add_point(Point::new(50.0, 20.0), "b");
//! world.add_line(a, b);
//!
//! // Hit test with a pick radius in world units.
//! assert_eq!(world.point_at(Point::new(6.0, 4.0), 2.0), Some(a));
//!
//! // Area queries are independent of corner order.
//! let inside = world.points_in(Point::new(60.0, 30.0), Point::new(0.0, 0.0));
//! assert_eq!(inside.len(), 2);
//!
//! world.shift_points([a], Vec2::new(3.0, 3.0));
//! assert_eq!(world.position(a), Some(Point::new(8.0, 8.0)));
//! ```
//!
//! The [`geometry`] module holds segment helpers (distance, intersection,
//! reflection, bouncing) that editors use for debug overlays.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

/// Stable handle to a vertex stored in a [`World`].
///
/// Handles are never reused while the world is alive, so they can be stored in
/// selections and hashed sets and compared by identity.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u32);

impl PointId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A labelled world‑space point.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Position in world units.
    pub position: Point,
    /// Human readable label drawn next to the point.
    pub label: String,
}

/// A line joining two vertices of the same [`World`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    /// First endpoint.
    pub a: PointId,
    /// Second endpoint.
    pub b: PointId,
}

/// Owner of all level geometry: vertices, lines and optional bounds.
#[derive(Clone, Debug, Default)]
pub struct World {
    bounds: Option<Rect>,
    points: Vec<Vertex>,
    lines: Vec<Line>,
}

impl World {
    /// Creates an empty, unbounded world.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bounds: None,
            points: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Returns the world bounds, if any.
    ///
    /// `None` means the world is unbounded and cameras may move freely.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets or clears the world bounds.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Adds a vertex and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` vertices.
    pub fn add_point(&mut self, position: Point, label: impl Into<String>) -> PointId {
        let id = u32::try_from(self.points.len()).expect("World: too many points for u32 PointId");
        self.points.push(Vertex {
            position,
            label: label.into(),
        });
        PointId(id)
    }

    /// Adds a line between two existing vertices and returns its index in [`World::lines`].
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this world.
    pub fn add_line(&mut self, a: PointId, b: PointId) -> usize {
        assert!(
            self.contains(a) && self.contains(b),
            "line endpoints must be vertices of this world"
        );
        self.lines.push(Line { a, b });
        self.lines.len() - 1
    }

    /// Returns `true` if `id` refers to a vertex of this world.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        id.index() < self.points.len()
    }

    /// Returns the vertex behind `id`, if any.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&Vertex> {
        self.points.get(id.index())
    }

    /// Returns the position of the vertex behind `id`, if any.
    #[must_use]
    pub fn position(&self, id: PointId) -> Option<Point> {
        self.get(id).map(|v| v.position)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Iterates over all vertices together with their handles.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "add_point keeps the arena within u32 range"
    )]
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Vertex)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, v)| (PointId(i as u32), v))
    }

    /// Returns all lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Resolves a line into a world‑space segment using the current vertex positions.
    #[must_use]
    pub fn line_segment(&self, line: &Line) -> kurbo::Line {
        // `add_line` guarantees both handles are valid and vertices are never removed.
        kurbo::Line::new(
            self.points[line.a.index()].position,
            self.points[line.b.index()].position,
        )
    }

    /// Returns the vertex closest to `pt` within `radius` world units on both axes.
    ///
    /// The pick area is the square `[pt - radius, pt + radius]`, matching the
    /// square markers editors draw for vertices. When several vertices qualify
    /// the one nearest to `pt` wins; ties keep the earliest vertex.
    #[must_use]
    pub fn point_at(&self, pt: Point, radius: f64) -> Option<PointId> {
        let mut best: Option<(PointId, f64)> = None;
        for (id, vertex) in self.points() {
            let d = vertex.position - pt;
            if d.x.abs() > radius || d.y.abs() > radius {
                continue;
            }
            let dist_sq = d.hypot2();
            if best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
                best = Some((id, dist_sq));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Returns all vertices inside the axis‑aligned rectangle spanned by `a` and `b`.
    ///
    /// Corner order does not matter and the rectangle edges are inclusive.
    #[must_use]
    pub fn points_in(&self, a: Point, b: Point) -> Vec<PointId> {
        let rect = Rect::from_points(a, b);
        self.points()
            .filter(|(_, v)| {
                let p = v.position;
                p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Moves every listed vertex by `delta`.
    ///
    /// Handles that do not belong to this world are ignored. Duplicate handles
    /// are moved once per occurrence, so callers should pass a de‑duplicated set.
    pub fn shift_points<I>(&mut self, ids: I, delta: Vec2)
    where
        I: IntoIterator<Item = PointId>,
    {
        let mut moved = 0_usize;
        for id in ids {
            if let Some(vertex) = self.points.get_mut(id.index()) {
                vertex.position += delta;
                moved += 1;
            }
        }
        log::debug!("shifted {moved} points by ({}, {})", delta.x, delta.y);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{PointId, World};

    #[test]
    fn point_at_prefers_nearest_candidate() {
        let mut world = World::new();
        let far = world.add_point(Point::new(0.0, 0.0), "far");
        let near = world.add_point(Point::new(3.0, 3.0), "near");

        assert_eq!(world.point_at(Point::new(2.5, 2.5), 4.0), Some(near));
        assert_eq!(world.point_at(Point::new(-1.0, 0.0), 4.0), Some(far));
        assert_eq!(world.point_at(Point::new(20.0, 20.0), 4.0), None);
    }

    #[test]
    fn point_at_uses_square_pick_area() {
        let mut world = World::new();
        let id = world.add_point(Point::new(0.0, 0.0), "p");

        // Diagonal corner of the square is still a hit even though its
        // Euclidean distance exceeds the radius.
        assert_eq!(world.point_at(Point::new(2.0, 2.0), 2.0), Some(id));
        assert_eq!(world.point_at(Point::new(2.1, 0.0), 2.0), None);
    }

    #[test]
    fn points_in_is_inclusive_and_order_independent() {
        let mut world = World::new();
        let corner = world.add_point(Point::new(10.0, 10.0), "corner");
        let inside = world.add_point(Point::new(5.0, 5.0), "inside");
        let _outside = world.add_point(Point::new(11.0, 5.0), "outside");

        let mut hits = world.points_in(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        hits.sort();
        assert_eq!(hits, [corner, inside]);
    }

    #[test]
    fn shift_points_ignores_unknown_handles() {
        let mut world = World::new();
        let id = world.add_point(Point::new(1.0, 1.0), "p");

        world.shift_points([id, PointId(99)], Vec2::new(2.0, -1.0));
        assert_eq!(world.position(id), Some(Point::new(3.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "line endpoints must be vertices of this world")]
    fn add_line_rejects_foreign_endpoints() {
        let mut world = World::new();
        let a = world.add_point(Point::ZERO, "a");
        world.add_line(a, PointId(7));
    }
}
