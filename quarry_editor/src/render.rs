// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use hashbrown::HashSet;
use kurbo::{Point, Rect, Vec2};
use quarry_surface::{Surface, SurfaceExt};
use quarry_world::{PointId, World, geometry};

use crate::EditorView;
use crate::config::{dash_stroke, default_stroke, selection_stroke};

/// Horizontal culling margin for points, in marker sizes.
///
/// Labels run to the right of the marker and their width is unknown here.
const LABEL_MARGIN_MARKERS: f64 = 8.0;

impl EditorView {
    /// Draws `world` into `surface` for a viewport of `view_rect` device pixels.
    ///
    /// Draws lines, points with labels, the selection highlight, the live
    /// offset of an in‑flight move, the box‑selection rectangle and any enabled
    /// debug overlays. Points whose marker and label fall outside the viewport
    /// are skipped. `pointer` is the current pointer position in view
    /// coordinates; overlays that follow the pointer are skipped without it.
    ///
    /// `_frame_fraction` is the host's interpolation fraction between ticks;
    /// nothing in the view animates, so it is not used.
    ///
    /// The world is never mutated here.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        world: &World,
        surface: &mut S,
        view_rect: Rect,
        _frame_fraction: f32,
        pointer: Option<Point>,
    ) {
        self.set_viewport(world, view_rect);

        if self.config.show_bounds_debug {
            self.render_bounds_debug(world, surface);
        }

        let offset = self.gesture.move_offset();
        let pointer_world = pointer.map(|p| self.camera.view_to_world(p));
        let selected: HashSet<PointId> = self.selection.iter().copied().collect();
        let preview: HashSet<PointId> = self.gesture.preview().iter().copied().collect();

        surface.set_stroke(default_stroke());
        surface.set_color(self.config.palette.normal);
        for (index, line) in world.lines().iter().enumerate() {
            let mut a = world.position(line.a).unwrap_or_default();
            let mut b = world.position(line.b).unwrap_or_default();
            if selected.contains(&line.a) {
                a += offset;
            }
            if selected.contains(&line.b) {
                b += offset;
            }

            if self.config.show_proximity_debug {
                self.apply_proximity_style(world, surface, index, pointer_world);
            }

            surface.line(self.camera.world_to_view(a), self.camera.world_to_view(b));
        }

        let size = self.config.point_display_size;
        let margin = size / self.camera.zoom_coef();
        let visible = self
            .camera
            .visible_world_rect()
            .inflate(LABEL_MARGIN_MARKERS * margin, 2.0 * margin);
        for (id, vertex) in world.points() {
            let is_selected = selected.contains(&id);
            let mut pos = vertex.position;
            if is_selected {
                pos += offset;
            }
            if !visible.contains(pos) {
                continue;
            }
            if is_selected || preview.contains(&id) {
                surface.set_stroke(selection_stroke());
                surface.set_color(self.config.palette.highlight);
            } else {
                surface.set_stroke(default_stroke());
                surface.set_color(self.config.palette.normal);
            }
            let view = self.camera.world_to_view(pos);
            surface.rect(Rect::from_center_size(view, (size, size)));
            surface.text(view + Vec2::new(size, size), &vertex.label);
        }

        if self.config.show_reflection_debug {
            self.render_reflection_debug(world, surface);
        }
        if self.config.show_distance_debug
            && let (Some(view_pt), Some(world_pt)) = (pointer, pointer_world)
        {
            self.render_distance_debug(world, surface, view_pt, world_pt);
        }

        if let Some(rect) = self.gesture.drag_rect() {
            surface.set_stroke(dash_stroke());
            surface.set_color(self.config.palette.drag_rect);
            surface.rect(self.camera.world_to_view_rect(rect));
        }
    }

    /// Colours a line by its distance to the pointer and dashes it if it crosses another line.
    fn apply_proximity_style<S: Surface + ?Sized>(
        &self,
        world: &World,
        surface: &mut S,
        index: usize,
        pointer_world: Option<Point>,
    ) {
        let lines = world.lines();
        let segment = world.line_segment(&lines[index]);

        let near = pointer_world.is_some_and(|p| {
            geometry::segment_distance(segment, p)
                < self.config.proximity_px / self.camera.zoom_coef()
        });
        surface.set_color(if near {
            self.config.palette.highlight
        } else {
            self.config.palette.normal
        });

        let crosses = lines.iter().enumerate().any(|(other, line)| {
            other != index && geometry::segments_intersect(world.line_segment(line), segment)
        });
        surface.set_stroke(if crosses {
            dash_stroke()
        } else {
            default_stroke()
        });
    }

    fn render_bounds_debug<S: Surface + ?Sized>(&self, world: &World, surface: &mut S) {
        let palette = self.config.palette;
        let Some(bounds) = world.bounds() else {
            surface.set_color(palette.warning);
            surface.text(Point::new(50.0, 10.0), "Bounds not set!");
            surface.set_color(palette.normal);
            return;
        };

        surface.set_stroke(selection_stroke());
        surface.set_color(palette.highlight);
        surface.rect(self.camera.world_to_view_rect(bounds));

        let Some(clamp) = self.camera.pan_clamp() else {
            return;
        };
        surface.set_stroke(default_stroke());
        surface.set_color(palette.warning);
        let size = self.config.point_display_size;
        let focus = self.camera.world_to_view(self.camera.focus());
        surface.rect(Rect::from_center_size(focus, (size, size)));

        // The clamp rect is not normalized: a non-positive extent marks an
        // axis on which the focus is pinned to the bounds' center.
        let top_left = self.camera.world_to_view(Point::new(clamp.x0, clamp.y0));
        let bottom_right = self.camera.world_to_view(Point::new(clamp.x1, clamp.y1));
        let w = bottom_right.x - top_left.x;
        let h = bottom_right.y - top_left.y;
        if w > 0.0 && h > 0.0 {
            surface.rect(Rect::from_points(top_left, bottom_right));
        } else if w > 0.0 {
            let y = self.camera.world_to_view(clamp.center()).y;
            surface.line(Point::new(top_left.x, y), Point::new(bottom_right.x, y));
        } else if h > 0.0 {
            let x = self.camera.world_to_view(clamp.center()).x;
            surface.line(Point::new(x, top_left.y), Point::new(x, bottom_right.y));
        }
    }

    /// Draws the second line reflected across, bounced off, and ray‑bounced off the first.
    fn render_reflection_debug<S: Surface + ?Sized>(&self, world: &World, surface: &mut S) {
        let [mirror, moving, ..] = world.lines() else {
            return;
        };
        let mirror = world.line_segment(mirror);
        let moving = world.line_segment(moving);

        surface.set_stroke(default_stroke());
        surface.set_color(self.config.palette.normal);

        let derived = [
            Some(geometry::reflect(moving, mirror)),
            geometry::bounce_off(moving, mirror),
            geometry::bounce_off_ray(moving, mirror),
        ];
        for seg in derived.into_iter().flatten() {
            surface.line(
                self.camera.world_to_view(seg.p0),
                self.camera.world_to_view(seg.p1),
            );
        }
    }

    fn render_distance_debug<S: Surface + ?Sized>(
        &self,
        world: &World,
        surface: &mut S,
        view_pt: Point,
        world_pt: Point,
    ) {
        let Some(first) = world.lines().first() else {
            return;
        };
        let d = geometry::segment_distance(world.line_segment(first), world_pt);
        surface.set_color(self.config.palette.normal);
        surface.text(view_pt, &format!("d={d:.2}"));
    }
}
