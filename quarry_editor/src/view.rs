// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use quarry_selection::Selection;
use quarry_view2d::OrthoCamera;
use quarry_world::{PointId, World};

use crate::{EditorConfig, Gesture, PointerEvent};

/// An interactive view onto a [`World`].
///
/// Owns the camera, the point selection and the current pointer gesture.
/// The world itself is borrowed per call: read‑only for queries and
/// rendering, mutably only when a move gesture completes.
#[derive(Clone, Debug)]
pub struct EditorView {
    pub(crate) camera: OrthoCamera,
    pub(crate) selection: Selection<PointId>,
    pub(crate) gesture: Gesture,
    pub(crate) config: EditorConfig,
}

impl EditorView {
    /// Creates a view looking at `focus` with the given zoom level and default options.
    #[must_use]
    pub fn new(focus: Point, zoom_level: i32) -> Self {
        Self::with_config(focus, zoom_level, EditorConfig::default())
    }

    /// Creates a view with explicit options.
    #[must_use]
    pub fn with_config(focus: Point, zoom_level: i32, config: EditorConfig) -> Self {
        Self {
            camera: OrthoCamera::new(focus, zoom_level),
            selection: Selection::new(),
            gesture: Gesture::Idle,
            config,
        }
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    /// Returns the selected points.
    #[must_use]
    pub fn selection(&self) -> &Selection<PointId> {
        &self.selection
    }

    /// Returns the selected points for direct editing (select all, deselect, ...).
    pub fn selection_mut(&mut self) -> &mut Selection<PointId> {
        &mut self.selection
    }

    /// Returns the gesture in progress.
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Returns the view options.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the view options for editing, e.g. to toggle debug overlays.
    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    /// Re-targets the camera to `focus` at `zoom_level`, clamped to the world's bounds.
    pub fn set_camera(&mut self, world: &World, focus: Point, zoom_level: i32) {
        self.sync_bounds(world);
        self.camera.reset(focus, zoom_level);
    }

    /// Per‑tick hook; the view has no time‑based state yet.
    pub fn update(&mut self) {}

    /// Synchronises the camera with the world bounds and the host's viewport.
    ///
    /// [`EditorView::render`] does this every frame. Hosts that deliver input
    /// before the first frame call it directly.
    pub fn set_viewport(&mut self, world: &World, view_rect: Rect) {
        self.sync_bounds(world);
        self.camera.set_view_rect(view_rect);
    }

    /// Converts a world‑space point into view coordinates.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been established.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        self.camera.world_to_view(pt)
    }

    /// Converts a view‑space point into world coordinates.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been established.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        self.camera.view_to_world(pt)
    }

    /// Zooms by `delta` levels, keeping the view‑space `anchor` (or the focus) fixed.
    ///
    /// Clamping uses the world's current bounds.
    pub fn zoom(&mut self, world: &World, delta: i32, anchor: Option<Point>) {
        self.sync_bounds(world);
        self.camera.zoom(delta, anchor);
    }

    /// Pans by a view‑space delta, clamped to the world's current bounds.
    pub fn move_by(&mut self, world: &World, delta: Vec2) {
        self.sync_bounds(world);
        self.camera.move_by(delta);
    }

    /// Picks up bounds set on the world since the last call; re-clamps on change.
    fn sync_bounds(&mut self, world: &World) {
        self.camera.set_world_bounds(world.bounds());
    }

    /// Pick radius in world units: half a point marker at the current zoom.
    #[must_use]
    pub fn pick_radius(&self) -> f64 {
        self.config.point_display_size / 2.0 / self.camera.zoom_coef()
    }

    /// Returns the point under the view‑space position `pt`, if any.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been established.
    #[must_use]
    pub fn point_at_view(&self, world: &World, pt: Point) -> Option<PointId> {
        world.point_at(self.camera.view_to_world(pt), self.pick_radius())
    }

    /// Returns the points inside the view‑space rectangle spanned by `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been established.
    #[must_use]
    pub fn points_in_view(&self, world: &World, a: Point, b: Point) -> Vec<PointId> {
        world.points_in(self.camera.view_to_world(a), self.camera.view_to_world(b))
    }

    /// Handles a primary button press.
    ///
    /// Pressing on a point selects it (replacing the selection unless the
    /// press is additive or the point is already selected) and starts a move.
    /// Pressing on empty space starts a box selection.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been established.
    pub fn primary_pressed(&mut self, world: &World, event: &PointerEvent) {
        if !self.gesture.is_idle() {
            log::debug!(
                "press during {} gesture without release; abandoning it",
                self.gesture.name()
            );
            self.gesture = Gesture::Idle;
        }

        let start = self.camera.view_to_world(event.position);
        let additive = event.is_additive();
        match world.point_at(start, self.pick_radius()) {
            Some(id) => {
                if !additive && !self.selection.contains(&id) {
                    self.selection.clear();
                }
                self.selection.add(id);
                self.gesture = Gesture::Moving { start, end: None };
                log::debug!("move started on {id:?} at {start:?}");
            }
            None => {
                self.gesture = Gesture::BoxSelecting {
                    start,
                    end: None,
                    preview: Vec::new(),
                    additive,
                };
                log::debug!("box selection started at {start:?} (additive: {additive})");
            }
        }
    }

    /// Handles pointer motion with the primary button held.
    ///
    /// Box selection refreshes its preview; a move only records the new end
    /// position. Neither touches point coordinates. Motion without a gesture
    /// is ignored.
    ///
    /// # Panics
    ///
    /// Panics if a gesture is active but no viewport has been established.
    pub fn primary_dragged(&mut self, world: &World, event: &PointerEvent) {
        match &mut self.gesture {
            Gesture::BoxSelecting {
                start,
                end,
                preview,
                additive,
            } => {
                let pos = self.camera.view_to_world(event.position);
                *end = Some(pos);
                *preview = world.points_in(*start, pos);
                if !*additive {
                    self.selection.clear();
                }
            }
            Gesture::Moving { end, .. } => *end = Some(self.camera.view_to_world(event.position)),
            Gesture::Idle => log::trace!("drag without press ignored"),
        }
    }

    /// Handles the primary button release and completes the gesture.
    ///
    /// A box selection commits its preview into the selection. A move that
    /// was dragged shifts every selected point by the drag offset in one world
    /// mutation. The view is idle afterwards.
    pub fn primary_released(&mut self, world: &mut World) {
        match core::mem::take(&mut self.gesture) {
            Gesture::BoxSelecting {
                end,
                preview,
                additive,
                ..
            } => {
                if !additive {
                    self.selection.clear();
                }
                if end.is_some() {
                    self.selection.extend_with_hashed(preview);
                }
                log::debug!("box selection committed: {} selected", self.selection.len());
            }
            Gesture::Moving {
                start,
                end: Some(end),
            } => {
                let delta = end - start;
                world.shift_points(self.selection.iter().copied(), delta);
                log::debug!("moved {} points by {delta:?}", self.selection.len());
            }
            Gesture::Moving { end: None, .. } | Gesture::Idle => {}
        }
    }
}
