// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

/// Scale factor between consecutive zoom levels.
pub const ZOOM_BASE: f64 = 1.1;

/// Orthographic camera over a world‑space plane.
///
/// The mapping is `view = view_center + (world - focus) * zoom_coef`, where
/// `zoom_coef = max(zoom_limit, ZOOM_BASE ^ zoom_level)`.
///
/// The viewport rectangle must be established with
/// [`OrthoCamera::set_view_rect`] before any coordinate conversion; the
/// conversions panic otherwise.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    focus: Point,
    zoom_level: i32,
    view_rect: Option<Rect>,
    world_bounds: Option<Rect>,
    zoom_limit: f64,
    pan_clamp: Option<Rect>,
}

impl OrthoCamera {
    /// Creates a camera looking at `focus` with the given zoom level.
    ///
    /// No viewport is set yet and the camera is unbounded.
    #[must_use]
    pub fn new(focus: Point, zoom_level: i32) -> Self {
        Self {
            focus,
            zoom_level,
            view_rect: None,
            world_bounds: None,
            zoom_limit: 0.0,
            pan_clamp: None,
        }
    }

    /// Re-targets the camera to `focus` at `zoom_level`, then re-applies clamping.
    pub fn reset(&mut self, focus: Point, zoom_level: i32) {
        self.focus = focus;
        self.zoom_level = zoom_level;
        self.clamp_to_bounds();
    }

    /// Returns the world‑space point shown at the viewport center.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Returns the integer zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Returns the effective scale from world units to view pixels.
    #[must_use]
    pub fn zoom_coef(&self) -> f64 {
        let coef = ZOOM_BASE.powi(self.zoom_level);
        if self.zoom_limit > coef {
            self.zoom_limit
        } else {
            coef
        }
    }

    /// Returns the minimum zoom coefficient derived from the world bounds.
    ///
    /// This is `0.0` until bounds and a viewport are both known.
    #[must_use]
    pub fn zoom_limit(&self) -> f64 {
        self.zoom_limit
    }

    /// Returns the last viewport rectangle, if one has been set.
    #[must_use]
    pub fn view_rect(&self) -> Option<Rect> {
        self.view_rect
    }

    /// Returns the world bounds used for clamping, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Returns the range of valid focus positions computed by the last clamp.
    ///
    /// The rectangle is **not** normalized: on an axis where the viewport is
    /// at least as large as the world bounds, its extent is zero or negative.
    #[must_use]
    pub fn pan_clamp(&self) -> Option<Rect> {
        self.pan_clamp
    }

    /// Sets the viewport rectangle in device pixels.
    ///
    /// A changed rectangle re-applies clamping, since both the zoom limit and
    /// the pan‑clamp rectangle depend on the viewport size.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == Some(rect) {
            return;
        }
        self.view_rect = Some(rect);
        self.clamp_to_bounds();
    }

    /// Sets optional world bounds used for clamping.
    ///
    /// Clearing the bounds also clears the zoom limit and pan‑clamp rectangle,
    /// leaving the camera free.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        if self.world_bounds == bounds {
            return;
        }
        self.world_bounds = bounds;
        if bounds.is_none() {
            self.zoom_limit = 0.0;
            self.pan_clamp = None;
        }
        self.clamp_to_bounds();
    }

    /// Converts a world‑space point into view coordinates.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been set.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        let center = self.established_view_rect().center();
        center + (pt - self.focus) * self.zoom_coef()
    }

    /// Converts a view‑space point into world coordinates.
    ///
    /// This is the exact algebraic inverse of [`OrthoCamera::world_to_view`].
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been set.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        let center = self.established_view_rect().center();
        self.focus + (pt - center) / self.zoom_coef()
    }

    /// Converts a world‑space rectangle into view coordinates.
    ///
    /// The zoom is uniform and positive, so mapping two corners is enough.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been set.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_view(rect.origin()),
            self.world_to_view(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the world‑space rectangle currently covered by the viewport.
    ///
    /// # Panics
    ///
    /// Panics if no viewport has been set.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let view = self.established_view_rect();
        Rect::from_points(
            self.view_to_world(view.origin()),
            self.view_to_world(Point::new(view.x1, view.y1)),
        )
    }

    /// Changes the zoom level by `delta`, keeping `anchor` fixed on screen.
    ///
    /// `anchor` is a view‑space point; with `None` the focus itself stays put.
    /// Zooming in is always allowed. Zooming out is only applied while the
    /// current coefficient is above the zoom limit, so once the world bounds
    /// fill the viewport further zooming out is a no‑op. A large step out stops
    /// at the lowest level that still reaches the limit, so the next step in
    /// is visible.
    ///
    /// Does nothing until a viewport has been set.
    pub fn zoom(&mut self, delta: i32, anchor: Option<Point>) {
        if self.view_rect.is_none() {
            log::debug!("zoom ignored: no viewport yet");
            return;
        }

        let fixed = match anchor {
            Some(view_pt) => self.view_to_world(view_pt),
            None => self.focus,
        };

        let before = self.zoom_coef();
        if self.zoom_limit < before || delta > 0 {
            self.zoom_level = self.zoom_level.saturating_add(delta);
            if delta < 0
                && let Some(floor) = self.floor_level()
            {
                self.zoom_level = self.zoom_level.max(floor);
            }
        }
        let ratio = self.zoom_coef() / before;

        self.focus = fixed - (fixed - self.focus) / ratio;
        self.clamp_to_bounds();
    }

    /// Pans by a view‑space delta.
    ///
    /// The delta is divided by the zoom coefficient, so a given number of
    /// device pixels always pans the same on‑screen distance.
    pub fn move_by(&mut self, delta: Vec2) {
        self.focus += delta / self.zoom_coef();
        self.clamp_to_bounds();
    }

    /// Re-derives the zoom limit and pan‑clamp rectangle and clamps the focus.
    ///
    /// A no‑op without world bounds or before the first viewport.
    pub fn clamp_to_bounds(&mut self) {
        let Some(bounds) = self.world_bounds else {
            return;
        };
        let Some(view) = self.view_rect else {
            return;
        };

        if bounds.width() > 0.0 && bounds.height() > 0.0 {
            self.zoom_limit = (view.width() / bounds.width()).min(view.height() / bounds.height());
        } else {
            log::trace!("degenerate world bounds {bounds:?}: zoom limit disabled");
            self.zoom_limit = 0.0;
        }

        let coef = self.zoom_coef();
        let half_w = view.width() / 2.0 / coef;
        let half_h = view.height() / 2.0 / coef;
        let clamp = Rect::new(
            bounds.x0 + half_w,
            bounds.y0 + half_h,
            bounds.x1 - half_w,
            bounds.y1 - half_h,
        );
        self.pan_clamp = Some(clamp);

        let center = bounds.center();
        self.focus.x = if clamp.x0 < clamp.x1 {
            self.focus.x.clamp(clamp.x0, clamp.x1)
        } else {
            center.x
        };
        self.focus.y = if clamp.y0 < clamp.y1 {
            self.focus.y.clamp(clamp.y0, clamp.y1)
        } else {
            center.y
        };
        log::trace!(
            "camera clamped: focus={:?} zoom_limit={} clamp={clamp:?}",
            self.focus,
            self.zoom_limit
        );
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            focus: self.focus,
            zoom_level: self.zoom_level,
            zoom_coef: self.zoom_coef(),
            zoom_limit: self.zoom_limit,
            view_rect: self.view_rect,
            world_bounds: self.world_bounds,
            pan_clamp: self.pan_clamp,
        }
    }

    /// Highest level whose coefficient does not exceed the zoom limit.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; levels beyond i32 are unreachable anyway"
    )]
    fn floor_level(&self) -> Option<i32> {
        if self.zoom_limit > 0.0 && self.zoom_limit.is_finite() {
            // Nudge so a limit that is an exact power of the base lands on its own level.
            Some((self.zoom_limit.ln() / ZOOM_BASE.ln() + 1e-9).floor() as i32)
        } else {
            None
        }
    }

    fn established_view_rect(&self) -> Rect {
        match self.view_rect {
            Some(rect) => rect,
            None => panic!("OrthoCamera: coordinate conversion before a viewport was set"),
        }
    }
}

/// Debug snapshot of an [`OrthoCamera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// World‑space focus at the viewport center.
    pub focus: Point,
    /// Integer zoom level.
    pub zoom_level: i32,
    /// Effective zoom coefficient.
    pub zoom_coef: f64,
    /// Minimum zoom coefficient derived from the world bounds.
    pub zoom_limit: f64,
    /// Viewport rectangle in device pixels.
    pub view_rect: Option<Rect>,
    /// World bounds used for clamping.
    pub world_bounds: Option<Rect>,
    /// Range of valid focus positions.
    pub pan_clamp: Option<Rect>,
}
