// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry View 2D: the orthographic camera used by Quarry editors.
//!
//! [`OrthoCamera`] maps between **world space** (the editor's level
//! coordinates) and **view space** (device pixels of the rendering surface).
//! It tracks:
//! - A world‑space focus point that appears at the center of the viewport.
//! - An integer zoom level; the scale is [`ZOOM_BASE`] raised to that level.
//! - The last known viewport rectangle in device pixels.
//! - Optional world bounds, from which it derives a minimum zoom (so the
//!   bounds always cover the viewport) and a pan‑clamp rectangle for the focus.
//!
//! The camera owns no scene and draws nothing. Callers feed it the viewport
//! rectangle each frame, forward pan/zoom input, and route all coordinate math
//! through [`OrthoCamera::world_to_view`] / [`OrthoCamera::view_to_world`] so
//! that drawing and hit testing always agree.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use quarry_view2d::OrthoCamera;
//!
//! let mut camera = OrthoCamera::new(Point::new(50.0, 50.0), 0);
//! camera.set_world_bounds(Some(Rect::new(0.0, 0.0, 400.0, 300.0)));
//! camera.set_view_rect(Rect::new(0.0, 0.0, 200.0, 100.0));
//!
//! // The focus sits at the viewport center.
//! assert_eq!(camera.world_to_view(camera.focus()), Point::new(100.0, 50.0));
//!
//! // Zoom in one step towards the cursor, then pan by 20 device pixels.
//! camera.zoom(1, Some(Point::new(150.0, 60.0)));
//! camera.move_by(Vec2::new(20.0, 0.0));
//!
//! let world = camera.view_to_world(Point::new(150.0, 60.0));
//! let back = camera.world_to_view(world);
//! assert!((back - Point::new(150.0, 60.0)).hypot() < 1e-9);
//! ```
//!
//! ## Clamping policy
//!
//! With world bounds set, every pan or zoom re‑solves two limits:
//! - The zoom limit `min(view.width / bounds.width, view.height / bounds.height)`;
//!   the effective zoom coefficient never drops below it.
//! - The pan‑clamp rectangle: bounds shrunk by half a viewport on each side.
//!   The focus is clamped into it per axis, or snapped to the bounds' center
//!   on an axis where the viewport is at least as large as the bounds.
//!
//! Without world bounds the camera moves freely.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;

pub use camera::{CameraDebugInfo, OrthoCamera, ZOOM_BASE};
