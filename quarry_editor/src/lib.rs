// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry Editor: the interactive 2D view of a Quarry level.
//!
//! An [`EditorView`] combines:
//! - An [`OrthoCamera`](quarry_view2d::OrthoCamera) for panning and zooming.
//! - A [`Selection`](quarry_selection::Selection) of [`PointId`](quarry_world::PointId)s.
//! - A [`Gesture`] state machine driven by primary‑button press, drag and
//!   release events.
//!
//! The view borrows the [`World`](quarry_world::World) per call. Drags never
//! touch point coordinates; a move is previewed by drawing the selected points
//! at an offset and applied to the world once, on release.
//!
//! Drawing goes through any [`Surface`](quarry_surface::Surface), e.g.
//! [`SvgSurface`](quarry_surface::SvgSurface) to export a frame or
//! [`RecordingSurface`](quarry_surface::RecordingSurface) in tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quarry_editor::{EditorView, PointerEvent};
//! use quarry_surface::RecordingSurface;
//! use quarry_world::World;
//!
//! let mut world = World::new();
//! let p = world.add_point(Point::new(20.0, 20.0), "p0");
//!
//! // Focus on the viewport center at zoom 0: world and view coordinates agree.
//! let mut view = EditorView::new(Point::new(50.0, 50.0), 0);
//! let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut surface = RecordingSurface::new();
//! view.render(&world, &mut surface, viewport, 0.0, None);
//!
//! // Press on the point and drag it.
//! view.primary_pressed(&world, &PointerEvent::new(Point::new(21.0, 19.0)));
//! view.primary_dragged(&world, &PointerEvent::new(Point::new(31.0, 29.0)));
//! assert_eq!(world.position(p), Some(Point::new(20.0, 20.0)));
//!
//! view.primary_released(&mut world);
//! assert_eq!(world.position(p), Some(Point::new(30.0, 30.0)));
//! assert!(view.selection().contains(&p));
//! ```
//!
//! ## Gestures
//!
//! - Press on a point: select it (replacing the selection unless Shift is
//!   held or it is already selected) and start a move.
//! - Press on empty space: start a box selection. Without Shift the
//!   selection is cleared as soon as the box is dragged.
//! - Release: commit the box or apply the move offset to every selected point.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod gesture;
mod input;
mod render;
mod view;

pub use config::{EditorConfig, Palette};
pub use gesture::Gesture;
pub use input::{Modifiers, PointerEvent};
pub use view::EditorView;
