// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry Surface: the drawing interface editors render through.
//!
//! Editors produce a short stream of view‑space drawing commands each frame:
//! stroked lines, stroked rectangles and text labels. This crate defines
//! those commands and the [`Surface`] trait that consumes them, mirroring a
//! classic stateful 2D graphics context:
//!
//! - [`StateOp`] changes the current colour or stroke style.
//! - [`DrawOp`] draws with whatever state is current.
//!
//! Two surfaces ship with the crate:
//! - [`RecordingSurface`] keeps every command together with the state it was
//!   drawn with. It is meant for tests and debugging.
//! - [`SvgSurface`] records commands and exports them as an SVG document.
//!
//! Hosts with a real renderer implement [`Surface`] on top of it.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Stroke};
//! use peniko::Color;
//! use quarry_surface::{SurfaceExt, SvgSurface};
//!
//! let mut svg = SvgSurface::default();
//! svg.set_color(Color::from_rgba8(255, 255, 255, 255));
//! svg.set_stroke(Stroke::new(2.0));
//! svg.rect(Rect::new(10.0, 10.0, 20.0, 20.0));
//! svg.text(Point::new(30.0, 30.0), "p0");
//!
//! let doc = svg.to_svg(100, 100);
//! assert!(doc.contains("<rect"));
//! assert!(doc.contains(">p0</text>"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;
mod svg;

use alloc::string::String;

use kurbo::{Line, Point, Rect};
use peniko::Color;

pub use recording::{DrawEvent, RecordingSurface, SurfaceState};
pub use svg::SvgSurface;

/// Stroke parameters (width, dashes, caps, joins).
pub type StrokeStyle = kurbo::Stroke;

/// State‑changing command.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the colour used by subsequent draws.
    SetColor(Color),
    /// Set the stroke used by subsequent line and rectangle draws.
    SetStroke(StrokeStyle),
}

/// Drawing command in view coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a straight segment.
    StrokeLine(Line),
    /// Stroke the outline of an axis‑aligned rectangle.
    StrokeRect(Rect),
    /// Draw a single line of text with its baseline starting at `origin`.
    Text {
        /// Baseline origin.
        origin: Point,
        /// Text to draw.
        text: String,
    },
}

/// A sink for drawing commands.
pub trait Surface {
    /// Apply a state change.
    fn state(&mut self, op: StateOp);

    /// Draw with the current state.
    fn draw(&mut self, op: DrawOp);
}

/// Convenience helpers for [`Surface`] implementors.
pub trait SurfaceExt: Surface {
    /// Sets the current colour.
    fn set_color(&mut self, color: Color) {
        self.state(StateOp::SetColor(color));
    }

    /// Sets the current stroke.
    fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.state(StateOp::SetStroke(stroke));
    }

    /// Strokes the segment from `p0` to `p1`.
    fn line(&mut self, p0: Point, p1: Point) {
        self.draw(DrawOp::StrokeLine(Line::new(p0, p1)));
    }

    /// Strokes the outline of `rect`.
    fn rect(&mut self, rect: Rect) {
        self.draw(DrawOp::StrokeRect(rect));
    }

    /// Draws `text` with its baseline at `origin`.
    fn text(&mut self, origin: Point, text: &str) {
        self.draw(DrawOp::Text {
            origin,
            text: String::from(text),
        });
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}
