// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use crate::{DrawOp, StateOp, StrokeStyle, Surface};

/// Snapshot of the drawing state when a command was applied.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current colour.
    pub color: Color,
    /// Current stroke.
    pub stroke: StrokeStyle,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 255),
            stroke: StrokeStyle::new(1.0),
        }
    }
}

/// A draw command and the state it was drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawEvent {
    /// Draw command that was applied.
    pub op: DrawOp,
    /// State at the time of drawing.
    pub state: SurfaceState,
}

/// Surface that records draws for later inspection.
///
/// It does not rasterize anything. State changes are folded into the
/// snapshot attached to each subsequent [`DrawEvent`].
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    state: SurfaceState,
    events: Vec<DrawEvent>,
}

impl RecordingSurface {
    /// Creates an empty recording with black, 1px default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded draws in order.
    #[must_use]
    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// Returns the current state.
    #[must_use]
    pub fn state_snapshot(&self) -> &SurfaceState {
        &self.state
    }

    /// Discards recorded draws while keeping the current state.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterates over the text of every recorded text draw.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match &e.op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetColor(color) => self.state.color = color,
            StateOp::SetStroke(stroke) => self.state.stroke = stroke,
        }
    }

    fn draw(&mut self, op: DrawOp) {
        self.events.push(DrawEvent {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use peniko::Color;

    use crate::{DrawOp, RecordingSurface, StrokeStyle, SurfaceExt};

    #[test]
    fn draws_capture_state_at_draw_time() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let mut rec = RecordingSurface::new();
        rec.set_color(red);
        rec.set_stroke(StrokeStyle::new(2.0));
        rec.rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        rec.set_stroke(StrokeStyle::new(1.0));
        rec.text(Point::new(1.0, 1.0), "hi");

        let events = rec.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].op, DrawOp::StrokeRect(Rect::new(0.0, 0.0, 4.0, 4.0)));
        assert_eq!(events[0].state.stroke.width, 2.0);
        assert_eq!(events[0].state.color, red);
        assert_eq!(events[1].state.stroke.width, 1.0);
        assert_eq!(rec.texts().collect::<alloc::vec::Vec<_>>(), ["hi"]);
    }

    #[test]
    fn clear_keeps_current_state() {
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let mut rec = RecordingSurface::new();
        rec.set_color(blue);
        rec.set_stroke(StrokeStyle::new(3.0));
        rec.rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        rec.clear();
        assert!(rec.events().is_empty());
        assert_eq!(rec.state_snapshot().color, blue);
        assert_eq!(rec.state_snapshot().stroke.width, 3.0);
    }
}
