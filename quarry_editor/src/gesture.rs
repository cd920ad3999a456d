// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use quarry_world::PointId;

/// The pointer gesture in progress, if any.
///
/// A press starts either a box selection (on empty space) or a move (on a
/// point), never both. Markers are world‑space positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No button held.
    #[default]
    Idle,
    /// Dragging a selection rectangle.
    BoxSelecting {
        /// Where the press happened.
        start: Point,
        /// Latest drag position; `None` until the first drag event.
        end: Option<Point>,
        /// Points inside the rectangle, merged into the selection on release.
        preview: Vec<PointId>,
        /// Whether the press held the additive modifier.
        additive: bool,
    },
    /// Dragging the selected points.
    Moving {
        /// Where the press happened.
        start: Point,
        /// Latest drag position; `None` until the first drag event.
        end: Option<Point>,
    },
}

impl Gesture {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Start marker of a box selection.
    #[must_use]
    pub fn box_start(&self) -> Option<Point> {
        match self {
            Self::BoxSelecting { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Start marker of a move.
    #[must_use]
    pub fn move_start(&self) -> Option<Point> {
        match self {
            Self::Moving { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Points the current box selection would add.
    #[must_use]
    pub fn preview(&self) -> &[PointId] {
        match self {
            Self::BoxSelecting { preview, .. } => preview,
            _ => &[],
        }
    }

    /// World‑space offset of an in‑flight move, or zero.
    #[must_use]
    pub fn move_offset(&self) -> Vec2 {
        match self {
            Self::Moving {
                start,
                end: Some(end),
            } => *end - *start,
            _ => Vec2::ZERO,
        }
    }

    /// World‑space rectangle of the current box selection, once dragged.
    #[must_use]
    pub fn drag_rect(&self) -> Option<Rect> {
        match self {
            Self::BoxSelecting {
                start,
                end: Some(end),
                ..
            } => Some(Rect::from_points(*start, *end)),
            _ => None,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::BoxSelecting { .. } => "box-select",
            Self::Moving { .. } => "move",
        }
    }
}
