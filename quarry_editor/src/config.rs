// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Cap, Join};
use peniko::Color;
use quarry_surface::StrokeStyle;

/// Colours used by the editor view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Lines, unselected points and labels.
    pub normal: Color,
    /// Selected points, lines near the pointer and the world bounds outline.
    pub highlight: Color,
    /// Focus marker, pan‑clamp outline and the missing-bounds warning.
    pub warning: Color,
    /// The box‑selection rectangle.
    pub drag_rect: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            normal: Color::from_rgba8(255, 255, 255, 255),
            highlight: Color::from_rgba8(255, 175, 175, 255),
            warning: Color::from_rgba8(255, 0, 0, 255),
            drag_rect: Color::from_rgba8(192, 192, 192, 255),
        }
    }
}

/// Runtime options for an [`EditorView`](crate::EditorView).
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Side of the square drawn for each point, in view pixels.
    ///
    /// Half of it, converted to world units, is the pick radius.
    pub point_display_size: f64,
    /// Distance in view pixels under which a line counts as near the pointer.
    pub proximity_px: f64,
    /// Draw world bounds, the focus marker and the pan‑clamp rectangle.
    pub show_bounds_debug: bool,
    /// Highlight lines near the pointer and dash lines that cross another line.
    pub show_proximity_debug: bool,
    /// Draw the second line reflected and bounced off the first.
    pub show_reflection_debug: bool,
    /// Print the pointer's distance to the first line next to the pointer.
    pub show_distance_debug: bool,
    /// Colours.
    pub palette: Palette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            point_display_size: 8.0,
            proximity_px: 10.0,
            show_bounds_debug: false,
            show_proximity_debug: true,
            show_reflection_debug: true,
            show_distance_debug: true,
            palette: Palette::default(),
        }
    }
}

pub(crate) fn default_stroke() -> StrokeStyle {
    StrokeStyle::new(1.0)
}

pub(crate) fn selection_stroke() -> StrokeStyle {
    StrokeStyle::new(2.0)
}

pub(crate) fn dash_stroke() -> StrokeStyle {
    StrokeStyle::new(1.0)
        .with_caps(Cap::Butt)
        .with_join(Join::Bevel)
        .with_dashes(0.0, [5.0])
}
