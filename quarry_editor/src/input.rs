// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Point;

bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift; makes selection gestures additive.
        const SHIFT = 1;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

/// A primary‑button pointer event in view coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in view (device pixel) coordinates.
    pub position: Point,
    /// Modifiers held when the event fired.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates an event at `position` with no modifiers.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the event with `modifiers` set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if this event extends the selection instead of replacing it.
    #[must_use]
    pub fn is_additive(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}
