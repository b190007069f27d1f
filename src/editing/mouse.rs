// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events and the delegate trait tools implement

use kurbo::Point;

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Pointer position relative to the canvas origin (Y down)
    pub pos: Point,
}

impl MouseEvent {
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }

    /// Convenience constructor from raw coordinates
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }
}

/// Receiver of primary-button pointer gestures
///
/// Every method has an empty default so tools only implement what they
/// react to.
pub trait MouseDelegate {
    /// State the delegate edits
    type Data;

    /// Primary button pressed
    fn left_down(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// Pointer moved, with or without the button held
    fn mouse_moved(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// Primary button released
    fn left_up(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// Gesture aborted (pointer left the canvas, document switched)
    fn cancel(&mut self, _data: &mut Self::Data) {}
}
