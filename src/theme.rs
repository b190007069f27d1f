// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;

// ============================================================================
// GRID AND AXES
// ============================================================================
const GRID_LINE: Color = BASE_D;
const AXIS_LINE: Color = Color::from_rgb8(0x70, 0x78, 0x88);

// ============================================================================
// PATHS AND OUTLINES
// ============================================================================
const PATH_STROKE: Color = BASE_L;

// Ghost overlays are drawn dimmer than the active path
const GHOST_STROKE: Color = BASE_F;

// ============================================================================
// CONTROL POINT HANDLES
// ============================================================================
const HANDLE_LINE: Color = BASE_I;

// ============================================================================
// POINT COLORS
// ============================================================================

// Anchors (on-curve) - BLUE
const ANCHOR_POINT: Color = Color::from_rgb8(0x57, 0x9a, 0xff);

// Move anchors start a new sub-path - GREEN
const MOVE_POINT: Color = Color::from_rgb8(0x6a, 0xe7, 0x56);

// Curve control points - PURPLE
const CONTROL_POINT: Color = Color::from_rgb8(0xcc, 0x99, 0xff);

// Arc handles get one color per field
const ARC_RADIUS_HANDLE: Color = Color::from_rgb8(0xff, 0x66, 0x66);
const ARC_START_HANDLE: Color = Color::from_rgb8(0x66, 0xcc, 0xdd);
const ARC_END_HANDLE: Color = Color::from_rgb8(0xff, 0xcc, 0x33);
const ARC_DIRECTION: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);

const SELECTED_OUTLINE: Color = Color::from_rgb8(0xff, 0xaa, 0x33);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the editor canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for the background grid
pub mod grid {
    use super::Color;
    pub const LINE: Color = super::GRID_LINE;
    /// The x and y axes through the path origin
    pub const AXIS: Color = super::AXIS_LINE;
}

/// Colors for paths and outlines
pub mod path {
    use super::Color;
    pub const STROKE: Color = super::PATH_STROKE;
    pub const GHOST_STROKE: Color = super::GHOST_STROKE;
}

/// Colors for control polygons (handles)
pub mod handle {
    use super::Color;
    pub const LINE: Color = super::HANDLE_LINE;
}

/// Colors for points
pub mod point {
    use super::Color;
    pub const ANCHOR: Color = super::ANCHOR_POINT;
    pub const MOVE: Color = super::MOVE_POINT;
    pub const CONTROL: Color = super::CONTROL_POINT;
    pub const SELECTED_OUTLINE: Color = super::SELECTED_OUTLINE;
}

/// Colors for arc handles
pub mod arc {
    use super::Color;
    pub const RADIUS: Color = super::ARC_RADIUS_HANDLE;
    pub const START: Color = super::ARC_START_HANDLE;
    pub const END: Color = super::ARC_END_HANDLE;
    pub const DIRECTION: Color = super::ARC_DIRECTION;
}

/// Dashed strokes (control polygons, ghost outlines)
pub mod dash {
    /// Dash pattern [dash_length, gap_length]
    pub const PATTERN: [f64; 2] = [4.0, 4.0];
    /// Dash offset
    pub const OFFSET: f64 = 0.0;
}

/// Sizes for rendering
pub mod size {
    /// Radius for anchor points
    pub const ANCHOR_RADIUS: f64 = 4.5;

    /// Radius for control points and arc handles
    pub const CONTROL_RADIUS: f64 = 3.5;

    /// Width of the outline drawn around the selected point
    pub const SELECTED_OUTLINE_WIDTH: f64 = 2.0;

    /// Width of path strokes
    pub const PATH_STROKE_WIDTH: f64 = 1.5;

    /// Width of control polygon lines
    pub const HANDLE_LINE_WIDTH: f64 = 1.0;

    /// Width of grid lines
    pub const GRID_LINE_WIDTH: f64 = 0.5;

    /// Width of axis lines
    pub const AXIS_LINE_WIDTH: f64 = 1.0;

    /// Half-width of the arc direction arrow head
    pub const DIRECTION_ARROW: f64 = 5.0;
}

/// Tolerance used when flattening circles and arcs to bezier paths
pub const SHAPE_TOLERANCE: f64 = 0.1;
