// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.
//! Per-document settings (origin, visible range, units) live in
//! `PathConfig` and are persisted with each document.

// ============================================================================
// HIT TESTING
// ============================================================================
/// Anchor and handle pick radius (screen pixels)
const HIT_RADIUS: f64 = 8.0;

/// Click tolerance around a line segment for mid-path insertion
/// (screen pixels)
const INSERT_TOLERANCE: f64 = 6.0;

/// Distance of the clockwise toggle below an arc center (screen pixels)
const CLOCKWISE_HANDLE_OFFSET: f64 = 24.0;

// ============================================================================
// SNAP TO GRID SETTINGS
// ============================================================================
/// Grid spacing for snapping (path units)
const SNAP_TO_GRID_SPACING: f64 = 0.1;

// ============================================================================
// GRID SETTINGS
// ============================================================================
/// Background grid spacing (path units)
const GRID_SPACING: f64 = 1.0;
/// Spacing grows tenfold until no more lines than this cross an axis
const GRID_MAX_LINES: f64 = 1000.0;

// ============================================================================
// DOCUMENT DEFAULTS
// ============================================================================
// Origin fractions place (0, 0) in the middle of the canvas.
const DEFAULT_ORIGIN_X: f64 = 0.5;
const DEFAULT_ORIGIN_Y: f64 = 0.5;

/// Path units visible across the canvas width
const DEFAULT_VISIBLE_RANGE: f64 = 10.0;

/// Depth handed to the 3D preview
const DEFAULT_EXTRUDE_DEPTH: f64 = 1.0;

/// Name used when no document exists yet
const DEFAULT_DOCUMENT_NAME: &str = "untitled";

// ============================================================================
// CANVAS
// ============================================================================
/// Canvas size used when no widget reports one (pixels)
const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ============================================================================
// NODE DEFAULTS
// ============================================================================
/// Arc radius when the arc has no predecessor to measure from
const DEFAULT_ARC_RADIUS: f64 = 1.0;

// ============================================================================
// HISTORY
// ============================================================================
/// Number of undo snapshots kept before the oldest is dropped
const HISTORY_CAPACITY: usize = 6;

// ============================================================================
// STORAGE
// ============================================================================
/// Root key all documents are serialized under
const STORE_ROOT_KEY: &str = "pathwright";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Pick distances for anchors, handles and segments
pub mod hit {
    /// Anchor and handle pick radius (screen pixels)
    pub const RADIUS: f64 = super::HIT_RADIUS;

    /// Segment insertion tolerance (screen pixels)
    pub const INSERT_TOLERANCE: f64 = super::INSERT_TOLERANCE;

    /// Clockwise toggle offset below an arc center (screen pixels)
    pub const CLOCKWISE_HANDLE_OFFSET: f64 = super::CLOCKWISE_HANDLE_OFFSET;
}

/// Snap-to-grid settings for point placement and drags
pub mod snap {
    /// Grid spacing to snap to (path units)
    pub const SPACING: f64 = super::SNAP_TO_GRID_SPACING;
}

/// Background grid overlay
pub mod grid {
    pub const SPACING: f64 = super::GRID_SPACING;
    pub const MAX_LINES: f64 = super::GRID_MAX_LINES;
}

/// Defaults for freshly created documents
pub mod document {
    pub const ORIGIN_X: f64 = super::DEFAULT_ORIGIN_X;
    pub const ORIGIN_Y: f64 = super::DEFAULT_ORIGIN_Y;
    pub const VISIBLE_RANGE: f64 = super::DEFAULT_VISIBLE_RANGE;
    pub const EXTRUDE_DEPTH: f64 = super::DEFAULT_EXTRUDE_DEPTH;
    pub const NAME: &str = super::DEFAULT_DOCUMENT_NAME;
}

/// Canvas used for headless sessions
pub mod canvas {
    pub const SIZE: kurbo::Size =
        kurbo::Size::new(super::DEFAULT_CANVAS_WIDTH, super::DEFAULT_CANVAS_HEIGHT);
}

/// Defaults for newly created nodes
pub mod node {
    pub const ARC_RADIUS: f64 = super::DEFAULT_ARC_RADIUS;
}

/// Undo history
pub mod history {
    /// Maximum number of undo snapshots
    pub const CAPACITY: usize = super::HISTORY_CAPACITY;
}

/// Persistent store layout
pub mod store {
    pub const ROOT_KEY: &str = super::STORE_ROOT_KEY;
}
