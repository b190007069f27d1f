// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! A single path command: an anchor plus kind-specific payload.
//!
//! Nodes are stored in draw order. Every node except the first draws from
//! its predecessor's anchor, which is looked up by index when needed rather
//! than stored on the node.

use crate::geometry;
use crate::settings;
use crate::tools::ToolId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Kind-specific payload of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// Starts a sub-path; must be the first node of every path
    MoveTo,
    /// Straight segment from the predecessor
    LineTo,
    /// Quadratic curve with one control point
    QuadraticCurveTo {
        #[serde(rename = "ctrlA")]
        ctrl_a: Point,
    },
    /// Cubic curve with two control points
    BezierCurveTo {
        #[serde(rename = "ctrlA")]
        ctrl_a: Point,
        #[serde(rename = "ctrlB")]
        ctrl_b: Point,
    },
    /// Circular arc centered on the anchor
    Arc {
        radius: f64,
        start: f64,
        end: f64,
        clockwise: bool,
    },
}

impl NodeKind {
    /// The tool that creates nodes of this kind
    pub fn tool(&self) -> ToolId {
        match self {
            NodeKind::MoveTo => ToolId::MoveTo,
            NodeKind::LineTo => ToolId::LineTo,
            NodeKind::QuadraticCurveTo { .. } => ToolId::QuadraticCurveTo,
            NodeKind::BezierCurveTo { .. } => ToolId::BezierCurveTo,
            NodeKind::Arc { .. } => ToolId::Arc,
        }
    }
}

/// A node in a path
///
/// The anchor is stored as flat `x`/`y` fields so the persisted JSON reads
/// `{"type": "lineTo", "x": 1.0, "y": 2.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Create a node of the given tool kind at `anchor`.
    ///
    /// `prev` is the predecessor's anchor, used to seed control points. A
    /// brand-new arc starts as a full circle.
    pub fn new(tool: ToolId, anchor: Point, prev: Option<Point>) -> Self {
        Self {
            x: anchor.x,
            y: anchor.y,
            kind: initial_kind(tool, anchor, prev, TAU),
        }
    }

    /// A `MoveTo` node at `anchor`
    pub fn move_to(anchor: Point) -> Self {
        Self::new(ToolId::MoveTo, anchor, None)
    }

    /// A `LineTo` node at `anchor`
    pub fn line_to(anchor: Point) -> Self {
        Self::new(ToolId::LineTo, anchor, None)
    }

    /// The anchor point in path space
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    /// The tool kind of this node
    pub fn tool(&self) -> ToolId {
        self.kind.tool()
    }

    /// Replace this node's kind, regenerating its control fields.
    ///
    /// Prior control fields are dropped. A converted arc spans a quarter
    /// turn instead of a full circle.
    pub fn retype(&mut self, tool: ToolId, prev: Option<Point>) {
        self.kind = initial_kind(tool, self.anchor(), prev, FRAC_PI_2);
    }
}

/// Build the payload for a node of `tool` kind.
///
/// Quadratic control sits at the midpoint from `prev`; cubic controls sit
/// on the `prev`-side and anchor-side thirds of the chord; an arc takes its
/// radius from the distance to `prev`.
fn initial_kind(tool: ToolId, anchor: Point, prev: Option<Point>, arc_end: f64) -> NodeKind {
    let from = prev.unwrap_or(anchor);
    match tool {
        ToolId::MoveTo => NodeKind::MoveTo,
        ToolId::LineTo => NodeKind::LineTo,
        ToolId::QuadraticCurveTo => NodeKind::QuadraticCurveTo {
            ctrl_a: geometry::line_midpoint(from, anchor),
        },
        ToolId::BezierCurveTo => NodeKind::BezierCurveTo {
            ctrl_a: geometry::point_along_line(from, anchor, 0.66),
            ctrl_b: geometry::point_along_line(from, anchor, 0.33),
        },
        ToolId::Arc => {
            let radius = prev.map_or(settings::node::ARC_RADIUS, |prev| {
                geometry::distance_between_points(prev, anchor)
            });
            NodeKind::Arc {
                radius,
                start: 0.0,
                end: arc_end,
                clockwise: false,
            }
        }
    }
}
