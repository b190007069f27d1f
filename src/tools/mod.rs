// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for path editing
//!
//! The active tool decides which kind of node a click on empty canvas
//! creates. Picking, dragging and deleting are shared by every tool and
//! live in the [`edit::EditTool`] state machine.

use serde::{Deserialize, Serialize};

pub mod edit;

pub use edit::{DragState, EditTool};

// ===== Tool Identifier =====

/// Tool identifier, one per node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolId {
    /// Start a new sub-path
    MoveTo,
    /// Straight line segments
    LineTo,
    /// Quadratic curves (one control point)
    QuadraticCurveTo,
    /// Cubic curves (two control points)
    BezierCurveTo,
    /// Circular arcs
    Arc,
}

impl ToolId {
    /// Every tool, in toolbar order
    pub const ALL: [ToolId; 5] = [
        ToolId::MoveTo,
        ToolId::LineTo,
        ToolId::QuadraticCurveTo,
        ToolId::BezierCurveTo,
        ToolId::Arc,
    ];

    /// Name as used in persisted documents and by the settings panel
    pub fn name(self) -> &'static str {
        match self {
            ToolId::MoveTo => "moveTo",
            ToolId::LineTo => "lineTo",
            ToolId::QuadraticCurveTo => "quadraticCurveTo",
            ToolId::BezierCurveTo => "bezierCurveTo",
            ToolId::Arc => "arc",
        }
    }

    /// Look up a tool by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde() {
        for tool in ToolId::ALL {
            let json = serde_json::to_value(tool).unwrap();
            assert_eq!(json, tool.name());
            assert_eq!(ToolId::from_name(tool.name()), Some(tool));
        }
        assert_eq!(ToolId::from_name("ellipse"), None);
    }
}
