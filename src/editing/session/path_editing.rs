// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing methods for EditSession: node creation, dragging,
//! retyping, insertion and deletion

use super::EditSession;
use crate::editing::hit_test::{ControlField, ControlHandle};
use crate::error::EditError;
use crate::geometry;
use crate::path::{self, Node, NodeKind};
use crate::tools::ToolId;
use kurbo::Point;

impl EditSession {
    /// Tool used for a node created at `index`
    ///
    /// The first node of a path is always a MoveTo, whatever tool is active.
    fn tool_for_index(&self, index: usize) -> ToolId {
        if index == 0 {
            ToolId::MoveTo
        } else {
            self.config.active_tool
        }
    }

    /// Append a node of the active tool kind at `point` (path space)
    ///
    /// Returns the index of the new node.
    pub fn add_node(&mut self, point: Point) -> usize {
        let index = self.nodes.len();
        self.insert_node(index, point)
    }

    /// Splice a node of the active tool kind in at `index`
    ///
    /// Control points are seeded from the node that ends up preceding it.
    pub fn insert_node(&mut self, index: usize, point: Point) -> usize {
        let index = index.min(self.nodes.len());
        let tool = self.tool_for_index(index);
        let prev = path::predecessor_anchor(&self.nodes, index);
        self.nodes.insert(index, Node::new(tool, point, prev));
        tracing::debug!("Inserted {:?} node at index {}", tool, index);
        index
    }

    /// Splice a node in front of the line segment under `screen_pos`
    ///
    /// Returns the new node's index, or `None` when no line segment is
    /// within the insertion tolerance.
    pub fn insert_on_segment(&mut self, screen_pos: Point) -> Option<usize> {
        let index = self.segment_insert_index(screen_pos)?;
        let point = self.pointer_to_path(screen_pos)?;
        Some(self.insert_node(index, point))
    }

    /// Move a node's anchor
    pub fn move_node(&mut self, index: usize, point: Point) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.set_anchor(point);
        }
    }

    /// Apply a control-handle drag to `point` (path space)
    ///
    /// Control points follow the pointer directly. Arc fields are derived
    /// from the pointer relative to the arc center: the radius from its
    /// distance, the angles from its direction.
    pub fn drag_control(&mut self, handle: ControlHandle, point: Point) {
        let Some(node) = self.nodes.get(handle.node) else {
            return;
        };
        let center = node.anchor();
        let is_radius = matches!(node.kind, NodeKind::Arc { .. })
            && handle.field == ControlField::Radius;
        if is_radius {
            self.set_arc_radius(handle.node, geometry::distance_between_points(center, point));
            return;
        }

        let Some(node) = self.nodes.get_mut(handle.node) else {
            return;
        };
        match (&mut node.kind, handle.field) {
            (NodeKind::QuadraticCurveTo { ctrl_a }, ControlField::CtrlA)
            | (NodeKind::BezierCurveTo { ctrl_a, .. }, ControlField::CtrlA) => {
                *ctrl_a = point;
            }
            (NodeKind::BezierCurveTo { ctrl_b, .. }, ControlField::CtrlB) => {
                *ctrl_b = point;
            }
            (NodeKind::Arc { start, .. }, ControlField::Start) => {
                *start = geometry::angle_from_x_axis(center, point);
            }
            (NodeKind::Arc { end, .. }, ControlField::End) => {
                *end = geometry::angle_from_x_axis(center, point);
            }
            (kind, field) => {
                tracing::warn!("Control {:?} does not apply to {:?}", field, kind.tool());
            }
        }
    }

    /// Flip an arc's sweep direction
    pub fn toggle_clockwise(&mut self, index: usize) {
        if let Some(Node {
            kind: NodeKind::Arc { clockwise, .. },
            ..
        }) = self.nodes.get_mut(index)
        {
            *clockwise = !*clockwise;
        }
    }

    /// Set an arc's radius, clamping negative values to zero
    pub fn set_arc_radius(&mut self, index: usize, value: f64) {
        if let Some(Node {
            kind: NodeKind::Arc { radius, .. },
            ..
        }) = self.nodes.get_mut(index)
        {
            *radius = value.max(0.0);
        }
    }

    /// Change the kind of the node at `index`, regenerating its controls
    ///
    /// The first node must stay a MoveTo. Converting on an empty path does
    /// nothing. Records an undo snapshot when the change is applied.
    pub fn change_node_kind(&mut self, index: usize, tool: ToolId) -> Result<(), EditError> {
        if self.nodes.is_empty() {
            return Ok(());
        }
        if index == 0 && tool != ToolId::MoveTo {
            return Err(EditError::FirstNodeMustBeMoveTo);
        }
        if index >= self.nodes.len() {
            return Err(EditError::NoSuchNode { index });
        }

        self.record_history();
        let prev = path::predecessor_anchor(&self.nodes, index);
        self.nodes[index].retype(tool, prev);
        tracing::debug!("Node {} is now {:?}", index, tool);
        Ok(())
    }

    /// Change the kind of the active node, if any
    pub fn change_active_node_kind(&mut self, tool: ToolId) -> Result<(), EditError> {
        match self.active_node {
            Some(index) => self.change_node_kind(index, tool),
            None => Ok(()),
        }
    }

    /// Remove the node at `index`, recording an undo snapshot
    ///
    /// A node that becomes the head of the path is retyped to a MoveTo.
    pub fn delete_node(&mut self, index: usize) -> Option<Node> {
        if index >= self.nodes.len() {
            return None;
        }
        self.record_history();
        let removed = self.nodes.remove(index);
        if index == 0
            && let Some(head) = self.nodes.first_mut()
            && head.tool() != ToolId::MoveTo
        {
            head.retype(ToolId::MoveTo, None);
        }
        self.clear_active();
        tracing::debug!("Deleted node {}", index);
        Some(removed)
    }

    /// Remove the active node and clear the selection
    pub fn delete_active_node(&mut self) -> Option<Node> {
        let removed = self.active_node.and_then(|index| self.delete_node(index));
        self.clear_active();
        removed
    }
}
