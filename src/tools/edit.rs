// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer state machine shared by every node tool
//!
//! A press on empty canvas creates a node of the active kind and starts
//! dragging it. A press on an anchor or control handle drags that instead.
//! The clockwise toggle of an arc is a button: it flips on press and never
//! starts a drag.

use crate::editing::{ControlField, EditSession, HitTarget, MouseDelegate, MouseEvent};

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button held
    #[default]
    Idle,
    /// Moving the anchor of a node
    DraggingNode(usize),
    /// Moving one control of a node
    DraggingControl(crate::editing::ControlHandle),
}

/// The editing tool
#[derive(Debug, Clone, Default)]
pub struct EditTool {
    state: DragState,
    /// Snapshot taken when a drag began, pushed on release if it changed
    pending_snapshot: Option<String>,
    /// Set when a gesture finished a mutation the owner should persist
    committed: bool,
}

impl EditTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a mutation completed since the last call
    ///
    /// Resets the flag.
    pub fn take_committed(&mut self) -> bool {
        std::mem::take(&mut self.committed)
    }

    /// Splice a node into the line segment under `pos` (context menu) and
    /// start dragging it
    ///
    /// Returns the new node's index, or `None` when no line segment is close
    /// enough, in which case nothing is recorded.
    pub fn insert_at(&mut self, event: MouseEvent, session: &mut EditSession) -> Option<usize> {
        session.segment_insert_index(event.pos)?;
        session.pointer_to_path(event.pos)?;
        session.record_history();
        let index = session.insert_on_segment(event.pos)?;
        session.active_node = Some(index);
        session.active_control = None;
        self.pending_snapshot = None;
        self.state = DragState::DraggingNode(index);
        self.committed = true;
        tracing::debug!("[insert_at] Inserted node {} at {:?}", index, event.pos);
        Some(index)
    }

    fn begin_drag(&mut self, state: DragState, session: &EditSession) {
        self.pending_snapshot = session.snapshot();
        self.state = state;
    }
}

impl MouseDelegate for EditTool {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, session: &mut EditSession) {
        match session.hit_test(event.pos) {
            Some(HitTarget::Node(index)) => {
                tracing::debug!("[left_down] Picked node {}", index);
                session.active_node = Some(index);
                session.active_control = None;
                self.begin_drag(DragState::DraggingNode(index), session);
            }
            Some(HitTarget::Control(handle)) if handle.field == ControlField::Clockwise => {
                tracing::debug!("[left_down] Toggled direction of node {}", handle.node);
                session.record_history();
                session.toggle_clockwise(handle.node);
                self.state = DragState::Idle;
                self.committed = true;
            }
            Some(HitTarget::Control(handle)) => {
                tracing::debug!("[left_down] Picked {:?} of node {}", handle.field, handle.node);
                session.active_node = None;
                session.active_control = Some(handle);
                self.begin_drag(DragState::DraggingControl(handle), session);
            }
            None => {
                let Some(point) = session.pointer_to_path(event.pos) else {
                    return;
                };
                session.record_history();
                let index = session.add_node(point);
                tracing::debug!("[left_down] Created node {} at {:?}", index, point);
                session.active_node = Some(index);
                session.active_control = None;
                // Already recorded; the drag itself need not push again
                self.pending_snapshot = None;
                self.state = DragState::DraggingNode(index);
            }
        }
    }

    fn mouse_moved(&mut self, event: MouseEvent, session: &mut EditSession) {
        match self.state {
            DragState::Idle => {}
            DragState::DraggingNode(index) => {
                if let Some(point) = session.pointer_to_path(event.pos) {
                    session.move_node(index, point);
                }
            }
            DragState::DraggingControl(handle) => {
                if let Some(point) = session.pointer_to_path(event.pos) {
                    session.drag_control(handle, point);
                }
            }
        }
    }

    fn left_up(&mut self, _event: MouseEvent, session: &mut EditSession) {
        if let Some(snapshot) = self.pending_snapshot.take()
            && session.snapshot().as_deref() != Some(snapshot.as_str())
        {
            session.record_snapshot(snapshot);
        }
        if self.state != DragState::Idle {
            self.committed = true;
        }
        self.state = DragState::Idle;
        session.clear_active();
    }

    fn cancel(&mut self, session: &mut EditSession) {
        self.left_up(MouseEvent::new(kurbo::Point::ZERO), session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Document, Node, NodeKind};
    use crate::tools::ToolId;
    use kurbo::{Point, Size};

    fn session() -> EditSession {
        EditSession::new(Document::new("tool"), Size::new(800.0, 600.0))
    }

    fn click(tool: &mut EditTool, session: &mut EditSession, x: f64, y: f64) {
        tool.left_down(MouseEvent::at(x, y), session);
        tool.left_up(MouseEvent::at(x, y), session);
    }

    #[test]
    fn click_on_empty_canvas_creates_nodes() {
        let mut session = session();
        let mut tool = EditTool::new();
        click(&mut tool, &mut session, 400.0, 300.0);
        click(&mut tool, &mut session, 560.0, 300.0);

        assert_eq!(session.nodes.len(), 2);
        assert_eq!(session.nodes[0].tool(), ToolId::MoveTo);
        assert_eq!(session.nodes[1], Node::line_to(Point::new(2.0, 0.0)));
        assert_eq!(session.history.len(), 2);
        assert_eq!(tool.state(), DragState::Idle);
        assert!(tool.take_committed());
        assert!(!tool.take_committed());
    }

    #[test]
    fn creation_drag_is_one_undo_step() {
        let mut session = session();
        let mut tool = EditTool::new();
        tool.left_down(MouseEvent::at(400.0, 300.0), &mut session);
        assert_eq!(tool.state(), DragState::DraggingNode(0));
        tool.mouse_moved(MouseEvent::at(480.0, 380.0), &mut session);
        tool.left_up(MouseEvent::at(480.0, 380.0), &mut session);
        assert_eq!(session.nodes[0].anchor(), Point::new(1.0, 1.0));
        assert_eq!(session.history.len(), 1);

        assert!(session.undo());
        assert!(session.nodes.is_empty());
    }

    #[test]
    fn dragging_existing_node() {
        let mut session = session();
        session.nodes.push(Node::move_to(Point::ZERO));
        let mut tool = EditTool::new();

        tool.left_down(MouseEvent::at(402.0, 301.0), &mut session);
        assert_eq!(session.active_node, Some(0));
        tool.mouse_moved(MouseEvent::at(441.0, 300.0), &mut session);
        // 41 px is 0.5125 units, snapped to 0.5
        assert_eq!(session.nodes[0].anchor(), Point::new(0.5, 0.0));
        tool.left_up(MouseEvent::at(441.0, 300.0), &mut session);

        assert_eq!(session.active_node, None);
        assert_eq!(session.history.len(), 1);
        assert!(session.undo());
        assert_eq!(session.nodes[0].anchor(), Point::ZERO);
    }

    #[test]
    fn unchanged_drag_records_nothing() {
        let mut session = session();
        session.nodes.push(Node::move_to(Point::ZERO));
        let mut tool = EditTool::new();
        click(&mut tool, &mut session, 400.0, 300.0);
        assert!(session.history.is_empty());
        assert_eq!(session.nodes.len(), 1);
    }

    #[test]
    fn clockwise_toggle_does_not_drag() {
        let mut session = session();
        session.nodes.push(Node::move_to(Point::new(-3.0, -3.0)));
        session.nodes.push(Node::new(ToolId::Arc, Point::ZERO, None));
        let mut tool = EditTool::new();

        tool.left_down(MouseEvent::at(400.0, 324.0), &mut session);
        assert_eq!(tool.state(), DragState::Idle);
        assert!(matches!(
            session.nodes[1].kind,
            NodeKind::Arc {
                clockwise: true,
                ..
            }
        ));
        assert_eq!(session.history.len(), 1);
        assert!(tool.take_committed());

        // Moving afterwards changes nothing
        let before = session.nodes.clone();
        tool.mouse_moved(MouseEvent::at(600.0, 500.0), &mut session);
        tool.left_up(MouseEvent::at(600.0, 500.0), &mut session);
        assert_eq!(session.nodes, before);
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn dragging_radius_handle() {
        let mut session = session();
        session.nodes.push(Node::move_to(Point::new(-3.0, -3.0)));
        session.nodes.push(Node::new(ToolId::Arc, Point::ZERO, None));
        let mut tool = EditTool::new();

        // Radius handle sits at angle π: screen (320, 300)
        tool.left_down(MouseEvent::at(320.0, 300.0), &mut session);
        assert!(matches!(tool.state(), DragState::DraggingControl(_)));
        tool.mouse_moved(MouseEvent::at(240.0, 300.0), &mut session);
        tool.left_up(MouseEvent::at(240.0, 300.0), &mut session);

        let NodeKind::Arc { radius, .. } = session.nodes[1].kind else {
            panic!("expected an arc");
        };
        assert_eq!(radius, 2.0);
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn insert_at_segment() {
        let mut session = session();
        let mut tool = EditTool::new();
        click(&mut tool, &mut session, 400.0, 300.0);
        click(&mut tool, &mut session, 560.0, 300.0);
        tool.take_committed();
        let history = session.history.len();

        assert_eq!(tool.insert_at(MouseEvent::at(10.0, 10.0), &mut session), None);
        assert_eq!(session.history.len(), history);
        assert!(!tool.take_committed());

        assert_eq!(tool.insert_at(MouseEvent::at(480.0, 302.0), &mut session), Some(1));
        assert_eq!(session.nodes.len(), 3);
        assert_eq!(session.nodes[1].anchor(), Point::new(1.0, 0.0));
        assert_eq!(session.history.len(), history + 1);
        assert!(tool.take_committed());
        assert_eq!(tool.state(), DragState::DraggingNode(1));
    }

    #[test]
    fn inserted_node_follows_pointer() {
        let mut session = session();
        let mut tool = EditTool::new();
        click(&mut tool, &mut session, 400.0, 300.0);
        click(&mut tool, &mut session, 560.0, 300.0);
        let history = session.history.len();

        assert_eq!(tool.insert_at(MouseEvent::at(480.0, 301.0), &mut session), Some(1));
        tool.mouse_moved(MouseEvent::at(480.0, 380.0), &mut session);
        tool.left_up(MouseEvent::at(480.0, 380.0), &mut session);

        assert_eq!(session.nodes[1].anchor(), Point::new(1.0, 1.0));
        assert_eq!(tool.state(), DragState::Idle);
        // Insertion and drag undo together
        assert_eq!(session.history.len(), history + 1);
        assert!(session.undo());
        assert_eq!(session.nodes.len(), 2);
    }

    #[test]
    fn unmappable_pointer_creates_nothing() {
        let mut session = session();
        let mut tool = EditTool::new();
        tool.left_down(MouseEvent::at(f64::INFINITY, 300.0), &mut session);
        assert!(session.nodes.is_empty());
        assert!(session.history.is_empty());
        assert_eq!(tool.state(), DragState::Idle);

        click(&mut tool, &mut session, 400.0, 300.0);
        tool.left_down(MouseEvent::at(400.0, 300.0), &mut session);
        tool.mouse_moved(MouseEvent::at(f64::NAN, f64::NAN), &mut session);
        assert_eq!(session.nodes[0].anchor(), Point::ZERO);
    }
}
