// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages editing state for the active document

mod hit_testing;
mod path_editing;

use super::hit_test::ControlHandle;
use super::undo::UndoState;
use super::viewport::{self, ViewPort};
use crate::path::{Document, Node, PathConfig};
use kurbo::{Point, Size};
use serde::Serialize;

/// Editing session for one document
///
/// This holds everything needed to edit a path: the node list and its
/// configuration, the viewport, the active node or control, and the undo
/// history. It is passed explicitly to the hit tester, the editing tool and
/// the renderer; nothing is kept in global state.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Settings of the document being edited
    pub config: PathConfig,

    /// The editable node list
    pub nodes: Vec<Node>,

    /// Viewport transformation
    pub viewport: ViewPort,

    /// Node being dragged or last picked
    pub active_node: Option<usize>,

    /// Control handle being dragged
    pub active_control: Option<ControlHandle>,

    /// Snapshots taken before undoable mutations
    pub history: UndoState,
}

/// Borrowed view of the fields captured by an undo snapshot
#[derive(Serialize)]
struct SnapshotRef<'a> {
    config: &'a PathConfig,
    nodes: &'a [Node],
}

impl EditSession {
    /// Create a session editing `document` on a canvas of `canvas_size`
    pub fn new(document: Document, canvas_size: Size) -> Self {
        let viewport = ViewPort::from_config(canvas_size, &document.config);
        Self {
            config: document.config,
            nodes: document.nodes,
            viewport,
            active_node: None,
            active_control: None,
            history: UndoState::new(),
        }
    }

    /// Name of the document being edited
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Copy of the current document
    pub fn document(&self) -> Document {
        Document {
            config: self.config.clone(),
            nodes: self.nodes.clone(),
        }
    }

    /// Replace the edited document wholesale.
    ///
    /// Selection and undo history belong to the previous document and are
    /// dropped.
    pub fn load_document(&mut self, document: Document) {
        self.config = document.config;
        self.nodes = document.nodes;
        self.viewport.apply_config(&self.config);
        self.clear_active();
        self.history.clear();
    }

    /// Replace the configuration and update the viewport to match
    pub fn set_config(&mut self, config: PathConfig) {
        self.config = config;
        self.viewport.apply_config(&self.config);
    }

    /// Resize the canvas the session is drawn on
    pub fn set_canvas_size(&mut self, size: Size) {
        self.viewport.size = size;
    }

    /// Convert a pointer position to path space, snapping if enabled
    ///
    /// Returns `None` for positions that don't map to a finite point.
    pub fn pointer_to_path(&self, screen_pos: Point) -> Option<Point> {
        let point = self.viewport.screen_to_path(screen_pos);
        let point = if self.config.snap_enabled {
            viewport::snap_to_grid(point)
        } else {
            point
        };
        if point.is_finite() {
            Some(point)
        } else {
            tracing::warn!("Ignoring pointer at {:?}: maps to {:?}", screen_pos, point);
            None
        }
    }

    pub fn clear_active(&mut self) {
        self.active_node = None;
        self.active_control = None;
    }

    // ===== UNDO =====

    /// Serialize `{config, nodes}` for the undo history
    pub fn snapshot(&self) -> Option<String> {
        let snapshot = SnapshotRef {
            config: &self.config,
            nodes: &self.nodes,
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("Failed to snapshot session: {}", e);
                None
            }
        }
    }

    /// Push the current state onto the undo history
    pub fn record_history(&mut self) {
        if let Some(snapshot) = self.snapshot() {
            self.history.push(snapshot);
        }
    }

    /// Push a previously taken snapshot onto the undo history
    pub fn record_snapshot(&mut self, snapshot: String) {
        self.history.push(snapshot);
    }

    /// Restore the most recent snapshot.
    ///
    /// Returns `false` when there is nothing to undo or the snapshot could
    /// not be read back.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            tracing::debug!("Undo: history is empty");
            return false;
        };

        match serde_json::from_str::<Document>(&snapshot) {
            Ok(document) => {
                self.config = document.config;
                self.nodes = document.nodes;
                self.viewport.apply_config(&self.config);
                self.clear_active();
                tracing::debug!("Undo: restored previous state");
                true
            }
            Err(e) => {
                tracing::warn!("Undo: discarding unreadable snapshot: {}", e);
                false
            }
        }
    }
}
