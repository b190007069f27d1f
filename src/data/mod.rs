// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor state that ties a session to persistent storage.
//!
//! `Editor` owns the edit session, the pointer tool, the document store and
//! the ghost overlays. A settings panel or canvas widget drives it through
//! the pointer methods here and the document actions in `editor.rs`; every
//! completed mutation is written back to the store.

mod documents;
mod editor;
mod store;

pub use documents::{DocumentStore, StoreRoot};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::path::{Document, GhostPaths};
use crate::settings;
use crate::tools::EditTool;
use kurbo::{Point, Size};

/// Main editor state
pub struct Editor<S> {
    /// Session editing the active document
    pub session: EditSession,

    /// Pointer state machine
    pub tool: EditTool,

    /// Persistent documents
    pub store: DocumentStore<S>,

    /// Read-only overlays of other documents, by name
    pub ghosts: GhostPaths,

    /// Message of the last rejected action, for display
    pub error_message: Option<String>,
}

impl<S: KeyValueStore> Editor<S> {
    /// Open the editor on `store`, resuming the last active document
    ///
    /// Falls back to the first stored document, then to a fresh one.
    pub fn open(store: S, canvas_size: Size) -> Self {
        let store = DocumentStore::new(store);
        let document = store
            .active_name()
            .and_then(|name| store.load(&name))
            .or_else(|| {
                let mut root = store.load_root();
                root.paths.pop_first().map(|(_, document)| document)
            })
            .unwrap_or_else(|| Document::new(settings::document::NAME));

        tracing::info!("Opening path \"{}\"", document.name());
        let mut editor = Self {
            session: EditSession::new(document, canvas_size),
            tool: EditTool::new(),
            store,
            ghosts: GhostPaths::new(),
            error_message: None,
        };
        editor.persist();
        editor
    }

    /// Write the active document and mark it active
    pub fn persist(&mut self) {
        let document = self.session.document();
        let result = self
            .store
            .save(&document)
            .and_then(|()| self.store.set_active(document.name()));
        if let Err(e) = result {
            tracing::error!("Failed to save path \"{}\": {}", document.name(), e);
        }
    }

    // ===== POINTER =====

    pub fn pointer_down(&mut self, pos: Point) {
        self.tool.left_down(MouseEvent::new(pos), &mut self.session);
        self.persist_if_committed();
    }

    pub fn pointer_move(&mut self, pos: Point) {
        self.tool.mouse_moved(MouseEvent::new(pos), &mut self.session);
    }

    pub fn pointer_up(&mut self, pos: Point) {
        self.tool.left_up(MouseEvent::new(pos), &mut self.session);
        self.tool.take_committed();
        self.persist();
    }

    /// Context-menu insertion on the line segment under `pos`
    pub fn insert_at(&mut self, pos: Point) -> Option<usize> {
        let index = self.tool.insert_at(MouseEvent::new(pos), &mut self.session);
        self.persist_if_committed();
        index
    }

    fn persist_if_committed(&mut self) {
        if self.tool.take_committed() {
            self.persist();
        }
    }
}
