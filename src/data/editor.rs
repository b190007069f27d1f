// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor actions: document lifecycle, ghosts, undo and config changes

use super::{Editor, KeyValueStore};
use crate::editing::MouseDelegate;
use crate::error::EditError;
use crate::path::{Document, PathConfig, Units};
use crate::settings;
use crate::tools::ToolId;

impl<S: KeyValueStore> Editor<S> {
    /// Remember a rejected action's message, or clear it on success
    fn report<T>(&mut self, result: Result<T, EditError>) -> Result<T, EditError> {
        match &result {
            Ok(_) => self.error_message = None,
            Err(e) => {
                tracing::warn!("{}", e);
                self.error_message = Some(e.to_string());
            }
        }
        result
    }

    fn check_new_name(&self, name: &str) -> Result<(), EditError> {
        if name.trim().is_empty() {
            return Err(EditError::EmptyName);
        }
        if self.store.contains(name) {
            return Err(EditError::DocumentExists {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn switch_to(&mut self, document: Document) {
        self.tool.cancel(&mut self.session);
        self.tool.take_committed();
        self.session.load_document(document);
        self.persist();
    }

    // ===== DOCUMENTS =====

    /// Create an empty document and make it active
    pub fn new_document(&mut self, name: &str) -> Result<(), EditError> {
        let result = self.check_new_name(name);
        self.report(result)?;
        tracing::info!("Creating path \"{}\"", name);
        self.switch_to(Document::new(name));
        Ok(())
    }

    /// Copy the active document under `new_name` and continue editing the copy
    ///
    /// The session's config is renamed in place, saved under the new name,
    /// and the document is then saved once more under its previous name.
    pub fn copy_document(&mut self, new_name: &str) -> Result<(), EditError> {
        let result = self.check_new_name(new_name);
        self.report(result)?;

        let old_name = self.session.name().to_string();
        tracing::info!("Copying path \"{}\" to \"{}\"", old_name, new_name);
        self.session.config.name = new_name.to_string();
        self.persist();
        // The renamed config is written under both keys
        if let Err(e) = self.store.save_as(&old_name, &self.session.document()) {
            tracing::error!("Failed to save path \"{}\": {}", old_name, e);
        }
        Ok(())
    }

    /// Open a stored document
    pub fn open_document(&mut self, name: &str) -> Result<(), EditError> {
        let result = self.store.load(name).ok_or_else(|| EditError::UnknownDocument {
            name: name.to_string(),
        });
        let document = self.report(result)?;
        tracing::info!("Opening path \"{}\"", name);
        self.switch_to(document);
        Ok(())
    }

    /// Delete a stored document and drop its ghost
    ///
    /// Deleting the active document switches to the first remaining one, or
    /// to a fresh document when none is left.
    pub fn delete_document(&mut self, name: &str) -> Result<(), EditError> {
        let deleted = match self.store.delete(name) {
            Ok(existed) => existed,
            Err(e) => {
                tracing::error!("Failed to delete path \"{}\": {}", name, e);
                false
            }
        };
        let result = if deleted || self.session.name() == name {
            Ok(())
        } else {
            Err(EditError::UnknownDocument {
                name: name.to_string(),
            })
        };
        self.report(result)?;

        tracing::info!("Deleted path \"{}\"", name);
        self.ghosts.remove(name);

        if self.session.name() == name {
            let next = self
                .store
                .load_root()
                .paths
                .pop_first()
                .map(|(_, document)| document)
                .unwrap_or_else(|| Document::new(settings::document::NAME));
            self.switch_to(next);
        }
        Ok(())
    }

    /// Show or hide another document as a ghost overlay
    pub fn set_ghost_enabled(&mut self, name: &str, enabled: bool) -> Result<(), EditError> {
        if !enabled {
            self.ghosts.remove(name);
            return Ok(());
        }
        let result = self.store.load(name).ok_or_else(|| EditError::UnknownDocument {
            name: name.to_string(),
        });
        let document = self.report(result)?;
        self.ghosts.insert(name.to_string(), document.nodes);
        Ok(())
    }

    // ===== EDITING =====

    /// Restore the previous snapshot; returns whether anything changed
    pub fn undo(&mut self) -> bool {
        let undone = self.session.undo();
        if undone {
            self.persist();
        }
        undone
    }

    /// Select the kind of node created by the next click
    pub fn set_active_tool(&mut self, tool: ToolId) {
        self.update_config(|config| config.active_tool = tool);
    }

    /// Change the kind of the active node
    pub fn change_active_node_kind(&mut self, tool: ToolId) -> Result<(), EditError> {
        let result = self.session.change_active_node_kind(tool);
        self.report(result)?;
        self.persist();
        Ok(())
    }

    /// Change the kind of the node at `index`
    pub fn change_node_kind(&mut self, index: usize, tool: ToolId) -> Result<(), EditError> {
        let result = self.session.change_node_kind(index, tool);
        self.report(result)?;
        self.persist();
        Ok(())
    }

    pub fn delete_active_node(&mut self) {
        if self.session.delete_active_node().is_some() {
            self.persist();
        }
    }

    pub fn delete_node(&mut self, index: usize) {
        if self.session.delete_node(index).is_some() {
            self.persist();
        }
    }

    // ===== CONFIG =====

    /// Apply a config change as one undoable, persisted step
    ///
    /// Changes leaving a non-finite setting or a non-positive range are
    /// ignored.
    pub fn update_config(&mut self, change: impl FnOnce(&mut PathConfig)) {
        let mut config = self.session.config.clone();
        change(&mut config);
        if config == self.session.config {
            return;
        }
        if !config.is_valid() {
            tracing::warn!("Ignoring invalid settings for \"{}\"", config.name);
            return;
        }
        self.session.record_history();
        self.session.set_config(config);
        self.persist();
    }

    pub fn set_units(&mut self, units: Units) {
        self.update_config(|config| config.units = units);
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.update_config(|config| config.snap_enabled = enabled);
    }

    pub fn set_visible_range(&mut self, range: f64) {
        self.update_config(|config| config.visible_range = range);
    }

    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.update_config(|config| {
            config.origin_x = origin_x;
            config.origin_y = origin_y;
        });
    }

    pub fn set_extrude_depth(&mut self, depth: f64) {
        self.update_config(|config| config.extrude_depth = depth);
    }

    pub fn set_use_ghosts_as_holes(&mut self, enabled: bool) {
        self.update_config(|config| config.use_ghosts_as_holes = enabled);
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Editor, KeyValueStore, MemoryStore};
    use crate::error::EditError;
    use crate::path::{Node, NodeKind, Units};
    use crate::settings;
    use crate::tools::ToolId;
    use kurbo::{Point, Size};

    fn editor() -> Editor<MemoryStore> {
        Editor::open(MemoryStore::new(), Size::new(800.0, 600.0))
    }

    fn click(editor: &mut Editor<MemoryStore>, x: f64, y: f64) {
        editor.pointer_down(Point::new(x, y));
        editor.pointer_up(Point::new(x, y));
    }

    #[test]
    fn new_document_switches_and_persists() {
        let mut editor = editor();
        click(&mut editor, 400.0, 300.0);
        editor.new_document("second").unwrap();

        assert_eq!(editor.session.name(), "second");
        assert!(editor.session.nodes.is_empty());
        assert!(editor.session.history.is_empty());
        assert_eq!(editor.store.active_name().as_deref(), Some("second"));
        assert_eq!(
            editor.store.document_names(),
            ["second", settings::document::NAME]
        );
    }

    #[test]
    fn new_document_rejects_duplicates() {
        let mut editor = editor();
        assert_eq!(
            editor.new_document(settings::document::NAME),
            Err(EditError::DocumentExists {
                name: settings::document::NAME.to_string()
            })
        );
        assert!(editor.error_message.is_some());
        assert_eq!(editor.new_document("  "), Err(EditError::EmptyName));
    }

    #[test]
    fn copy_renames_session_and_keeps_original() {
        let mut editor = editor();
        click(&mut editor, 400.0, 300.0);
        editor.copy_document("copy").unwrap();

        assert_eq!(editor.session.name(), "copy");
        assert_eq!(editor.store.active_name().as_deref(), Some("copy"));
        let original = editor.store.load(settings::document::NAME).unwrap();
        let copy = editor.store.load("copy").unwrap();
        assert_eq!(original.name(), settings::document::NAME);
        assert_eq!(copy.name(), "copy");
        assert_eq!(original.nodes, copy.nodes);

        // Both entries hold the renamed config on disk
        let json = editor.store.inner().get(settings::store::ROOT_KEY).unwrap();
        let blob: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(blob["paths"][settings::document::NAME]["config"]["name"], "copy");

        // Further edits only touch the copy
        click(&mut editor, 560.0, 300.0);
        assert_eq!(editor.store.load("copy").unwrap().nodes.len(), 2);
        assert_eq!(
            editor.store.load(settings::document::NAME).unwrap().nodes.len(),
            1
        );

        // Reopening the original leaves the copy alone
        editor.open_document(settings::document::NAME).unwrap();
        assert_eq!(editor.session.name(), settings::document::NAME);
        assert_eq!(editor.store.load("copy").unwrap().nodes.len(), 2);
    }

    #[test]
    fn delete_active_falls_back() {
        let mut editor = editor();
        editor.new_document("a").unwrap();
        editor.new_document("b").unwrap();
        editor.set_ghost_enabled("a", true).unwrap();

        editor.delete_document("b").unwrap();
        assert_eq!(editor.session.name(), "a");

        editor.delete_document("a").unwrap();
        assert!(!editor.ghosts.contains_key("a"));
        assert_eq!(editor.session.name(), settings::document::NAME);

        editor.delete_document(settings::document::NAME).unwrap();
        // Nothing left: a fresh document takes over
        assert_eq!(editor.session.name(), settings::document::NAME);
        assert_eq!(
            editor.store.document_names(),
            [settings::document::NAME]
        );

        assert_eq!(
            editor.delete_document("missing"),
            Err(EditError::UnknownDocument {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn ghosts_load_lazily() {
        let mut editor = editor();
        click(&mut editor, 400.0, 300.0);
        editor.new_document("other").unwrap();

        editor
            .set_ghost_enabled(settings::document::NAME, true)
            .unwrap();
        assert_eq!(
            editor.ghosts[settings::document::NAME],
            [Node::move_to(Point::ZERO)]
        );
        editor
            .set_ghost_enabled(settings::document::NAME, false)
            .unwrap();
        assert!(editor.ghosts.is_empty());
        assert!(editor.set_ghost_enabled("nope", true).is_err());
    }

    #[test]
    fn open_document_loads_stored_nodes() {
        let mut editor = editor();
        click(&mut editor, 400.0, 300.0);
        editor.new_document("other").unwrap();
        editor.open_document(settings::document::NAME).unwrap();
        assert_eq!(editor.session.nodes.len(), 1);
        assert!(editor.open_document("nope").is_err());
        assert_eq!(editor.session.name(), settings::document::NAME);
    }

    #[test]
    fn retype_persists_and_reports() {
        let mut editor = editor();
        click(&mut editor, 400.0, 300.0);
        click(&mut editor, 480.0, 300.0);

        assert!(editor.change_node_kind(0, ToolId::Arc).is_err());
        assert_eq!(
            editor.error_message.as_deref(),
            Some("The first node of a path must be a MoveTo")
        );

        editor.change_node_kind(1, ToolId::Arc).unwrap();
        assert_eq!(editor.error_message, None);
        let stored = editor.store.load(settings::document::NAME).unwrap();
        assert!(matches!(stored.nodes[1].kind, NodeKind::Arc { .. }));
    }

    #[test]
    fn config_changes_are_undoable() {
        let mut editor = editor();
        editor.set_units(Units::Mm);
        editor.set_units(Units::Mm);
        assert_eq!(editor.session.history.len(), 1);
        assert_eq!(
            editor.store.load(settings::document::NAME).unwrap().config.units,
            Units::Mm
        );

        assert!(editor.undo());
        assert_eq!(editor.session.config.units, Units::M);
        assert_eq!(
            editor.store.load(settings::document::NAME).unwrap().config.units,
            Units::M
        );
        assert!(!editor.undo());
    }

    #[test]
    fn active_tool_drives_new_nodes() {
        let mut editor = editor();
        editor.set_active_tool(ToolId::QuadraticCurveTo);
        click(&mut editor, 400.0, 300.0);
        click(&mut editor, 560.0, 300.0);
        assert_eq!(editor.session.nodes[0].tool(), ToolId::MoveTo);
        assert_eq!(
            editor.session.nodes[1].kind,
            NodeKind::QuadraticCurveTo {
                ctrl_a: Point::new(1.0, 0.0)
            }
        );
    }
}
