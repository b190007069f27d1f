// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Named documents persisted as one JSON blob under a single store key
//!
//! The blob looks like `{"paths": {name: {config, nodes}}, "activePath":
//! name, "tips": [bool]}`. Anything unreadable is treated as an empty blob
//! so a corrupt store never prevents the editor from starting; a single
//! unreadable document is dropped without losing the others.

use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::path::Document;
use crate::settings;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Everything kept under the root key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRoot {
    #[serde(default, deserialize_with = "readable_documents")]
    pub paths: BTreeMap<String, Document>,

    /// Name of the document open when the editor last ran
    #[serde(default, rename = "activePath")]
    pub active_path: Option<String>,

    /// One flag per hint, `true` once dismissed
    #[serde(default)]
    pub tips: Vec<bool>,
}

/// Decode every document that parses, skipping the rest
///
/// The store key is the document's name, whatever its config says.
fn readable_documents<'de, D>(deserializer: D) -> Result<BTreeMap<String, Document>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value::<Document>(value) {
            Ok(mut document) => {
                document.config.name.clone_from(&name);
                Some((name, document))
            }
            Err(e) => {
                tracing::warn!("Dropping unreadable path \"{}\": {}", name, e);
                None
            }
        })
        .collect())
}

/// Document persistence on top of a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct DocumentStore<S> {
    store: S,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Read the whole blob, falling back to an empty one
    pub fn load_root(&self) -> StoreRoot {
        let Some(json) = self.store.get(settings::store::ROOT_KEY) else {
            return StoreRoot::default();
        };
        match serde_json::from_str(&json) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!("Ignoring malformed document store: {}", e);
                StoreRoot::default()
            }
        }
    }

    fn save_root(&mut self, root: &StoreRoot) -> Result<(), StoreError> {
        let json = serde_json::to_string(root)?;
        self.store.set(settings::store::ROOT_KEY, &json)
    }

    /// Names of all stored documents, sorted
    pub fn document_names(&self) -> Vec<String> {
        self.load_root().paths.into_keys().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.load_root().paths.contains_key(name)
    }

    pub fn load(&self, name: &str) -> Option<Document> {
        self.load_root().paths.remove(name)
    }

    /// Store `document` under its configured name
    pub fn save(&mut self, document: &Document) -> Result<(), StoreError> {
        self.save_as(document.name(), document)
    }

    /// Store `document` under `name`, whatever its configured name
    pub fn save_as(&mut self, name: &str, document: &Document) -> Result<(), StoreError> {
        let mut root = self.load_root();
        root.paths.insert(name.to_string(), document.clone());
        self.save_root(&root)
    }

    /// Remove a document; returns whether it existed
    pub fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        let mut root = self.load_root();
        let existed = root.paths.remove(name).is_some();
        if root.active_path.as_deref() == Some(name) {
            root.active_path = None;
        }
        self.save_root(&root)?;
        Ok(existed)
    }

    pub fn active_name(&self) -> Option<String> {
        self.load_root().active_path
    }

    pub fn set_active(&mut self, name: &str) -> Result<(), StoreError> {
        let mut root = self.load_root();
        root.active_path = Some(name.to_string());
        self.save_root(&root)
    }

    pub fn tips(&self) -> Vec<bool> {
        self.load_root().tips
    }

    /// Mark hint `index` as dismissed
    pub fn dismiss_tip(&mut self, index: usize) -> Result<(), StoreError> {
        let mut root = self.load_root();
        if root.tips.len() <= index {
            root.tips.resize(index + 1, false);
        }
        root.tips[index] = true;
        self.save_root(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use crate::path::Node;
    use kurbo::Point;

    fn store() -> DocumentStore<MemoryStore> {
        DocumentStore::new(MemoryStore::new())
    }

    #[test]
    fn empty_store_has_no_documents() {
        let store = store();
        assert!(store.document_names().is_empty());
        assert_eq!(store.active_name(), None);
        assert_eq!(store.load("untitled"), None);
    }

    #[test]
    fn save_and_load() {
        let mut store = store();
        let mut doc = Document::new("b");
        doc.nodes.push(Node::move_to(Point::new(1.0, 2.0)));
        store.save(&doc).unwrap();
        store.save(&Document::new("a")).unwrap();
        store.set_active("b").unwrap();

        assert_eq!(store.document_names(), ["a", "b"]);
        assert_eq!(store.load("b"), Some(doc));
        assert_eq!(store.active_name().as_deref(), Some("b"));
    }

    #[test]
    fn blob_layout() {
        let mut store = store();
        store.save(&Document::new("p")).unwrap();
        store.set_active("p").unwrap();
        let json = store.inner().get(settings::store::ROOT_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["activePath"], "p");
        assert_eq!(value["paths"]["p"]["config"]["visibleRange"], 10.0);
        assert!(value["paths"]["p"]["nodes"].as_array().unwrap().is_empty());
        assert!(value["tips"].as_array().unwrap().is_empty());
    }

    #[test]
    fn malformed_json_reads_as_empty() {
        let mut backing = MemoryStore::new();
        backing.set(settings::store::ROOT_KEY, "{not json").unwrap();
        let mut store = DocumentStore::new(backing);
        assert_eq!(store.load_root(), StoreRoot::default());

        // Writing replaces the corrupt blob
        store.save(&Document::new("fresh")).unwrap();
        assert_eq!(store.document_names(), ["fresh"]);
    }

    #[test]
    fn unreadable_document_spares_the_rest() {
        let mut backing = MemoryStore::new();
        let blob = r#"{
            "paths": {
                "broken": {"config": {"name": "broken"}, "nodes": [{"x": null, "y": null, "type": "moveTo"}]},
                "keep_me": {"config": {"name": "keep_me"}, "nodes": []}
            },
            "activePath": "broken"
        }"#;
        backing.set(settings::store::ROOT_KEY, blob).unwrap();
        let store = DocumentStore::new(backing);

        assert_eq!(store.document_names(), ["keep_me"]);
        assert_eq!(store.active_name().as_deref(), Some("broken"));
        assert_eq!(store.load("broken"), None);
    }

    #[test]
    fn key_names_the_document() {
        let mut store = store();
        store.save_as("kept", &Document::new("renamed")).unwrap();
        assert_eq!(store.load("kept").unwrap().name(), "kept");
    }

    #[test]
    fn delete_clears_active() {
        let mut store = store();
        store.save(&Document::new("gone")).unwrap();
        store.set_active("gone").unwrap();
        assert!(store.delete("gone").unwrap());
        assert!(!store.delete("gone").unwrap());
        assert_eq!(store.active_name(), None);
    }

    #[test]
    fn tips_grow_on_dismiss() {
        let mut store = store();
        store.dismiss_tip(2).unwrap();
        assert_eq!(store.tips(), [false, false, true]);
        store.dismiss_tip(0).unwrap();
        assert_eq!(store.tips(), [true, false, true]);
    }
}
