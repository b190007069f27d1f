// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction: the editable node list and the documents holding it.
//!
//! A path is an ordered `Vec<Node>`. Node kinds are a tagged enum, so the
//! renderer, hit tester and exporter match on the kind directly, and
//! retyping a node is a payload replacement. Neighbours are found by index;
//! nodes carry no back references that would need fixing on insert or
//! delete.

pub mod document;
pub mod node;

pub use document::{Document, PathConfig, Units};
pub use node::{Node, NodeKind};

use kurbo::Point;
use std::collections::BTreeMap;

/// Read-only overlay paths keyed by document name
///
/// Ordered by name so rendering and hole export are deterministic.
pub type GhostPaths = BTreeMap<String, Vec<Node>>;

/// Anchor of the node preceding `index`, if any
pub fn predecessor_anchor(nodes: &[Node], index: usize) -> Option<Point> {
    index
        .checked_sub(1)
        .and_then(|prev| nodes.get(prev))
        .map(Node::anchor)
}
