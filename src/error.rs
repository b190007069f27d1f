// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for editing and persistence.
//!
//! Editing errors carry the message shown to the user; store errors wrap the
//! underlying I/O or JSON failure.

use thiserror::Error;

/// Rejected editing actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The first node of a path has to stay a MoveTo
    #[error("The first node of a path must be a MoveTo")]
    FirstNodeMustBeMoveTo,

    /// Node index out of range
    #[error("No node at index {index}")]
    NoSuchNode {
        /// The requested index.
        index: usize,
    },

    /// A document with the requested name is already stored
    #[error("A path named \"{name}\" already exists")]
    DocumentExists {
        /// The conflicting name.
        name: String,
    },

    /// Document names must not be empty
    #[error("Path name must not be empty")]
    EmptyName,

    /// The requested document is not in the store
    #[error("No path named \"{name}\"")]
    UnknownDocument {
        /// The missing name.
        name: String,
    },
}

/// Persistence failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the document blob failed
    #[error("Store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
