// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Named documents: a node list plus the settings it is edited with.

use super::Node;
use crate::settings;
use crate::tools::ToolId;
use serde::{Deserialize, Serialize};

/// Length unit the path is exported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Meters
    #[default]
    M,
    /// Centimeters
    Cm,
    /// Millimeters
    Mm,
}

impl Units {
    /// Factor applied to path coordinates on export
    pub fn scale(self) -> f64 {
        match self {
            Units::M => 1.0,
            Units::Cm => 0.01,
            Units::Mm => 0.001,
        }
    }

    /// Decimal digits written for exported coordinates
    pub fn precision(self) -> usize {
        match self {
            Units::M => 3,
            Units::Cm => 5,
            Units::Mm => 6,
        }
    }

    /// Parse a unit name as shown in the settings panel
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "m" => Some(Units::M),
            "cm" => Some(Units::Cm),
            "mm" => Some(Units::Mm),
            _ => None,
        }
    }
}

/// Per-document editor configuration
///
/// Missing fields fall back to their defaults when loading, so documents
/// written by older versions still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathConfig {
    /// Document name, also its key in the store
    pub name: String,
    /// Origin position as a fraction of the canvas width
    pub origin_x: f64,
    /// Origin position as a fraction of the canvas height
    pub origin_y: f64,
    /// Path units visible across the canvas width
    pub visible_range: f64,
    pub units: Units,
    pub snap_enabled: bool,
    /// Depth handed to the 3D preview
    pub extrude_depth: f64,
    /// Export enabled ghost paths as holes of the shape
    pub use_ghosts_as_holes: bool,
    /// Kind of node created by clicking on empty canvas
    pub active_tool: ToolId,
}

impl PathConfig {
    /// Default configuration for a document called `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether every numeric setting is finite and the range is positive
    pub fn is_valid(&self) -> bool {
        [self.origin_x, self.origin_y, self.extrude_depth]
            .iter()
            .all(|v| v.is_finite())
            && self.visible_range.is_finite()
            && self.visible_range > 0.0
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            name: settings::document::NAME.to_string(),
            origin_x: settings::document::ORIGIN_X,
            origin_y: settings::document::ORIGIN_Y,
            visible_range: settings::document::VISIBLE_RANGE,
            units: Units::default(),
            snap_enabled: true,
            extrude_depth: settings::document::EXTRUDE_DEPTH,
            use_ghosts_as_holes: false,
            active_tool: ToolId::LineTo,
        }
    }
}

/// A named path and its configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub config: PathConfig,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Document {
    /// An empty document called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: PathConfig::named(name),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }
}
