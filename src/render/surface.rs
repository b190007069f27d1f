// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! The 2D drawing surface the scene is painted onto

use kurbo::{BezPath, Size, Stroke};
use peniko::Color;

/// An abstract 2D drawing context in screen coordinates
pub trait DrawSurface {
    /// Canvas size in pixels
    fn size(&self) -> Size;

    /// Fill a closed path
    fn fill(&mut self, path: &BezPath, color: Color);

    /// Stroke a path outline
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Fill {
        path: BezPath,
        color: Color,
    },
    Stroke {
        path: BezPath,
        width: f64,
        /// Whether the stroke had a dash pattern
        dashed: bool,
        color: Color,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Fill { color, .. } | DrawCommand::Stroke { color, .. } => *color,
        }
    }

    pub fn path(&self) -> &BezPath {
        match self {
            DrawCommand::Fill { path, .. } | DrawCommand::Stroke { path, .. } => path,
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, DrawCommand::Stroke { dashed: true, .. })
    }
}

/// Surface that records every call, for tests and for embedders that
/// replay the scene onto their own renderer
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Commands drawn in `color`
    pub fn with_color(&self, color: Color) -> impl Iterator<Item = &DrawCommand> {
        let wanted = color.to_rgba8();
        self.commands
            .iter()
            .filter(move |command| command.color().to_rgba8() == wanted)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width: stroke.width,
            dashed: !stroke.dash_pattern.is_empty(),
            color,
        });
    }
}
