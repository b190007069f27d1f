// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene rendering onto an abstract 2D surface
//!
//! Layers are painted back to front: background, grid and axes, ghost
//! outlines, then the edited path with its handles. Rendering only reads
//! the session.

mod drawing;
mod surface;
mod svg;

pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use svg::SvgSurface;

use crate::editing::EditSession;
use crate::path::GhostPaths;

/// Paint the whole editor scene for `session`
pub fn render_scene(surface: &mut dyn DrawSurface, session: &EditSession, ghosts: &GhostPaths) {
    drawing::draw_background(surface);
    drawing::draw_grid(surface, &session.viewport);
    for nodes in ghosts.values() {
        drawing::draw_ghost(surface, nodes, &session.viewport);
    }
    drawing::draw_nodes(surface, session);
}
