// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing methods for EditSession

use super::EditSession;
use crate::editing::hit_test::{self, ControlHandle, HitTarget};
use crate::geometry;
use crate::path::NodeKind;
use crate::settings;
use kurbo::Point;

impl EditSession {
    /// Hit test for a node or control handle at screen coordinates
    ///
    /// Anchors are tested first across all nodes; control handles are only
    /// considered when no anchor is within reach. Never mutates the session.
    pub fn hit_test(&self, screen_pos: Point) -> Option<HitTarget> {
        self.hit_test_anchor(screen_pos)
            .map(HitTarget::Node)
            .or_else(|| self.hit_test_control(screen_pos).map(HitTarget::Control))
    }

    /// Closest node anchor within the pick radius
    pub fn hit_test_anchor(&self, screen_pos: Point) -> Option<usize> {
        let candidates = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (index, self.viewport.path_to_screen(node.anchor())));

        let result = hit_test::find_closest(screen_pos, candidates, settings::hit::RADIUS);

        if let Some((index, distance)) = result {
            tracing::debug!(
                "[hit_test_anchor] Hit node {} at distance {}",
                index,
                distance
            );
        }

        result.map(|(index, _)| index)
    }

    /// First control handle within the pick radius, in node order
    pub fn hit_test_control(&self, screen_pos: Point) -> Option<ControlHandle> {
        self.nodes.iter().enumerate().find_map(|(index, node)| {
            hit_test::control_handles(node, &self.viewport)
                .into_iter()
                .find(|(_, handle_pos)| {
                    hit_test::within(screen_pos, *handle_pos, settings::hit::RADIUS)
                })
                .map(|(field, _)| ControlHandle { node: index, field })
        })
    }

    /// Index at which a click on a line segment should splice a new node
    ///
    /// Only `LineTo` segments are considered. The returned index is that of
    /// the segment's end node, so inserting there places the new node
    /// between the segment's endpoints.
    pub fn segment_insert_index(&self, screen_pos: Point) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .find(|(index, node)| {
                if !matches!(node.kind, NodeKind::LineTo) {
                    return false;
                }
                let start = self.viewport.path_to_screen(self.nodes[index - 1].anchor());
                let end = self.viewport.path_to_screen(node.anchor());
                geometry::is_inside_thick_segment(
                    start,
                    end,
                    screen_pos,
                    settings::hit::INSERT_TOLERANCE,
                )
            })
            .map(|(index, _)| index)
    }
}
