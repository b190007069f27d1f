// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Standalone drawing helpers for the grid, outlines and node decorations

use super::DrawSurface;
use crate::editing::hit_test::{self, ControlField};
use crate::editing::{EditSession, ViewPort};
use crate::geometry;
use crate::path::{Node, NodeKind};
use crate::{settings, theme};
use kurbo::{Arc, BezPath, Circle, Line, Point, Shape, Stroke, Vec2};
use peniko::Color;

fn fill_color(surface: &mut dyn DrawSurface, shape: &impl Shape, color: Color) {
    surface.fill(&shape.to_path(theme::SHAPE_TOLERANCE), color);
}

fn stroke_color(surface: &mut dyn DrawSurface, shape: &impl Shape, stroke: &Stroke, color: Color) {
    surface.stroke(&shape.to_path(theme::SHAPE_TOLERANCE), stroke, color);
}

fn dashed(width: f64) -> Stroke {
    Stroke::new(width).with_dashes(theme::dash::OFFSET, theme::dash::PATTERN)
}

pub(crate) fn draw_background(surface: &mut dyn DrawSurface) {
    let rect = surface.size().to_rect();
    fill_color(surface, &rect, theme::canvas::BACKGROUND);
}

/// Draw grid lines over the whole canvas, then the axes through the path
/// origin
///
/// Lines sit on whole units, or on coarser powers of ten when the view is
/// zoomed out too far to draw every unit.
pub(crate) fn draw_grid(surface: &mut dyn DrawSurface, viewport: &ViewPort) {
    let size = surface.size();
    let top_left = viewport.screen_to_path(Point::ZERO);
    let bottom_right = viewport.screen_to_path(Point::new(size.width, size.height));

    let mut lines = BezPath::new();
    if top_left.is_finite() && bottom_right.is_finite() {
        let extent = bottom_right - top_left;
        let mut spacing = settings::grid::SPACING;
        while extent.x.abs().max(extent.y.abs()) / spacing > settings::grid::MAX_LINES {
            spacing *= 10.0;
        }

        let start_x = (top_left.x / spacing).ceil() as i64;
        let end_x = (bottom_right.x / spacing).floor() as i64;
        for ix in start_x..=end_x {
            if ix == 0 {
                continue;
            }
            let x = viewport.path_to_screen(Point::new(ix as f64 * spacing, 0.0)).x;
            lines.move_to((x, 0.0));
            lines.line_to((x, size.height));
        }

        let start_y = (top_left.y / spacing).ceil() as i64;
        let end_y = (bottom_right.y / spacing).floor() as i64;
        for iy in start_y..=end_y {
            if iy == 0 {
                continue;
            }
            let y = viewport.path_to_screen(Point::new(0.0, iy as f64 * spacing)).y;
            lines.move_to((0.0, y));
            lines.line_to((size.width, y));
        }
    } else {
        tracing::warn!("Skipping grid: view bounds are not finite");
    }
    surface.stroke(
        &lines,
        &Stroke::new(theme::size::GRID_LINE_WIDTH),
        theme::grid::LINE,
    );

    let origin = viewport.origin();
    let mut axes = BezPath::new();
    axes.move_to((origin.x, 0.0));
    axes.line_to((origin.x, size.height));
    axes.move_to((0.0, origin.y));
    axes.line_to((size.width, origin.y));
    surface.stroke(
        &axes,
        &Stroke::new(theme::size::AXIS_LINE_WIDTH),
        theme::grid::AXIS,
    );
}

/// Screen-space outline of a node list
///
/// Each segment starts at the pen position the previous node left. Arcs
/// join their start point with a line, as a canvas arc call does.
pub(crate) fn path_outline(nodes: &[Node], viewport: &ViewPort) -> BezPath {
    let mut path = BezPath::new();
    for (index, node) in nodes.iter().enumerate() {
        let anchor = viewport.path_to_screen(node.anchor());
        // A path has to begin with a move; tolerate documents that don't
        if index == 0 && !matches!(node.kind, NodeKind::MoveTo | NodeKind::Arc { .. }) {
            path.move_to(anchor);
            continue;
        }
        match node.kind {
            NodeKind::MoveTo => path.move_to(anchor),
            NodeKind::LineTo => path.line_to(anchor),
            NodeKind::QuadraticCurveTo { ctrl_a } => {
                path.quad_to(viewport.path_to_screen(ctrl_a), anchor);
            }
            NodeKind::BezierCurveTo { ctrl_a, ctrl_b } => path.curve_to(
                viewport.path_to_screen(ctrl_a),
                viewport.path_to_screen(ctrl_b),
                anchor,
            ),
            NodeKind::Arc {
                radius,
                start,
                end,
                clockwise,
            } => {
                let radius = viewport.scale_length_to_screen(radius);
                let arc = Arc::new(
                    anchor,
                    Vec2::new(radius, radius),
                    start,
                    geometry::arc_sweep(start, end, clockwise),
                    0.0,
                );
                let arc_start = geometry::point_on_circle(anchor, radius, start);
                if path.elements().is_empty() {
                    path.move_to(arc_start);
                } else {
                    path.line_to(arc_start);
                }
                path.extend(arc.append_iter(theme::SHAPE_TOLERANCE));
            }
        }
    }
    path
}

/// Draw another document's path as a dashed outline
pub(crate) fn draw_ghost(surface: &mut dyn DrawSurface, nodes: &[Node], viewport: &ViewPort) {
    let outline = path_outline(nodes, viewport);
    if outline.elements().is_empty() {
        return;
    }
    surface.stroke(
        &outline,
        &dashed(theme::size::PATH_STROKE_WIDTH),
        theme::path::GHOST_STROKE,
    );
}

/// Draw the edited path, its control polygons and every handle
pub(crate) fn draw_nodes(surface: &mut dyn DrawSurface, session: &EditSession) {
    let viewport = &session.viewport;
    let outline = path_outline(&session.nodes, viewport);
    if !outline.elements().is_empty() {
        surface.stroke(
            &outline,
            &Stroke::new(theme::size::PATH_STROKE_WIDTH),
            theme::path::STROKE,
        );
    }

    let mut prev: Option<Point> = None;
    for (index, node) in session.nodes.iter().enumerate() {
        let anchor = viewport.path_to_screen(node.anchor());
        let from = prev.unwrap_or(anchor);

        match node.kind {
            NodeKind::MoveTo | NodeKind::LineTo => {}
            NodeKind::QuadraticCurveTo { ctrl_a } => {
                let ctrl = viewport.path_to_screen(ctrl_a);
                draw_control_polygon(surface, &[from, ctrl, anchor]);
            }
            NodeKind::BezierCurveTo { ctrl_a, ctrl_b } => {
                let a = viewport.path_to_screen(ctrl_a);
                let b = viewport.path_to_screen(ctrl_b);
                draw_control_polygon(surface, &[from, a, b, anchor]);
            }
            NodeKind::Arc { clockwise, .. } => {
                let toggle = hit_test::clockwise_toggle_position(node, viewport);
                draw_direction_arrow(surface, toggle, clockwise);
            }
        }

        for (field, position) in hit_test::control_handles(node, viewport) {
            let color = match field {
                ControlField::CtrlA | ControlField::CtrlB => theme::point::CONTROL,
                ControlField::Radius => theme::arc::RADIUS,
                ControlField::Start => theme::arc::START,
                ControlField::End => theme::arc::END,
                // Drawn as the direction arrow above
                ControlField::Clockwise => continue,
            };
            let circle = Circle::new(position, theme::size::CONTROL_RADIUS);
            fill_color(surface, &circle, color);

            let selected = session
                .active_control
                .is_some_and(|handle| handle.node == index && handle.field == field);
            if selected {
                draw_selection(surface, position, theme::size::CONTROL_RADIUS);
            }
        }

        let color = match node.kind {
            NodeKind::MoveTo => theme::point::MOVE,
            _ => theme::point::ANCHOR,
        };
        fill_color(
            surface,
            &Circle::new(anchor, theme::size::ANCHOR_RADIUS),
            color,
        );
        if session.active_node == Some(index) {
            draw_selection(surface, anchor, theme::size::ANCHOR_RADIUS);
        }

        prev = Some(anchor);
    }
}

fn draw_control_polygon(surface: &mut dyn DrawSurface, points: &[Point]) {
    let stroke = dashed(theme::size::HANDLE_LINE_WIDTH);
    for pair in points.windows(2) {
        stroke_color(
            surface,
            &Line::new(pair[0], pair[1]),
            &stroke,
            theme::handle::LINE,
        );
    }
}

fn draw_selection(surface: &mut dyn DrawSurface, center: Point, radius: f64) {
    let ring = Circle::new(center, radius + theme::size::SELECTED_OUTLINE_WIDTH);
    stroke_color(
        surface,
        &ring,
        &Stroke::new(theme::size::SELECTED_OUTLINE_WIDTH),
        theme::point::SELECTED_OUTLINE,
    );
}

/// Small triangle pointing right for clockwise arcs, left otherwise
fn draw_direction_arrow(surface: &mut dyn DrawSurface, center: Point, clockwise: bool) {
    let half = theme::size::DIRECTION_ARROW;
    let dir = if clockwise { 1.0 } else { -1.0 };
    let mut arrow = BezPath::new();
    arrow.move_to(center + Vec2::new(dir * half, 0.0));
    arrow.line_to(center + Vec2::new(-dir * half, -half));
    arrow.line_to(center + Vec2::new(-dir * half, half));
    arrow.close_path();
    surface.fill(&arrow, theme::arc::DIRECTION);
}
