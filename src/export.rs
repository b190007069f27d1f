// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Export of paths as shape-construction code
//!
//! Paths are edited Y-down; the exported calls are Y-up, so every pen
//! position has its Y negated. Coordinates are scaled to the document's
//! units and written with a fixed number of decimals per unit.

use crate::geometry;
use crate::path::{Document, GhostPaths, Node, NodeKind, Units};
use kurbo::Point;
use std::collections::HashSet;
use std::fmt::Write;

/// One call on a shape or path object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeCall {
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurveTo {
        ctrl: Point,
        to: Point,
    },
    BezierCurveTo {
        ctrl_a: Point,
        ctrl_b: Point,
        to: Point,
    },
    /// Circular arc around an absolute center
    AbsArc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    },
}

/// Fixed-point formatting that never writes `-0`
fn fixed(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Angles: three decimals with trailing zeros dropped (`0`, `1.5`, `3.142`)
fn angle(value: f64) -> String {
    let text = fixed(value, 3);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl ShapeCall {
    /// Code for this call on the object named `var`
    pub fn to_code(&self, var: &str, units: Units) -> String {
        let digits = units.precision();
        let pt = |p: Point| format!("{},{}", fixed(p.x, digits), fixed(p.y, digits));
        match *self {
            ShapeCall::MoveTo(p) => format!("{var}.moveTo({});", pt(p)),
            ShapeCall::LineTo(p) => format!("{var}.lineTo({});", pt(p)),
            ShapeCall::QuadraticCurveTo { ctrl, to } => {
                format!("{var}.quadraticCurveTo({},{});", pt(ctrl), pt(to))
            }
            ShapeCall::BezierCurveTo { ctrl_a, ctrl_b, to } => format!(
                "{var}.bezierCurveTo({},{},{});",
                pt(ctrl_a),
                pt(ctrl_b),
                pt(to)
            ),
            ShapeCall::AbsArc {
                cx,
                cy,
                radius,
                start,
                end,
                anticlockwise,
            } => format!(
                "{var}.absArc({},{},{},{},{},{});",
                fixed(cx, digits),
                fixed(cy, digits),
                fixed(radius, digits),
                angle(start),
                angle(end),
                anticlockwise
            ),
        }
    }
}

/// Translate a node list into shape calls in `units`
pub fn export_calls(nodes: &[Node], units: Units) -> Vec<ShapeCall> {
    let scale = units.scale();
    let pen = |p: Point| Point::new(p.x * scale, -p.y * scale);

    let mut calls = Vec::with_capacity(nodes.len());
    for node in nodes {
        let anchor = node.anchor();
        match node.kind {
            NodeKind::MoveTo => calls.push(ShapeCall::MoveTo(pen(anchor))),
            NodeKind::LineTo => calls.push(ShapeCall::LineTo(pen(anchor))),
            NodeKind::QuadraticCurveTo { ctrl_a } => calls.push(ShapeCall::QuadraticCurveTo {
                ctrl: pen(ctrl_a),
                to: pen(anchor),
            }),
            NodeKind::BezierCurveTo { ctrl_a, ctrl_b } => calls.push(ShapeCall::BezierCurveTo {
                ctrl_a: pen(ctrl_a),
                ctrl_b: pen(ctrl_b),
                to: pen(anchor),
            }),
            NodeKind::Arc {
                radius,
                start,
                end,
                clockwise,
            } => {
                calls.push(ShapeCall::AbsArc {
                    cx: anchor.x * scale,
                    cy: -anchor.y * scale,
                    radius: radius * scale,
                    start,
                    end,
                    anticlockwise: !clockwise,
                });
                // Leave the pen where the arc ended
                let end_point = geometry::point_on_circle(anchor, radius, end);
                calls.push(ShapeCall::MoveTo(pen(end_point)));
            }
        }
    }
    calls
}

/// Identifier for the hole made from the ghost called `name`
///
/// Characters that can't appear in an identifier become `_`; clashes get a
/// numeric suffix.
fn hole_variable(name: &str, taken: &mut HashSet<String>) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let base = format!("hole_{stem}");
    let mut var = base.clone();
    let mut suffix = 2;
    while !taken.insert(var.clone()) {
        var = format!("{base}_{suffix}");
        suffix += 1;
    }
    var
}

fn write_calls(out: &mut String, var: &str, nodes: &[Node], units: Units) {
    for call in export_calls(nodes, units) {
        let _ = writeln!(out, "{}", call.to_code(var, units));
    }
}

/// Code building the document's shape, with enabled ghosts as holes when
/// the document asks for it
pub fn export_document(document: &Document, ghosts: &GhostPaths) -> String {
    let units = document.config.units;
    let mut out = String::from("const shape = new THREE.Shape();\n");
    write_calls(&mut out, "shape", &document.nodes, units);

    if document.config.use_ghosts_as_holes {
        let mut taken = HashSet::new();
        for (name, nodes) in ghosts {
            let var = hole_variable(name, &mut taken);
            let _ = writeln!(out, "const {var} = new THREE.Path();");
            write_calls(&mut out, &var, nodes, units);
            let _ = writeln!(out, "shape.holes.push({var});");
        }
    }
    tracing::debug!(
        "Exported \"{}\" ({} bytes)",
        document.name(),
        out.len()
    );
    out
}
