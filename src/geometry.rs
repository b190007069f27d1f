// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Point, line and circle math used by hit testing and node initialization.
//!
//! Everything here is a pure function over `kurbo::Point`. Functions that
//! need a line direction return `None` (or `false`) when both endpoints
//! coincide, so callers never see a division by zero.

use kurbo::{Point, Vec2};
use std::f64::consts::{PI, TAU};

/// Projection parameter of `p` onto the line `a → b` (0 at `a`, 1 at `b`).
///
/// Returns `None` for a zero-length line.
fn projection_parameter(a: Point, b: Point, p: Point) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return None;
    }
    Some((p - a).dot(ab) / len_sq)
}

/// Project `p` onto the infinite line through `a` and `b`.
///
/// The projection parameter is not clamped, so the result may lie outside
/// the segment.
pub fn nearest_point_on_line(a: Point, b: Point, p: Point) -> Option<Point> {
    let t = projection_parameter(a, b, p)?;
    Some(a.lerp(b, t))
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
pub fn distance_point_to_line(a: Point, b: Point, p: Point) -> Option<f64> {
    nearest_point_on_line(a, b, p).map(|q| q.distance(p))
}

/// True when the projection of `p` falls between `a` and `b` inclusive.
pub fn is_inside_segment(a: Point, b: Point, p: Point) -> bool {
    projection_parameter(a, b, p).is_some_and(|t| (0.0..=1.0).contains(&t))
}

/// True when `p` lies within `tolerance` of the segment `a → b`.
///
/// Points that project before `a` or past `b` are measured against that
/// endpoint; points in between use the perpendicular distance. A
/// degenerate segment behaves like a single point.
pub fn is_inside_thick_segment(a: Point, b: Point, p: Point, tolerance: f64) -> bool {
    let distance = match projection_parameter(a, b, p) {
        None => a.distance(p),
        Some(t) if t < 0.0 => a.distance(p),
        Some(t) if t > 1.0 => b.distance(p),
        Some(t) => a.lerp(b, t).distance(p),
    };
    distance <= tolerance
}

/// Midpoint of the segment `a → b`.
pub fn line_midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Parametric point on the line through `a` and `b`.
///
/// `t = 0` yields `b` and `t = 1` yields `a`; curve control points are
/// initialized with this convention.
pub fn point_along_line(a: Point, b: Point, t: f64) -> Point {
    b.lerp(a, t)
}

/// Euclidean distance between two points.
pub fn distance_between_points(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Point on the circle around `center` with radius `r` at angle `theta`.
pub fn point_on_circle(center: Point, r: f64, theta: f64) -> Point {
    center + Vec2::from_angle(theta) * r
}

/// Signed angle of `p` around `center`, measured from the positive x axis.
///
/// The result lies in `(-π, π]`; the negative x axis maps to `π`.
pub fn angle_from_x_axis(center: Point, p: Point) -> f64 {
    let angle = (p - center).atan2();
    if angle <= -PI { angle + 2.0 * PI } else { angle }
}

/// Signed sweep of an arc drawn from `start` to `end`.
///
/// Clockwise arcs sweep towards increasing angles (clockwise on a Y-down
/// canvas), others towards decreasing angles. A span of a full turn or more
/// is a full circle in the requested direction.
pub fn arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let delta = end - start;
    if delta.abs() >= TAU {
        return if clockwise { TAU } else { -TAU };
    }
    let forward = delta.rem_euclid(TAU);
    if clockwise || forward == 0.0 {
        forward
    } else {
        forward - TAU
    }
}
