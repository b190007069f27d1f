// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between path space (user units) and screen space (pixels).
//!
//! The scale is chosen so that `visible_range` path units span the canvas
//! width, and path `(0, 0)` sits at the configured fraction of the canvas.
//! Both spaces grow downwards; the exporter flips Y for the Y-up consumer.

use crate::path::PathConfig;
use crate::settings;
use kurbo::{Affine, Point, Size, Vec2};

/// Path-space to screen-space transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Canvas size in pixels
    pub size: Size,
    /// Origin position as a fraction of the canvas size
    pub origin_fraction: Vec2,
    /// Path units visible across the canvas width
    pub visible_range: f64,
}

impl ViewPort {
    pub fn new(size: Size, origin_x: f64, origin_y: f64, visible_range: f64) -> Self {
        Self {
            size,
            origin_fraction: Vec2::new(origin_x, origin_y),
            visible_range,
        }
    }

    /// Build a viewport for a canvas of `size` using a document's settings
    pub fn from_config(size: Size, config: &PathConfig) -> Self {
        Self::new(size, config.origin_x, config.origin_y, config.visible_range)
    }

    /// Pick up origin and range changes from the document settings
    pub fn apply_config(&mut self, config: &PathConfig) {
        self.origin_fraction = Vec2::new(config.origin_x, config.origin_y);
        self.visible_range = config.visible_range;
    }

    /// Pixels per path unit
    ///
    /// Always finite and positive; a degenerate canvas or range maps one
    /// unit to one pixel.
    pub fn scale(&self) -> f64 {
        let scale = self.size.width / self.visible_range;
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        }
    }

    /// Screen position of path `(0, 0)`
    pub fn origin(&self) -> Point {
        Point::new(
            self.size.width * self.origin_fraction.x,
            self.size.height * self.origin_fraction.y,
        )
    }

    pub fn path_to_screen(&self, point: Point) -> Point {
        self.origin() + point.to_vec2() * self.scale()
    }

    pub fn screen_to_path(&self, point: Point) -> Point {
        ((point - self.origin()) / self.scale()).to_point()
    }

    /// Convert a path-space length (e.g. an arc radius) to pixels
    pub fn scale_length_to_screen(&self, length: f64) -> f64 {
        length * self.scale()
    }

    /// The transform as an affine, for drawing path-space geometry
    pub fn affine(&self) -> Affine {
        Affine::translate(self.origin().to_vec2()) * Affine::scale(self.scale())
    }
}

/// Round both coordinates to the nearest snap grid cell
pub fn snap_to_grid(point: Point) -> Point {
    let spacing = settings::snap::SPACING;
    // Rounding through the cell count keeps 0.1 steps free of drift
    let snap = |v: f64| (v / spacing).round() / (1.0 / spacing).round();
    Point::new(snap(point.x), snap(point.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> ViewPort {
        ViewPort::new(Size::new(800.0, 600.0), 0.5, 0.5, 10.0)
    }

    #[test]
    fn origin_and_scale() {
        let vp = viewport();
        assert_eq!(vp.scale(), 80.0);
        assert_eq!(vp.origin(), Point::new(400.0, 300.0));
        assert_eq!(vp.path_to_screen(Point::new(1.0, 1.0)), Point::new(480.0, 380.0));
        assert_eq!(vp.scale_length_to_screen(2.5), 200.0);
    }

    #[test]
    fn round_trip() {
        let configs = [
            viewport(),
            ViewPort::new(Size::new(1024.0, 768.0), 0.1, 0.9, 3.7),
            ViewPort::new(Size::new(333.0, 999.0), 0.0, 1.0, 250.0),
        ];
        for vp in configs {
            for ix in -20..=20 {
                for iy in -20..=20 {
                    let p = Point::new(ix as f64 * 0.37, iy as f64 * -1.13);
                    let back = vp.screen_to_path(vp.path_to_screen(p));
                    assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
                    assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn affine_matches_point_mapping() {
        let vp = ViewPort::new(Size::new(640.0, 480.0), 0.25, 0.75, 8.0);
        let p = Point::new(1.5, -2.25);
        let a = vp.affine() * p;
        let b = vp.path_to_screen(p);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn snap_rounds_to_tenths() {
        let p = snap_to_grid(Point::new(1.234, -0.06));
        assert_eq!(p, Point::new(1.2, -0.1));
        assert_eq!(snap_to_grid(Point::new(3.96, 0.04)), Point::new(4.0, 0.0));
    }

    #[test]
    fn snap_is_idempotent() {
        for i in -500..500 {
            let p = Point::new(i as f64 * 0.0137, i as f64 * -0.291);
            let once = snap_to_grid(p);
            assert_eq!(snap_to_grid(once), once);
        }
    }

    #[test]
    fn degenerate_scale_falls_back() {
        let cases = [
            ViewPort::new(Size::ZERO, 0.5, 0.5, 10.0),
            ViewPort::new(Size::new(800.0, 600.0), 0.5, 0.5, f64::INFINITY),
            ViewPort::new(Size::new(800.0, 600.0), 0.5, 0.5, 0.0),
            ViewPort::new(Size::new(800.0, 600.0), 0.5, 0.5, -4.0),
            ViewPort::new(Size::new(800.0, 600.0), 0.5, 0.5, f64::NAN),
        ];
        for vp in cases {
            assert_eq!(vp.scale(), 1.0);
            let p = vp.screen_to_path(Point::ZERO);
            assert!(p.is_finite(), "{vp:?} gave {p:?}");
        }
    }

    #[test]
    fn config_updates_transform() {
        let mut config = PathConfig::named("a");
        config.visible_range = 20.0;
        config.origin_x = 0.0;
        let vp = ViewPort::from_config(Size::new(800.0, 600.0), &config);
        assert_eq!(vp.scale(), 40.0);
        assert_eq!(vp.origin(), Point::new(0.0, 300.0));
    }
}
