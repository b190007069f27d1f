// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Surface that writes an SVG document

use super::DrawSurface;
use kurbo::{BezPath, Size, Stroke};
use peniko::Color;
use std::fmt::Write;

/// Accumulates drawing calls as SVG `<path>` elements
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Extra attribute for partially transparent colors
fn opacity(color: Color, attribute: &str) -> String {
    let alpha = color.to_rgba8().a;
    if alpha == u8::MAX {
        String::new()
    } else {
        format!(" {attribute}=\"{:.3}\"", f64::from(alpha) / 255.0)
    }
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Close the document and return its text
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body
        )
    }
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\"{}/>",
            path.to_svg(),
            hex(color),
            opacity(color, "fill-opacity")
        );
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        let mut dashes = String::new();
        if !stroke.dash_pattern.is_empty() {
            let pattern: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
            dashes = format!(
                " stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
                pattern.join(" "),
                stroke.dash_offset
            );
        }
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}{}/>",
            path.to_svg(),
            hex(color),
            stroke.width,
            opacity(color, "stroke-opacity"),
            dashes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Line, Shape};

    #[test]
    fn writes_paths_and_dashes() {
        let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
        let line = Line::new((0.0, 0.0), (10.0, 0.0)).to_path(0.1);
        surface.fill(&line, Color::from_rgb8(0xff, 0x00, 0x80));
        surface.stroke(
            &line,
            &Stroke::new(2.0).with_dashes(0.0, [4.0, 4.0]),
            Color::from_rgb8(0x10, 0x20, 0x30),
        );
        let svg = surface.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\""));
        assert!(svg.contains("fill=\"#ff0080\""));
        assert!(svg.contains("stroke=\"#102030\" stroke-width=\"2\""));
        assert!(svg.contains("stroke-dasharray=\"4 4\""));
        assert!(!svg.contains("opacity"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
