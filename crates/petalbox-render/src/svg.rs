//! SVG document builder.

use crate::RenderError;
use kurbo::{BezPath, Point, Rect};
use peniko::{Color, Fill};
use petalbox_core::{Shape, ShapeStyle};
use std::path::Path;

/// Stroke width for color-cycling rings.
const RING_STROKE_WIDTH: f64 = 2.0;

/// Accumulates drawing elements and serializes them as a standalone
/// SVG document. Elements paint in insertion order.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Paint the whole canvas with one color, under everything added
    /// later.
    pub fn background(&mut self, color: Color) {
        let (hex, opacity) = hex_color(color);
        self.body.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"{hex}\"{}/>\n",
            fmt(self.width),
            fmt(self.height),
            opacity_attr("fill-opacity", opacity),
        ));
    }

    /// Fill a path under the given fill rule.
    pub fn fill_path(&mut self, path: &BezPath, color: Color, rule: Fill) {
        let (hex, opacity) = hex_color(color);
        let rule = match rule {
            Fill::NonZero => "nonzero",
            Fill::EvenOdd => "evenodd",
        };
        self.body.push_str(&format!(
            "  <path d=\"{}\" fill=\"{hex}\" fill-rule=\"{rule}\"{}/>\n",
            path.to_svg(),
            opacity_attr("fill-opacity", opacity),
        ));
    }

    /// Stroke a path outline.
    pub fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let (hex, opacity) = hex_color(color);
        self.body.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{hex}\" stroke-width=\"{}\"{}/>\n",
            path.to_svg(),
            fmt(width),
            opacity_attr("stroke-opacity", opacity),
        ));
    }

    /// Fill a circle, optionally compositing with screen blending so
    /// overlapping circles sum their light.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color, blend_screen: bool) {
        let (hex, opacity) = hex_color(color);
        let blend = if blend_screen {
            " style=\"mix-blend-mode:screen\""
        } else {
            ""
        };
        self.body.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{hex}\"{}{blend}/>\n",
            fmt(center.x),
            fmt(center.y),
            fmt(radius),
            opacity_attr("fill-opacity", opacity),
        ));
    }

    /// Stroke a circle outline.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        let (hex, opacity) = hex_color(color);
        self.body.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{hex}\" \
             stroke-width=\"{}\"{}/>\n",
            fmt(center.x),
            fmt(center.y),
            fmt(radius),
            fmt(width),
            opacity_attr("stroke-opacity", opacity),
        ));
    }

    /// Draw a shape inside `rect` with the given style.
    ///
    /// The color-cycling circle ignores the style's colors: its rings
    /// carry their own stroke colors from the hue cycle.
    pub fn render_shape(&mut self, shape: &Shape, rect: Rect, style: &ShapeStyle) {
        if let Shape::ColorCyclingCircle(circle) = shape {
            for ring in circle.rings() {
                let radius = petalbox_core::ColorCyclingCircle::ring_radius(rect, ring.inset);
                self.stroke_circle(rect.center(), radius, ring.color, RING_STROKE_WIDTH);
            }
            return;
        }

        let path = shape.path_in(rect);
        if let Some(fill) = style.fill() {
            self.fill_path(&path, fill, style.fill_rule.into());
        }
        if let Some(stroke) = style.stroke() {
            self.stroke_path(&path, stroke, style.stroke_width);
        }
    }

    /// Serialize the accumulated elements as an SVG document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = fmt(self.width),
            h = fmt(self.height),
            body = self.body,
        )
    }

    /// Write the document to `path`.
    pub fn write_to_file(&self, path: &Path) -> Result<(), RenderError> {
        log::debug!("writing svg to {}", path.display());
        std::fs::write(path, self.finish())?;
        Ok(())
    }
}

/// Split a color into an opaque `#rrggbb` string and an alpha in
/// [0, 1].
fn hex_color(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        rgba.a as f64 / 255.0,
    )
}

/// Emit an opacity attribute only when it changes anything.
fn opacity_attr(name: &str, opacity: f64) -> String {
    if opacity < 1.0 {
        format!(" {name}=\"{}\"", fmt(opacity))
    } else {
        String::new()
    }
}

/// Trim trailing zeros so coordinates stay readable.
fn fmt(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petalbox_core::{Checkerbox, ColorCyclingCircle, FillRule, Flower, Triangle};

    const RECT: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

    #[test]
    fn test_document_structure() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        doc.background(Color::from_rgba8(0, 0, 0, 255));
        let output = doc.finish();
        assert!(output.starts_with("<svg xmlns"));
        assert!(output.contains("viewBox=\"0 0 300 300\""));
        assert!(output.contains("fill=\"#000000\""));
        assert!(output.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_fill_rule_attribute() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        let flower = Shape::Flower(Flower::default());
        let style = ShapeStyle::filled(Color::from_rgba8(0, 0, 255, 255))
            .with_fill_rule(FillRule::EvenOdd);
        doc.render_shape(&flower, RECT, &style);
        assert!(doc.finish().contains("fill-rule=\"evenodd\""));
    }

    #[test]
    fn test_color_rings_render_as_stroked_circles() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        let circle = Shape::ColorCyclingCircle(ColorCyclingCircle::new(0.0, 5).unwrap());
        doc.render_shape(&circle, RECT, &ShapeStyle::default());
        let output = doc.finish();
        assert_eq!(output.matches("<circle").count(), 5);
        assert!(output.contains("stroke-width=\"2\""));
        // Outermost ring is red at amount 0.
        assert!(output.contains("stroke=\"#ff0000\""));
    }

    #[test]
    fn test_blend_mode_attribute() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        doc.fill_circle(
            Point::new(150.0, 150.0),
            100.0,
            Color::from_rgba8(255, 0, 0, 255),
            true,
        );
        assert!(doc.finish().contains("mix-blend-mode:screen"));
    }

    #[test]
    fn test_filled_and_stroked_shape_emits_both() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        let style = ShapeStyle {
            stroke_width: 3.0,
            fill_color: Some(Color::from_rgba8(255, 255, 255, 128).into()),
            ..ShapeStyle::default()
        };
        doc.render_shape(&Shape::Triangle(Triangle::new()), RECT, &style);
        let output = doc.finish();
        assert!(output.contains("stroke=\"#000000\""));
        assert!(output.contains("fill-opacity=\"0.502\""));
    }

    #[test]
    fn test_checkerbox_path_has_one_sub_path_per_cell() {
        let mut doc = SvgDocument::new(300.0, 300.0);
        let checkerbox = Shape::Checkerbox(Checkerbox::new(2, 2).unwrap());
        doc.render_shape(
            &checkerbox,
            RECT,
            &ShapeStyle::filled(Color::from_rgba8(0, 0, 0, 255)),
        );
        let output = doc.finish();
        let d_start = output.find("d=\"").unwrap();
        let d_end = output[d_start + 3..].find('"').unwrap();
        let data = &output[d_start + 3..d_start + 3 + d_end];
        assert_eq!(data.matches('M').count(), 2);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.svg");

        let mut doc = SvgDocument::new(100.0, 100.0);
        doc.render_shape(
            &Shape::Triangle(Triangle::new()),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &ShapeStyle::default(),
        );
        doc.write_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.finish());
    }
}
