//! SVG export of a triangulation and its Voronoi dual.
//!
//! Layers are drawn in this order: triangles, samples, Voronoi edges, and
//! optionally circumcircles and their centers. Coordinates are written as-is,
//! so a script recorded in window pixels renders in the same frame.
//!
//! # Example
//!
//! ```
//! use bowyer::io::{render_svg, SvgStyle};
//! use bowyer::Triangulator;
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.add_point(100, 100);
//! triangulator.add_point(300, 120);
//!
//! let svg = render_svg(&triangulator, &SvgStyle::default());
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.contains("<polygon"));
//! ```

use crate::primitives::{Point2, Triangle};
use crate::triangulation::Triangulator;

/// Sizes and colors of the exported drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub triangle_stroke: String,
    pub point_fill: String,
    pub voronoi_stroke: String,
    pub circle_stroke: String,
    pub center_fill: String,
    pub point_radius: f64,
    /// Draw each triangle's circumcircle.
    pub show_circles: bool,
    /// Mark each triangle's circumcenter.
    pub show_centers: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            background: "#000000".to_string(),
            triangle_stroke: "#00f0a0".to_string(),
            point_fill: "#f0f017".to_string(),
            voronoi_stroke: "#f0f014".to_string(),
            circle_stroke: "#1e1e1e".to_string(),
            center_fill: "#f01717".to_string(),
            point_radius: 3.0,
            show_circles: false,
            show_centers: false,
        }
    }
}

/// Accumulates SVG elements.
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn circle(&mut self, center: Point2<f64>, r: f64, fill: &str, stroke: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}"/>"#,
            center.x, center.y, r, fill, stroke
        ));
        self.content.push('\n');
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, stroke: &str) {
        self.content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
            from.x, from.y, to.x, to.y, stroke
        ));
        self.content.push('\n');
    }

    fn triangle(&mut self, t: &Triangle, stroke: &str) {
        let pts: Vec<String> = t
            .vertices()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="none" stroke="{}"/>"#,
            pts.join(" "),
            stroke
        ));
        self.content.push('\n');
    }

    fn finish(self, style: &SvgStyle) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
<rect width="100%" height="100%" fill="{bg}"/>
{body}</svg>
"#,
            w = style.width,
            h = style.height,
            bg = style.background,
            body = self.content
        )
    }
}

/// Renders the current mesh, samples and Voronoi edges as an SVG document.
pub fn render_svg(triangulator: &Triangulator, style: &SvgStyle) -> String {
    let mut svg = Svg::new();

    for t in triangulator.triangles() {
        svg.triangle(t, &style.triangle_stroke);
    }

    for &p in triangulator.points() {
        let center: Point2<f64> = p.to_float();
        svg.circle(center, style.point_radius, &style.point_fill, "none");
    }

    for segment in triangulator.voronoi_edges() {
        svg.line(segment.start, segment.end, &style.voronoi_stroke);
    }

    if style.show_circles || style.show_centers {
        for circle in triangulator.circumcircles() {
            if style.show_circles {
                svg.circle(circle.center, circle.radius(), "none", &style.circle_stroke);
            }
            if style.show_centers {
                svg.circle(circle.center, style.point_radius, &style.center_fill, "none");
            }
        }
    }

    svg.finish(style)
}
