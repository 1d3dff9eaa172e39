//! SVG generation for avatars
//!
//! Name-derived text (initials and title) is inserted verbatim. Nothing is
//! escaped, so a name containing markup produces markup. Callers rendering
//! untrusted names must escape or sanitize them first.

use crate::avatar::Avatar;
use crate::options::Shape;

/// Cross-platform sans-serif font stack for the initials
pub const FONT_FAMILY: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen-Sans, Ubuntu, Cantarell, "Helvetica Neue", sans-serif"#;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    size: u32,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a builder for a square canvas
    pub fn new(size: u32) -> Self {
        Self {
            size,
            elements: vec![],
        }
    }

    pub fn add_title(&mut self, title: &str) {
        self.elements.push(format!("<title>{}</title>", title));
    }

    /// Add a background rectangle covering the canvas with rounded corners
    pub fn add_rect(&mut self, radius: u32, fill: &str) {
        self.elements.push(format!(
            "<rect width='{size}' height='{size}' rx='{radius}' ry='{radius}' fill='{fill}' />",
            size = self.size,
        ));
    }

    pub fn add_circle(&mut self, cx: u32, cy: u32, r: u32, fill: &str) {
        self.elements.push(format!(
            "<circle cx='{}' cy='{}' r='{}' fill='{}' />",
            cx, cy, r, fill
        ));
    }

    /// Add white text centered on the canvas
    pub fn add_centered_text(&mut self, text: &str, opacity: f64, font_size: i64) {
        self.elements.push(format!(
            "<text x='50%' y='50%' fill='white' fill-opacity='{}' dominant-baseline='central' text-anchor='middle' style='font-size: {}px; font-family: {}; user-select: none;'>{}</text>",
            format_number(opacity),
            font_size,
            FONT_FAMILY,
            text
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}'>",
            size = self.size
        );
        for elem in &self.elements {
            svg.push_str(elem);
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Format a number so whole values keep a fractional part (`1.0`, not `1`)
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Render an avatar to a standalone SVG document
pub fn render_svg(avatar: &Avatar) -> String {
    let size = avatar.size();
    let fill = avatar.fill();
    let mut builder = SvgBuilder::new(size);

    if let Some(title) = avatar.title() {
        builder.add_title(title);
    }

    match avatar.shape() {
        Shape::Rect => builder.add_rect(size / 32, &fill),
        Shape::Circle => builder.add_circle(size / 2, size / 2, size / 2, &fill),
    }

    builder.add_centered_text(&avatar.initials(), avatar.text_opacity(), avatar.font_size());

    builder.build()
}
