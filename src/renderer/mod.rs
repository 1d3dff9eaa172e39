//! SVG renderer for avatars
//!
//! This module assembles the background shape, optional title and centered
//! initials into a single SVG string.

pub mod svg;

pub use svg::{render_svg, SvgBuilder};
