//! Initials Avatar - Deterministic placeholder avatars as SVG
//!
//! This library renders a colored circle or rounded square bearing the
//! initials of a name. The same name and options always produce the same
//! document, so the output can be cached freely.
//!
//! # Example
//!
//! ```rust
//! use initials_avatar::render;
//!
//! let svg = render("Grace Hopper").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(">GH</text>"));
//! ```
//!
//! # Security
//!
//! Name-derived text is inserted into the markup without escaping. Escape or
//! sanitize untrusted names before embedding rendered avatars in a page.

pub mod avatar;
pub mod color;
pub mod error;
pub mod initials;
pub mod layout;
pub mod options;
pub mod renderer;
pub mod validate;

pub use avatar::Avatar;
pub use error::{ConfigurationError, OptionsError};
pub use options::{AvatarOptions, Shape, Title};
pub use renderer::render_svg;

/// Render an avatar for `name` with default options
///
/// # Example
///
/// ```rust
/// use initials_avatar::render;
///
/// let svg = render("ada lovelace").unwrap();
/// assert!(svg.contains("<circle cx='16' cy='16' r='16'"));
/// assert!(svg.contains(">AL</text>"));
/// ```
pub fn render(name: &str) -> Result<String, ConfigurationError> {
    render_with_options(name, AvatarOptions::default())
}

/// Render an avatar for `name` with custom options
///
/// # Example
///
/// ```rust
/// use initials_avatar::{render_with_options, AvatarOptions, Shape};
///
/// let options = AvatarOptions::new().with_shape(Shape::Rect).with_size(64);
/// let svg = render_with_options("Ada", options).unwrap();
/// assert!(svg.contains("rx='2'"));
/// ```
pub fn render_with_options(name: &str, options: AvatarOptions) -> Result<String, ConfigurationError> {
    Ok(Avatar::new(name, options)?.render())
}
