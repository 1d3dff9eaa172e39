//! Options accepted when constructing an avatar
//!
//! Options can be built in code with the `with_*` methods or loaded from a
//! TOML file where every field is optional:
//!
//! ```toml
//! colors = 24
//! shape = "rect"
//! size = 64
//! title = true
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::OptionsError;

/// Background geometry of the avatar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Rect,
}

/// Whether and how a `<title>` element is emitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TomlTitle")]
pub enum Title {
    /// No title element
    #[default]
    Omitted,
    /// Use the trimmed display name as the title
    DerivedFromName,
    /// Use the given text, trimmed
    Explicit(String),
}

/// TOML accepts `title = true`, `title = false` or `title = "text"`
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlTitle {
    Flag(bool),
    Text(String),
}

impl From<TomlTitle> for Title {
    fn from(raw: TomlTitle) -> Self {
        match raw {
            TomlTitle::Flag(true) => Title::DerivedFromName,
            TomlTitle::Flag(false) => Title::Omitted,
            TomlTitle::Text(text) => Title::Explicit(text),
        }
    }
}

/// Unvalidated avatar options
///
/// Validation happens in [`crate::Avatar::new`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarOptions {
    /// Number of distinct hues, must divide 360
    pub colors: u32,

    /// Maximum number of initials
    pub limit: usize,

    /// Background shape
    pub shape: Shape,

    /// Width and height in pixels
    pub size: u32,

    /// Title element behavior
    pub title: Title,

    /// Scale applied to the computed font size, in [0, 2]
    pub font_size_multiplier: f64,

    /// Opacity of the initials, in [0, 1]
    pub text_opacity: f64,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            colors: 12,
            limit: 3,
            shape: Shape::Circle,
            size: 32,
            title: Title::Omitted,
            font_size_multiplier: 1.0,
            text_opacity: 0.75,
        }
    }
}

impl AvatarOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_colors(mut self, colors: u32) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the title behavior
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = title;
        self
    }

    /// Use an explicit title text
    pub fn with_title_text(self, text: impl Into<String>) -> Self {
        self.with_title(Title::Explicit(text.into()))
    }

    pub fn with_font_size_multiplier(mut self, multiplier: f64) -> Self {
        self.font_size_multiplier = multiplier;
        self
    }

    pub fn with_text_opacity(mut self, opacity: f64) -> Self {
        self.text_opacity = opacity;
        self
    }
}
