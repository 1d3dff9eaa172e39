//! The validated avatar value

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, trace};

use crate::error::{ConfigurationError, OptionsError};
use crate::options::{AvatarOptions, Shape};
use crate::{color, initials, layout, renderer, validate};

/// An immutable, validated avatar
///
/// Derived values are computed on every call and depend only on the
/// name and options captured by [`Avatar::new`], so rendering the same
/// avatar twice yields identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Trimmed name, before `?` substitution
    name: String,
    /// Resolved title text
    title: Option<String>,
    /// Options as given; `options.title` is kept unresolved
    options: AvatarOptions,
}

impl Avatar {
    /// Content type for the rendered markup
    pub const CONTENT_TYPE: &'static str = "image/svg+xml";

    /// Validate the options and build an avatar for `name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use initials_avatar::{Avatar, AvatarOptions};
    ///
    /// let avatar = Avatar::new("Ada Lovelace", AvatarOptions::default()).unwrap();
    /// assert_eq!(avatar.initials(), "AL");
    ///
    /// let err = Avatar::new("Ada", AvatarOptions::new().with_colors(16));
    /// assert!(err.is_err());
    /// ```
    pub fn new(name: &str, options: AvatarOptions) -> Result<Self, ConfigurationError> {
        let validated = validate::validate(name, options).map_err(|e| {
            debug!("rejected avatar options: {}", e);
            e
        })?;
        debug!(
            "avatar for {:?}: {:?}, title {:?}",
            validated.name, validated.options, validated.title
        );

        Ok(Self {
            name: validated.name,
            title: validated.title,
            options: validated.options,
        })
    }

    /// Load options from a TOML file and build an avatar for `name`
    pub fn from_options_file(name: &str, path: &Path) -> Result<Self, OptionsError> {
        let options = AvatarOptions::from_file(path)?;
        Ok(Self::new(name, options)?)
    }

    /// The effective display name, `?` when the trimmed name is empty
    pub fn name(&self) -> &str {
        initials::effective_name(&self.name)
    }

    pub fn colors(&self) -> u32 {
        self.options.colors
    }

    pub fn limit(&self) -> usize {
        self.options.limit
    }

    pub fn shape(&self) -> Shape {
        self.options.shape
    }

    pub fn size(&self) -> u32 {
        self.options.size
    }

    /// Title text, if a title element will be rendered
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn font_size_multiplier(&self) -> f64 {
        self.options.font_size_multiplier
    }

    pub fn text_opacity(&self) -> f64 {
        self.options.text_opacity
    }

    /// Background color as an `hsl(...)` string
    pub fn fill(&self) -> String {
        let fill = color::fill(&self.name, self.options.colors);
        trace!("fill for {:?}: {}", self.name, fill);
        fill
    }

    pub fn initials(&self) -> String {
        let initials = initials::initials(&self.name, self.options.limit);
        trace!("initials for {:?}: {}", self.name, initials);
        initials
    }

    /// Font size in pixels, possibly zero or negative for extreme options
    pub fn font_size(&self) -> i64 {
        let initials_len = self.initials().chars().count();
        let size = layout::font_size(
            self.options.size,
            initials_len,
            self.options.font_size_multiplier,
        );
        trace!("font size for {} initials: {}px", initials_len, size);
        size
    }

    /// Render the avatar as a standalone SVG document.
    ///
    /// The name and title are inserted without escaping. Escape untrusted
    /// names before embedding the result in a page.
    pub fn render(&self) -> String {
        debug!("rendering avatar for {:?}", self.name);
        renderer::render_svg(self)
    }

    /// Render as a base64 `data:` URI suitable for an `<img src>`
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            Self::CONTENT_TYPE,
            STANDARD.encode(self.render())
        )
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
