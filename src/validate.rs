//! Option validation performed once at construction

use crate::color::HUE_WHEEL;
use crate::error::ConfigurationError;
use crate::options::{AvatarOptions, Title};

/// Options that passed validation, with the name and title normalized
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Validated {
    pub name: String,
    pub title: Option<String>,
    pub options: AvatarOptions,
}

/// Validate options and normalize the name and title.
///
/// Checks run in a fixed order (font size multiplier, colors, size, text
/// opacity) and the first failure is returned.
pub(crate) fn validate(name: &str, options: AvatarOptions) -> Result<Validated, ConfigurationError> {
    font_size_multiplier(options.font_size_multiplier)?;
    colors(options.colors)?;
    size(options.size)?;
    text_opacity(options.text_opacity)?;

    let name = name.trim().to_string();
    let title = match &options.title {
        Title::Omitted => None,
        Title::DerivedFromName => Some(name.clone()),
        Title::Explicit(text) => Some(text.trim().to_string()),
    };

    Ok(Validated {
        name,
        title,
        options,
    })
}

pub fn font_size_multiplier(value: f64) -> Result<f64, ConfigurationError> {
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigurationError::FontSizeMultiplier { value })
    }
}

/// Accept a color count only if it splits the hue wheel into equal steps
pub fn colors(value: u32) -> Result<u32, ConfigurationError> {
    if value > 0 && HUE_WHEEL % value == 0 {
        Ok(value)
    } else {
        Err(ConfigurationError::Colors { value })
    }
}

pub fn size(value: u32) -> Result<u32, ConfigurationError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ConfigurationError::Size { value })
    }
}

pub fn text_opacity(value: f64) -> Result<f64, ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigurationError::TextOpacity { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_multiplier_bounds() {
        assert!(font_size_multiplier(0.0).is_ok());
        assert!(font_size_multiplier(2.0).is_ok());
        assert!(font_size_multiplier(2.0001).is_err());
        assert!(font_size_multiplier(-0.1).is_err());
        assert!(font_size_multiplier(f64::NAN).is_err());
    }

    #[test]
    fn test_colors_must_divide_wheel() {
        assert_eq!(colors(24), Ok(24));
        assert_eq!(colors(360), Ok(360));
        assert_eq!(colors(1), Ok(1));
        assert_eq!(colors(16), Err(ConfigurationError::Colors { value: 16 }));
        assert_eq!(colors(0), Err(ConfigurationError::Colors { value: 0 }));
        assert!(colors(720).is_err());
    }

    #[test]
    fn test_size_must_be_positive() {
        assert_eq!(size(1), Ok(1));
        assert_eq!(size(0), Err(ConfigurationError::Size { value: 0 }));
    }

    #[test]
    fn test_text_opacity_bounds() {
        assert!(text_opacity(0.0).is_ok());
        assert!(text_opacity(1.0).is_ok());
        assert!(text_opacity(1.0001).is_err());
        assert!(text_opacity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_first_failure_wins() {
        let options = AvatarOptions::new()
            .with_font_size_multiplier(3.0)
            .with_colors(16)
            .with_size(0)
            .with_text_opacity(2.0);
        let err = validate("Ada", options).unwrap_err();
        assert_eq!(err, ConfigurationError::FontSizeMultiplier { value: 3.0 });

        let options = AvatarOptions::new().with_size(0).with_text_opacity(2.0);
        let err = validate("Ada", options).unwrap_err();
        assert_eq!(err, ConfigurationError::Size { value: 0 });
    }

    #[test]
    fn test_name_and_title_are_trimmed() {
        let validated = validate("  Ada Lovelace \n", AvatarOptions::new()).unwrap();
        assert_eq!(validated.name, "Ada Lovelace");
        assert_eq!(validated.title, None);

        let options = AvatarOptions::new().with_title(Title::DerivedFromName);
        let validated = validate("  Ada  ", options).unwrap();
        assert_eq!(validated.title.as_deref(), Some("Ada"));

        let options = AvatarOptions::new().with_title_text("  Profile picture ");
        let validated = validate("Ada", options).unwrap();
        assert_eq!(validated.title.as_deref(), Some("Profile picture"));
    }

    #[test]
    fn test_internal_whitespace_is_kept() {
        let validated = validate(" ada   lovelace ", AvatarOptions::new()).unwrap();
        assert_eq!(validated.name, "ada   lovelace");
    }
}
