//! SVG regression tests
//!
//! Element order, attribute order and quoting are part of the output
//! contract, so these compare complete documents.

use initials_avatar::{Avatar, AvatarOptions, Shape, Title};
use pretty_assertions::assert_eq;

const TEXT_STYLE: &str = r#"font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen-Sans, Ubuntu, Cantarell, "Helvetica Neue", sans-serif; user-select: none;"#;

#[test]
fn test_default_circle_document() {
    let svg = Avatar::new("Ada Lovelace", AvatarOptions::default())
        .unwrap()
        .render();

    insta::assert_snapshot!(svg, @r#"<svg xmlns='http://www.w3.org/2000/svg' width='32' height='32'><circle cx='16' cy='16' r='16' fill='hsl(30, 40%, 40%)' /><text x='50%' y='50%' fill='white' fill-opacity='0.75' dominant-baseline='central' text-anchor='middle' style='font-size: 14px; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen-Sans, Ubuntu, Cantarell, "Helvetica Neue", sans-serif; user-select: none;'>AL</text></svg>"#);
}

#[test]
fn test_rect_document_with_title() {
    let options = AvatarOptions::new()
        .with_shape(Shape::Rect)
        .with_size(64)
        .with_title(Title::DerivedFromName)
        .with_text_opacity(0.5);
    let svg = Avatar::new(" Grace Hopper ", options).unwrap().render();

    let expected = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='64' height='64'>\
         <title>Grace Hopper</title>\
         <rect width='64' height='64' rx='2' ry='2' fill='hsl(240, 40%, 40%)' />\
         <text x='50%' y='50%' fill='white' fill-opacity='0.5' dominant-baseline='central' text-anchor='middle' style='font-size: 28px; {}'>GH</text>\
         </svg>",
        TEXT_STYLE
    );
    assert_eq!(svg, expected);
}

#[test]
fn test_empty_name_document() {
    let svg = Avatar::new("", AvatarOptions::default()).unwrap().render();

    let expected = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='32' height='32'>\
         <circle cx='16' cy='16' r='16' fill='hsl(0, 0%, 67%)' />\
         <text x='50%' y='50%' fill='white' fill-opacity='0.75' dominant-baseline='central' text-anchor='middle' style='font-size: 16px; {}'>?</text>\
         </svg>",
        TEXT_STYLE
    );
    assert_eq!(svg, expected);
}
