//! Deterministic fill color derived from the display name

/// Size of the hue wheel in degrees
pub const HUE_WHEEL: u32 = 360;

/// Fill used when the name is empty
pub const NEUTRAL_GRAY: &str = "hsl(0, 0%, 67%)";

/// Compute the fill color for a trimmed name.
///
/// Every character contributes its code point times the hue step, so
/// neighboring characters like `A` and `B` land exactly one step apart.
pub fn fill(name: &str, colors: u32) -> String {
    if name.is_empty() {
        return NEUTRAL_GRAY.to_string();
    }

    format!("hsl({}, 40%, 40%)", hue(name, colors))
}

/// Hue in degrees, always in `0..360`
pub fn hue(name: &str, colors: u32) -> u32 {
    let wheel = u64::from(HUE_WHEEL);
    let step = wheel / u64::from(colors.max(1));

    let hue = name
        .chars()
        .fold(0u64, |acc, c| (acc + u64::from(c) * step % wheel) % wheel);

    hue as u32
}
