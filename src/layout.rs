//! Font size computation

/// Font size in pixels for the given canvas size and initials length.
///
/// The base size shrinks by `size/16` per initial. The result may be zero
/// or negative for extreme inputs; callers render it as is.
pub fn font_size(size: u32, initials_len: usize, multiplier: f64) -> i64 {
    let size = i64::from(size);
    let len = initials_len as i64;
    let base = size / 2 + size / 16 - (len * size) / 16;
    (multiplier * base as f64).round() as i64
}
