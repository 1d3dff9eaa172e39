//! Initials extraction

/// Stands in for an empty name
pub const PLACEHOLDER: &str = "?";

/// The name used for initials: the trimmed name, or `?` when it is empty
pub fn effective_name(name: &str) -> &str {
    if name.is_empty() {
        PLACEHOLDER
    } else {
        name
    }
}

/// Uppercased first character of each of the first `limit` words
pub fn initials(name: &str, limit: usize) -> String {
    effective_name(name)
        .split_whitespace()
        .take(limit)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
