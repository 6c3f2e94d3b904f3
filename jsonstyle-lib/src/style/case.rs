//! Property-name case conversion (`fontSize` -> `font-size`).

/// Separator placed in front of each converted uppercase letter by default.
pub const DEFAULT_SEPARATOR: char = '-';

/// Converts a word-capitalized property name into its hyphenated lowercase form.
///
/// ```
/// use jsonstyle_lib::style::to_css_key;
///
/// assert_eq!(to_css_key("fontSize"), "font-size");
/// assert_eq!(to_css_key("color"), "color");
/// ```
pub fn to_css_key(name: &str) -> String {
    to_css_key_with(name, DEFAULT_SEPARATOR)
}

/// Like [`to_css_key`], with a caller-chosen separator.
///
/// Only ASCII uppercase letters are rewritten; every other character is copied as is.
pub fn to_css_key_with(name: &str, separator: char) -> String {
    let mut converted = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            converted.push(separator);
            converted.push(ch.to_ascii_lowercase());
        } else {
            converted.push(ch);
        }
    }
    converted
}
