//! Display names for attribute keys.

/// Turn an attribute key into a label.
///
/// ```
/// use turbo_variants::selector::format_attribute_name;
/// assert_eq!(format_attribute_name("bottle_size"), "Bottle Size");
/// ```
pub fn format_attribute_name(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
