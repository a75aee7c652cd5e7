//! Class name helpers shared by the choice components

/// Join the class tokens whose flag is set, separated by single spaces.
///
/// Empty tokens are skipped so an unset style never leaves stray whitespace.
pub fn class_names(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .filter(|(token, enabled)| *enabled && !token.is_empty())
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Style name for a variation, e.g. `("alignment", "center")` -> `alignmentCenter`
pub fn variation_name(name: &str, value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => format!("{name}{}{}", first.to_uppercase(), chars.as_str()),
        None => name.to_string(),
    }
}
