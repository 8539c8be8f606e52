//! Case Flexibility Heuristics
//!
//! Decides whether a candidate name may also be recognized with a lowercase
//! initial ("Meeting" → "meeting"). Acronyms, abbreviations, multi-word names
//! and names with embedded punctuation keep their exact spelling only.

use super::boundary::is_word_char;

/// Length (in chars) of the longest leading run of uppercase letters, digits
/// or non-word characters.
///
/// "WTO" → 3, "PFCs" → 3, "UN-Habitat" → 4, "Meeting" → 1
pub fn leading_caps_run(name: &str) -> usize {
    name.chars()
        .take_while(|c| c.is_uppercase() || c.is_numeric() || !is_word_char(*c))
        .count()
}

/// Names with fewer than two characters after the leading caps run read as
/// acronyms ("WTO", "PFCs", "CO2e").
pub fn is_acronym_like(name: &str) -> bool {
    name.chars().count().saturating_sub(leading_caps_run(name)) < 2
}

/// True if a non-word character appears after the leading run of uppercase
/// letters and digits ("UN-Habitat", "Rio+20").
pub fn has_infix_punctuation(name: &str) -> bool {
    name.chars()
        .skip_while(|c| c.is_uppercase() || c.is_numeric())
        .any(|c| !is_word_char(c))
}

/// Whether `name` also matches with a lowercase initial
pub fn qualifies_for_lowercase(name: &str, min_chars: usize) -> bool {
    if name.chars().count() < min_chars || name.ends_with('.') {
        return false;
    }
    if name.split_whitespace().count() != 1 {
        return false;
    }
    !is_acronym_like(name) && !has_infix_punctuation(name)
}

/// "Meeting" → "meeting"; the rest of the name is untouched
pub fn lowercase_initial(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "meeting" → "Meeting"; the rest of the name is untouched
pub fn capitalize_initial(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
