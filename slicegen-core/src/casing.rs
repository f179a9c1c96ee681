//! Shared casing transforms for code generation.
//!
//! Every generator derives identifier, type, and file names from the same
//! entity name through these functions, so the generated artifacts stay
//! name-consistent by construction.

/// Split an identifier into lowercase words.
///
/// Word boundaries are underscores, hyphens, whitespace, and camel humps
/// (a lowercase letter or digit followed by an uppercase letter).
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_upper = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_upper = false;
        } else if c.is_uppercase() {
            if !current.is_empty() && !prev_upper {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
            prev_upper = true;
        } else {
            current.push(c);
            prev_upper = false;
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "claim-agreement" -> "ClaimAgreement")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "claim_agreement" -> "claimAgreement")
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Convert a string to kebab-case (e.g., "ClaimAgreement" -> "claim-agreement")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to snake_case (e.g., "ClaimAgreement" -> "claim_agreement")
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert an identifier to a sentence-case label
/// (e.g., "widget_description" -> "Widget description").
pub fn humanize(s: &str) -> String {
    let words = split_words(s);
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(&capitalize(word));
        } else {
            result.push(' ');
            result.push_str(word);
        }
    }
    result
}
