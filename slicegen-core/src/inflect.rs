//! Suffix-rule pluralization for entity names.
//!
//! Irregular nouns ("person" -> "people") are deliberately not handled:
//! entity names are curated by the operator, and a silently "corrected"
//! plural would break the kebab route/path round trip.

/// Pluralize a singular noun.
///
/// Rules: trailing `y` becomes `ies`; sibilant endings (`s`, `x`, `z`,
/// `ch`, `sh`) gain `es`; everything else gains `s`.
pub fn to_plural(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if let Some(stem) = s.strip_suffix('y') {
        return format!("{}ies", stem);
    }
    if s.ends_with('s')
        || s.ends_with('x')
        || s.ends_with('z')
        || s.ends_with("ch")
        || s.ends_with("sh")
    {
        return format!("{}es", s);
    }
    format!("{}s", s)
}

/// Singularize a plural noun, reversing the [`to_plural`] rules.
pub fn to_singular(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if let Some(stem) = s.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = s.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = s.strip_suffix('s') {
        return stem.to_string();
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_plural() {
        assert_eq!(to_plural("claim"), "claims");
        assert_eq!(to_plural("company"), "companies");
        assert_eq!(to_plural("address"), "addresses");
        assert_eq!(to_plural("box"), "boxes");
        assert_eq!(to_plural("batch"), "batches");
        assert_eq!(to_plural("dish"), "dishes");
        assert_eq!(to_plural(""), "");
    }

    #[test]
    fn test_to_singular() {
        assert_eq!(to_singular("claims"), "claim");
        assert_eq!(to_singular("companies"), "company");
        assert_eq!(to_singular("addresses"), "address");
        assert_eq!(to_singular("boxes"), "box");
        assert_eq!(to_singular(""), "");
    }

    #[test]
    fn test_round_trip() {
        for noun in ["claim", "customer", "company", "property", "address"] {
            assert_eq!(to_singular(&to_plural(noun)), noun);
        }
    }
}
