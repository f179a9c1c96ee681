//! Validation of parsed entity configurations.

use std::collections::HashSet;

use crate::{EntityConfig, Result, SourceContext};

/// Field names assigned by the server and always present on the generated
/// record shape. Declaring one in a config is rejected rather than silently
/// dropped, so the CreateDTO exclusion set stays exact.
pub const RESERVED_FIELDS: &[&str] = &["id", "uuid", "created_at", "updated_at", "deleted_at"];

pub(crate) fn validate(config: &EntityConfig, ctx: &SourceContext) -> Result<()> {
    validate_entity_name(&config.name, ctx)?;

    let mut seen: HashSet<&str> = HashSet::new();
    for field in &config.fields {
        validate_field_name(&field.name, ctx)?;
        if RESERVED_FIELDS.contains(&field.name.as_str()) {
            return Err(ctx.reserved_field_error(&field.name));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(ctx.duplicate_field_error(&field.name));
        }
    }

    if let Some(sort_field) = &config.sort_field {
        if !config.has_field(sort_field) {
            return Err(ctx.unknown_sort_field_error(sort_field));
        }
    }

    Ok(())
}

/// Entity names seed every derived identifier, so they must be PascalCase
/// identifier fragments: an uppercase letter followed by letters and digits.
fn validate_entity_name(name: &str, ctx: &SourceContext) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    };
    if !valid {
        return Err(ctx.invalid_identifier_error(
            name,
            "entity",
            "use a PascalCase singular name: an uppercase letter followed by letters and digits",
        ));
    }
    Ok(())
}

/// Field names become TypeScript property identifiers as-is.
fn validate_field_name(name: &str, ctx: &SourceContext) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(ctx.invalid_identifier_error(
            name,
            "field",
            "use only letters, numbers, and underscores, starting with a letter or underscore",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{EntityConfig, Error};

    fn parse(json: &str) -> crate::Result<EntityConfig> {
        EntityConfig::from_str_with_filename(json, "test.json")
    }

    #[test]
    fn test_reserved_field_is_rejected() {
        for reserved in super::RESERVED_FIELDS {
            let json = format!(
                r#"{{"name": "Widget", "fields": [{{"name": "{}", "type": "string", "required": true}}]}}"#,
                reserved
            );
            let err = parse(&json).unwrap_err();
            assert!(
                matches!(*err, Error::ReservedField { ref name, .. } if name == reserved),
                "expected '{}' to be rejected",
                reserved
            );
        }
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = parse(
            r#"{"name": "Widget", "fields": [
                {"name": "amount", "type": "number", "required": true},
                {"name": "amount", "type": "string", "required": false}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateField { ref name, .. } if name == "amount"));
    }

    #[test]
    fn test_lowercase_entity_name_is_rejected() {
        let err = parse(r#"{"name": "widget", "fields": []}"#).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "entity"));
    }

    #[test]
    fn test_invalid_field_name_is_rejected() {
        let err = parse(
            r#"{"name": "Widget", "fields": [{"name": "widget description", "type": "string", "required": true}]}"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "field"));
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let err = parse(
            r#"{"name": "Widget", "sort_field": "missing", "fields": [{"name": "amount", "type": "number", "required": true}]}"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::UnknownSortField { ref sort_field, .. } if sort_field == "missing"));
    }

    #[test]
    fn test_valid_config_passes() {
        let config = parse(
            r#"{"name": "Widget", "fields": [{"name": "widget_description", "type": "string", "required": true}]}"#,
        );
        assert!(config.is_ok());
    }
}
