//! Mapping from field kinds to TypeScript annotations and validation rules.

use slicegen_config::Field;
use slicegen_core::{FieldKind, humanize, to_pascal_case};

/// TypeScript type mapper.
///
/// Dispatches exhaustively over [`FieldKind`]: each kind carries both a type
/// annotation and a validation-rule family, so a new kind fails to compile
/// until every consumer handles it.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// The emitted type annotation for a field.
    ///
    /// Object fields reference the sibling entity's record type, derived
    /// from the field name.
    pub fn annotation(&self, field: &Field) -> String {
        match field.kind {
            FieldKind::String
            | FieldKind::Text
            | FieldKind::Date
            | FieldKind::Email
            | FieldKind::Phone
            | FieldKind::Url => "string".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Object => format!("{}Data", to_pascal_case(&field.name)),
        }
    }

    /// The zod validation chain for a field.
    pub fn validation_chain(&self, field: &Field) -> String {
        let label = humanize(&field.name);
        let base = match field.kind {
            FieldKind::String => format!(
                "z.string().min(1, \"{} is required\").max(255)",
                label
            ),
            FieldKind::Text => format!(
                "z.string().min(1, \"{} is required\").max(5000)",
                label
            ),
            FieldKind::Number => format!(
                "z.coerce.number().min(0, \"{} must not be negative\")",
                label
            ),
            FieldKind::Boolean => "z.boolean()".to_string(),
            FieldKind::Date => format!("z.string().min(1, \"{} is required\")", label),
            FieldKind::Email => {
                "z.string().email(\"Invalid email address\")".to_string()
            }
            FieldKind::Phone => {
                "z.string().regex(/^[0-9+()\\-\\s]{7,20}$/, \"Invalid phone number\")".to_string()
            }
            FieldKind::Url => "z.string().url(\"Invalid URL\")".to_string(),
            // Typed passthrough: related records are validated by their own
            // entity's schema, not inline.
            FieldKind::Object => format!("z.custom<{}Data>()", to_pascal_case(&field.name)),
        };

        if field.required {
            base
        } else {
            // Optional string kinds lose the non-empty floor.
            match field.kind {
                FieldKind::String => "z.string().max(255).optional()".to_string(),
                FieldKind::Text => "z.string().max(5000).optional()".to_string(),
                FieldKind::Date => "z.string().optional()".to_string(),
                _ => format!("{}.optional()", base),
            }
        }
    }

    /// The HTML input type for a field, or `None` when the field has no
    /// form input (object fields are managed through their own entity).
    pub fn input_type(&self, kind: FieldKind) -> Option<&'static str> {
        match kind {
            FieldKind::String | FieldKind::Text => Some("text"),
            FieldKind::Number => Some("number"),
            FieldKind::Boolean => Some("checkbox"),
            FieldKind::Date => Some("date"),
            FieldKind::Email => Some("email"),
            FieldKind::Phone => Some("tel"),
            FieldKind::Url => Some("url"),
            FieldKind::Object => None,
        }
    }
}
