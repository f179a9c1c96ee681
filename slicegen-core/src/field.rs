//! The closed set of field kinds an entity may declare.

use serde::{Deserialize, Serialize};

/// Kind of an entity field.
///
/// Drives both the emitted type annotation and the validation rule family.
/// `Object` fields reference a sibling entity's record type and imply a
/// type import in the generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Text,
    Number,
    Boolean,
    Date,
    Email,
    Phone,
    Url,
    Object,
}

impl FieldKind {
    /// Stable lowercase name, matching the JSON config representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
