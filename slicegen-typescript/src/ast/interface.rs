//! TypeScript interface builder.

use crate::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn format(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            vec![CodeFragment::Line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))]
        } else {
            vec![CodeFragment::Block {
                header: format!("{}interface {} {{", export, self.name),
                body: self
                    .fields
                    .iter()
                    .map(|f| CodeFragment::Line(f.format()))
                    .collect(),
                close: Some("}".to_string()),
            }]
        }
    }
}
