//! TypeScript/JavaScript object literal builder.

use crate::builder::{CodeFragment, Renderable};

/// A property in an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (quoted on render).
    String(String),
    /// A raw expression (not quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (quoted on render).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        });
        self
    }

    /// Add a property with a raw expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add a nested object property.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Object(value),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::String(s) => {
                    CodeFragment::Line(format!("{}: \"{}\",", prop.key, s))
                }
                PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", prop.key, s)),
                PropertyValue::Object(obj) => CodeFragment::Block {
                    header: format!("{}: {{", prop.key),
                    body: obj.properties_to_fragments(),
                    close: Some("},".to_string()),
                },
            })
            .collect()
    }

    /// Wrap the object literal in surrounding code, e.g.
    /// `wrap("export const schema = z.object(", ");")`.
    pub fn wrap(&self, before: &str, after: &str) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Line(format!("{}{{}}{}", before, after))];
        }
        vec![CodeFragment::Block {
            header: format!("{}{{", before),
            body: self.properties_to_fragments(),
            close: Some(format!("}}{}", after)),
        }]
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.wrap("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().render(), "{}\n");
    }

    #[test]
    fn test_string_and_raw_properties() {
        let obj = JsObject::new()
            .string("method", "POST")
            .raw("body", "JSON.stringify(data)")
            .render();
        assert_eq!(
            obj,
            "{\n  method: \"POST\",\n  body: JSON.stringify(data),\n}\n"
        );
    }

    #[test]
    fn test_wrap() {
        let mut builder = crate::builder::CodeBuilder::typescript();
        let obj = JsObject::new().raw("amount", "z.coerce.number().min(0)");
        for fragment in obj.wrap("export const schema = z.object(", ");") {
            builder.apply_fragment(fragment);
        }
        assert_eq!(
            builder.build(),
            "export const schema = z.object({\n  amount: z.coerce.number().min(0),\n});\n"
        );
    }

    #[test]
    fn test_nested_object() {
        let obj = JsObject::new()
            .object("headers", JsObject::new().string("Accept", "application/json"))
            .render();
        assert!(obj.contains("headers: {"));
        assert!(obj.contains("Accept: \"application/json\","));
    }
}
