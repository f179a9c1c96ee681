//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import a named export as a type (`{ type Foo }`).
    pub fn named_type(mut self, name: impl Into<String>) -> Self {
        self.named.push(format!("type {}", name.into()));
        self
    }

    /// Make the whole import type-only (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn format(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from \"{}\";",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("zustand").named("create").render();
        assert_eq!(i, "import { create } from \"zustand\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("../types/widget.ts")
            .named("WidgetData")
            .type_only()
            .render();
        assert_eq!(
            i,
            "import type { WidgetData } from \"../types/widget.ts\";\n"
        );
    }

    #[test]
    fn test_mixed_value_and_type_import() {
        let i = Import::new("react")
            .named("useState")
            .named_type("FormEvent")
            .render();
        assert_eq!(
            i,
            "import { useState, type FormEvent } from \"react\";\n"
        );
    }

    #[test]
    fn test_default_import() {
        let i = Import::new("next/link").default("Link").render();
        assert_eq!(i, "import Link from \"next/link\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./globals.css").render();
        assert_eq!(i, "import \"./globals.css\";\n");
    }
}
