//! Structured TypeScript file composition.
//!
//! Organizes a generated file into header, imports, and body sections,
//! rendered in order with blank lines between them.

use crate::ast::Import;
use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .import(Import::new("zustand").named("create"))
///     .add(RawCode::new("export const x = 1;"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    pragmas: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading header comment.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a file-level pragma emitted before imports (e.g. `"use client";`).
    pub fn pragma(mut self, pragma: impl Into<String>) -> Self {
        self.pragmas.push(pragma.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a body element from pre-built fragments.
    pub fn add_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.push(fragments);
        self
    }

    /// Render the file with TypeScript indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);

        if let Some(header) = &self.header {
            builder.push_line(header);
            builder.push_blank();
        }

        if !self.pragmas.is_empty() {
            for pragma in &self.pragmas {
                builder.push_line(pragma);
            }
            builder.push_blank();
        }

        if !self.imports.is_empty() {
            for import in &self.imports {
                builder.emit(import);
            }
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.pragmas.is_empty()
            && self.imports.is_empty()
            && self.body.is_empty()
    }
}

/// A raw code fragment for CodeFile bodies.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
