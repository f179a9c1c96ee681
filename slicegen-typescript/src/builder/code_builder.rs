//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware code emitter.
///
/// # Example
///
/// ```
/// use slicegen_typescript::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export function run() {")
///     .push_indent()
///     .push_line("console.log(\"hello\");")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(
///     builder.build(),
///     "export function run() {\n  console.log(\"hello\");\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line JSDoc comment.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a [`Renderable`] node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Finish and return the built code.
    pub fn build(self) -> String {
        self.buffer
    }
}
