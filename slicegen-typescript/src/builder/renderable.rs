//! The fragment representation rendered by [`CodeBuilder`].

use super::CodeBuilder;

/// A piece of code, independent of indentation.
#[derive(Debug, Clone)]
pub enum CodeFragment {
    /// One line at the current indentation level.
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text emitted without indentation or trailing newline.
    Raw(String),
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments emitted in order at the current level.
    Sequence(Vec<CodeFragment>),
    /// A single-line JSDoc comment.
    JsDoc(String),
}

/// Types that can be rendered into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render with TypeScript indentation.
    fn render(&self) -> String
    where
        Self: Sized,
    {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}
