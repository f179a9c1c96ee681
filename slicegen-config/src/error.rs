use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to keep results small).
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw JSON content and filename so error factory functions can
/// attach a [`NamedSource`] and locate spans without re-reading the file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a quoted string token in the source.
    pub fn find_span(&self, token: &str) -> Option<SourceSpan> {
        self.find_span_after(token, 0)
    }

    /// Find the span of a quoted string token at or after `start`.
    pub fn find_span_after(&self, token: &str, start: usize) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", token);
        self.src[start..]
            .find(&quoted)
            .map(|pos| SourceSpan::from((start + pos, quoted.len())))
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0usize)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a reserved field error.
    pub fn reserved_field_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::ReservedField {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate field error, labeling both declarations.
    pub fn duplicate_field_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        let first_span = self.find_span(&name);
        let second_span = first_span.and_then(|first| {
            self.find_span_after(&name, first.offset() + first.len())
        });
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span,
            second_span,
            name,
        })
    }

    /// Create an unknown sort field error.
    pub fn unknown_sort_field_error(&self, sort_field: impl Into<String>) -> Box<Error> {
        let sort_field = sort_field.into();
        Box::new(Error::UnknownSortField {
            src: self.named_source(),
            span: self.find_span(&sort_field),
            sort_field,
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    let mut offset = 0;
    for (i, l) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1));
        }
        offset += l.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(slicegen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration '{name}' not found")]
    #[diagnostic(code(slicegen::config_not_found), help("{available}"))]
    NotFound {
        name: String,
        path: PathBuf,
        /// Remediation line listing the config stems actually present.
        available: String,
    },

    #[error("failed to parse entity configuration")]
    #[diagnostic(code(slicegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{name}' is a reserved field name")]
    #[diagnostic(
        code(slicegen::reserved_field),
        help(
            "'{name}' is assigned by the server and always present on the generated record; remove it from the field list"
        )
    )]
    ReservedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved field declared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(code(slicegen::invalid_identifier), help("{reason}"))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(slicegen::duplicate_field),
        help("each field may be declared once; remove or rename the second declaration")
    )]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("unknown sort field '{sort_field}'")]
    #[diagnostic(
        code(slicegen::unknown_sort_field),
        help("sort_field must name one of the declared fields")
    )]
    UnknownSortField {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a declared field")]
        span: Option<SourceSpan>,
        sort_field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"name\": x\n}";
        // line 2, column 11 points at the 'x'
        assert_eq!(offset_of(src, 2, 11), Some(12));
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 99, 1), None);
    }

    #[test]
    fn test_find_span_after_skips_first_occurrence() {
        let ctx = SourceContext::new(
            r#"{"fields": ["amount", "amount"]}"#,
            "widget.json",
        );
        let first = ctx.find_span("amount").unwrap();
        let second = ctx
            .find_span_after("amount", first.offset() + first.len())
            .unwrap();
        assert!(second.offset() > first.offset());
    }
}
