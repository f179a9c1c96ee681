//! TypeScript function builder.

use crate::builder::{CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content, split into lines.
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };

        let params = self
            .params
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                format!("{}{}: {}", p.name, optional, p.ty)
            })
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params, ret
            ),
            None => format!("{}{}function {}({}) {{", export, async_kw, self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.signature(),
            body: self
                .body
                .iter()
                .map(|line| {
                    if line.is_empty() {
                        CodeFragment::Blank
                    } else {
                        CodeFragment::Line(line.clone())
                    }
                })
                .collect(),
            close: Some("}".to_string()),
        });
        fragments
    }
}
