use std::path::{Path, PathBuf};

use eyre::Result;

/// Header comment stamped on every always-overwritten artifact.
pub const GENERATED_HEADER: &str = "// Code generated by slicegen. DO NOT EDIT.";

/// Trait for types that represent one generated artifact file.
pub trait GeneratedFile {
    /// File path relative to the output directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file to disk according to its rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// Rules that determine how a file is written.
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Regenerated artifacts: rerunning the generator clobbers prior output.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Stubs the user is expected to edit: written only when absent.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}

/// How to handle an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code).
    Always,
    /// Only create if the file doesn't exist (stubs).
    IfMissing,
}

/// A plain file value with a fixed path and content.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is always overwritten.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Create a file that is only written when missing.
    pub fn create_once(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::create_once(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules.
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
