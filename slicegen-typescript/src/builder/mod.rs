//! Code generation building blocks.
//!
//! - [`CodeBuilder`]: indentation-aware emitter
//! - [`CodeFragment`]: intermediate representation for code pieces
//! - [`Renderable`]: trait for types that can be converted to fragments
//! - [`Indent`]: indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
