//! Minimal TypeScript AST builders for the generated artifacts.

mod fns;
mod imports;
mod interface;
mod objects;

pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::{JsObject, Property, PropertyValue};
