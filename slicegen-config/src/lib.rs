//! Entity configuration loading and validation for slicegen.
//!
//! An entity is described by one JSON file:
//!
//! ```json
//! {
//!   "name": "Widget",
//!   "fields": [
//!     { "name": "widget_description", "type": "string", "required": true }
//!   ]
//! }
//! ```
//!
//! The entity name is the sole seed for every derived name in the generated
//! artifacts; the accessors on [`EntityConfig`] are the single place those
//! derivations live.

mod discover;
mod entity;
mod error;
mod validate;

pub use discover::available_configs;
pub use entity::{ConfigFile, EntityConfig, Field};
pub use error::{Error, Result, SourceContext};
pub use validate::RESERVED_FIELDS;
