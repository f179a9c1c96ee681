//! TypeScript artifact generators for slicegen.
//!
//! Given a validated [`slicegen_config::EntityConfig`], the [`Generator`]
//! renders a complete CRUD vertical slice for a dashboard application:
//!
//! - `src/types/<entity>.ts`: record shape, DTOs, response envelopes
//! - `src/stores/<entity>Store.ts`: zustand state container
//! - `src/actions/<entity>Actions.ts`: REST action functions
//! - `src/hooks/use<Entity>.ts` + `use<Entity>Sync.ts`: data hooks
//! - `src/validation/<entity>Schema.ts`: zod schema
//! - `src/components/<Entity>/`: form and list components
//! - `src/app/dashboard/<entities>/`: list/create/detail/edit pages
//! - `src/lib/`: create-once support stubs (request helper, auth hook)
//!
//! Consistency across artifacts comes from deriving every name through the
//! same transforms ([`TS_NAMING`] and the `slicegen_core` casing utilities);
//! the generators never read each other's output.
//!
//! # Usage
//!
//! ```ignore
//! use slicegen_config::ConfigFile;
//! use slicegen_typescript::Generator;
//!
//! let config = ConfigFile::open("crud-config/widget.json")?;
//! let generator = Generator::new(config.entity());
//! let result = generator.generate(Path::new("."))?;
//! ```

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod builder;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use generator::{GenerateResult, Generator, PreviewFile, Step, StepReport};
pub use naming::{NamingConvention, TS_NAMING};
pub use type_mapper::TypeScriptTypeMapper;
