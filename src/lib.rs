//! Derive JSON-schema-ish descriptions of Go structs from their `json` tags.
//!
//! `source` turns a Go file into [`decl::TypeDeclaration`]s, [`builder::SchemaBuilder`]
//! walks them once in order, and `render` prints the transcript.
pub mod builder;
pub mod classify;
pub mod cli;
pub mod decl;
pub mod error;
pub mod path_de;
pub mod render;
pub mod schema;
pub mod source;
pub mod tag;

pub use builder::{Body, BuildOptions, Report, SchemaBuilder};
pub use error::{ClassificationError, Error};
pub use schema::{PropertySpec, RequiredNames, Schema};
