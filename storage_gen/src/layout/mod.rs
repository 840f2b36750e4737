//! Storage layout walking.
//!
//! The `types` section is wrapped in a [`registry::TypeRegistry`], every type
//! id is put in a [`classify::TypeCategory`], and [`walker::LayoutWalker`]
//! flattens variables and struct members into [`walker::LeafRecord`]s.
//! [`generator::generate`] drives the walk over both root sets.

pub mod classify;
pub mod error;
pub mod generator;
pub mod registry;
pub mod walker;

pub use classify::{classify, TypeCategory};
pub use error::LayoutError;
pub use generator::{generate, GeneratorOptions};
pub use registry::TypeRegistry;
pub use walker::{walk, Constant, LayoutWalker, LeafRecord, UnknownTypePolicy};
