//! Storage Layout File Loading
//!
//! This crate provides functionality for reading a storage layout document
//! from disk. The layout may be stored bare, nested in a build artifact under
//! `storageLayout`, or inside a solc standard-json output keyed by source file
//! and contract name.

pub mod error;
pub mod file;

// Re-export commonly used types at the crate root
pub use error::LoadError;
pub use file::{extract_layout, load_layout, parse_layout, LayoutFormat, LoadedLayout};

// Re-export storage_types for convenience
pub use storage_types;
