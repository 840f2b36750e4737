//! Storage Layout Type Definitions
//!
//! This crate contains the data model of a compiler-emitted storage layout
//! document. It provides pure data structures for the `storage` and `types`
//! sections without any file I/O or code generation logic.

pub mod number;
pub mod types;

// Re-export commonly used types at the crate root
pub use number::*;
pub use types::*;
