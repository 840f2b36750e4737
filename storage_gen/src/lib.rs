//! Storage Layout Constants
//!
//! Turns a compiler-emitted storage layout into named constants giving the
//! slot, in-slot byte offset and byte size of every storage variable and
//! every struct member, so that test and verification harnesses can refer to
//! storage locations by name.

pub mod cmds;
pub mod codegen;
pub mod layout;
