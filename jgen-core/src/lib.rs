//! Core utilities and types for the jgen Java source generator.
//!
//! This crate provides file output primitives and the identifier naming
//! helpers shared by the rest of the jgen workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming utilities
pub use utils::{getter_method_name, package_to_path, setter_method_name};
