//! Declarative `jgen.toml` model descriptions.
//!
//! A manifest lists compilation units as TOML tables. Parsing validates
//! every name and type specification, reports all problems as `miette`
//! diagnostics and lowers the units to [`jgen_dom::CompilationUnit`]s
//! that can be rendered or written below the configured source root.
//!
//! ```
//! use jgen_manifest::Manifest;
//!
//! let manifest: Manifest = r#"
//! [[unit]]
//! type = "com.foo.Point"
//! kind = "record"
//! components = [
//!     { name = "x", type = "int" },
//!     { name = "y", type = "int" },
//! ]
//! "#
//! .parse()
//! .unwrap();
//!
//! let unit = manifest.compilation_unit("com.foo.Point").unwrap();
//! assert_eq!(
//!     unit.render(),
//!     "package com.foo;\n\npublic record Point(int x, int y) {\n}\n"
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod generate;
mod lower;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use generate::{JavaSource, WrittenFile};
pub use manifest::*;
pub use validate::ParseContext;
