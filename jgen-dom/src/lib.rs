//! In-memory model of Java source files and its renderer.
//!
//! - [`JavaType`] - parsed type references with generics, arrays and wildcards
//! - [`FieldSpec`], [`MethodSpec`], [`ParamSpec`], [`TypeParamSpec`],
//!   [`InitBlockSpec`] - declared elements
//! - [`TypeSpec`] - classes, interfaces, enums and records
//! - [`CompilationUnit`] - a top-level declaration with package and imports
//! - [`calculate_type_name`] - short or qualified name at a reference site
//! - [`KotlinType`] - Kotlin type references converted from Java types
//!
//! # Example
//!
//! ```
//! use jgen_dom::{CompilationUnit, FieldSpec, JavaType, TypeSpec};
//!
//! let decl = TypeSpec::class(JavaType::parse("com.foo.User")?)
//!     .field(FieldSpec::new("created", JavaType::date()));
//! let mut unit = CompilationUnit::new(decl);
//! unit.import_referenced_types();
//!
//! assert_eq!(
//!     unit.render(),
//!     "package com.foo;\n\nimport java.util.Date;\n\npublic class User {\n    private Date created;\n}\n"
//! );
//! # Ok::<(), jgen_dom::DomError>(())
//! ```

pub mod builder;
mod decl;
mod element;
mod error;
pub mod identifier;
mod imports;
mod kotlin;
pub mod render;
pub mod types;
mod unit;

pub use decl::{TypeKind, TypeSpec};
pub use element::{FieldSpec, InitBlockSpec, MethodSpec, ParamSpec, TypeParamSpec, Visibility};
pub use error::{DomError, Result};
pub use imports::calculate_type_name;
pub use kotlin::KotlinType;
pub use types::{JavaType, Primitive, Wildcard};
pub use unit::CompilationUnit;
