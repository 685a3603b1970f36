//! Manifest types and parsing for jgen.toml files.

mod output;
mod parse;
mod unit;

use jgen_dom::CompilationUnit;
pub use output::{IndentConfig, IndentKeyword, OutputConfig, OverwriteConfig};
pub use parse::parse_manifest;
use serde::Deserialize;
pub use unit::{
    FieldConfig, InitBlockConfig, MethodConfig, ParamConfig, TypeParamConfig, UnitConfig,
    UnitKind, VisibilityConfig,
};

/// Root manifest for jgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how generated files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Top-level type declarations, one compilation unit each
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitConfig>,

    /// Units lowered to the source model during validation
    #[serde(skip)]
    pub(crate) lowered: Vec<CompilationUnit>,
}

impl Manifest {
    /// Compilation units described by this manifest, in declaration order.
    pub fn compilation_units(&self) -> &[CompilationUnit] {
        &self.lowered
    }

    /// Find a unit by the fully qualified name of its declared type.
    pub fn compilation_unit(&self, qualified_name: &str) -> Option<&CompilationUnit> {
        self.lowered
            .iter()
            .find(|unit| unit.ty().base_qualified_name() == qualified_name)
    }
}
