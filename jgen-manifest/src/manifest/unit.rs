//! `[[unit]]` tables and the members they declare.

use jgen_dom::{TypeKind, Visibility};
use serde::Deserialize;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
}

impl From<UnitKind> for TypeKind {
    fn from(kind: UnitKind) -> Self {
        match kind {
            UnitKind::Class => TypeKind::Class,
            UnitKind::Interface => TypeKind::Interface,
            UnitKind::Enum => TypeKind::Enum,
            UnitKind::Record => TypeKind::Record,
        }
    }
}

/// Access modifier as written in the manifest. `package` means no modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityConfig {
    Public,
    Protected,
    Private,
    Package,
}

impl From<VisibilityConfig> for Visibility {
    fn from(config: VisibilityConfig) -> Self {
        match config {
            VisibilityConfig::Public => Visibility::Public,
            VisibilityConfig::Protected => Visibility::Protected,
            VisibilityConfig::Private => Visibility::Private,
            VisibilityConfig::Package => Visibility::Default,
        }
    }
}

/// A class, interface, enum or record.
///
/// For a top-level unit `type` is the fully qualified name. Nested units
/// (`[[unit.nested]]`) give only their simple name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitConfig {
    #[serde(default)]
    pub kind: UnitKind,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub visibility: Option<VisibilityConfig>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParamConfig>,
    /// Superclass of a class
    #[serde(default)]
    pub extends: Option<String>,
    /// Implemented interfaces, or extended interfaces of an interface
    #[serde(default)]
    pub implements: Vec<String>,
    /// Types imported in addition to the referenced ones
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub static_imports: Vec<String>,
    #[serde(default)]
    pub file_comments: Vec<String>,
    /// Enum constants, written verbatim
    #[serde(default)]
    pub constants: Vec<String>,
    /// Record components
    #[serde(default)]
    pub components: Vec<ParamConfig>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodConfig>,
    #[serde(default, rename = "init_block")]
    pub init_blocks: Vec<InitBlockConfig>,
    #[serde(default)]
    pub nested: Vec<UnitConfig>,
    /// Generate getters and setters for instance fields
    #[serde(default)]
    pub accessors: bool,
    /// Import every type the declaration references
    #[serde(default = "default_true")]
    pub auto_import: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub visibility: Option<VisibilityConfig>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "transient")]
    pub is_transient: bool,
    #[serde(default, rename = "volatile")]
    pub is_volatile: bool,
    #[serde(default)]
    pub initializer: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Accept a reserved word as the field name
    #[serde(default)]
    pub allow_reserved: bool,
}

/// A method, or a constructor when `constructor = true`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MethodConfig {
    /// Method name; optional for constructors
    pub name: String,
    pub constructor: bool,
    /// Return type, `void` when absent
    pub returns: Option<String>,
    pub visibility: Option<VisibilityConfig>,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "synchronized")]
    pub is_synchronized: bool,
    #[serde(rename = "native")]
    pub is_native: bool,
    #[serde(rename = "default")]
    pub is_default: bool,
    pub type_parameters: Vec<TypeParamConfig>,
    pub params: Vec<ParamConfig>,
    pub throws: Vec<String>,
    pub body: Vec<String>,
    pub doc: Option<String>,
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeParamConfig {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitBlockConfig {
    #[serde(rename = "static")]
    pub is_static: bool,
    pub body: Vec<String>,
    pub doc: Option<String>,
}
