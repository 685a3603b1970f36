//! Kotlin type references and conversion from Java types.

use std::{collections::BTreeSet, fmt};

use crate::{DomError, JavaType, Result, types::parse::split_type_arguments};

/// Packages Kotlin makes visible without an import.
pub const AUTOMATIC_KOTLIN_PACKAGES: &[&str] = &["kotlin", "kotlin.collections"];

/// A reference to a Kotlin type, possibly generic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KotlinType {
    package: String,
    short_name: String,
    explicitly_imported: bool,
    type_arguments: Vec<KotlinType>,
}

impl KotlinType {
    /// Parse a Kotlin type specification such as `kotlin.collections.List<kotlin.String>`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let Some(open) = spec.find('<') else {
            return Ok(Self::simple(spec));
        };

        let mut ty = Self::simple(&spec[..open]);
        let close = spec
            .rfind('>')
            .filter(|&close| close > open)
            .ok_or_else(|| DomError::unclosed(spec))?;
        for argument in split_type_arguments(spec, &spec[open + 1..close])? {
            ty.type_arguments.push(Self::parse(&argument)?);
        }
        Ok(ty)
    }

    fn simple(spec: &str) -> Self {
        let name = spec.trim();
        let (package, short_name) = name.rsplit_once('.').unwrap_or(("", name));
        Self {
            package: package.to_string(),
            short_name: short_name.to_string(),
            explicitly_imported: !package.is_empty()
                && !AUTOMATIC_KOTLIN_PACKAGES.contains(&package),
            type_arguments: Vec::new(),
        }
    }

    /// Convert a Java type to its Kotlin counterpart.
    ///
    /// Primitives, `String`, the primitive wrappers and arrays of those map to
    /// the Kotlin built-ins. Any other type keeps its name. Type arguments are
    /// converted recursively.
    pub fn from_java(java: &JavaType) -> Self {
        let name = java.base_qualified_name();
        let mut ty = match kotlin_equivalent(name) {
            Some(mapped) => Self::parse(&mapped).unwrap_or_else(|_| Self::simple(name)),
            None => Self::simple(name),
        };
        ty.type_arguments
            .extend(java.type_arguments().iter().map(Self::from_java));
        ty
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn short_name_without_type_arguments(&self) -> &str {
        &self.short_name
    }

    /// Short name including short type arguments, e.g. `List<String>`.
    pub fn short_name(&self) -> String {
        if self.type_arguments.is_empty() {
            return self.short_name.clone();
        }
        let arguments: Vec<String> = self.type_arguments.iter().map(Self::short_name).collect();
        format!("{}<{}>", self.short_name, arguments.join(", "))
    }

    pub fn type_arguments(&self) -> &[KotlinType] {
        &self.type_arguments
    }

    pub fn add_type_argument(&mut self, argument: KotlinType) -> &mut Self {
        self.type_arguments.push(argument);
        self
    }

    pub fn is_explicitly_imported(&self) -> bool {
        self.explicitly_imported
    }

    /// Import lines for this type and its type arguments.
    pub fn import_list(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        if self.explicitly_imported {
            imports.insert(format!("{}.{}", self.package, self.short_name));
        }
        for argument in &self.type_arguments {
            imports.extend(argument.import_list());
        }
        imports
    }
}

impl fmt::Display for KotlinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.short_name)?;
        if let Some((first, rest)) = self.type_arguments.split_first() {
            write!(f, "<{first}")?;
            for argument in rest {
                write!(f, ", {argument}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

fn kotlin_equivalent(java_name: &str) -> Option<String> {
    let (element, is_array) = match java_name.find('[') {
        Some(bracket) => (java_name[..bracket].trim(), true),
        None => (java_name, false),
    };
    let kotlin = match element {
        "java.lang.String" => "String",
        "byte" | "java.lang.Byte" => "Byte",
        "char" | "java.lang.Character" => "Char",
        "short" | "java.lang.Short" => "Short",
        "int" | "java.lang.Integer" => "Int",
        "long" | "java.lang.Long" => "Long",
        "float" | "java.lang.Float" => "Float",
        "double" | "java.lang.Double" => "Double",
        "boolean" | "java.lang.Boolean" => "Boolean",
        _ => return None,
    };
    let primitive = !element.contains('.');
    Some(match (is_array, primitive) {
        (false, _) => format!("kotlin.{kotlin}"),
        (true, true) => format!("kotlin.{kotlin}Array"),
        (true, false) => format!("kotlin.Array<kotlin.{kotlin}>"),
    })
}
