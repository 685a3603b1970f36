//! Top-level compilation units.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    JavaType, TypeSpec,
    builder::{CodeBuilder, Indent},
    render::{JavaRender, RenderContext},
};

/// A top-level declaration together with its file header.
///
/// Owns the file comment lines, the imported types and the static imports.
/// Imported types are keyed by their import line, so two references that
/// differ only in type arguments share one import.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    decl: TypeSpec,
    file_comment_lines: Vec<String>,
    imported_types: BTreeMap<String, JavaType>,
    static_imports: BTreeSet<String>,
}

impl CompilationUnit {
    pub fn new(decl: TypeSpec) -> Self {
        Self {
            decl,
            file_comment_lines: Vec::new(),
            imported_types: BTreeMap::new(),
            static_imports: BTreeSet::new(),
        }
    }

    pub fn decl(&self) -> &TypeSpec {
        &self.decl
    }

    pub fn decl_mut(&mut self) -> &mut TypeSpec {
        &mut self.decl
    }

    /// The type declared by this unit.
    pub fn ty(&self) -> &JavaType {
        &self.decl.ty
    }

    pub fn file_comment_lines(&self) -> &[String] {
        &self.file_comment_lines
    }

    pub fn add_file_comment_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.file_comment_lines.push(line.into());
        self
    }

    pub fn add_static_import(&mut self, import: impl Into<String>) -> &mut Self {
        self.static_imports.insert(import.into());
        self
    }

    pub fn static_imports(&self) -> &BTreeSet<String> {
        &self.static_imports
    }

    /// Imported types, ordered by import line.
    pub fn imported_types(&self) -> impl Iterator<Item = &JavaType> {
        self.imported_types.values()
    }

    /// Register `ty` and its type arguments as imports.
    ///
    /// A type is only imported when it is explicitly importable, lives in a
    /// different package than this unit, and its simple name clashes with
    /// none of this unit's own name, its nested declarations and the types
    /// imported earlier.
    /// Returns `true` if any import was added.
    pub fn add_imported_type(&mut self, ty: &JavaType) -> bool {
        let mut added = false;
        for argument in ty.type_arguments() {
            added |= self.add_imported_type(argument);
        }
        self.add_base_import(ty) || added
    }

    /// Register every type in `types` as an import.
    pub fn add_imported_types<'a>(&mut self, types: impl IntoIterator<Item = &'a JavaType>) {
        for ty in types {
            self.add_imported_type(ty);
        }
    }

    /// Register every type the declaration refers to.
    pub fn import_referenced_types(&mut self) {
        let referenced: Vec<JavaType> = self
            .decl
            .referenced_types()
            .into_iter()
            .cloned()
            .collect();
        self.add_imported_types(&referenced);
    }

    /// True when the import line of `ty` is registered on this unit.
    pub fn is_imported(&self, ty: &JavaType) -> bool {
        ty.import_line()
            .is_some_and(|line| self.imported_types.contains_key(&line))
    }

    /// Sorted `import` statements, without the static ones.
    pub fn import_lines(&self) -> Vec<String> {
        self.imported_types
            .keys()
            .map(|line| format!("import {line};"))
            .collect()
    }

    /// Render the unit with 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    /// Render the unit with the given indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        tracing::debug!(
            unit = %self.ty(),
            imports = self.imported_types.len(),
            static_imports = self.static_imports.len(),
            "rendering compilation unit"
        );

        let mut out = CodeBuilder::new(indent);
        out.push_lines(&self.file_comment_lines);

        let package = self.ty().package_name();
        if !package.is_empty() {
            out.push_line(&format!("package {package};")).push_blank();
        }

        if !self.static_imports.is_empty() {
            for import in &self.static_imports {
                out.push_line(&format!("import static {import};"));
            }
            out.push_blank();
        }

        let imports = self.import_lines();
        if !imports.is_empty() {
            out.push_lines(&imports).push_blank();
        }

        self.decl.render_into(&mut out, &RenderContext::new(Some(self)));
        out.build()
    }

    fn add_base_import(&mut self, ty: &JavaType) -> bool {
        let Some(line) = ty.import_line() else {
            tracing::trace!(ty = %ty, "not explicitly importable");
            return false;
        };
        if self.imported_types.contains_key(&line) {
            return false;
        }
        if ty.package_name() == self.ty().package_name() {
            tracing::trace!(ty = %ty, "same package as the unit");
            return false;
        }

        let name = simple_name(&line);
        if name == simple_name_of(self.ty()) {
            tracing::trace!(ty = %ty, "clashes with the unit's own name");
            return false;
        }
        if declares_nested(&self.decl, name) {
            tracing::trace!(ty = %ty, "shadowed by a nested declaration");
            return false;
        }
        if let Some(existing) = self.imported_types.keys().find(|l| simple_name(l) == name) {
            tracing::trace!(ty = %ty, existing = %existing, "clashes with an earlier import");
            return false;
        }

        let mut imported = ty.clone();
        imported.clear_type_arguments();
        self.imported_types.insert(line, imported);
        true
    }
}

fn simple_name(import_line: &str) -> &str {
    import_line
        .rsplit_once('.')
        .map_or(import_line, |(_, name)| name)
}

fn simple_name_of(ty: &JavaType) -> &str {
    ty.base_short_name()
        .split('.')
        .next()
        .unwrap_or_default()
}

/// True when `decl` declares a nested type named `name` at any depth.
fn declares_nested(decl: &TypeSpec, name: &str) -> bool {
    decl.nested.iter().any(|nested| {
        simple_name(nested.ty.base_short_name()) == name || declares_nested(nested, name)
    })
}
