//! Rendering of declarations and members to Java source text.
//!
//! Every node implements [`JavaRender`] and writes itself into a
//! [`CodeBuilder`] at the builder's current indentation. Type references are
//! resolved through [`calculate_type_name`] against the enclosing unit.

mod body;
mod decl;
mod member;

pub use body::push_body;

use crate::{
    CompilationUnit, JavaType, TypeParamSpec,
    builder::{CodeBuilder, Indent},
    imports::calculate_type_name,
};

/// Where a node is being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Unit used to decide between short and qualified names.
    pub unit: Option<&'a CompilationUnit>,
    /// Members of an interface omit `public` and `abstract`.
    pub in_interface: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(unit: Option<&'a CompilationUnit>) -> Self {
        Self {
            unit,
            in_interface: false,
        }
    }

    pub(crate) fn in_interface(self, in_interface: bool) -> Self {
        Self {
            in_interface,
            ..self
        }
    }

    /// Resolve a type reference for this context.
    pub fn type_name(&self, ty: &JavaType) -> String {
        calculate_type_name(self.unit, ty)
    }

    fn type_names<'t>(&self, types: impl IntoIterator<Item = &'t JavaType>) -> Vec<String> {
        types.into_iter().map(|ty| self.type_name(ty)).collect()
    }
}

/// Trait for nodes that render to Java source.
pub trait JavaRender {
    /// Write this node into `out` at its current indentation.
    fn render_into(&self, out: &mut CodeBuilder, ctx: &RenderContext<'_>);

    /// Render this node on its own with the given indentation.
    fn render_with(&self, ctx: &RenderContext<'_>, indent: Indent) -> String {
        let mut out = CodeBuilder::new(indent);
        self.render_into(&mut out, ctx);
        out.build()
    }
}

/// `<T, U extends A & B>`, or an empty string.
fn type_parameters_clause(params: &[TypeParamSpec], ctx: &RenderContext<'_>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = params
        .iter()
        .map(|param| {
            if param.bounds.is_empty() {
                param.name.clone()
            } else {
                format!("{} extends {}", param.name, ctx.type_names(&param.bounds).join(" & "))
            }
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}
