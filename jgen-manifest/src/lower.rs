//! Lowering of validated manifest tables into the source model.
//!
//! Every problem found along the way is collected so a single run reports
//! all of them.

use std::collections::HashSet;

use jgen_core::{getter_method_name, setter_method_name};
use jgen_dom::{
    CompilationUnit, FieldSpec, InitBlockSpec, JavaType, MethodSpec, ParamSpec, Primitive,
    TypeKind, TypeParamSpec, TypeSpec, Visibility,
};

use crate::{
    Error, ParseContext, Result,
    manifest::{
        FieldConfig, InitBlockConfig, Manifest, MethodConfig, ParamConfig, TypeParamConfig,
        UnitConfig, VisibilityConfig,
    },
};

/// Lower every unit of `manifest`, failing with all collected problems.
pub(crate) fn lower_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<Vec<CompilationUnit>> {
    let mut lowerer = Lowerer {
        file_comments: &manifest.output.file_comments,
        errors: Vec::new(),
    };
    let mut seen = HashSet::new();
    let mut units = Vec::new();

    for config in &manifest.units {
        if !seen.insert(config.ty.trim()) {
            lowerer.errors.push(ctx.error(
                format!("type '{}' is declared by more than one unit", config.ty),
                &config.ty,
            ));
            continue;
        }
        if let Some(unit) = lowerer.unit(config, ctx) {
            units.push(unit);
        }
    }

    match Error::combine(lowerer.errors) {
        Some(err) => Err(err),
        None => Ok(units),
    }
}

struct Lowerer<'m> {
    /// Comment lines shared by every generated file
    file_comments: &'m [String],
    errors: Vec<Box<Error>>,
}

impl Lowerer<'_> {
    fn check<T>(&mut self, result: Result<T>) -> Option<T> {
        result.map_err(|err| self.errors.push(err)).ok()
    }

    fn unit<'a>(&mut self, config: &'a UnitConfig, ctx: &ParseContext<'a>) -> Option<CompilationUnit> {
        let ty = self.check(ctx.parse_type(&config.ty, "unit type"))?;
        if ty.is_primitive() || ty.is_array() || ty.is_wildcard() || !ty.type_arguments().is_empty() {
            self.errors.push(ctx.error(
                format!(
                    "unit type '{}' must be a plain class name; declare type parameters under 'type_parameters'",
                    config.ty
                ),
                &config.ty,
            ));
            return None;
        }
        self.check(ctx.validate_name(ty.base_short_name(), "unit", false))?;

        let unit_ctx = ctx.push(&config.ty);
        let decl = self.decl(config, ty, &unit_ctx);
        let mut unit = CompilationUnit::new(decl);

        for line in self.file_comments.iter().chain(&config.file_comments) {
            unit.add_file_comment_line(line);
        }
        for import in &config.static_imports {
            unit.add_static_import(import.trim());
        }
        for spec in &config.imports {
            if let Some(ty) = self.check(unit_ctx.parse_type(spec, "import")) {
                unit.add_imported_type(&ty);
            }
        }
        if config.auto_import {
            unit.import_referenced_types();
        }

        Some(unit)
    }

    fn decl<'a>(&mut self, config: &'a UnitConfig, ty: JavaType, ctx: &ParseContext<'a>) -> TypeSpec {
        let kind = TypeKind::from(config.kind);
        let simple_name = declared_name(&ty).to_string();
        let mut spec = TypeSpec::new(kind, ty.clone());

        if let Some(visibility) = config.visibility {
            spec = spec.visibility(visibility.into());
        }
        if config.is_static {
            spec = spec.static_();
        }
        if config.is_final {
            spec = spec.final_();
        }
        if config.is_abstract {
            spec = spec.abstract_();
        }
        if let Some(doc) = &config.doc {
            spec = spec.doc(doc);
        }
        for annotation in &config.annotations {
            spec = spec.annotation(annotation.as_str());
        }
        for param in &config.type_parameters {
            if let Some(param) = self.type_param(param, ctx) {
                spec = spec.type_parameter(param);
            }
        }

        if let Some(extends) = &config.extends {
            if kind == TypeKind::Class {
                if let Some(super_class) = self.check(ctx.parse_type(extends, "superclass")) {
                    spec = spec.extends(super_class);
                }
            } else {
                self.errors.push(ctx.error(
                    format!(
                        "only a class takes 'extends'; list the supertypes of {} '{}' under 'implements'",
                        kind.keyword(),
                        simple_name
                    ),
                    extends,
                ));
            }
        }
        for interface in &config.implements {
            if let Some(interface) = self.check(ctx.parse_type(interface, "interface")) {
                spec = spec.implements(interface);
            }
        }

        if !config.constants.is_empty() && kind != TypeKind::Enum {
            self.errors.push(ctx.error(
                format!("'{simple_name}' declares constants but is not an enum"),
                &config.ty,
            ));
        } else {
            for constant in &config.constants {
                let name = constant.split('(').next().unwrap_or_default().trim();
                if self.check(ctx.validate_name(name, "enum constant", false)).is_some() {
                    spec = spec.constant(constant.trim());
                }
            }
        }

        if !config.components.is_empty() && kind != TypeKind::Record {
            self.errors.push(ctx.error(
                format!("'{simple_name}' declares components but is not a record"),
                &config.ty,
            ));
        } else {
            for component in &config.components {
                if let Some(component) = self.param(component, "record component", ctx) {
                    spec = spec.component(component);
                }
            }
        }

        let mut field_names = HashSet::new();
        for field in &config.fields {
            if !field_names.insert(field.name.as_str()) {
                self.errors.push(ctx.error(
                    format!("field '{}' is declared twice in '{}'", field.name, simple_name),
                    &field.name,
                ));
                continue;
            }
            if let Some(field) = self.field(field, kind, ctx) {
                spec = spec.field(field);
            }
        }

        if !config.init_blocks.is_empty() && kind == TypeKind::Interface {
            self.errors.push(ctx.error(
                format!("interface '{simple_name}' cannot have initializer blocks"),
                &config.ty,
            ));
        } else {
            for block in &config.init_blocks {
                spec = spec.init_block(init_block(block));
            }
        }

        for method in &config.methods {
            if let Some(method) = self.method(method, kind, &simple_name, ctx) {
                spec = spec.method(method);
            }
        }

        if config.accessors {
            if matches!(kind, TypeKind::Class | TypeKind::Enum) {
                add_accessors(&mut spec);
            } else {
                self.errors.push(ctx.error(
                    format!(
                        "accessors are only generated for classes and enums, '{}' is {} {}",
                        simple_name,
                        article(kind),
                        kind.keyword()
                    ),
                    &config.ty,
                ));
            }
        }

        let mut nested_names = HashSet::new();
        for nested in &config.nested {
            if let Some(nested) = self.nested(nested, &ty, &mut nested_names, ctx) {
                spec = spec.nested_type(nested);
            }
        }

        spec
    }

    fn nested<'a>(
        &mut self,
        config: &'a UnitConfig,
        outer: &JavaType,
        names: &mut HashSet<&'a str>,
        ctx: &ParseContext<'a>,
    ) -> Option<TypeSpec> {
        let name = config.ty.trim();
        self.check(ctx.validate_name(name, "nested type", false))?;

        if !names.insert(name) {
            self.errors.push(ctx.error(
                format!("nested type '{name}' is declared twice"),
                name,
            ));
            return None;
        }
        if !config.imports.is_empty()
            || !config.static_imports.is_empty()
            || !config.file_comments.is_empty()
        {
            self.errors.push(ctx.error(
                format!("nested type '{name}' cannot declare imports or file comments; move them to the top-level unit"),
                name,
            ));
        }

        let ty = JavaType::nested(outer, name);
        Some(self.decl(config, ty, &ctx.push(name)))
    }

    fn type_param<'a>(&mut self, config: &'a TypeParamConfig, ctx: &ParseContext<'a>) -> Option<TypeParamSpec> {
        self.check(ctx.validate_name(&config.name, "type parameter", false))?;
        let mut param = TypeParamSpec::new(config.name.as_str());
        for bound in &config.bounds {
            let bound = self.check(ctx.parse_type(bound, &format!("bound of '{}'", config.name)))?;
            param = param.bound(bound);
        }
        Some(param)
    }

    fn param<'a>(&mut self, config: &'a ParamConfig, kind: &str, ctx: &ParseContext<'a>) -> Option<ParamSpec> {
        self.check(ctx.validate_name(&config.name, kind, false))?;
        let ty = self.check(ctx.parse_type(&config.ty, &format!("{} '{}'", kind, config.name)))?;
        let mut param = ParamSpec::new(config.name.as_str(), ty);
        if config.varargs {
            param = param.varargs();
        }
        for annotation in &config.annotations {
            param = param.annotation(annotation.as_str());
        }
        Some(param)
    }

    fn field<'a>(
        &mut self,
        config: &'a FieldConfig,
        kind: TypeKind,
        ctx: &ParseContext<'a>,
    ) -> Option<FieldSpec> {
        self.check(ctx.validate_name(&config.name, "field", config.allow_reserved))?;
        let ty = self.check(ctx.parse_type(&config.ty, &format!("field '{}'", config.name)))?;

        // Interface fields are implicitly public.
        let visibility = match (kind, config.visibility) {
            (TypeKind::Interface, None) => Visibility::Default,
            (TypeKind::Interface, Some(VisibilityConfig::Private | VisibilityConfig::Protected)) => {
                self.errors.push(ctx.error(
                    format!("interface field '{}' cannot be private or protected", config.name),
                    &config.name,
                ));
                return None;
            }
            (_, Some(visibility)) => visibility.into(),
            (_, None) => Visibility::Private,
        };

        let mut field = FieldSpec::new(config.name.as_str(), ty).visibility(visibility);
        if config.is_static {
            field = field.static_();
        }
        if config.is_final {
            field = field.final_();
        }
        if config.is_transient {
            field = field.transient();
        }
        if config.is_volatile {
            field = field.volatile();
        }
        if let Some(initializer) = &config.initializer {
            field = field.initializer(initializer.as_str());
        }
        if let Some(doc) = &config.doc {
            field = field.doc(doc);
        }
        for annotation in &config.annotations {
            field = field.annotation(annotation.as_str());
        }
        Some(field)
    }

    fn method<'a>(
        &mut self,
        config: &'a MethodConfig,
        kind: TypeKind,
        declared_name: &str,
        ctx: &ParseContext<'a>,
    ) -> Option<MethodSpec> {
        let mut method = if config.constructor {
            if !config.name.is_empty() && config.name != declared_name {
                self.errors.push(ctx.error(
                    format!(
                        "constructor '{}' must be named after its type '{declared_name}'",
                        config.name
                    ),
                    &config.name,
                ));
                return None;
            }
            if config.returns.is_some() || kind == TypeKind::Interface {
                self.errors.push(ctx.error(
                    format!("invalid constructor for {} '{declared_name}'", kind.keyword()),
                    declared_name,
                ));
                return None;
            }
            MethodSpec::constructor(declared_name)
        } else {
            if config.name.is_empty() {
                self.errors.push(ctx.error(
                    format!("a method of '{declared_name}' has no name"),
                    declared_name,
                ));
                return None;
            }
            self.check(ctx.validate_name(&config.name, "method", false))?;
            let mut method = MethodSpec::new(config.name.as_str());
            if let Some(returns) = &config.returns {
                let context = format!("return type of '{}'", config.name);
                method = method.returns(self.check(ctx.parse_type(returns, &context))?);
            }
            method
        };

        if (config.is_abstract || config.is_native) && !config.body.is_empty() {
            let modifier = if config.is_native { "native" } else { "abstract" };
            self.errors.push(ctx.error(
                format!("{modifier} method '{}' cannot have a body", method.name),
                &config.name,
            ));
            return None;
        }

        if config.is_default && kind != TypeKind::Interface {
            self.errors.push(ctx.error(
                format!("'{}' is a default method outside an interface", method.name),
                &config.name,
            ));
            return None;
        }

        if let Some(visibility) = config.visibility {
            method = method.visibility(visibility.into());
        }
        if config.is_static {
            method = method.static_();
        }
        if config.is_final {
            method = method.final_();
        }
        if config.is_abstract {
            method = method.abstract_();
        }
        if config.is_synchronized {
            method = method.synchronized();
        }
        if config.is_native {
            method = method.native();
        }
        if config.is_default {
            method = method.default_();
        }
        for param in &config.type_parameters {
            method = method.type_parameter(self.type_param(param, ctx)?);
        }
        for param in &config.params {
            method = method.param(self.param(param, "parameter", ctx)?);
        }
        for exception in &config.throws {
            let context = format!("throws clause of '{}'", method.name);
            method = method.throws(self.check(ctx.parse_type(exception, &context))?);
        }
        if let Some(doc) = &config.doc {
            method = method.doc(doc);
        }
        for annotation in &config.annotations {
            method = method.annotation(annotation.as_str());
        }
        Some(method.lines(config.body.iter().map(String::as_str)))
    }
}

fn init_block(config: &InitBlockConfig) -> InitBlockSpec {
    let mut block = InitBlockSpec::new(config.is_static);
    if let Some(doc) = &config.doc {
        block = block.doc(doc);
    }
    for line in &config.body {
        block = block.line(line.as_str());
    }
    block
}

/// Add a getter for every instance field, and a setter unless it is final.
///
/// Methods already declared under the same name are left alone.
fn add_accessors(spec: &mut TypeSpec) {
    let mut accessors = Vec::new();

    for field in spec.fields.iter().filter(|field| !field.is_static) {
        let is_boolean = field.ty.primitive() == Some(Primitive::Boolean) && !field.ty.is_array();
        let getter = MethodSpec::new(getter_method_name(&field.name, is_boolean))
            .returns(field.ty.clone())
            .line(format!("return {};", field.name));
        accessors.push(getter);

        if !field.is_final {
            let setter = MethodSpec::new(setter_method_name(&field.name))
                .param(ParamSpec::new(field.name.as_str(), field.ty.clone()))
                .line(format!("this.{0} = {0};", field.name));
            accessors.push(setter);
        }
    }

    for accessor in accessors {
        if spec.methods.iter().all(|method| method.name != accessor.name) {
            spec.methods.push(accessor);
        }
    }
}

/// Simple name a declaration is written under, `Inner` for `Outer.Inner`.
fn declared_name(ty: &JavaType) -> &str {
    let short = ty.base_short_name();
    short.rsplit('.').next().unwrap_or(short)
}

fn article(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Interface | TypeKind::Enum => "an",
        TypeKind::Class | TypeKind::Record => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_name() {
        let outer = JavaType::parse("com.foo.Outer").unwrap();
        assert_eq!(declared_name(&outer), "Outer");
        assert_eq!(declared_name(&JavaType::nested(&outer, "Inner")), "Inner");
    }

    #[test]
    fn test_accessors_respect_declared_methods() {
        let mut spec = TypeSpec::class(JavaType::parse("com.foo.Flag").unwrap())
            .field(FieldSpec::new("on", JavaType::boolean()))
            .field(FieldSpec::new("COUNT", JavaType::int()).static_())
            .method(MethodSpec::new("isOn").returns(JavaType::boolean()).line("return true;"));
        add_accessors(&mut spec);

        let names: Vec<&str> = spec.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["isOn", "setOn"]);
        assert_eq!(spec.methods[0].body, ["return true;"]);
    }

    #[test]
    fn test_boolean_array_uses_get() {
        let mut spec = TypeSpec::class(JavaType::parse("com.foo.Bits").unwrap())
            .field(FieldSpec::new("bits", JavaType::parse("boolean[]").unwrap()).final_());
        add_accessors(&mut spec);

        let names: Vec<&str> = spec.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["getBits"]);
    }
}
