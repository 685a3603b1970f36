//! Container nodes: classes, interfaces, enums and records.

use indexmap::IndexSet;

use crate::{
    FieldSpec, InitBlockSpec, JavaType, MethodSpec, ParamSpec, TypeParamSpec, Visibility,
    builder::javadoc_lines,
};

/// The kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
        }
    }

    /// Order in which nested declarations are rendered.
    pub(crate) const NESTED_ORDER: [TypeKind; 4] =
        [Self::Class, Self::Interface, Self::Enum, Self::Record];
}

/// A class, interface, enum or record declaration.
///
/// Top-level declarations are wrapped in a
/// [`CompilationUnit`](crate::CompilationUnit), nested ones live in
/// [`TypeSpec::nested`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub kind: TypeKind,
    pub ty: JavaType,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub javadoc: Vec<String>,
    pub annotations: Vec<String>,
    pub type_parameters: Vec<TypeParamSpec>,
    /// `extends` clause of a class.
    pub super_class: Option<JavaType>,
    /// `implements` clause, or `extends` for an interface.
    pub super_interfaces: IndexSet<JavaType>,
    pub fields: Vec<FieldSpec>,
    pub init_blocks: Vec<InitBlockSpec>,
    pub methods: Vec<MethodSpec>,
    /// Enum constants, rendered verbatim (`ONE("One")`).
    pub enum_constants: Vec<String>,
    /// Record header components.
    pub record_components: Vec<ParamSpec>,
    pub nested: Vec<TypeSpec>,
}

impl TypeSpec {
    /// Create a public declaration of the given kind.
    pub fn new(kind: TypeKind, ty: JavaType) -> Self {
        Self {
            kind,
            ty,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: false,
            javadoc: Vec::new(),
            annotations: Vec::new(),
            type_parameters: Vec::new(),
            super_class: None,
            super_interfaces: IndexSet::new(),
            fields: Vec::new(),
            init_blocks: Vec::new(),
            methods: Vec::new(),
            enum_constants: Vec::new(),
            record_components: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn class(ty: JavaType) -> Self {
        Self::new(TypeKind::Class, ty)
    }

    pub fn interface(ty: JavaType) -> Self {
        Self::new(TypeKind::Interface, ty)
    }

    pub fn enumeration(ty: JavaType) -> Self {
        Self::new(TypeKind::Enum, ty)
    }

    pub fn record(ty: JavaType) -> Self {
        Self::new(TypeKind::Record, ty)
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.javadoc = javadoc_lines(text);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn type_parameter(mut self, param: TypeParamSpec) -> Self {
        self.type_parameters.push(param);
        self
    }

    pub fn extends(mut self, super_class: JavaType) -> Self {
        self.super_class = Some(super_class);
        self
    }

    /// Add a super interface. Duplicates are ignored.
    pub fn implements(mut self, interface: JavaType) -> Self {
        self.super_interfaces.insert(interface);
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn init_block(mut self, block: InitBlockSpec) -> Self {
        self.init_blocks.push(block);
        self
    }

    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn constant(mut self, constant: impl Into<String>) -> Self {
        self.enum_constants.push(constant.into());
        self
    }

    pub fn component(mut self, component: ParamSpec) -> Self {
        self.record_components.push(component);
        self
    }

    pub fn nested_type(mut self, nested: TypeSpec) -> Self {
        self.nested.push(nested);
        self
    }

    /// Every type this declaration and its members refer to, nested
    /// declarations included.
    ///
    /// Used to register imports in one pass.
    pub fn referenced_types(&self) -> Vec<&JavaType> {
        let mut types = Vec::new();
        self.collect_referenced_types(&mut types);
        types
    }

    fn collect_referenced_types<'a>(&'a self, out: &mut Vec<&'a JavaType>) {
        let bounds = |params: &'a [TypeParamSpec]| params.iter().flat_map(|p| &p.bounds);

        out.extend(bounds(&self.type_parameters));
        out.extend(&self.super_class);
        out.extend(&self.super_interfaces);
        out.extend(self.fields.iter().map(|f| &f.ty));
        out.extend(self.record_components.iter().map(|c| &c.ty));
        for method in &self.methods {
            out.extend(bounds(&method.type_parameters));
            out.extend(&method.return_type);
            out.extend(method.params.iter().map(|p| &p.ty));
            out.extend(&method.exceptions);
        }
        for nested in &self.nested {
            nested.collect_referenced_types(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(spec: &str) -> JavaType {
        JavaType::parse(spec).unwrap()
    }

    #[test]
    fn test_super_interfaces_are_unique() {
        let spec = TypeSpec::class(ty("com.foo.Bar"))
            .implements(ty("java.io.Serializable"))
            .implements(ty("java.lang.Comparable<com.foo.Bar>"))
            .implements(ty("java.io.Serializable"));
        assert_eq!(spec.super_interfaces.len(), 2);
        assert_eq!(
            spec.super_interfaces.first().map(JavaType::short_name),
            Some("Serializable".to_string())
        );
    }

    #[test]
    fn test_referenced_types() {
        let inner = TypeSpec::class(ty("com.foo.Bar.Inner"))
            .field(FieldSpec::new("when", ty("java.time.Instant")));
        let spec = TypeSpec::class(ty("com.foo.Bar"))
            .extends(ty("com.base.Entity"))
            .field(FieldSpec::new("tags", ty("java.util.List<java.lang.String>")))
            .method(
                MethodSpec::new("load")
                    .returns(ty("java.util.Optional<com.foo.Bar>"))
                    .param(ParamSpec::new("id", ty("long")))
                    .throws(ty("java.io.IOException")),
            )
            .nested_type(inner);

        let names: Vec<String> = spec
            .referenced_types()
            .into_iter()
            .map(JavaType::fully_qualified_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "com.base.Entity",
                "java.util.List<java.lang.String>",
                "java.util.Optional<com.foo.Bar>",
                "long",
                "java.io.IOException",
                "java.time.Instant",
            ]
        );
    }

    #[test]
    fn test_kind_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::Record.keyword(), "record");
        assert_eq!(TypeSpec::enumeration(ty("com.foo.Color")).kind, TypeKind::Enum);
    }
}
