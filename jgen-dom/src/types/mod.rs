//! Parsed Java type references.
//!
//! A [`JavaType`] is built from a textual specification such as
//! `java.util.Map<java.lang.String, ? extends com.foo.Bar>` and knows its
//! package, short and qualified names, type arguments, and the import lines
//! it needs.

pub(crate) mod parse;
mod primitive;

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

pub use primitive::Primitive;

use crate::{DomError, Result};

/// The package whose types are visible without an import.
pub const JAVA_LANG: &str = "java.lang";

/// Wildcard form of a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends Bound`
    Extends,
    /// `? super Bound`
    Super,
}

/// A reference to a Java type, possibly generic, array or wildcard.
///
/// Equality, ordering and hashing use the fully qualified name, so two
/// references parsed from different but equivalent specs compare equal.
#[derive(Debug, Clone)]
pub struct JavaType {
    /// Short name without type arguments. Keeps any `[]` of a simple array.
    base_short_name: String,
    /// Qualified name without type arguments.
    base_qualified_name: String,
    package: String,
    explicitly_imported: bool,
    primitive: Option<Primitive>,
    is_array: bool,
    /// Array brackets that follow a closing `>`.
    array_suffix: String,
    type_arguments: Vec<JavaType>,
    wildcard: Option<Wildcard>,
}

impl JavaType {
    /// Parse a type specification.
    pub fn parse(spec: &str) -> Result<Self> {
        parse::parse_type(spec)
    }

    /// Build a type from a name known to carry no type arguments.
    pub(crate) fn simple(name: &str) -> Self {
        let mut ty = parse::simple_parse(name);
        ty.is_array = name.ends_with(']');
        ty
    }

    /// A nested type declared inside `outer`.
    ///
    /// The short name is `Outer.Inner` and the import line is the outer
    /// class, so the reference works wherever the outer class is imported.
    pub fn nested(outer: &JavaType, name: &str) -> Self {
        Self {
            base_short_name: format!("{}.{}", outer.base_short_name, name),
            base_qualified_name: format!("{}.{}", outer.base_qualified_name, name),
            package: outer.package.clone(),
            explicitly_imported: outer.explicitly_imported,
            primitive: None,
            is_array: false,
            array_suffix: String::new(),
            type_arguments: Vec::new(),
            wildcard: None,
        }
    }

    pub fn int() -> Self {
        Self::simple("int")
    }

    pub fn boolean() -> Self {
        Self::simple("boolean")
    }

    pub fn string() -> Self {
        Self::simple("java.lang.String")
    }

    pub fn object() -> Self {
        Self::simple("java.lang.Object")
    }

    pub fn date() -> Self {
        Self::simple("java.util.Date")
    }

    /// `java.util.List`, ready to receive type arguments.
    pub fn list() -> Self {
        Self::simple("java.util.List")
    }

    pub fn array_list() -> Self {
        Self::simple("java.util.ArrayList")
    }

    pub fn hash_map() -> Self {
        Self::simple("java.util.HashMap")
    }

    pub fn iterator() -> Self {
        Self::simple("java.util.Iterator")
    }

    /// The `Criteria` inner class of a generated example class.
    pub fn criteria() -> Self {
        Self::simple("Criteria")
    }

    /// The `GeneratedCriteria` inner class of a generated example class.
    pub fn generated_criteria() -> Self {
        Self::simple("GeneratedCriteria")
    }

    /// Add a type argument.
    pub fn with_type_argument(mut self, argument: JavaType) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Add a type argument (mutable).
    pub fn add_type_argument(&mut self, argument: JavaType) -> &mut Self {
        self.type_arguments.push(argument);
        self
    }

    pub(crate) fn clear_type_arguments(&mut self) {
        self.type_arguments.clear();
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn type_arguments(&self) -> &[JavaType] {
        &self.type_arguments
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive.is_some()
    }

    /// The primitive kind, which also gives the boxed wrapper.
    pub fn primitive(&self) -> Option<Primitive> {
        self.primitive
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// True when the type lives outside `java.lang` and has a package.
    pub fn is_explicitly_imported(&self) -> bool {
        self.explicitly_imported
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    pub fn is_bounded_wildcard(&self) -> bool {
        matches!(self.wildcard, Some(Wildcard::Extends | Wildcard::Super))
    }

    pub fn is_extends_bound(&self) -> bool {
        self.wildcard == Some(Wildcard::Extends)
    }

    pub fn wildcard(&self) -> Option<Wildcard> {
        self.wildcard
    }

    /// Qualified name without type arguments or wildcard, e.g. `java.util.Map`.
    pub fn base_qualified_name(&self) -> &str {
        &self.base_qualified_name
    }

    /// Short name without type arguments or wildcard, e.g. `Map`.
    pub fn base_short_name(&self) -> &str {
        &self.base_short_name
    }

    pub(crate) fn array_suffix(&self) -> &str {
        &self.array_suffix
    }

    /// Qualified name with the wildcard prefix but no type arguments.
    pub fn fully_qualified_name_without_type_arguments(&self) -> String {
        self.with_wildcard(&self.base_qualified_name)
    }

    /// Short name with the wildcard prefix but no type arguments.
    pub fn short_name_without_type_arguments(&self) -> String {
        self.with_wildcard(&self.base_short_name)
    }

    /// Full name, e.g. `java.util.Map<java.lang.String, java.util.List<java.lang.String>>`.
    pub fn fully_qualified_name(&self) -> String {
        self.assemble(
            self.fully_qualified_name_without_type_arguments(),
            JavaType::fully_qualified_name,
        )
    }

    /// Short name with short type arguments, e.g. `Map<String, List<String>>`.
    pub fn short_name(&self) -> String {
        self.assemble(
            self.short_name_without_type_arguments(),
            JavaType::short_name,
        )
    }

    /// The import line this type needs by itself, ignoring type arguments.
    ///
    /// Array brackets are dropped and a nested type imports its outermost
    /// declaring class.
    pub fn import_line(&self) -> Option<String> {
        if !self.explicitly_imported {
            return None;
        }
        let line = match self.base_short_name.find('.') {
            Some(dot) => format!(
                "{}.{}",
                self.package,
                strip_array(&self.base_short_name[..dot])
            ),
            None => strip_array(&self.base_qualified_name).to_string(),
        };
        Some(line)
    }

    /// All import lines needed by this type and its type arguments.
    ///
    /// The list may hold duplicates when an argument repeats.
    pub fn import_list(&self) -> Vec<String> {
        let mut imports: Vec<String> = self.import_line().into_iter().collect();
        for argument in &self.type_arguments {
            imports.extend(argument.import_list());
        }
        imports
    }

    fn with_wildcard(&self, name: &str) -> String {
        match self.wildcard {
            None => name.to_string(),
            Some(Wildcard::Unbounded) => "?".to_string(),
            Some(Wildcard::Extends) => format!("? extends {name}"),
            Some(Wildcard::Super) => format!("? super {name}"),
        }
    }

    fn assemble(&self, base: String, name: fn(&JavaType) -> String) -> String {
        if self.type_arguments.is_empty() {
            return base + &self.array_suffix;
        }
        let arguments: Vec<String> = self.type_arguments.iter().map(name).collect();
        format!("{base}<{}>{}", arguments.join(", "), self.array_suffix)
    }
}

fn strip_array(name: &str) -> &str {
    match name.find('[') {
        Some(bracket) => name[..bracket].trim_end(),
        None => name,
    }
}

impl PartialEq for JavaType {
    fn eq(&self, other: &Self) -> bool {
        self.fully_qualified_name() == other.fully_qualified_name()
    }
}

impl Eq for JavaType {}

impl Hash for JavaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fully_qualified_name().hash(state);
    }
}

impl PartialOrd for JavaType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JavaType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fully_qualified_name()
            .cmp(&other.fully_qualified_name())
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl FromStr for JavaType {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(spec: &str) -> JavaType {
        JavaType::parse(spec).unwrap()
    }

    #[test]
    fn test_java_lang_type() {
        let string = ty("java.lang.String");
        assert!(!string.is_explicitly_imported());
        assert_eq!(string.short_name(), "String");
        assert_eq!(string.package_name(), "java.lang");
        assert!(string.import_list().is_empty());
    }

    #[test]
    fn test_simple_type() {
        let bar = ty("com.foo.Bar");
        assert!(bar.is_explicitly_imported());
        assert_eq!(bar.short_name(), "Bar");
        assert_eq!(bar.fully_qualified_name(), "com.foo.Bar");
        assert_eq!(bar.package_name(), "com.foo");
        assert_eq!(bar.import_list(), vec!["com.foo.Bar"]);
    }

    #[test]
    fn test_primitive() {
        let int = ty("int");
        assert!(int.is_primitive());
        assert!(!int.is_explicitly_imported());
        assert_eq!(int.package_name(), "");
        assert_eq!(int.primitive().map(|p| p.wrapper_name()), Some("java.lang.Integer"));
        assert_eq!(JavaType::int(), int);
    }

    #[test]
    fn test_nested_generic() {
        let map = ty("java.util.Map<java.lang.String, java.util.List<java.lang.String>>");
        assert_eq!(map.short_name(), "Map<String, List<String>>");
        assert_eq!(
            map.fully_qualified_name(),
            "java.util.Map<java.lang.String, java.util.List<java.lang.String>>"
        );
        assert_eq!(map.fully_qualified_name_without_type_arguments(), "java.util.Map");
        assert_eq!(map.import_list(), vec!["java.util.Map", "java.util.List"]);
        assert_eq!(map.type_arguments().len(), 2);
    }

    #[test]
    fn test_wildcards() {
        let map = ty("java.util.Map<java.lang.String, ? extends com.foo.Bar>");
        assert_eq!(map.short_name(), "Map<String, ? extends Bar>");
        assert_eq!(map.import_list(), vec!["java.util.Map", "com.foo.Bar"]);

        let bound = &map.type_arguments()[1];
        assert!(bound.is_wildcard());
        assert!(bound.is_bounded_wildcard());
        assert!(bound.is_extends_bound());

        let unbounded = ty("java.util.Map<?, ?>");
        assert_eq!(unbounded.short_name(), "Map<?, ?>");
        assert_eq!(unbounded.import_list(), vec!["java.util.Map"]);
        assert!(!unbounded.type_arguments()[0].is_bounded_wildcard());

        let lower = ty("java.util.List<? super com.foo.Bar>");
        assert_eq!(lower.short_name(), "List<? super Bar>");
        assert!(!lower.type_arguments()[0].is_extends_bound());

        let deep = ty("java.util.Map<? extends java.util.List<?>, ?>");
        assert_eq!(deep.short_name(), "Map<? extends List<?>, ?>");
    }

    #[test]
    fn test_inner_class_from_spec() {
        let inner = ty("org.foo.Bar.Inner");
        assert_eq!(inner.short_name(), "Inner");
        assert_eq!(inner.package_name(), "org.foo.Bar");
        assert_eq!(inner.import_list(), vec!["org.foo.Bar.Inner"]);
    }

    #[test]
    fn test_nested_type_imports_outer() {
        let example = ty("com.foo.Example");
        let criteria = JavaType::nested(&example, "Criteria");
        let criterion = JavaType::nested(&example, "Criterion");

        assert_eq!(criteria.short_name(), "Example.Criteria");
        assert_eq!(criteria.package_name(), "com.foo");
        assert_eq!(criteria.fully_qualified_name(), "com.foo.Example.Criteria");
        assert_eq!(criteria.import_list(), vec!["com.foo.Example"]);
        assert_eq!(criterion.import_list(), vec!["com.foo.Example"]);
    }

    #[test]
    fn test_arrays() {
        let bytes = ty("byte[]");
        assert!(bytes.is_array());
        assert!(!bytes.is_primitive());

        let spaced = ty("byte[ ]");
        assert!(spaced.is_array());
        assert!(!spaced.is_primitive());

        let bars = ty("com.foo.Bar[]");
        assert!(bars.is_array());
        assert_eq!(bars.short_name(), "Bar[]");
        assert_eq!(bars.import_list(), vec!["com.foo.Bar"]);

        let lists = ty("java.util.List<String>[]");
        assert!(lists.is_array());
        assert_eq!(lists.short_name(), "List<String>[]");
        assert_eq!(lists.import_list(), vec!["java.util.List"]);
    }

    #[test]
    fn test_type_argument_builder() {
        let mut list = JavaType::list();
        list.add_type_argument(JavaType::string());
        assert_eq!(list.short_name(), "List<String>");

        let map = JavaType::hash_map()
            .with_type_argument(JavaType::string())
            .with_type_argument(JavaType::object());
        assert_eq!(map.fully_qualified_name(), "java.util.HashMap<java.lang.String, java.lang.Object>");
        assert_eq!(JavaType::hash_map().type_arguments().len(), 0);
    }

    #[test]
    fn test_equality_and_ordering() {
        assert_eq!(ty("java.util.List< java.lang.String >"), ty("java.util.List<java.lang.String>"));
        assert_ne!(ty("java.util.List<java.lang.String>"), JavaType::list());
        assert!(ty("com.a.Z") < ty("com.b.A"));
        assert_eq!(ty("com.foo.Bar").to_string(), "com.foo.Bar");
    }

    #[test]
    fn test_from_str() {
        let parsed: JavaType = "java.util.Date".parse().unwrap();
        assert_eq!(parsed, JavaType::date());
        assert!("java.util.List<String".parse::<JavaType>().is_err());
    }
}
