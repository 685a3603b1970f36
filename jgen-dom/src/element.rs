//! Declared elements: fields, methods, parameters, type parameters and
//! initialization blocks.
//!
//! Every element is a plain value built with consuming setters:
//!
//! ```
//! use jgen_dom::{FieldSpec, JavaType};
//!
//! let field = FieldSpec::new("count", JavaType::int())
//!     .static_()
//!     .final_()
//!     .initializer("0");
//! assert!(field.is_static);
//! ```

use crate::{JavaType, Result, builder::javadoc_lines, identifier::validate_identifier};

/// Java access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    /// Package-private, no keyword.
    Default,
}

impl Visibility {
    /// The keyword followed by a space, or an empty string for package-private.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Protected => "protected ",
            Self::Private => "private ",
            Self::Default => "",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: JavaType,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_transient: bool,
    pub is_volatile: bool,
    /// Expression after `=`, without the trailing `;`.
    pub initializer: Option<String>,
    pub javadoc: Vec<String>,
    pub annotations: Vec<String>,
}

impl FieldSpec {
    /// Create a private field.
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            is_transient: false,
            is_volatile: false,
            initializer: None,
            javadoc: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a private field, rejecting reserved words and malformed names.
    pub fn checked(name: impl Into<String>, ty: JavaType) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, "field", false)?;
        Ok(Self::new(name, ty))
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

    pub fn transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    pub fn volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Set the javadoc from free text.
    pub fn doc(mut self, text: &str) -> Self {
        self.javadoc = javadoc_lines(text);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: JavaType,
    pub varargs: bool,
    /// Rendered inline before the type, separated by spaces.
    pub annotations: Vec<String>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: false,
            annotations: Vec::new(),
        }
    }

    /// Create a parameter, rejecting reserved words and malformed names.
    pub fn checked(name: impl Into<String>, ty: JavaType) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, "parameter", false)?;
        Ok(Self::new(name, ty))
    }

    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

/// A generic type parameter, `T` or `T extends A & B`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamSpec {
    pub name: String,
    pub bounds: Vec<JavaType>,
}

impl TypeParamSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: JavaType) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// A method or constructor.
///
/// Body lines are opaque text. The renderer only re-indents them.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    /// `None` renders as `void`.
    pub return_type: Option<JavaType>,
    pub constructor: bool,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_synchronized: bool,
    pub is_native: bool,
    pub is_default: bool,
    pub type_parameters: Vec<TypeParamSpec>,
    pub params: Vec<ParamSpec>,
    pub exceptions: Vec<JavaType>,
    pub body: Vec<String>,
    pub javadoc: Vec<String>,
    pub annotations: Vec<String>,
}

impl MethodSpec {
    /// Create a public `void` method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            constructor: false,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: false,
            is_synchronized: false,
            is_native: false,
            is_default: false,
            type_parameters: Vec::new(),
            params: Vec::new(),
            exceptions: Vec::new(),
            body: Vec::new(),
            javadoc: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a public method, rejecting reserved words and malformed names.
    pub fn checked(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, "method", false)?;
        Ok(Self::new(name))
    }

    /// Create a public constructor for the type with the given short name.
    pub fn constructor(type_name: impl Into<String>) -> Self {
        let mut method = Self::new(type_name);
        method.constructor = true;
        method
    }

    pub fn returns(mut self, ty: JavaType) -> Self {
        self.return_type = Some(ty);
        self
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

    pub fn synchronized(mut self) -> Self {
        self.is_synchronized = true;
        self
    }

    pub fn native(mut self) -> Self {
        self.is_native = true;
        self
    }

    /// Mark as an interface `default` method.
    pub fn default_(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn type_parameter(mut self, param: TypeParamSpec) -> Self {
        self.type_parameters.push(param);
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, exception: JavaType) -> Self {
        self.exceptions.push(exception);
        self
    }

    /// Append one body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Append several body lines.
    pub fn lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body.extend(lines.into_iter().map(Into::into));
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

    /// True when the method renders as a signature ending in `;`.
    pub fn is_bodyless(&self) -> bool {
        self.is_native || self.is_abstract || self.body.is_empty()
    }
}

/// A `static { ... }` or instance `{ ... }` initialization block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InitBlockSpec {
    pub is_static: bool,
    pub javadoc: Vec<String>,
    pub body: Vec<String>,
}

impl InitBlockSpec {
    pub fn new(is_static: bool) -> Self {
        Self {
            is_static,
            ..Self::default()
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.javadoc = javadoc_lines(text);
        self
    }
}
