use super::JavaType;

/// The eight Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Boolean,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::Boolean,
    ];

    /// Look up a primitive by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
        }
    }

    /// Fully qualified name of the boxed wrapper class.
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Byte => "java.lang.Byte",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Char => "java.lang.Character",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
            Self::Boolean => "java.lang.Boolean",
        }
    }

    /// The boxed wrapper as a type reference.
    pub fn wrapper_type(&self) -> JavaType {
        JavaType::simple(self.wrapper_name())
    }

    /// Method call that unboxes a wrapper value, e.g. `intValue()`.
    pub fn unboxing_method(&self) -> &'static str {
        match self {
            Self::Byte => "byteValue()",
            Self::Short => "shortValue()",
            Self::Int => "intValue()",
            Self::Long => "longValue()",
            Self::Char => "charValue()",
            Self::Float => "floatValue()",
            Self::Double => "doubleValue()",
            Self::Boolean => "booleanValue()",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(Primitive::from_keyword("int"), Some(Primitive::Int));
        assert_eq!(Primitive::from_keyword("boolean"), Some(Primitive::Boolean));
        assert_eq!(Primitive::from_keyword("Integer"), None);
        assert_eq!(Primitive::from_keyword("void"), None);
    }

    #[test]
    fn test_wrapper_type() {
        let wrapper = Primitive::Char.wrapper_type();
        assert_eq!(wrapper.fully_qualified_name(), "java.lang.Character");
        assert_eq!(wrapper.short_name(), "Character");
        assert!(!wrapper.is_explicitly_imported());
        assert_eq!(Primitive::Char.unboxing_method(), "charValue()");
    }
}
