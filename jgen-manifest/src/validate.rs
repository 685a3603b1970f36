//! Validation of names and type specifications found in a manifest

use jgen_dom::{JavaType, identifier};
use miette::SourceSpan;

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// Holds the raw TOML source, the filename used in diagnostics and the
/// path of the unit or member currently being validated.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "jgen.toml");
/// let unit = ctx.push("com.foo.User");
/// unit.validate_name("created", "field", false)?;
/// let ty = unit.parse_type("java.util.Date", "field 'created'")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Current path joined with `::`, e.g. `com.foo.User::Builder`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Describe `kind` relative to the current path, e.g. `field in 'com.foo.User'`.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.src, name)
    }

    /// Create a validation error pointing at `needle` in the source.
    pub fn error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(needle))
    }

    /// Validate that `name` is a usable Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str, allow_reserved: bool) -> Result<()> {
        if !allow_reserved && identifier::is_reserved_word(name) {
            return Err(Error::reserved_word(
                name,
                self.context_for(kind),
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        if let Some(reason) = identifier::identifier_problem(name) {
            return Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Parse a type specification, checking every name segment it contains.
    pub fn parse_type(&self, spec: &str, kind: &str) -> Result<JavaType> {
        let invalid = |reason: String| {
            Error::invalid_type(
                spec,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(spec),
            )
        };

        if spec.trim().is_empty() {
            return Err(invalid("the type is empty".to_string()));
        }

        let ty = JavaType::parse(spec).map_err(|e| invalid(e.to_string()))?;
        match type_name_problem(&ty) {
            Some(reason) => Err(invalid(reason)),
            None => Ok(ty),
        }
    }
}

/// Find the span of a string value in the TOML source.
///
/// Quoted occurrences are preferred over bare text.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Check the dotted name of a parsed type and of each of its type arguments.
///
/// Returns a reason when a segment is not a Java identifier.
pub(crate) fn type_name_problem(ty: &JavaType) -> Option<String> {
    // An unbounded wildcard has no name of its own.
    if !(ty.is_wildcard() && !ty.is_bounded_wildcard()) {
        let name = ty.base_qualified_name();
        let name = name.find('[').map_or(name, |pos| &name[..pos]).trim_end();

        for segment in name.split('.') {
            if let Some(reason) = identifier::identifier_problem(segment) {
                return Some(format!("'{segment}' is not a valid name: {reason}"));
            }
        }

        let suffix = ty.base_qualified_name()[name.len()..].trim();
        if !suffix.chars().all(|c| matches!(c, '[' | ']' | ' ')) {
            return Some(format!("unexpected '{suffix}' after the type name"));
        }
    }

    ty.type_arguments().iter().find_map(type_name_problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"
[[unit]]
type = "com.foo.User"

[[unit.field]]
name = "class"
type = "java.util.List<String"
"#;

    #[test]
    fn test_find_value_span_prefers_quoted() {
        let span = find_value_span(SRC, "com.foo.User").unwrap();
        assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "com.foo.User");
        assert_eq!(SRC.as_bytes()[span.offset() - 1], b'"');
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span(SRC, "com.bar.Missing").is_none());
        assert!(find_value_span(SRC, "").is_none());
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new(SRC, "jgen.toml");
        assert_eq!(ctx.context_for("unit"), "unit");

        let nested = ctx.push("com.foo.User").push("Builder");
        assert_eq!(nested.context_for("field"), "field in 'com.foo.User::Builder'");
    }

    #[test]
    fn test_validate_name_reserved() {
        let ctx = ParseContext::new(SRC, "jgen.toml").push("com.foo.User");
        let err = ctx.validate_name("class", "field", false).unwrap_err();
        assert!(matches!(*err, Error::ReservedWord { .. }));
        assert!(ctx.validate_name("class", "field", true).is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        let ctx = ParseContext::new(SRC, "jgen.toml");
        let err = ctx.validate_name("1st", "field", false).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
        assert!(ctx.validate_name("firstName", "field", false).is_ok());
    }

    #[test]
    fn test_parse_type_unclosed() {
        let ctx = ParseContext::new(SRC, "jgen.toml");
        let err = ctx.parse_type("java.util.List<String", "field 'class'").unwrap_err();
        match *err {
            Error::InvalidType { spec, span, .. } => {
                assert_eq!(spec, "java.util.List<String");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_type_bad_segment() {
        let ctx = ParseContext::new(SRC, "jgen.toml");
        assert!(ctx.parse_type("com.foo.My Type", "field").is_err());
        assert!(ctx.parse_type("com.1foo.Type", "field").is_err());
        assert!(ctx.parse_type("java.util.Map<String, 9>", "field").is_err());
        assert!(ctx.parse_type("", "field").is_err());
    }

    #[test]
    fn test_parse_type_valid() {
        let ctx = ParseContext::new(SRC, "jgen.toml");
        for spec in [
            "int",
            "byte[]",
            "java.lang.String[][]",
            "java.util.List<?>",
            "java.util.Map<java.lang.String, ? extends com.foo.Bar>",
            "java.util.List<java.lang.String>[]",
            "T",
        ] {
            assert!(ctx.parse_type(spec, "field").is_ok(), "{spec}");
        }
    }
}
