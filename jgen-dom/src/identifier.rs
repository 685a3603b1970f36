//! Java identifier rules.

use crate::{DomError, Result};

/// Words that can never be used as a Java identifier.
///
/// Keywords, the literals `true`, `false` and `null`, and the contextual
/// words that are rejected as type or member names.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "non-sealed",
    "null",
    "package",
    "permits",
    "private",
    "protected",
    "public",
    "record",
    "return",
    "sealed",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "var",
    "void",
    "volatile",
    "while",
    "yield",
    "_",
];

/// Check if a name is a Java reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Describe why `name` is not a syntactically valid Java identifier.
///
/// Returns `None` for a valid identifier. Reserved words are not checked here.
pub fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Some("identifier must start with a letter, '_' or '$'");
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("identifier contains characters other than letters, digits, '_' and '$'");
    }
    None
}

/// Validate a member or type name.
///
/// `context` names what is being declared ("field", "method", ...) and ends
/// up in the error message.
pub fn validate_identifier(name: &str, context: &str, allow_reserved: bool) -> Result<()> {
    if name.is_empty() {
        return Err(DomError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
            reason: "identifier cannot be empty".to_string(),
        });
    }
    if !allow_reserved && is_reserved_word(name) {
        return Err(DomError::ReservedWord {
            name: name.to_string(),
            context: context.to_string(),
        });
    }
    if let Some(reason) = identifier_problem(name) {
        return Err(DomError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("null"));
        assert!(is_reserved_word("record"));
        assert!(!is_reserved_word("Class"));
        assert!(!is_reserved_word("name"));
    }

    #[test]
    fn test_identifier_problem() {
        assert_eq!(identifier_problem("firstName"), None);
        assert_eq!(identifier_problem("$proxy"), None);
        assert_eq!(identifier_problem("_id2"), None);
        assert!(identifier_problem("2fast").is_some());
        assert!(identifier_problem("first-name").is_some());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("value", "field", false).is_ok());
        assert!(validate_identifier("class", "field", true).is_ok());
        assert_eq!(
            validate_identifier("class", "field", false),
            Err(DomError::ReservedWord {
                name: "class".to_string(),
                context: "field".to_string(),
            })
        );
        assert!(matches!(
            validate_identifier("", "method", false),
            Err(DomError::InvalidIdentifier { .. })
        ));
    }
}
