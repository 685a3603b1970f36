use miette::Diagnostic;
use thiserror::Error;

/// Result type for DOM construction.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors raised while building a Java source tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DomError {
    #[error("type arguments are never closed in '{spec}'")]
    #[diagnostic(
        code(jgen::dom::unclosed_type_arguments),
        help("add the missing '>' to the type specification")
    )]
    UnclosedTypeArguments { spec: String },

    #[error("unbalanced '<' and '>' in '{spec}'")]
    #[diagnostic(
        code(jgen::dom::unbalanced_type_arguments),
        help("every '<' in a generic type needs a matching '>'")
    )]
    UnbalancedTypeArguments { spec: String },

    #[error("'{name}' is a Java reserved word")]
    #[diagnostic(
        code(jgen::dom::reserved_word),
        help("rename the {context} '{name}', e.g. '{name}Value'")
    )]
    ReservedWord { name: String, context: String },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(jgen::dom::invalid_identifier),
        help("{reason}. Java identifiers start with a letter, '_' or '$'")
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },
}

impl DomError {
    pub(crate) fn unclosed(spec: &str) -> Self {
        Self::UnclosedTypeArguments {
            spec: spec.trim().to_string(),
        }
    }

    pub(crate) fn unbalanced(spec: &str) -> Self {
        Self::UnbalancedTypeArguments {
            spec: spec.trim().to_string(),
        }
    }
}
