use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(jgen::io), help("create a jgen.toml describing the units to generate"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse jgen.toml")]
    #[diagnostic(code(jgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type '{spec}' in {context}")]
    #[diagnostic(
        code(jgen::invalid_type),
        help("{reason}. Types are written like 'java.util.Map<java.lang.String, ? extends com.foo.Bar>'")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        spec: String,
        context: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(jgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved word")]
    #[diagnostic(
        code(jgen::reserved_word),
        help("rename the {context} '{name}', or set 'allow_reserved = true' on a field")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(jgen::invalid_identifier),
        help("{reason}. Use only letters, digits, '_' and '$', starting with a letter, '_' or '$'.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("found {} problems in jgen.toml", .errors.len())]
    #[diagnostic(code(jgen::multiple_errors))]
    Multiple {
        #[related]
        errors: Vec<Error>,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved word error
    pub fn reserved_word(
        name: impl Into<String>,
        context: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::ReservedWord {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid type error
    pub fn invalid_type(
        spec: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidType {
            src: NamedSource::new(filename, src.to_string()),
            span,
            spec: spec.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Combine collected errors: a single error is returned as is.
    ///
    /// Returns `None` when `errors` is empty.
    pub fn combine(mut errors: Vec<Box<Error>>) -> Option<Box<Self>> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Box::new(Error::Multiple {
                errors: errors.into_iter().map(|e| *e).collect(),
            })),
        }
    }

    /// Number of individual problems this error reports.
    pub fn count(&self) -> usize {
        match self {
            Error::Multiple { errors } => errors.len(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation(message: &str) -> Box<Error> {
        Error::validation(message, "", "jgen.toml", None)
    }

    #[test]
    fn test_combine_empty() {
        assert!(Error::combine(Vec::new()).is_none());
    }

    #[test]
    fn test_combine_single() {
        let combined = Error::combine(vec![validation("first")]).unwrap();
        assert_eq!(combined.to_string(), "first");
        assert_eq!(combined.count(), 1);
    }

    #[test]
    fn test_combine_many() {
        let combined = Error::combine(vec![validation("first"), validation("second")]).unwrap();
        assert_eq!(combined.to_string(), "found 2 problems in jgen.toml");
        assert_eq!(combined.count(), 2);
    }
}
