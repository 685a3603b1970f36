use std::path::PathBuf;

use jgen_core::Overwrite;
use jgen_dom::builder::Indent;
use serde::Deserialize;

/// The `[output]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Source root, relative to the directory holding jgen.toml
    pub directory: PathBuf,
    pub indent: IndentConfig,
    pub overwrite: OverwriteConfig,
    /// Comment lines placed at the top of every generated file
    pub file_comments: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("src/main/java"),
            indent: IndentConfig::default(),
            overwrite: OverwriteConfig::default(),
            file_comments: Vec::new(),
        }
    }
}

/// Indentation written as a width (`indent = 2`) or `indent = "tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentConfig {
    Spaces(u8),
    Keyword(IndentKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKeyword {
    Tab,
}

impl IndentConfig {
    pub fn to_indent(self) -> Indent {
        match self {
            Self::Spaces(width) => Indent::Spaces(width),
            Self::Keyword(IndentKeyword::Tab) => Indent::Tab,
        }
    }
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// When an existing file may be replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwriteConfig {
    #[default]
    Always,
    IfMissing,
}

impl From<OverwriteConfig> for Overwrite {
    fn from(config: OverwriteConfig) -> Self {
        match config {
            OverwriteConfig::Always => Overwrite::Always,
            OverwriteConfig::IfMissing => Overwrite::IfMissing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        output: OutputConfig,
    }

    fn output(src: &str) -> OutputConfig {
        toml::from_str::<Wrapper>(src).unwrap().output
    }

    #[test]
    fn test_defaults() {
        let config = output("[output]\n");
        assert_eq!(config.directory, PathBuf::from("src/main/java"));
        assert_eq!(config.indent.to_indent(), Indent::JAVA);
        assert_eq!(Overwrite::from(config.overwrite), Overwrite::Always);
        assert!(config.file_comments.is_empty());
    }

    #[test]
    fn test_indent_forms() {
        assert_eq!(output("[output]\nindent = 2\n").indent.to_indent(), Indent::Spaces(2));
        assert_eq!(output("[output]\nindent = \"tab\"\n").indent.to_indent(), Indent::Tab);
        assert!(toml::from_str::<Wrapper>("[output]\nindent = \"tabs\"\n").is_err());
    }

    #[test]
    fn test_overwrite_if_missing() {
        let config = output("[output]\noverwrite = \"if-missing\"\n");
        assert_eq!(Overwrite::from(config.overwrite), Overwrite::IfMissing);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<Wrapper>("[output]\ndir = \"src\"\n").is_err());
    }
}
