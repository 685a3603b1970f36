//! Indentation configuration for rendered source.

/// Indentation style for rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the Java convention.
    pub const JAVA: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "                ";
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_wide_indent_is_capped() {
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVA);
        assert_eq!(Indent::JAVA, Indent::Spaces(4));
    }
}
