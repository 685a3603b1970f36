//! Line buffer with indentation tracking.

use super::Indent;

/// Fluent API for building indented Java source.
///
/// # Example
///
/// ```
/// use jgen_dom::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("public void run() {")
///     .push_indent()
///     .push_line("System.out.println(\"Hello\");")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "public void run() {\n    System.out.println(\"Hello\");\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line at the current indentation.
    ///
    /// Empty lines are written without indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.push_line_at(0, s)
    }

    /// Add a line `offset` levels away from the current indentation.
    ///
    /// A resulting level below zero is written without indentation.
    pub fn push_line_at(&mut self, offset: isize, s: &str) -> &mut Self {
        if !s.is_empty() {
            let level = self.indent_level.saturating_add_signed(offset);
            self.write_indent(level);
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add every line at the current indentation.
    pub fn push_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Remove a trailing blank line, if the buffer ends with one.
    pub fn pop_blank(&mut self) -> &mut Self {
        if self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

/// Format free text as javadoc comment lines.
pub fn javadoc_lines(text: &str) -> Vec<String> {
    let mut lines = vec!["/**".to_string()];
    lines.extend(text.lines().map(|line| {
        let line = line.trim_end();
        if line.is_empty() {
            " *".to_string()
        } else {
            format!(" * {line}")
        }
    }));
    lines.push(" */".to_string());
    lines
}
