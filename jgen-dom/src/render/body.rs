//! Re-indentation of opaque body lines.

use crate::builder::CodeBuilder;

/// Write method or block body lines followed by the closing `}`.
///
/// Lines start one level below the builder's indent. They are not parsed.
/// Nesting is guessed from their text: a line starting with `}` closes a
/// level before it is written, a line ending with `{` (unless it starts with
/// `switch`) or with `:` opens one after it, and a line starting with `break`
/// closes one unless the next line starts with `}`.
///
/// Unbalanced lines shift everything after them, the closing brace
/// included. A level left of column zero is written without indentation.
pub fn push_body<S: AsRef<str>>(out: &mut CodeBuilder, lines: &[S]) {
    let mut depth: isize = 1;
    let mut lines = lines.iter().map(AsRef::<str>::as_ref).peekable();

    while let Some(line) = lines.next() {
        if line.starts_with('}') {
            depth -= 1;
        }

        out.push_line_at(depth, line);

        if (line.ends_with('{') && !line.starts_with("switch")) || line.ends_with(':') {
            depth += 1;
        }
        if line.starts_with("break") && !lines.peek().is_some_and(|next| next.starts_with('}')) {
            depth -= 1;
        }
    }

    out.push_line_at(depth - 1, "}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(lines: &[&str]) -> String {
        let mut out = CodeBuilder::java();
        push_body(&mut out, lines);
        out.build()
    }

    #[test]
    fn test_nested_blocks() {
        let rendered = body(&["if (x) {", "return 1;", "} else {", "return 2;", "}"]);
        assert_eq!(
            rendered,
            "    if (x) {\n        return 1;\n    } else {\n        return 2;\n    }\n}\n"
        );
    }

    #[test]
    fn test_switch_with_breaks() {
        let rendered = body(&[
            "switch (kind) {",
            "case 1:",
            "one();",
            "break;",
            "default:",
            "other();",
            "break;",
            "}",
            "done();",
        ]);
        assert_eq!(
            rendered,
            concat!(
                "    switch (kind) {\n",
                "    case 1:\n",
                "        one();\n",
                "        break;\n",
                "    default:\n",
                "        other();\n",
                "        break;\n",
                "    }\n",
                "    done();\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_empty_lines_are_not_indented() {
        assert_eq!(body(&["a();", "", "b();"]), "    a();\n\n    b();\n}\n");
    }

    #[test]
    fn test_unbalanced_close_shifts_the_rest() {
        assert_eq!(body(&["}", "x();"]), "}\nx();\n}\n");
    }

    #[test]
    fn test_arrow_switch_leaves_body_level() {
        let rendered = body(&["switch (k) {", "case 1 -> a();", "}", "after();"]);
        assert_eq!(rendered, "    switch (k) {\n    case 1 -> a();\n}\nafter();\n}\n");
    }

    #[test]
    fn test_shift_is_relative_to_current_indent() {
        let mut out = CodeBuilder::java();
        out.push_indent().push_indent();
        push_body(&mut out, &["}", "x();"]);
        assert_eq!(out.build(), "        }\n        x();\n    }\n");
    }
}
