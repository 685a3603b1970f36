//! Recursive parser for type specifications.
//!
//! Grammar: `[?[ extends|super ]]BaseName[<Arg, Arg, ...>][[]]`.
//! Array detection only looks for a trailing `]`.

use super::{JAVA_LANG, JavaType, Primitive, Wildcard};
use crate::{DomError, Result};

pub(super) fn parse_type(spec: &str) -> Result<JavaType> {
    let trimmed = spec.trim();

    if let Some(rest) = trimmed.strip_prefix('?') {
        let rest = rest.trim();
        let (wildcard, bound) = if let Some(bound) = rest.strip_prefix("extends ") {
            (Wildcard::Extends, bound)
        } else if let Some(bound) = rest.strip_prefix("super ") {
            (Wildcard::Super, bound)
        } else {
            (Wildcard::Unbounded, rest)
        };
        let mut ty = parse_type(bound)?;
        ty.wildcard = Some(wildcard);
        return Ok(ty);
    }

    let mut ty = match spec.find('<') {
        None => simple_parse(spec),
        Some(open) => {
            let mut ty = simple_parse(&spec[..open]);
            let close = spec
                .rfind('>')
                .filter(|&close| close > open)
                .ok_or_else(|| DomError::unclosed(spec))?;
            ty.type_arguments = split_type_arguments(spec, &spec[open + 1..close])?
                .iter()
                .map(|argument| parse_type(argument))
                .collect::<Result<_>>()?;
            let trailing = spec[close + 1..].trim();
            if trailing.starts_with('[') {
                ty.array_suffix = trailing.to_string();
            }
            ty
        }
    };
    ty.is_array = spec.ends_with(']');
    Ok(ty)
}

/// Parse a dotted name without type arguments.
pub(super) fn simple_parse(spec: &str) -> JavaType {
    let name = spec.trim();
    let (package, short, primitive) = match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..], None),
        None => ("", name, Primitive::from_keyword(name)),
    };

    JavaType {
        base_short_name: short.to_string(),
        base_qualified_name: name.to_string(),
        package: package.to_string(),
        explicitly_imported: !package.is_empty() && package != JAVA_LANG,
        primitive,
        is_array: false,
        array_suffix: String::new(),
        type_arguments: Vec::new(),
        wildcard: None,
    }
}

/// Split the text between the outer `<` and `>` on commas at depth zero.
///
/// A trailing blank segment is dropped. `spec` is only used for errors.
pub(crate) fn split_type_arguments(spec: &str, arguments: &str) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut current = String::new();

    for c in arguments.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if depth != 0 {
        return Err(DomError::unbalanced(spec));
    }
    if !current.trim().is_empty() {
        segments.push(current);
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_parse_splits_on_last_dot() {
        let ty = simple_parse(" com.foo.Bar ");
        assert_eq!(ty.package_name(), "com.foo");
        assert_eq!(ty.base_short_name(), "Bar");
        assert_eq!(ty.base_qualified_name(), "com.foo.Bar");
    }

    #[test]
    fn test_every_primitive_keyword() {
        for primitive in Primitive::ALL {
            let ty = simple_parse(primitive.keyword());
            assert_eq!(ty.primitive(), Some(primitive));
            assert!(!ty.is_explicitly_imported());
        }
    }

    #[test]
    fn test_argument_count_matches_top_level_commas() {
        let specs = [
            "java.util.List<java.lang.String>",
            "java.util.Map<java.lang.String, java.util.List<java.lang.String>>",
            "com.foo.Triple<java.util.Map<a.B, a.C>, ?, java.util.List<? super a.D>>",
        ];
        for spec in specs {
            let inner = &spec[spec.find('<').unwrap() + 1..spec.rfind('>').unwrap()];
            let mut depth = 0;
            let mut commas = 0;
            for c in inner.chars() {
                match c {
                    '<' => depth += 1,
                    '>' => depth -= 1,
                    ',' if depth == 0 => commas += 1,
                    _ => {}
                }
            }
            let ty = parse_type(spec).unwrap();
            assert_eq!(ty.type_arguments().len(), commas + 1, "{spec}");
        }
    }

    #[test]
    fn test_reparse_qualified_name() {
        for spec in ["com.foo.Bar", "int", "java.lang.String", "Criteria", "byte[]"] {
            let ty = parse_type(spec).unwrap();
            assert!(ty.fully_qualified_name().ends_with(&ty.short_name()));
            assert_eq!(parse_type(&ty.fully_qualified_name()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unclosed_type_arguments() {
        assert_eq!(
            parse_type("java.util.List<java.lang.String"),
            Err(DomError::UnclosedTypeArguments {
                spec: "java.util.List<java.lang.String".to_string()
            })
        );
        assert!(matches!(
            parse_type("a.B>x<"),
            Err(DomError::UnclosedTypeArguments { .. })
        ));
    }

    #[test]
    fn test_unbalanced_type_arguments() {
        assert!(matches!(
            parse_type("java.util.Map<java.util.List<a.B, a.C>"),
            Err(DomError::UnbalancedTypeArguments { .. })
        ));
    }

    #[test]
    fn test_split_type_arguments() {
        assert_eq!(
            split_type_arguments("", "a.B, java.util.Map<a.C, a.D>, ").unwrap(),
            vec!["a.B", " java.util.Map<a.C, a.D>"]
        );
    }

    #[test]
    fn test_wildcard_keeps_bound_name() {
        let ty = parse_type("? super com.foo.Bar").unwrap();
        assert_eq!(ty.wildcard(), Some(Wildcard::Super));
        assert_eq!(ty.base_qualified_name(), "com.foo.Bar");
        assert_eq!(ty.fully_qualified_name(), "? super com.foo.Bar");
    }
}
