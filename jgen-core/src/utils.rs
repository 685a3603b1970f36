//! Naming helpers for generated Java code.

use std::path::PathBuf;

/// JavaBeans getter name for a property.
///
/// Boolean primitives use the `is` prefix. A property whose second character
/// is uppercase (`eMail`) keeps its first character as is, so the accessor
/// round-trips through `java.beans.Introspector`.
pub fn getter_method_name(property: &str, is_boolean: bool) -> String {
    let prefix = if is_boolean { "is" } else { "get" };
    format!("{prefix}{}", capitalize_property(property))
}

/// JavaBeans setter name for a property.
pub fn setter_method_name(property: &str) -> String {
    format!("set{}", capitalize_property(property))
}

fn capitalize_property(property: &str) -> String {
    let mut chars = property.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let second_is_upper = chars.clone().next().is_some_and(char::is_uppercase);
    if first.is_lowercase() && !second_is_upper {
        first.to_uppercase().chain(chars).collect()
    } else {
        property.to_string()
    }
}

/// Directory path for a Java package (`com.foo.bar` -> `com/foo/bar`)
pub fn package_to_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_method_name() {
        assert_eq!(getter_method_name("name", false), "getName");
        assert_eq!(getter_method_name("active", true), "isActive");
        assert_eq!(getter_method_name("eMail", false), "geteMail");
        assert_eq!(getter_method_name("URL", false), "getURL");
        assert_eq!(getter_method_name("a", false), "getA");
    }

    #[test]
    fn test_setter_method_name() {
        assert_eq!(setter_method_name("name"), "setName");
        assert_eq!(setter_method_name("eMail"), "seteMail");
    }

    #[test]
    fn test_package_to_path() {
        assert_eq!(package_to_path("com.foo.bar"), PathBuf::from("com/foo/bar"));
        assert_eq!(package_to_path(""), PathBuf::new());
    }
}
