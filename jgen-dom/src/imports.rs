//! Import resolution: short name or fully qualified name at a reference site.

use crate::{CompilationUnit, JavaType};

/// The text to emit where `ty` is referenced inside `unit`.
///
/// The base type and every type argument are resolved independently. A type
/// prints its short name when there is no unit, when it needs no import,
/// when it lives in the unit's package, or when the unit imports it.
/// Otherwise it prints fully qualified.
///
/// ```
/// use jgen_dom::{CompilationUnit, JavaType, TypeSpec, calculate_type_name};
///
/// let mut unit = CompilationUnit::new(TypeSpec::class(JavaType::parse("com.foo.Service")?));
/// let list = JavaType::parse("java.util.List<java.math.BigDecimal>")?;
/// unit.add_imported_type(&JavaType::list());
///
/// assert_eq!(calculate_type_name(Some(&unit), &list), "List<java.math.BigDecimal>");
/// assert_eq!(calculate_type_name(None, &list), "List<BigDecimal>");
/// # Ok::<(), jgen_dom::DomError>(())
/// ```
pub fn calculate_type_name(unit: Option<&CompilationUnit>, ty: &JavaType) -> String {
    let base = if prints_short(unit, ty) {
        ty.short_name_without_type_arguments()
    } else {
        ty.fully_qualified_name_without_type_arguments()
    };

    if ty.type_arguments().is_empty() {
        return base + ty.array_suffix();
    }

    let arguments: Vec<String> = ty
        .type_arguments()
        .iter()
        .map(|argument| calculate_type_name(unit, argument))
        .collect();
    format!("{base}<{}>{}", arguments.join(", "), ty.array_suffix())
}

fn prints_short(unit: Option<&CompilationUnit>, ty: &JavaType) -> bool {
    let Some(unit) = unit else {
        return true;
    };
    if ty.is_primitive() || !ty.is_explicitly_imported() {
        return true;
    }
    ty.package_name() == unit.ty().package_name() || unit.is_imported(ty)
}
