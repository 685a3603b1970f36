use super::{JavaRender, RenderContext, member::param, type_parameters_clause};
use crate::{TypeKind, TypeSpec, builder::CodeBuilder};

impl JavaRender for TypeSpec {
    fn render_into(&self, out: &mut CodeBuilder, ctx: &RenderContext<'_>) {
        out.push_lines(&self.javadoc).push_lines(&self.annotations);
        out.push_line(&first_line(self, ctx));
        out.push_indent();

        if self.kind == TypeKind::Enum {
            push_enum_constants(self, out);
        }

        let members = ctx.in_interface(self.kind == TypeKind::Interface);
        for field in &self.fields {
            field.render_into(out, &members);
            out.push_blank();
        }
        for block in &self.init_blocks {
            block.render_into(out, &members);
            out.push_blank();
        }
        for method in &self.methods {
            method.render_into(out, &members);
            out.push_blank();
        }

        let nested_ctx = ctx.in_interface(false);
        for kind in TypeKind::NESTED_ORDER {
            for nested in self.nested.iter().filter(|n| n.kind == kind) {
                nested.render_into(out, &nested_ctx);
                out.push_blank();
            }
        }

        out.pop_blank();
        out.push_dedent();
        out.push_line("}");
    }
}

fn first_line(spec: &TypeSpec, ctx: &RenderContext<'_>) -> String {
    let mut line = String::from(spec.visibility.as_str());
    for (set, keyword) in [
        (spec.is_abstract && spec.kind == TypeKind::Class, "abstract "),
        (spec.is_static, "static "),
        (spec.is_final && matches!(spec.kind, TypeKind::Class | TypeKind::Record), "final "),
    ] {
        if set {
            line.push_str(keyword);
        }
    }

    line.push_str(spec.kind.keyword());
    line.push(' ');
    line.push_str(declared_name(spec));
    line.push_str(&type_parameters_clause(&spec.type_parameters, ctx));

    if spec.kind == TypeKind::Record {
        let components: Vec<String> = spec.record_components.iter().map(|c| param(c, ctx)).collect();
        line.push('(');
        line.push_str(&components.join(", "));
        line.push(')');
    }

    if let (TypeKind::Class, Some(super_class)) = (spec.kind, &spec.super_class) {
        line.push_str(" extends ");
        line.push_str(&ctx.type_name(super_class));
    }

    if !spec.super_interfaces.is_empty() {
        line.push_str(if spec.kind == TypeKind::Interface {
            " extends "
        } else {
            " implements "
        });
        line.push_str(&ctx.type_names(&spec.super_interfaces).join(", "));
    }

    line.push_str(" {");
    line
}

/// The simple name a declaration introduces, `Inner` for `Outer.Inner`.
fn declared_name(spec: &TypeSpec) -> &str {
    let short = spec.ty.base_short_name();
    short.rsplit_once('.').map_or(short, |(_, name)| name)
}

/// Constants separated by `,`, the last one closed with `;`, then a blank line.
fn push_enum_constants(spec: &TypeSpec, out: &mut CodeBuilder) {
    let has_members = !(spec.fields.is_empty()
        && spec.init_blocks.is_empty()
        && spec.methods.is_empty()
        && spec.nested.is_empty());

    match spec.enum_constants.split_last() {
        Some((last, rest)) => {
            for constant in rest {
                out.push_line(&format!("{constant},"));
            }
            out.push_line(&format!("{last};"));
        }
        None if has_members => {
            out.push_line(";");
        }
        None => return,
    }
    out.push_blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldSpec, JavaType, MethodSpec, ParamSpec, TypeParamSpec, Visibility, builder::Indent};

    fn ty(spec: &str) -> JavaType {
        JavaType::parse(spec).unwrap()
    }

    fn render(spec: &TypeSpec) -> String {
        spec.render_with(&RenderContext::new(None), Indent::JAVA)
    }

    #[test]
    fn test_empty_class() {
        let spec = TypeSpec::class(ty("com.foo.Empty")).final_();
        assert_eq!(render(&spec), "public final class Empty {\n}\n");
    }

    #[test]
    fn test_class_header() {
        let spec = TypeSpec::class(ty("com.foo.Repo"))
            .abstract_()
            .type_parameter(TypeParamSpec::new("T").bound(ty("com.foo.Entity")))
            .extends(ty("com.foo.Base<T>"))
            .implements(ty("java.io.Serializable"))
            .implements(ty("java.lang.Iterable<T>"));
        assert_eq!(
            render(&spec),
            "public abstract class Repo<T extends Entity> extends Base<T> implements Serializable, Iterable<T> {\n}\n"
        );
    }

    #[test]
    fn test_interface_extends_and_members() {
        let spec = TypeSpec::interface(ty("com.foo.Mapper"))
            .implements(ty("com.foo.BaseMapper"))
            .field(
                FieldSpec::new("TABLE", JavaType::string())
                    .visibility(Visibility::Default)
                    .initializer("\"users\""),
            )
            .method(MethodSpec::new("count").returns(ty("long")));
        assert_eq!(
            render(&spec),
            concat!(
                "public interface Mapper extends BaseMapper {\n",
                "    String TABLE = \"users\";\n",
                "\n",
                "    long count();\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_record() {
        let spec = TypeSpec::record(ty("com.foo.Point"))
            .component(ParamSpec::new("x", JavaType::int()))
            .component(ParamSpec::new("y", JavaType::int()))
            .implements(ty("java.io.Serializable"));
        assert_eq!(
            render(&spec),
            "public record Point(int x, int y) implements Serializable {\n}\n"
        );
    }

    #[test]
    fn test_enum_without_constants_but_members() {
        let spec = TypeSpec::enumeration(ty("com.foo.Nothing"))
            .method(MethodSpec::new("run").static_().line("go();"));
        assert_eq!(
            render(&spec),
            concat!(
                "public enum Nothing {\n",
                "    ;\n",
                "\n",
                "    public static void run() {\n",
                "        go();\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_nested_declarations_use_simple_name() {
        let outer = ty("com.foo.Example");
        let spec = TypeSpec::class(outer.clone()).nested_type(
            TypeSpec::class(JavaType::nested(&outer, "Criteria"))
                .static_()
                .extends(JavaType::nested(&outer, "GeneratedCriteria")),
        );
        assert_eq!(
            render(&spec),
            concat!(
                "public class Example {\n",
                "    public static class Criteria extends Example.GeneratedCriteria {\n",
                "    }\n",
                "}\n",
            )
        );
    }
}
