use super::{JavaRender, RenderContext, push_body, type_parameters_clause};
use crate::{
    FieldSpec, InitBlockSpec, MethodSpec, ParamSpec, builder::CodeBuilder,
};

impl JavaRender for FieldSpec {
    fn render_into(&self, out: &mut CodeBuilder, ctx: &RenderContext<'_>) {
        out.push_lines(&self.javadoc).push_lines(&self.annotations);

        let mut line = String::from(self.visibility.as_str());
        for (set, keyword) in [
            (self.is_static, "static "),
            (self.is_final, "final "),
            (self.is_transient, "transient "),
            (self.is_volatile, "volatile "),
        ] {
            if set {
                line.push_str(keyword);
            }
        }
        line.push_str(&ctx.type_name(&self.ty));
        line.push(' ');
        line.push_str(&self.name);
        if let Some(initializer) = &self.initializer {
            line.push_str(" = ");
            line.push_str(initializer);
        }
        line.push(';');

        out.push_line(&line);
    }
}

impl JavaRender for MethodSpec {
    fn render_into(&self, out: &mut CodeBuilder, ctx: &RenderContext<'_>) {
        out.push_lines(&self.javadoc).push_lines(&self.annotations);

        let first_line = method_signature(self, ctx);
        if self.is_bodyless() {
            out.push_line(&format!("{first_line};"));
            return;
        }

        out.push_line(&format!("{first_line} {{"));
        push_body(out, &self.body);
    }
}

/// Everything up to, but excluding, the `;` or ` {`.
fn method_signature(method: &MethodSpec, ctx: &RenderContext<'_>) -> String {
    let mut line = String::new();

    if !(ctx.in_interface && method.visibility.is_public()) {
        line.push_str(method.visibility.as_str());
    }
    let is_abstract = method.is_bodyless() && !method.is_native && !ctx.in_interface;
    for (set, keyword) in [
        (method.is_default, "default "),
        (method.is_static, "static "),
        (method.is_final, "final "),
        (is_abstract, "abstract "),
        (method.is_synchronized, "synchronized "),
        (method.is_native, "native "),
    ] {
        if set {
            line.push_str(keyword);
        }
    }

    if !method.type_parameters.is_empty() {
        line.push_str(&type_parameters_clause(&method.type_parameters, ctx));
        line.push(' ');
    }

    if !method.constructor {
        match &method.return_type {
            Some(ty) => line.push_str(&ctx.type_name(ty)),
            None => line.push_str("void"),
        }
        line.push(' ');
    }

    line.push_str(&method.name);
    let params: Vec<String> = method.params.iter().map(|p| param(p, ctx)).collect();
    line.push('(');
    line.push_str(&params.join(", "));
    line.push(')');

    if !method.exceptions.is_empty() {
        line.push_str(" throws ");
        line.push_str(&ctx.type_names(&method.exceptions).join(", "));
    }
    line
}

/// A parameter or record component: `@A @B Type name` or `Type... name`.
pub(super) fn param(param: &ParamSpec, ctx: &RenderContext<'_>) -> String {
    let mut text = String::new();
    for annotation in &param.annotations {
        text.push_str(annotation);
        text.push(' ');
    }
    text.push_str(&ctx.type_name(&param.ty));
    if param.varargs {
        text.push_str("...");
    }
    text.push(' ');
    text.push_str(&param.name);
    text
}

impl JavaRender for InitBlockSpec {
    fn render_into(&self, out: &mut CodeBuilder, _ctx: &RenderContext<'_>) {
        out.push_lines(&self.javadoc);
        out.push_line(if self.is_static { "static {" } else { "{" });
        push_body(out, &self.body);
    }
}
