//! Host-language text rendering for one class extension.

use crate::hash::{HASH_MULTIPLIER, HASH_SEED};
use watchgen_schema::{
    analyze::ClassPlan,
    node::{SymbolTable, TypeCategory},
};

const INDENT: &str = "    ";

/// Render the incremental class extension for one plan: the stored
/// last-observed hash, the hash routine over the plan's fields in
/// canonical order, and the public change-detection method.
pub(crate) fn class_source(table: &SymbolTable, plan: &ClassPlan) -> String {
    let class = table.class(plan.class);
    // Only the private members take the hiding marker; the public method
    // extends the surface without colliding.
    let shadow = if plan.shadows_base { "new " } else { "" };

    let mut body = String::new();
    line(&mut body, 0, &format!("public partial class {}", class.name));
    line(&mut body, 0, "{");
    line(
        &mut body,
        1,
        &format!("private {shadow}int observableGenerated_lastHash;"),
    );
    line(&mut body, 0, "");
    line(
        &mut body,
        1,
        &format!("private {shadow}int observableGenerated_GetCurrentHash()"),
    );
    line(&mut body, 1, "{");
    line(&mut body, 2, "unchecked");
    line(&mut body, 2, "{");
    line(&mut body, 3, &format!("int hash = {HASH_SEED};"));

    for &field in &plan.fields {
        let symbol = table.field(field);
        let name = &symbol.name;
        let fold = match symbol.category {
            TypeCategory::Value => {
                format!("hash = hash * {HASH_MULTIPLIER} + this.{name}.GetHashCode();")
            }
            TypeCategory::Reference => format!(
                "hash = hash * {HASH_MULTIPLIER} + (this.{name} == null ? 0 : this.{name}.GetHashCode());"
            ),
        };
        line(&mut body, 3, &fold);
    }

    line(&mut body, 3, "return hash;");
    line(&mut body, 2, "}");
    line(&mut body, 1, "}");
    line(&mut body, 0, "");
    line(&mut body, 1, "/// <summary>");
    line(
        &mut body,
        1,
        "/// Checks whether any watched field has changed since the last check.",
    );
    line(&mut body, 1, "/// </summary>");
    line(
        &mut body,
        1,
        "/// <returns>True if any change occurred since the last check, false otherwise.</returns>",
    );
    line(&mut body, 1, "public bool HaveWatchedValuesChanged()");
    line(&mut body, 1, "{");
    line(
        &mut body,
        2,
        "var currentHash = this.observableGenerated_GetCurrentHash();",
    );
    line(&mut body, 0, "");
    line(&mut body, 2, "if (this.observableGenerated_lastHash == currentHash)");
    line(&mut body, 3, "return false;");
    line(&mut body, 0, "");
    line(&mut body, 2, "this.observableGenerated_lastHash = currentHash;");
    line(&mut body, 0, "");
    line(&mut body, 2, "return true;");
    line(&mut body, 1, "}");
    line(&mut body, 0, "}");

    // The class extension is wrapped only when the host declared the
    // class outside the default namespace.
    match &class.namespace {
        Some(namespace) => wrap_namespace(namespace, &body),
        None => body,
    }
}

fn line(out: &mut String, level: usize, text: &str) {
    if text.is_empty() {
        out.push('\n');
        return;
    }

    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn wrap_namespace(namespace: &str, body: &str) -> String {
    let mut out = String::new();
    line(&mut out, 0, &format!("namespace {namespace}"));
    line(&mut out, 0, "{");

    for text in body.lines() {
        line(&mut out, 1, text);
    }

    line(&mut out, 0, "}");
    out
}
