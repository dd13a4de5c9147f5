use crate::prelude::*;

/// Collect every declarator site that could plausibly be watch-marked:
/// the declaration is public or carries at least one marker.
///
/// Purely syntactic, so over-admission is fine; later stages narrow. An
/// empty result is valid.
#[must_use]
pub(super) fn candidates(table: &SymbolTable) -> Vec<FieldId> {
    let mut sites = Vec::new();

    for decl in table.decls() {
        // Modifiers and marker lists attach to the declaration, so the
        // first declarator carries the shared syntax.
        let Some(&first) = decl.fields.first() else {
            continue;
        };

        let site = table.field(first);
        if site.accessibility.is_public() || !site.markers.is_empty() {
            sites.extend_from_slice(&decl.fields);
        }
    }

    sites
}
