use crate::prelude::*;

/// Field-level verdict: the host persists a field only if it is
/// non-static, non-constant, non-readonly, and either public or
/// explicitly marked for persistence.
///
/// A violation warns and drops the field; siblings and the class itself
/// stay eligible.
pub(super) fn is_persisted(
    table: &SymbolTable,
    markers: &MarkerSet,
    field: FieldId,
    diagnostics: &mut Diagnostics,
) -> bool {
    let symbol = table.field(field);
    let persisted = !symbol.storage.is_static
        && !symbol.storage.is_const
        && !symbol.storage.is_readonly
        && (symbol.accessibility.is_public() || symbol.has_marker(&markers.persist));

    if !persisted {
        diagnostics.push(Diagnostic::field_not_persisted(
            &table.field_path(field),
            &markers.persist,
        ));
    }

    persisted
}
