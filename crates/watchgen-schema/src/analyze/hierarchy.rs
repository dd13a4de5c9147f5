use crate::prelude::*;

/// Class-level verdict: some strict ancestor must be one of the two
/// trackable base kinds, and the class itself must be concrete.
///
/// Either failure rejects the whole class with one error diagnostic;
/// other classes are unaffected.
pub(super) fn check_class(
    table: &SymbolTable,
    markers: &MarkerSet,
    class: ClassId,
    diagnostics: &mut Diagnostics,
) -> bool {
    let trackable = table
        .ancestors(class)
        .any(|ancestor| markers.is_trackable_base(&table.class_path(ancestor)));

    if !trackable {
        diagnostics.push(Diagnostic::class_not_trackable(
            &table.class_path(class),
            &markers.trackable_bases,
        ));
        return false;
    }

    if table.class(class).is_abstract {
        diagnostics.push(Diagnostic::class_is_abstract(&table.class_path(class)));
        return false;
    }

    true
}
