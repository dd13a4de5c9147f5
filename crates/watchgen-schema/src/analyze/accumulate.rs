use super::{eligibility, filter, filter::ClassGroup};
use crate::prelude::*;

/// Assemble the canonical hash-input order for a leaf class: root
/// ancestor first, leaf last, declaration order within each level.
///
/// The leaf contributes all of its eligible fields regardless of
/// accessibility; an ancestor contributes only the fields a subclass can
/// see, so private inherited state is skipped without a finding. Any
/// ancestor that owns a group feeds its descendants, whatever its own
/// class verdict was.
pub(super) fn hash_fields(
    table: &SymbolTable,
    markers: &MarkerSet,
    groups: &[ClassGroup],
    leaf: ClassId,
    diagnostics: &mut Diagnostics,
) -> Vec<FieldId> {
    let mut chain: Vec<ClassId> = std::iter::once(leaf).chain(table.ancestors(leaf)).collect();
    chain.reverse();

    let mut fields = Vec::new();
    for level in chain {
        let Some(group) = filter::group_for(groups, level) else {
            continue;
        };

        for &field in &group.fields {
            if level != leaf && table.field(field).accessibility.is_private() {
                continue;
            }
            if eligibility::is_persisted(table, markers, field, diagnostics) {
                fields.push(field);
            }
        }
    }

    fields
}
