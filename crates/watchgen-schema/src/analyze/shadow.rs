use super::filter::{self, ClassGroup};
use crate::prelude::*;

/// The leaf's generated members must hide the base class's when the
/// immediate base will itself carry them: it owns a group and is
/// concrete. An abstract or group-less base gets no generated members,
/// so there is nothing to hide.
#[must_use]
pub(super) fn hides_base_members(
    table: &SymbolTable,
    groups: &[ClassGroup],
    leaf: ClassId,
) -> bool {
    let Some(base) = table.class(leaf).base else {
        return false;
    };

    filter::group_for(groups, base).is_some() && !table.class(base).is_abstract
}
