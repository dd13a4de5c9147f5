use crate::prelude::*;

///
/// ClassGroup
///
/// The watch-marked fields directly declared by one class, in
/// declaration order. A group exists only for classes with at least one
/// watch-marked field.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassGroup {
    pub class: ClassId,
    pub fields: Vec<FieldId>,
}

/// Resolve candidate sites to field symbols, keep only watch-marked
/// fields, and group them by declaring class identity.
///
/// Groups appear in first-seen order; fields keep declaration order.
#[must_use]
pub(super) fn group_watched(
    table: &SymbolTable,
    markers: &MarkerSet,
    candidates: &[FieldId],
) -> Vec<ClassGroup> {
    let mut groups: Vec<ClassGroup> = Vec::new();

    for &id in candidates {
        let field = table.field(id);
        if !field.has_marker(&markers.watch) {
            continue;
        }

        match groups.iter_mut().find(|group| group.class == field.class) {
            Some(group) => group.fields.push(id),
            None => groups.push(ClassGroup {
                class: field.class,
                fields: vec![id],
            }),
        }
    }

    groups
}

/// The group a class owns, if any.
#[must_use]
pub(super) fn group_for(groups: &[ClassGroup], class: ClassId) -> Option<&ClassGroup> {
    groups.iter().find(|group| group.class == class)
}
