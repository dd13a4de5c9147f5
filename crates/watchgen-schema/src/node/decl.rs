use crate::prelude::*;

///
/// FieldDecl
///
/// One written declaration site. A multi-variable declaration yields one
/// site with several declarators, all sharing the declaration's
/// modifiers, markers, and declared type.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldDecl {
    pub class: ClassId,
    pub fields: Vec<FieldId>,
}

///
/// DeclSpec
///
/// Host-side description of a declaration site, expanded into one
/// [`FieldSymbol`] per declared name on insertion.
///

#[derive(Clone, Debug)]
pub struct DeclSpec {
    pub accessibility: Accessibility,
    pub category: TypeCategory,
    pub storage: StorageFlags,
    pub markers: Vec<Marker>,
    pub names: Vec<String>,
}

impl DeclSpec {
    #[must_use]
    pub fn new<I, S>(accessibility: Accessibility, category: TypeCategory, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accessibility,
            category,
            storage: StorageFlags::NONE,
            markers: Vec::new(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn marked(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub const fn storage(mut self, storage: StorageFlags) -> Self {
        self.storage = storage;
        self
    }
}
