use crate::prelude::*;
use derive_more::{Deref, Display, IntoIterator};

///
/// FieldId
///
/// Index into the symbol table's field vector.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct FieldId(pub(crate) usize);

impl FieldId {
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

///
/// Accessibility
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Accessibility {
    Public,
    Protected,
    Internal,
    Private,
}

impl Accessibility {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

///
/// TypeCategory
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum TypeCategory {
    Value,
    Reference,
}

///
/// StorageFlags
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct StorageFlags {
    pub is_static: bool,
    pub is_const: bool,
    pub is_readonly: bool,
}

impl StorageFlags {
    pub const NONE: Self = Self {
        is_static: false,
        is_const: false,
        is_readonly: false,
    };

    pub const STATIC: Self = Self {
        is_static: true,
        ..Self::NONE
    };

    pub const CONST: Self = Self {
        is_const: true,
        ..Self::NONE
    };

    pub const READONLY: Self = Self {
        is_readonly: true,
        ..Self::NONE
    };
}

///
/// MarkerList
///

#[derive(Clone, Debug, Default, Deref, Deserialize, IntoIterator, Serialize)]
#[into_iterator(owned, ref)]
pub struct MarkerList(Vec<Marker>);

impl MarkerList {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Marker>> for MarkerList {
    fn from(markers: Vec<Marker>) -> Self {
        Self(markers)
    }
}

impl FromIterator<Marker> for MarkerList {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// FieldSymbol
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldSymbol {
    /// Declaring class, a non-owning back-reference.
    pub class: ClassId,
    pub name: String,
    pub category: TypeCategory,
    pub accessibility: Accessibility,
    pub storage: StorageFlags,

    #[serde(default, skip_serializing_if = "MarkerList::is_empty")]
    pub markers: MarkerList,
}

impl FieldSymbol {
    #[must_use]
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }
}
