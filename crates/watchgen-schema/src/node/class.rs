use crate::prelude::*;
use derive_more::Display;

///
/// ClassId
///
/// Index into the symbol table's class vector. A base link always refers
/// to an earlier insertion, so hierarchy walks cannot cycle.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

///
/// ClassSymbol
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassSymbol {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ClassId>,

    pub is_abstract: bool,
}

impl ClassSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            base: None,
            is_abstract: false,
        }
    }

    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub const fn extending(mut self, base: ClassId) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use]
    pub const fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Render the identity the host compares base kinds against.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
