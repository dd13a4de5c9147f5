//! Shared fixtures for pipeline unit tests: an engine-flavored snapshot
//! with the two trackable base kinds pre-inserted.

use crate::prelude::*;

pub(crate) const WATCH: &str = "Observable.Watch";
pub(crate) const PERSIST: &str = "Engine.SerializeField";
pub(crate) const BEHAVIOUR: &str = "Engine.Behaviour";
pub(crate) const ASSET: &str = "Engine.ScriptableAsset";

pub(crate) fn watch() -> Marker {
    Marker::new(WATCH)
}

pub(crate) fn persist() -> Marker {
    Marker::new(PERSIST)
}

pub(crate) fn markers() -> MarkerSet {
    MarkerSet::new(watch(), persist(), [BEHAVIOUR, ASSET])
}

pub(crate) struct Harness {
    pub table: SymbolTable,
    pub behaviour: ClassId,
    pub asset: ClassId,
}

pub(crate) fn harness() -> Harness {
    let mut table = SymbolTable::new();
    let behaviour = table
        .insert_class(ClassSymbol::new("Behaviour").in_namespace("Engine"))
        .expect("engine base inserts into an empty table");
    let asset = table
        .insert_class(ClassSymbol::new("ScriptableAsset").in_namespace("Engine"))
        .expect("engine base inserts into an empty table");

    Harness {
        table,
        behaviour,
        asset,
    }
}

impl Harness {
    /// Concrete class in the `Game` namespace deriving from `Behaviour`.
    pub fn concrete_class(&mut self, name: &str) -> ClassId {
        let behaviour = self.behaviour;
        self.class(ClassSymbol::new(name).in_namespace("Game").extending(behaviour))
    }

    pub fn class(&mut self, class: ClassSymbol) -> ClassId {
        self.table
            .insert_class(class)
            .expect("fixture classes reference existing bases")
    }

    pub fn decl(&mut self, class: ClassId, spec: DeclSpec) -> Vec<FieldId> {
        self.table
            .insert_decl(class, spec)
            .expect("fixture declarations target existing classes")
    }

    /// Public value-category field carrying the watch marker.
    pub fn watched_field(&mut self, class: ClassId, name: &str) -> FieldId {
        self.decl(
            class,
            DeclSpec::new(Accessibility::Public, TypeCategory::Value, [name]).marked(watch()),
        )[0]
    }
}
