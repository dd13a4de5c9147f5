//! Shared snapshot builders: an engine-flavored host program with the
//! two trackable base kinds pre-inserted.

use watchgen::prelude::*;

pub const WATCH: &str = "Observable.Watch";
pub const PERSIST: &str = "Engine.SerializeField";
pub const BEHAVIOUR: &str = "Engine.Behaviour";
pub const ASSET: &str = "Engine.ScriptableAsset";

#[must_use]
pub fn watch() -> Marker {
    Marker::new(WATCH)
}

#[must_use]
pub fn persist() -> Marker {
    Marker::new(PERSIST)
}

#[must_use]
pub fn markers() -> MarkerSet {
    MarkerSet::new(watch(), persist(), [BEHAVIOUR, ASSET])
}

///
/// Snapshot
///

pub struct Snapshot {
    pub table: SymbolTable,
    pub behaviour: ClassId,
    pub asset: ClassId,
}

#[must_use]
pub fn engine_snapshot() -> Snapshot {
    let mut table = SymbolTable::new();
    let behaviour = table
        .insert_class(ClassSymbol::new("Behaviour").in_namespace("Engine"))
        .expect("engine base inserts into an empty table");
    let asset = table
        .insert_class(ClassSymbol::new("ScriptableAsset").in_namespace("Engine"))
        .expect("engine base inserts into an empty table");

    Snapshot {
        table,
        behaviour,
        asset,
    }
}

impl Snapshot {
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

    #[must_use]
    pub fn run(&self) -> Generation {
        generate(&self.table, &markers(), &EmitOptions::default())
    }
}

/// The unit generated for a class, by name.
#[must_use]
pub fn unit_for<'a>(generation: &'a Generation, class_name: &str) -> Option<&'a GeneratedUnit> {
    generation
        .units
        .iter()
        .find(|unit| unit.class_name == class_name)
}
