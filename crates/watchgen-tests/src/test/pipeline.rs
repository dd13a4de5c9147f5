use crate::fixtures::{engine_snapshot, unit_for, watch};
use watchgen::prelude::*;

#[test]
fn empty_snapshot_produces_nothing() {
    let snapshot = engine_snapshot();
    let generation = snapshot.run();

    assert!(generation.units.is_empty());
    assert!(
        generation.diagnostics.is_empty(),
        "an empty snapshot is not a finding"
    );
}

#[test]
fn unmarked_fields_produce_nothing() {
    let mut snapshot = engine_snapshot();
    let player = snapshot.concrete_class("Player");
    snapshot.decl(
        player,
        DeclSpec::new(Accessibility::Public, TypeCategory::Value, ["hp"]),
    );

    let generation = snapshot.run();
    assert!(generation.units.is_empty());
    assert!(generation.diagnostics.is_empty());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let mut snapshot = engine_snapshot();
    let player = snapshot.concrete_class("Player");
    snapshot.watched_field(player, "hp");
    snapshot.decl(
        player,
        DeclSpec::new(Accessibility::Private, TypeCategory::Reference, ["target"]).marked(watch()),
    );

    let first = snapshot.run();
    let second = snapshot.run();

    assert_eq!(first.units, second.units, "unit text must not drift");
    assert_eq!(
        first.diagnostics, second.diagnostics,
        "diagnostics must not drift"
    );
}

#[test]
fn static_watch_field_warns_but_sibling_survives() {
    let mut snapshot = engine_snapshot();
    let player = snapshot.concrete_class("Player");
    snapshot.watched_field(player, "hp");
    snapshot.decl(
        player,
        DeclSpec::new(Accessibility::Public, TypeCategory::Value, ["instances"])
            .marked(watch())
            .storage(StorageFlags::STATIC),
    );

    let generation = snapshot.run();

    assert_eq!(generation.diagnostics.len(), 1);
    assert_eq!(generation.diagnostics[0].severity, Severity::Warning);
    assert_eq!(generation.diagnostics[0].code, DiagnosticCode::NonPersistedField);

    let unit = unit_for(&generation, "Player").expect("the class itself stays eligible");
    assert!(
        unit.source.contains("this.hp.GetHashCode()"),
        "the persisted sibling still feeds the hash"
    );
    assert!(
        !unit.source.contains("this.instances"),
        "the static field must not feed the hash"
    );
}

#[test]
fn zero_eligible_fields_still_generates_the_bare_seed() {
    let mut snapshot = engine_snapshot();
    let player = snapshot.concrete_class("Player");
    snapshot.decl(
        player,
        DeclSpec::new(Accessibility::Public, TypeCategory::Value, ["instances"])
            .marked(watch())
            .storage(StorageFlags::STATIC),
    );

    let generation = snapshot.run();

    assert_eq!(generation.diagnostics.len(), 1);
    let unit = unit_for(&generation, "Player").expect("the class is synthesized regardless");
    assert!(
        unit.source.contains("int hash = 17;"),
        "the routine still seeds the accumulator"
    );
    assert!(
        !unit.source.contains("hash = hash * 23"),
        "no fold lines without eligible fields"
    );
    assert!(unit.source.contains("public bool HaveWatchedValuesChanged()"));
}

#[test]
fn generation_exports_as_one_json_document() {
    let mut snapshot = engine_snapshot();
    let player = snapshot.concrete_class("Player");
    snapshot.watched_field(player, "hp");
    snapshot.decl(
        player,
        DeclSpec::new(Accessibility::Public, TypeCategory::Value, ["instances"])
            .marked(watch())
            .storage(StorageFlags::STATIC),
    );

    let generation = snapshot.run();
    let json = generation.to_json().expect("generation serializes");
    let document: serde_json::Value =
        serde_json::from_str(&json).expect("export is valid JSON");

    assert_eq!(
        document["units"][0]["file_name"], "Player_observable.g.cs",
        "units and diagnostics travel in one document"
    );
    assert_eq!(
        document["diagnostics"][0]["code"], "WGEN0004",
        "codes export as their stable strings"
    );
}
