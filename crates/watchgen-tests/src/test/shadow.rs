use crate::fixtures::{engine_snapshot, unit_for};
use watchgen::prelude::*;

#[test]
fn concrete_base_and_subclass_both_generate_with_hiding() {
    let mut snapshot = engine_snapshot();
    let behaviour = snapshot.behaviour;
    let base = snapshot.class(
        ClassSymbol::new("Base")
            .in_namespace("Game")
            .extending(behaviour),
    );
    let leaf = snapshot.class(ClassSymbol::new("Leaf").in_namespace("Game").extending(base));
    snapshot.watched_field(base, "base_field");
    snapshot.watched_field(leaf, "leaf_field");

    let generation = snapshot.run();
    assert_eq!(generation.units.len(), 2);
    assert!(generation.diagnostics.is_empty());

    let base_unit = unit_for(&generation, "Base").expect("base generates");
    assert!(
        base_unit.source.contains("private int observableGenerated_lastHash;"),
        "the base declares fresh members"
    );
    assert!(!base_unit.source.contains("new int"));

    let leaf_unit = unit_for(&generation, "Leaf").expect("leaf generates");
    assert!(
        leaf_unit
            .source
            .contains("private new int observableGenerated_lastHash;"),
        "the subclass intentionally hides the base's stored hash"
    );
    assert!(
        leaf_unit
            .source
            .contains("private new int observableGenerated_GetCurrentHash()"),
        "the subclass intentionally hides the base's routine"
    );
    assert!(
        leaf_unit.source.contains("public bool HaveWatchedValuesChanged()")
            && !leaf_unit.source.contains("new bool"),
        "the public check method is never hiding-marked"
    );

    let base_pos = leaf_unit
        .source
        .find("this.base_field")
        .expect("inherited field feeds the subclass hash");
    let leaf_pos = leaf_unit
        .source
        .find("this.leaf_field")
        .expect("own field feeds the subclass hash");
    assert!(base_pos < leaf_pos, "base field first, then the subclass's own");
}

#[test]
fn abstract_base_produces_no_hiding() {
    let mut snapshot = engine_snapshot();
    let behaviour = snapshot.behaviour;
    let base = snapshot.class(
        ClassSymbol::new("Base")
            .in_namespace("Game")
            .extending(behaviour)
            .mark_abstract(),
    );
    let leaf = snapshot.class(ClassSymbol::new("Leaf").in_namespace("Game").extending(base));
    snapshot.watched_field(base, "base_field");
    snapshot.watched_field(leaf, "leaf_field");

    let generation = snapshot.run();
    let leaf_unit = unit_for(&generation, "Leaf").expect("leaf generates");

    assert!(
        !leaf_unit.source.contains("new int"),
        "nothing to hide when the base gets no members"
    );
}

#[test]
fn group_less_base_produces_no_hiding() {
    let mut snapshot = engine_snapshot();
    let behaviour = snapshot.behaviour;
    let base = snapshot.class(
        ClassSymbol::new("Quiet")
            .in_namespace("Game")
            .extending(behaviour),
    );
    let leaf = snapshot.class(ClassSymbol::new("Leaf").in_namespace("Game").extending(base));
    snapshot.watched_field(leaf, "leaf_field");

    let generation = snapshot.run();
    let leaf_unit = unit_for(&generation, "Leaf").expect("leaf generates");

    assert!(!leaf_unit.source.contains("new int"));
}
