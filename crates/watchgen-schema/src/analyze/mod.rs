//! Watched-field analysis: one deterministic pass over a symbol-table
//! snapshot, stages run in dependency order. Findings accumulate as
//! diagnostics; nothing aborts the pass.

mod accumulate;
mod eligibility;
mod filter;
mod hierarchy;
mod scan;
mod shadow;

pub use filter::ClassGroup;

use crate::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

///
/// ClassPlan
///
/// One surviving concrete class, its canonical hash-input field order,
/// and whether its generated members must hide the base class's.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassPlan {
    pub class: ClassId,
    pub fields: Vec<FieldId>,
    pub shadows_base: bool,
}

///
/// Analysis
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Analysis {
    pub plans: Vec<ClassPlan>,
    pub diagnostics: Diagnostics,
}

/// Run the full pipeline over one snapshot.
///
/// A snapshot without watch-marked fields is not a finding: the result is
/// empty and diagnostic-free.
#[must_use]
pub fn analyze(table: &SymbolTable, markers: &MarkerSet) -> Analysis {
    let candidates = scan::candidates(table);
    let groups = filter::group_watched(table, markers, &candidates);
    if groups.is_empty() {
        return Analysis::default();
    }

    debug!(
        candidates = candidates.len(),
        groups = groups.len(),
        "grouped watch-marked fields by declaring class"
    );

    let mut diagnostics = Diagnostics::new();

    // All class verdicts land before any field gathering; every class
    // error precedes every field warning in the diagnostic stream.
    let mut verdicts = BTreeMap::new();
    for group in &groups {
        let eligible = hierarchy::check_class(table, markers, group.class, &mut diagnostics);
        verdicts.insert(group.class, eligible);
    }

    let mut plans = Vec::new();
    for group in &groups {
        if !verdicts[&group.class] {
            continue;
        }

        let fields = accumulate::hash_fields(table, markers, &groups, group.class, &mut diagnostics);
        let shadows_base = shadow::hides_base_members(table, &groups, group.class);

        plans.push(ClassPlan {
            class: group.class,
            fields,
            shadows_base,
        });
    }

    debug!(
        plans = plans.len(),
        diagnostics = diagnostics.len(),
        "analysis pass complete"
    );

    Analysis { plans, diagnostics }
}
