//! Source synthesis for watched classes: turns analysis plans into
//! self-contained generated units the host build merges back into the
//! program. Synthesis never fails; a plan with no eligible fields still
//! yields a unit whose routine returns the bare seed.

pub mod hash;

mod source;

use serde::{Deserialize, Serialize};
use tracing::debug;
use watchgen_schema::{
    analyze::{Analysis, ClassPlan},
    node::{ClassId, SymbolTable},
};

///
/// EmitOptions
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmitOptions {
    /// Host-appropriate source extension appended to the synthetic
    /// `.g` file stem.
    pub extension: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            extension: ".cs".to_string(),
        }
    }
}

///
/// GeneratedUnit
///
/// One synthesized source artifact for one eligible concrete class.
/// Ownership passes to the host build for incorporation; the pipeline
/// never persists it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratedUnit {
    pub class: ClassId,
    pub class_name: String,
    pub file_name: String,
    pub source: String,
}

/// Emit one unit per plan, in plan order.
#[must_use]
pub fn generate_units(
    table: &SymbolTable,
    analysis: &Analysis,
    options: &EmitOptions,
) -> Vec<GeneratedUnit> {
    let units: Vec<GeneratedUnit> = analysis
        .plans
        .iter()
        .map(|plan| generate_unit(table, plan, options))
        .collect();

    debug!(units = units.len(), "synthesized generated units");

    units
}

fn generate_unit(table: &SymbolTable, plan: &ClassPlan, options: &EmitOptions) -> GeneratedUnit {
    let class = table.class(plan.class);

    GeneratedUnit {
        class: plan.class,
        class_name: class.name.clone(),
        file_name: format!("{}_observable.g{}", class.name, options.extension),
        source: source::class_source(table, plan),
    }
}
