//! watchgen: compile-time watched-field analysis and change-detection
//! source synthesis for component hosts.
//!
//! The host hands over one read-only snapshot of its type declarations
//! plus the marker identities it recognizes; [`generate`] runs the
//! analysis-and-synthesis pipeline and returns generated source units
//! alongside every finding. The pass is deterministic and never fails:
//! rejected classes and dropped fields come back as diagnostics, and an
//! empty snapshot comes back empty.

mod error;

pub use error::Error;
pub use watchgen_build::{EmitOptions, GeneratedUnit, hash};
pub use watchgen_schema::{analyze, diagnostic, node};

use serde::{Deserialize, Serialize};
use tracing::debug;
use watchgen_schema::{
    diagnostic::Diagnostics,
    node::{MarkerSet, SymbolTable},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, Generation, generate};
    pub use watchgen_build::{
        EmitOptions, GeneratedUnit,
        hash::{ChangeTracker, HASH_MULTIPLIER, HASH_SEED, fold_hash, reference_contribution},
    };
    pub use watchgen_schema::{
        analyze::{Analysis, ClassPlan, analyze},
        diagnostic::{Diagnostic, DiagnosticCode, Diagnostics, Severity},
        node::{
            Accessibility, ClassId, ClassSymbol, DeclSpec, FieldDecl, FieldId, FieldSymbol,
            Marker, MarkerList, MarkerSet, NodeError, StorageFlags, SymbolTable, TypeCategory,
        },
    };
}

///
/// Generation
///
/// The complete output of one pass: units for the host build, findings
/// for the host's diagnostic sink.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Generation {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Diagnostics,
}

impl Generation {
    /// Serialize units and diagnostics as one JSON document for host
    /// tooling.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

/// Run one full analysis-and-synthesis pass over a snapshot.
#[must_use]
pub fn generate(table: &SymbolTable, markers: &MarkerSet, options: &EmitOptions) -> Generation {
    let analysis = analyze::analyze(table, markers);
    let units = watchgen_build::generate_units(table, &analysis, options);

    debug!(
        units = units.len(),
        diagnostics = analysis.diagnostics.len(),
        "generation pass complete"
    );

    Generation {
        units,
        diagnostics: analysis.diagnostics,
    }
}
