//! Symbol model and watched-field analysis for one snapshot of a host
//! program's type declarations.
//!
//! The host hands over a fully resolved [`node::SymbolTable`]; the
//! [`analyze`] pipeline decides which classes receive generated
//! change-detection members and reports every finding as a
//! [`diagnostic::Diagnostic`] record, never as a fault.

pub mod analyze;
pub mod diagnostic;
pub mod node;

#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diagnostic::{Diagnostic, DiagnosticCode, Diagnostics, Severity},
        node::*,
    };
    pub use serde::{Deserialize, Serialize};
}
