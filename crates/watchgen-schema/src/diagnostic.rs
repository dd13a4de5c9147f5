//! Findings as data records. The pipeline collects every finding and
//! keeps going; nothing here is ever raised as a fault.

use crate::prelude::*;
use derive_more::{Deref, Display, IntoIterator};

///
/// Severity
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

///
/// DiagnosticCode
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum DiagnosticCode {
    #[serde(rename = "WGEN0004")]
    NonPersistedField,

    #[serde(rename = "WGEN0001")]
    NonTrackableClass,
}

impl DiagnosticCode {
    /// Stable code string for tooling to filter on.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonPersistedField => "WGEN0004",
            Self::NonTrackableClass => "WGEN0001",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::NonPersistedField => Severity::Warning,
            Self::NonTrackableClass => Severity::Error,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NonPersistedField => "non-persisted watch field",
            Self::NonTrackableClass => "non-trackable watch class",
        }
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    fn new(code: DiagnosticCode, location: String, message: String) -> Self {
        Self {
            code,
            severity: code.severity(),
            location,
            message,
        }
    }

    #[must_use]
    pub fn class_not_trackable(class_path: &str, trackable_bases: &[String; 2]) -> Self {
        Self::new(
            DiagnosticCode::NonTrackableClass,
            class_path.to_string(),
            format!(
                "class {class_path} has watch-marked fields but derives from neither {} nor {}",
                trackable_bases[0], trackable_bases[1]
            ),
        )
    }

    #[must_use]
    pub fn class_is_abstract(class_path: &str) -> Self {
        Self::new(
            DiagnosticCode::NonTrackableClass,
            class_path.to_string(),
            format!("class {class_path} has watch-marked fields but is abstract"),
        )
    }

    #[must_use]
    pub fn field_not_persisted(field_path: &str, persist: &Marker) -> Self {
        Self::new(
            DiagnosticCode::NonPersistedField,
            field_path.to_string(),
            format!(
                "field {field_path} is watch-marked but would not be persisted; a persisted \
                 field must be non-static, non-constant, non-readonly, and either public or \
                 carry {persist}"
            ),
        )
    }
}

///
/// Diagnostics
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[into_iterator(owned, ref)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }
}
