use crate::prelude::*;
use derive_more::Display;

///
/// Marker
///
/// An opaque identity attached to a field declaration. The host supplies
/// these; the pipeline compares them by value and never interprets them.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub struct Marker(String);

impl Marker {
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Marker {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

///
/// MarkerSet
///
/// The recognized identities for one analysis pass: the watch marker that
/// requests change-tracking, the persistence marker that opts a non-public
/// field into serialization, and the two trackable base kinds compared
/// against ancestor class paths.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarkerSet {
    pub watch: Marker,
    pub persist: Marker,
    pub trackable_bases: [String; 2],
}

impl MarkerSet {
    #[must_use]
    pub fn new(watch: Marker, persist: Marker, trackable_bases: [impl Into<String>; 2]) -> Self {
        let [first, second] = trackable_bases;

        Self {
            watch,
            persist,
            trackable_bases: [first.into(), second.into()],
        }
    }

    #[must_use]
    pub fn is_trackable_base(&self, class_path: &str) -> bool {
        self.trackable_bases.iter().any(|base| base == class_path)
    }
}
