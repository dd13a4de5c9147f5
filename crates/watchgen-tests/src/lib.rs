//! End-to-end coverage of the analysis-and-synthesis pipeline, driven
//! through the `watchgen` facade against engine-flavored snapshots.

pub mod fixtures;
