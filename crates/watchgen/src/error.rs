use thiserror::Error as ThisError;

///
/// Error
///
/// The host-facing error surface. Pipeline findings are diagnostics,
/// never errors; only snapshot construction and export can fail.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] watchgen_schema::node::NodeError),

    #[error("export failed: {0}")]
    ExportError(#[from] serde_json::Error),
}
