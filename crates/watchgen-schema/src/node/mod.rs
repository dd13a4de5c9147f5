mod class;
mod decl;
mod field;
mod marker;
mod table;

pub use class::*;
pub use decl::*;
pub use field::*;
pub use marker::*;
pub use table::*;

use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("unknown class id {0}")]
    UnknownClass(ClassId),
}
