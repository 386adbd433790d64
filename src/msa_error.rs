
use simple_error::SimpleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MsaError>;

/// All the ways building or querying a multiple alignment can fail.
/// None of these are transient; retrying with the same inputs gives the same error.
#[derive(Error, Debug)]
pub enum MsaError {
    /// A row reported a deletion while the column was being resolved as an insertion
    #[error("Invariant violation at column {column}: row {row} reports a deletion in an insertion column")]
    InvariantViolation { row: usize, column: usize },

    /// A row's operations emit more bases than its sequence holds
    #[error("Row {name:?} requires {required} bases from its operations, but the sequence has {available}")]
    InsufficientBases { name: String, required: usize, available: usize },

    #[error("No row found named {0:?}")]
    NotFound(String),

    #[error("Duplicate rows found named {0:?}")]
    DuplicateName(String),

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid operations: {0}")]
    InvalidOps(#[from] SimpleError)
}
