//! Error types for the IR.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("Formula invariant violated: {reason} (in `{formula}`)")]
    InvariantViolation { formula: String, reason: String },
    #[error("Unknown simplification strategy '{name}' (expected one of: {expected})")]
    UnknownStrategy { name: String, expected: String },
    #[error("Lasso cycle cannot be empty")]
    EmptyLassoCycle,
}
