//! Error types for edge list conversion

use crate::edges::Field;

/// Errors raised while decoding an edge list or checking a matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeListError {
    /// The edge list has no records, so no shape can be inferred.
    #[error("Edge list is empty")]
    EmptyInput,

    /// A record has the wrong number of fields or an unusable index field.
    #[error("Malformed edge at position {position}: {reason}")]
    MalformedEdge { position: usize, reason: String },

    /// A node index does not fit the 32-bit signed index width.
    #[error("Node index {value} at position {position} exceeds the maximum index {max}")]
    IndexOverflow {
        position: usize,
        value: Field,
        max: u32,
    },

    /// A node index is negative.
    #[error("Negative node index {value} at position {position}")]
    NegativeIndex { position: usize, value: Field },

    /// Summing duplicate or mirrored weights overflowed the value type.
    #[error("Weight overflow while summing entry ({row}, {col})")]
    WeightOverflow { row: usize, col: usize },

    /// A square matrix was required.
    #[error("Matrix is not square: {n_rows} × {n_cols}")]
    DimensionMismatch { n_rows: usize, n_cols: usize },

    /// Invalid CSR structure.
    #[error("Invalid CSR format: {0}")]
    InvalidCsr(String),
}

/// Result type for edge list operations.
pub type Result<T> = std::result::Result<T, EdgeListError>;
