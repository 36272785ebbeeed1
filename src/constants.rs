//! Centralized constants for the edge list conversion library

// ============================================================================
// INDEX LIMITS
// ============================================================================

/// Largest accepted node index (the range of a 32-bit signed index)
pub const MAX_INDEX: u32 = i32::MAX as u32;

/// Number of fields in an unweighted edge record `(row, col)`
pub const UNWEIGHTED_ARITY: usize = 2;

/// Number of fields in a weighted edge record `(row, col, weight)`
pub const WEIGHTED_ARITY: usize = 3;

// ============================================================================
// ACCUMULATOR THRESHOLDS
// ============================================================================

/// Largest column count assembled with the dense accumulator
pub const DENSE_ACCUMULATOR_THRESHOLD: usize = 256;

// ============================================================================
// DEBUG OUTPUT
// ============================================================================

/// Rows shown by the `Debug` implementation of sparse matrices
pub const DEBUG_MAX_ROWS: usize = 5;

/// Entries per row shown by the `Debug` implementation of sparse matrices
pub const DEBUG_MAX_ENTRIES: usize = 5;
