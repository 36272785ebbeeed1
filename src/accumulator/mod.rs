//! Row accumulators for sparse assembly
//!
//! An accumulator collects the `(column, value)` entries of a single row in
//! arbitrary order and yields them sorted by column, with duplicate columns
//! merged by summation. Which implementation is used depends on the number
//! of columns of the matrix being assembled.

pub mod dense;
pub mod sort;

use crate::matrix::EdgeValue;

pub use dense::DenseAccumulator;
pub use sort::SortAccumulator;

/// Summing the entries of a column overflowed the value type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOverflow {
    /// Column whose sum overflowed
    pub col: usize,
}

/// Trait for accumulators that merge the entries of one row
pub trait Accumulator<T: EdgeValue> {
    /// Reset the accumulator to prepare for a new row
    fn reset(&mut self);

    /// Accumulate a single entry (column and value)
    fn accumulate(&mut self, col: usize, val: T) -> Result<(), MergeOverflow>;

    /// Extract the entries as sorted (column, value) pairs
    ///
    /// Returns a tuple of `(col_indices, values)` with entries sorted by
    /// column index and duplicate columns summed. The accumulator is left
    /// empty and can be reused for the next row.
    fn extract_result(&mut self) -> Result<(Vec<usize>, Vec<T>), MergeOverflow>;
}

/// Create an appropriate accumulator based on the matrix columns
///
/// # Arguments
///
/// * `n_cols` - The number of columns in the matrix being assembled
/// * `dense_threshold` - Largest column count that uses dense accumulation
/// * `initial_capacity` - Expected number of entries in a row
pub fn create_accumulator<T: EdgeValue>(
    n_cols: usize,
    dense_threshold: usize,
    initial_capacity: usize,
) -> Box<dyn Accumulator<T>> {
    if n_cols <= dense_threshold {
        Box::new(DenseAccumulator::new(n_cols))
    } else {
        Box::new(SortAccumulator::new(initial_capacity))
    }
}
