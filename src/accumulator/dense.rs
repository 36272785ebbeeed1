//! Dense accumulator
//!
//! Uses a slot per column of the matrix, so merging a duplicate is a
//! direct lookup. Only the touched columns are sorted on extraction.

use crate::accumulator::{Accumulator, MergeOverflow};
use crate::matrix::EdgeValue;

/// Dense accumulator for a single row
pub struct DenseAccumulator<T> {
    /// One slot per column, `None` when the column is untouched
    slots: Vec<Option<T>>,

    /// Columns touched in the current row
    col_indices: Vec<usize>,
}

impl<T: EdgeValue> DenseAccumulator<T> {
    /// Create a new dense accumulator with specified column capacity
    ///
    /// # Arguments
    ///
    /// * `n_cols` - The number of columns in the matrix
    pub fn new(n_cols: usize) -> Self {
        Self {
            slots: vec![None; n_cols],
            col_indices: Vec::new(),
        }
    }
}

impl<T: EdgeValue> Accumulator<T> for DenseAccumulator<T> {
    fn reset(&mut self) {
        for &col in &self.col_indices {
            self.slots[col] = None;
        }
        self.col_indices.clear();
    }

    fn accumulate(&mut self, col: usize, val: T) -> Result<(), MergeOverflow> {
        match &mut self.slots[col] {
            Some(acc) => *acc = acc.checked_merge(val).ok_or(MergeOverflow { col })?,
            slot => {
                *slot = Some(val);
                self.col_indices.push(col);
            }
        }
        Ok(())
    }

    fn extract_result(&mut self) -> Result<(Vec<usize>, Vec<T>), MergeOverflow> {
        self.col_indices.sort_unstable();

        let cols = std::mem::take(&mut self.col_indices);
        let values = cols
            .iter()
            .filter_map(|&col| self.slots[col].take())
            .collect();

        Ok((cols, values))
    }
}
