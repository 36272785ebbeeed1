//! Sort-based accumulator
//!
//! Collects entries in an unsorted list, then sorts by column and merges
//! duplicate entries. Memory use is proportional to the row length, which
//! makes it the choice for matrices with many columns.

use crate::accumulator::{Accumulator, MergeOverflow};
use crate::matrix::EdgeValue;

/// Sort-based accumulator for a single row
pub struct SortAccumulator<T> {
    /// Temporary storage for column indices
    col_indices: Vec<usize>,

    /// Temporary storage for values
    values: Vec<T>,
}

impl<T: EdgeValue> SortAccumulator<T> {
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the temporary storage
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            col_indices: Vec::with_capacity(initial_capacity),
            values: Vec::with_capacity(initial_capacity),
        }
    }
}

impl<T: EdgeValue> Accumulator<T> for SortAccumulator<T> {
    fn reset(&mut self) {
        self.col_indices.clear();
        self.values.clear();
    }

    fn accumulate(&mut self, col: usize, val: T) -> Result<(), MergeOverflow> {
        self.col_indices.push(col);
        self.values.push(val);
        Ok(())
    }

    fn extract_result(&mut self) -> Result<(Vec<usize>, Vec<T>), MergeOverflow> {
        if self.col_indices.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        // Stable sort keeps duplicates in input order while merging
        let mut order: Vec<usize> = (0..self.col_indices.len()).collect();
        order.sort_by_key(|&i| self.col_indices[i]);

        let mut sorted_cols = Vec::with_capacity(order.len());
        let mut sorted_vals: Vec<T> = Vec::with_capacity(order.len());

        for &idx in &order {
            let col = self.col_indices[idx];
            let val = self.values[idx];

            match (sorted_cols.last(), sorted_vals.last_mut()) {
                (Some(&last), Some(acc)) if last == col => match acc.checked_merge(val) {
                    Some(sum) => *acc = sum,
                    None => {
                        self.reset();
                        return Err(MergeOverflow { col });
                    }
                },
                _ => {
                    sorted_cols.push(col);
                    sorted_vals.push(val);
                }
            }
        }

        self.reset();
        Ok((sorted_cols, sorted_vals))
    }
}
