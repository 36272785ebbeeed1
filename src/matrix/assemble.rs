//! Sparse assembly: coordinate buffers to CSR
//!
//! Entries are first bucketed by row with a counting sort, then each row is
//! run through an accumulator that orders it by column and sums duplicate
//! coordinates into a single stored entry.

use tracing::trace;

use crate::accumulator::create_accumulator;
use crate::constants::DENSE_ACCUMULATOR_THRESHOLD;
use crate::error::{EdgeListError, Result};
use crate::matrix::{EdgeValue, SparseMatrixCSR};
use crate::utils::exclusive_scan;

/// Builds a CSR matrix from parallel coordinate buffers
///
/// Entries sharing a `(row, col)` pair are summed (for presence markers,
/// combined by logical OR). Column indices are strictly ascending within
/// every row. Entries whose sum is zero are kept as explicit entries.
///
/// # Errors
///
/// [`EdgeListError::WeightOverflow`] if the integer weights of one
/// coordinate do not sum within `i64`.
///
/// # Panics
///
/// Panics if the buffers differ in length or an index lies outside
/// `n_rows × n_cols`.
pub fn assemble_csr<T: EdgeValue>(
    n_rows: usize,
    n_cols: usize,
    rows: &[u32],
    cols: &[u32],
    values: &[T],
) -> Result<SparseMatrixCSR<T>> {
    assert_eq!(rows.len(), cols.len(), "rows.len() must equal cols.len()");
    assert_eq!(rows.len(), values.len(), "rows.len() must equal values.len()");

    // Count entries per row
    let mut row_counts = vec![0usize; n_rows];
    for &row in rows {
        row_counts[row as usize] += 1;
    }
    let bucket_ptr = exclusive_scan(&row_counts);

    // Stable counting sort of entry positions by row
    let mut order = vec![0usize; rows.len()];
    let mut next = bucket_ptr.clone();
    for (idx, &row) in rows.iter().enumerate() {
        let row = row as usize;
        order[next[row]] = idx;
        next[row] += 1;
    }

    let longest_row = row_counts.iter().copied().max().unwrap_or(0);
    let mut acc = create_accumulator::<T>(n_cols, DENSE_ACCUMULATOR_THRESHOLD, longest_row);

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    let mut col_idx = Vec::with_capacity(rows.len());
    let mut stored = Vec::with_capacity(rows.len());
    row_ptr.push(0);

    for row in 0..n_rows {
        for &idx in &order[bucket_ptr[row]..bucket_ptr[row + 1]] {
            let col = cols[idx] as usize;
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
            acc.accumulate(col, values[idx])
                .map_err(|e| EdgeListError::WeightOverflow { row, col: e.col })?;
        }

        let (row_cols, row_vals) = acc
            .extract_result()
            .map_err(|e| EdgeListError::WeightOverflow { row, col: e.col })?;
        col_idx.extend(row_cols);
        stored.extend(row_vals);
        row_ptr.push(col_idx.len());
    }

    trace!(
        "Assembled {} × {} matrix: {} entries -> {} stored",
        n_rows,
        n_cols,
        rows.len(),
        col_idx.len()
    );

    Ok(SparseMatrixCSR::new(n_rows, n_cols, row_ptr, col_idx, stored))
}
