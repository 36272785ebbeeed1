//! Conversion functions between matrix formats

use crate::matrix::{SparseMatrixCSC, SparseMatrixCSR};
use crate::utils::exclusive_scan;

/// Scatters entries grouped by one axis into buckets along the other axis
///
/// Returns the bucket pointers, the index along the outer axis of each
/// scattered entry, and for each scattered position the source position.
/// Outer positions are visited in ascending order, so the result is sorted
/// within every bucket.
fn scatter(
    n_buckets: usize,
    outer_ptr: &[usize],
    inner_idx: &[usize],
) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    // Count entries per bucket
    let mut counts = vec![0; n_buckets];
    for &inner in inner_idx {
        counts[inner] += 1;
    }

    // Compute bucket pointers via prefix sum
    let ptr = exclusive_scan(&counts);

    let nnz = inner_idx.len();
    let mut outer_idx = vec![0; nnz];
    let mut source = vec![0; nnz];
    let mut next = ptr.clone();

    for outer in 0..outer_ptr.len().saturating_sub(1) {
        for idx in outer_ptr[outer]..outer_ptr[outer + 1] {
            let inner = inner_idx[idx];
            let pos = next[inner];

            outer_idx[pos] = outer;
            source[pos] = idx;

            next[inner] += 1;
        }
    }

    (ptr, outer_idx, source)
}

impl<T: Copy> SparseMatrixCSR<T> {
    /// Converts this CSR matrix to CSC format
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        let (col_ptr, row_idx, source) = scatter(self.n_cols, &self.row_ptr, &self.col_idx);
        let values = source.iter().map(|&idx| self.values[idx]).collect();

        SparseMatrixCSC::new(self.n_rows, self.n_cols, col_ptr, row_idx, values)
    }
}

impl<T: Copy> SparseMatrixCSC<T> {
    /// Converts this CSC matrix to CSR format
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let (row_ptr, col_idx, source) = scatter(self.n_rows, &self.col_ptr, &self.row_idx);
        let values = source.iter().map(|&idx| self.values[idx]).collect();

        SparseMatrixCSR::new(self.n_rows, self.n_cols, row_ptr, col_idx, values)
    }
}
