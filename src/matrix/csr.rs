//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use crate::constants::{DEBUG_MAX_ENTRIES, DEBUG_MAX_ROWS};
use crate::error::{EdgeListError, Result};

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Matrices built from edge lists keep the column indices of every row in
/// strictly ascending order, so rows can be binary searched.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T: Copy> SparseMatrixCSR<T> {
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `row_ptr` - Row pointers
    /// * `col_idx` - Column indices
    /// * `values` - Stored values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows], col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        // Check that column indices are within bounds
        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of stored elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the matrix dimensions as `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of stored elements in row i
    pub fn row_nnz(&self, i: usize) -> usize {
        assert!(i < self.n_rows, "Row index out of bounds");
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a stored element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Looks up the stored value at `(row, col)`
    ///
    /// Uses a binary search, so the columns of the row must be sorted.
    /// Returns `None` for out-of-range coordinates and implicit zeros.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.n_rows || col >= self.n_cols {
            return None;
        }

        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];

        self.col_idx[start..end]
            .binary_search(&col)
            .ok()
            .map(|pos| self.values[start + pos])
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the transpose of this matrix
    ///
    /// Column indices of the result are sorted within each row.
    pub fn transpose(&self) -> Self {
        let csc = self.to_csc();

        Self {
            n_rows: csc.n_cols,
            n_cols: csc.n_rows,
            row_ptr: csc.col_ptr,
            col_idx: csc.row_idx,
            values: csc.values,
        }
    }

    /// Checks the CSR structure without panicking
    ///
    /// In addition to the checks of [`SparseMatrixCSR::new`], every row must
    /// have strictly ascending column indices.
    pub fn validate(&self) -> Result<()> {
        if self.row_ptr.len() != self.n_rows + 1 {
            return Err(EdgeListError::InvalidCsr(format!(
                "row_ptr length {} != n_rows + 1 = {}",
                self.row_ptr.len(),
                self.n_rows + 1
            )));
        }

        if self.col_idx.len() != self.values.len() {
            return Err(EdgeListError::InvalidCsr(format!(
                "col_idx.len() = {} != values.len() = {}",
                self.col_idx.len(),
                self.values.len()
            )));
        }

        if self.row_ptr[0] != 0 || self.row_ptr[self.n_rows] != self.col_idx.len() {
            return Err(EdgeListError::InvalidCsr(format!(
                "row_ptr must span 0..{}, got {}..{}",
                self.col_idx.len(),
                self.row_ptr[0],
                self.row_ptr[self.n_rows]
            )));
        }

        for i in 0..self.n_rows {
            let start = self.row_ptr[i];
            let end = self.row_ptr[i + 1];
            if start > end || end > self.col_idx.len() {
                return Err(EdgeListError::InvalidCsr(format!(
                    "row_ptr not monotonic at index {}",
                    i
                )));
            }

            let row = &self.col_idx[start..end];
            if let Some(&col) = row.iter().find(|&&col| col >= self.n_cols) {
                return Err(EdgeListError::InvalidCsr(format!(
                    "col_idx {} >= n_cols {}",
                    col, self.n_cols
                )));
            }
            if row.windows(2).any(|w| w[0] >= w[1]) {
                return Err(EdgeListError::InvalidCsr(format!(
                    "columns of row {} are not strictly ascending",
                    i
                )));
            }
        }

        Ok(())
    }
}

impl<T: Copy + PartialEq> SparseMatrixCSR<T> {
    /// Returns true if the matrix is square and equal to its transpose
    pub fn is_symmetric(&self) -> bool {
        if self.n_rows != self.n_cols {
            return false;
        }

        (0..self.n_rows).all(|i| {
            self.row_iter(i)
                .all(|(j, &val)| self.get(j, i) == Some(val))
        })
    }
}

impl<T: fmt::Debug + Copy> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = DEBUG_MAX_ROWS.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = DEBUG_MAX_ENTRIES.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrixCSR<i64> {
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        )
    }

    #[test]
    fn test_new_matrix() {
        let matrix = sample();

        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix.nnz(), 5);
        assert_eq!(matrix.row_nnz(2), 2);
    }

    #[test]
    fn test_row_iter() {
        let matrix = sample();

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1), (1, &2)]);

        let row1: Vec<_> = matrix.row_iter(1).collect();
        assert_eq!(row1, vec![(1, &3)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4), (2, &5)]);
    }

    #[test]
    fn test_get() {
        let matrix = sample();

        assert_eq!(matrix.get(0, 1), Some(2));
        assert_eq!(matrix.get(2, 2), Some(5));
        assert_eq!(matrix.get(1, 0), None);
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();

        assert_eq!(t.row_ptr, vec![0, 2, 4, 5]);
        assert_eq!(t.col_idx, vec![0, 2, 0, 1, 2]);
        assert_eq!(t.values, vec![1, 4, 2, 3, 5]);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_transpose_rectangular() {
        let m = SparseMatrixCSR::new(2, 3, vec![0, 1, 3], vec![2, 0, 1], vec![1, 2, 3]);
        let t = m.transpose();

        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 0), Some(1));
        assert_eq!(t.get(0, 1), Some(2));
        assert_eq!(t.get(1, 1), Some(3));
    }

    #[test]
    fn test_is_symmetric() {
        assert!(!sample().is_symmetric());

        let sym = SparseMatrixCSR::new(2, 2, vec![0, 1, 2], vec![1, 0], vec![7, 7]);
        assert!(sym.is_symmetric());
    }

    #[test]
    fn test_validate_unsorted_row() {
        let matrix = SparseMatrixCSR::new(1, 3, vec![0, 2], vec![2, 0], vec![1, 1]);
        assert!(matches!(matrix.validate(), Err(EdgeListError::InvalidCsr(_))));

        let duplicate = SparseMatrixCSR::new(1, 3, vec![0, 2], vec![1, 1], vec![1, 1]);
        assert!(duplicate.validate().is_err());
    }

    #[test]
    fn test_zeros() {
        let zeros = SparseMatrixCSR::<f64>::zeros(2, 4);
        assert_eq!(zeros.nnz(), 0);
        assert_eq!(zeros.row_ptr, vec![0, 0, 0]);
        assert!(zeros.validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    #[should_panic(expected = "col_idx.len() must equal values.len()")]
    fn test_inconsistent_lengths() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4], // Missing last element
        );
    }
}
