//! Compressed Sparse Column (CSC) matrix format implementation

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of stored elements
/// - values: Array of size nnz containing the stored values
///
/// Used as the intermediate layout when transposing a CSR matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrixCSC<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    /// col_ptr[j] is the index in row_idx and values where column j starts
    /// col_ptr[n_cols] is equal to nnz
    pub col_ptr: Vec<usize>,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T: Copy> SparseMatrixCSC<T> {
    /// Creates a new CSC matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - col_ptr.len() must be n_cols + 1
    /// - row_idx.len() must equal values.len()
    /// - col_ptr[n_cols] must equal row_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(col_ptr.len(), n_cols + 1, "col_ptr.len() must be n_cols + 1");
        assert_eq!(row_idx.len(), values.len(), "row_idx.len() must equal values.len()");
        assert_eq!(
            col_ptr[n_cols], row_idx.len(),
            "col_ptr[n_cols] must equal row_idx.len()"
        );

        for &row in &row_idx {
            assert!(row < n_rows, "Row index {} out of bounds (n_rows = {})", row, n_rows);
        }

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Returns the number of stored elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored elements in column j
    ///
    /// Each item is a tuple (row_idx, value)
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }
}
