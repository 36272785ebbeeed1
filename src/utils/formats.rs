//! Utilities for converting between our matrix formats and sprs

use crate::matrix::{EdgeMatrix, SparseMatrixCSR};
use sprs::CsMat;
use num_traits::Num;

/// Converts our CSR matrix format to sprs CsMat format
///
/// # Panics
///
/// sprs rejects rows whose column indices are not sorted.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts sprs CsMat (CSR or CSC) to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data)
}

impl EdgeMatrix {
    /// Converts to a float-valued sprs CSR matrix (presence becomes `1.0`)
    pub fn to_sprs(&self) -> CsMat<f64> {
        to_sprs_csr(&self.to_f64())
    }
}
