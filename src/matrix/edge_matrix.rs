//! Typed result of an edge list conversion

use ndarray::Array2;

use crate::error::Result;
use crate::matrix::{EdgeValue, Present, SparseMatrixCSR, ValueKind};

/// A sparse matrix built from an edge list
///
/// The variant records the value type inferred from the edges: presence
/// markers for `(row, col)` records, integers or reals for
/// `(row, col, weight)` records.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeMatrix {
    /// Unweighted edges
    Unweighted(SparseMatrixCSR<Present>),
    /// Integer weights
    Integer(SparseMatrixCSR<i64>),
    /// Real weights
    Real(SparseMatrixCSR<f64>),
}

impl EdgeMatrix {
    /// Matrix dimensions as `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        match self {
            EdgeMatrix::Unweighted(m) => m.shape(),
            EdgeMatrix::Integer(m) => m.shape(),
            EdgeMatrix::Real(m) => m.shape(),
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        match self {
            EdgeMatrix::Unweighted(m) => m.nnz(),
            EdgeMatrix::Integer(m) => m.nnz(),
            EdgeMatrix::Real(m) => m.nnz(),
        }
    }

    /// Value representation of the stored entries
    pub fn value_kind(&self) -> ValueKind {
        match self {
            EdgeMatrix::Unweighted(_) => Present::KIND,
            EdgeMatrix::Integer(_) => i64::KIND,
            EdgeMatrix::Real(_) => f64::KIND,
        }
    }

    /// Whether the matrix carries explicit weights
    pub fn is_weighted(&self) -> bool {
        !matches!(self, EdgeMatrix::Unweighted(_))
    }

    /// Row pointers (size: n_rows + 1)
    pub fn row_ptr(&self) -> &[usize] {
        match self {
            EdgeMatrix::Unweighted(m) => &m.row_ptr,
            EdgeMatrix::Integer(m) => &m.row_ptr,
            EdgeMatrix::Real(m) => &m.row_ptr,
        }
    }

    /// Column indices (size: nnz)
    pub fn col_idx(&self) -> &[usize] {
        match self {
            EdgeMatrix::Unweighted(m) => &m.col_idx,
            EdgeMatrix::Integer(m) => &m.col_idx,
            EdgeMatrix::Real(m) => &m.col_idx,
        }
    }

    /// Stored value at `(row, col)` as a float, `None` if absent
    pub fn get_f64(&self, row: usize, col: usize) -> Option<f64> {
        match self {
            EdgeMatrix::Unweighted(m) => m.get(row, col).map(EdgeValue::to_f64),
            EdgeMatrix::Integer(m) => m.get(row, col).map(EdgeValue::to_f64),
            EdgeMatrix::Real(m) => m.get(row, col).map(EdgeValue::to_f64),
        }
    }

    /// Returns true if the matrix is square and equal to its transpose
    pub fn is_symmetric(&self) -> bool {
        match self {
            EdgeMatrix::Unweighted(m) => m.is_symmetric(),
            EdgeMatrix::Integer(m) => m.is_symmetric(),
            EdgeMatrix::Real(m) => m.is_symmetric(),
        }
    }

    /// Checks the CSR structure
    pub fn validate(&self) -> Result<()> {
        match self {
            EdgeMatrix::Unweighted(m) => m.validate(),
            EdgeMatrix::Integer(m) => m.validate(),
            EdgeMatrix::Real(m) => m.validate(),
        }
    }

    /// Converts the values to floats (presence becomes `1.0`)
    pub fn to_f64(&self) -> SparseMatrixCSR<f64> {
        match self {
            EdgeMatrix::Unweighted(m) => map_values(m),
            EdgeMatrix::Integer(m) => map_values(m),
            EdgeMatrix::Real(m) => m.clone(),
        }
    }

    /// Dense float copy of the matrix, absent entries are `0.0`
    ///
    /// Intended for small matrices (tests, inspection).
    pub fn to_dense(&self) -> Array2<f64> {
        let csr = self.to_f64();
        let mut dense = Array2::zeros((csr.n_rows, csr.n_cols));

        for i in 0..csr.n_rows {
            for (j, &val) in csr.row_iter(i) {
                dense[[i, j]] = val;
            }
        }

        dense
    }

    /// The unweighted matrix, if this is one
    pub fn as_unweighted(&self) -> Option<&SparseMatrixCSR<Present>> {
        match self {
            EdgeMatrix::Unweighted(m) => Some(m),
            _ => None,
        }
    }

    /// The integer-weighted matrix, if this is one
    pub fn as_integer(&self) -> Option<&SparseMatrixCSR<i64>> {
        match self {
            EdgeMatrix::Integer(m) => Some(m),
            _ => None,
        }
    }

    /// The real-weighted matrix, if this is one
    pub fn as_real(&self) -> Option<&SparseMatrixCSR<f64>> {
        match self {
            EdgeMatrix::Real(m) => Some(m),
            _ => None,
        }
    }
}

fn map_values<T: EdgeValue>(m: &SparseMatrixCSR<T>) -> SparseMatrixCSR<f64> {
    SparseMatrixCSR {
        n_rows: m.n_rows,
        n_cols: m.n_cols,
        row_ptr: m.row_ptr.clone(),
        col_idx: m.col_idx.clone(),
        values: m.values.iter().map(|&v| v.to_f64()).collect(),
    }
}

impl From<SparseMatrixCSR<Present>> for EdgeMatrix {
    fn from(m: SparseMatrixCSR<Present>) -> Self {
        EdgeMatrix::Unweighted(m)
    }
}

impl From<SparseMatrixCSR<i64>> for EdgeMatrix {
    fn from(m: SparseMatrixCSR<i64>) -> Self {
        EdgeMatrix::Integer(m)
    }
}

impl From<SparseMatrixCSR<f64>> for EdgeMatrix {
    fn from(m: SparseMatrixCSR<f64>) -> Self {
        EdgeMatrix::Real(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_unweighted_accessors() {
        let m: EdgeMatrix =
            SparseMatrixCSR::new(2, 3, vec![0, 1, 2], vec![2, 0], vec![Present, Present]).into();

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.value_kind(), ValueKind::Presence);
        assert!(!m.is_weighted());
        assert_eq!(m.row_ptr(), &[0, 1, 2]);
        assert_eq!(m.col_idx(), &[2, 0]);
        assert_eq!(m.get_f64(0, 2), Some(1.0));
        assert_eq!(m.get_f64(0, 0), None);
        assert!(m.as_unweighted().is_some());
        assert!(m.as_real().is_none());
    }

    #[test]
    fn test_to_dense() {
        let m: EdgeMatrix =
            SparseMatrixCSR::new(2, 2, vec![0, 1, 2], vec![1, 0], vec![3i64, -1]).into();

        assert_eq!(m.to_dense(), array![[0.0, 3.0], [-1.0, 0.0]]);
        assert_eq!(m.as_integer().map(|csr| csr.values.clone()), Some(vec![3, -1]));
    }
}
