//! Edge list to adjacency / biadjacency conversion
//!
//! Both conversions run the same pipeline: decode the edges into coordinate
//! buffers, infer the shape from the largest index on each axis, then
//! assemble a CSR matrix. Adjacency conversion can additionally symmetrize
//! the result.

use tracing::debug;

use crate::edges::{decode_edges, CooBuffers, EdgeRecord, EdgeValues};
use crate::error::Result;
use crate::matrix::{
    adjacency_shape, assemble_csr, biadjacency_shape, directed_to_undirected, AdjacencyOptions,
    EdgeMatrix, EdgeValue, Present, SparseMatrixCSR, Symmetrization,
};

/// Builds a square adjacency matrix from a list of edges
///
/// Edges are pairs `(i, j)` or triplets `(i, j, w)` for weighted edges. The
/// matrix has side `max(i, j) + 1` over all edges. Duplicate edges are
/// summed. If `undirected` is true the result is `A + Aᵀ`.
///
/// # Examples
///
/// ```
/// use edgelist::{edgelist_to_adjacency, ValueKind};
///
/// let edges = [(0, 1), (1, 2), (2, 0)];
///
/// let adjacency = edgelist_to_adjacency(&edges, false).unwrap();
/// assert_eq!(adjacency.shape(), (3, 3));
/// assert_eq!(adjacency.nnz(), 3);
/// assert_eq!(adjacency.value_kind(), ValueKind::Presence);
///
/// let adjacency = edgelist_to_adjacency(&edges, true).unwrap();
/// assert_eq!(adjacency.nnz(), 6);
///
/// let weighted = [(0, 1, 0.2), (1, 2, 4.0), (2, 0, 1.3)];
/// let adjacency = edgelist_to_adjacency(&weighted, false).unwrap();
/// assert_eq!(adjacency.value_kind(), ValueKind::Real);
/// ```
///
/// # Errors
///
/// See [`decode_edges`] for the input validation errors.
/// [`EdgeListError::WeightOverflow`](crate::EdgeListError::WeightOverflow)
/// if summing duplicate or mirrored integer weights overflows `i64`.
pub fn edgelist_to_adjacency<E: EdgeRecord>(edges: &[E], undirected: bool) -> Result<EdgeMatrix> {
    edgelist_to_adjacency_with(edges, &AdjacencyOptions::directed().with_undirected(undirected))
}

/// Builds a square adjacency matrix with explicit [`AdjacencyOptions`]
pub fn edgelist_to_adjacency_with<E: EdgeRecord>(
    edges: &[E],
    options: &AdjacencyOptions,
) -> Result<EdgeMatrix> {
    let coo = decode_edges(edges)?;
    let n = adjacency_shape(&coo.rows, &coo.cols);

    debug!(
        "Building {} × {} adjacency from {} edges (undirected={})",
        n,
        n,
        coo.len(),
        options.undirected
    );

    let symmetrization = options.undirected.then_some(options.symmetrization);
    build(n, n, coo, symmetrization)
}

/// Builds a rectangular biadjacency matrix from a list of edges
///
/// Rows and columns are two distinct node sets: the matrix has
/// `max(i) + 1` rows and `max(j) + 1` columns. Duplicate edges are summed.
///
/// # Examples
///
/// ```
/// use edgelist::edgelist_to_biadjacency;
///
/// let edges = [(0, 0), (1, 0), (1, 1), (2, 1)];
/// let biadjacency = edgelist_to_biadjacency(&edges).unwrap();
/// assert_eq!(biadjacency.shape(), (3, 2));
/// assert_eq!(biadjacency.nnz(), 4);
/// ```
pub fn edgelist_to_biadjacency<E: EdgeRecord>(edges: &[E]) -> Result<EdgeMatrix> {
    let coo = decode_edges(edges)?;
    let (n_rows, n_cols) = biadjacency_shape(&coo.rows, &coo.cols);

    debug!(
        "Building {} × {} biadjacency from {} edges",
        n_rows,
        n_cols,
        coo.len()
    );

    build(n_rows, n_cols, coo, None)
}

fn build(
    n_rows: usize,
    n_cols: usize,
    coo: CooBuffers,
    symmetrization: Option<Symmetrization>,
) -> Result<EdgeMatrix> {
    let CooBuffers { rows, cols, values } = coo;

    let matrix = match values {
        EdgeValues::Unweighted(n) => EdgeMatrix::Unweighted(assemble(
            n_rows,
            n_cols,
            &rows,
            &cols,
            &vec![Present; n],
            symmetrization,
        )?),
        EdgeValues::Integer(weights) => EdgeMatrix::Integer(assemble(
            n_rows,
            n_cols,
            &rows,
            &cols,
            &weights,
            symmetrization,
        )?),
        EdgeValues::Real(weights) => EdgeMatrix::Real(assemble(
            n_rows,
            n_cols,
            &rows,
            &cols,
            &weights,
            symmetrization,
        )?),
    };

    debug!(
        "Built {:?} matrix with {} stored entries",
        matrix.value_kind(),
        matrix.nnz()
    );

    Ok(matrix)
}

fn assemble<T: EdgeValue>(
    n_rows: usize,
    n_cols: usize,
    rows: &[u32],
    cols: &[u32],
    values: &[T],
    symmetrization: Option<Symmetrization>,
) -> Result<SparseMatrixCSR<T>> {
    let matrix = assemble_csr(n_rows, n_cols, rows, cols, values)?;

    match symmetrization {
        Some(rule) => directed_to_undirected(&matrix, rule),
        None => Ok(matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::Field;
    use crate::error::EdgeListError;
    use crate::matrix::ValueKind;

    #[test]
    fn test_adjacency_directed() {
        let adjacency = edgelist_to_adjacency(&[(0, 1), (1, 2), (2, 0)], false).unwrap();

        assert_eq!(adjacency.shape(), (3, 3));
        assert_eq!(adjacency.nnz(), 3);
        assert_eq!(adjacency.value_kind(), ValueKind::Presence);
        assert_eq!(adjacency.row_ptr(), &[0, 1, 2, 3]);
        assert_eq!(adjacency.col_idx(), &[1, 2, 0]);
    }

    #[test]
    fn test_adjacency_undirected() {
        let adjacency = edgelist_to_adjacency(&[(0, 1), (1, 2), (2, 0)], true).unwrap();

        assert_eq!(adjacency.shape(), (3, 3));
        assert_eq!(adjacency.nnz(), 6);
        assert!(adjacency.is_symmetric());
        assert!(!adjacency.is_weighted());
    }

    #[test]
    fn test_adjacency_integer_weights() {
        let adjacency = edgelist_to_adjacency(&[(0, 1, 2), (0, 1, 3), (1, 0, 1)], false).unwrap();

        let csr = adjacency.as_integer().unwrap();
        assert_eq!(csr.get(0, 1), Some(5));
        assert_eq!(csr.get(1, 0), Some(1));
        assert_eq!(csr.nnz(), 2);
    }

    #[test]
    fn test_adjacency_max_symmetrization() {
        let options = AdjacencyOptions::undirected().with_symmetrization(Symmetrization::Max);
        let adjacency =
            edgelist_to_adjacency_with(&[(0, 1, 2.0), (1, 0, 7.0), (1, 1, 3.0)], &options).unwrap();

        assert_eq!(adjacency.get_f64(0, 1), Some(7.0));
        assert_eq!(adjacency.get_f64(1, 0), Some(7.0));
        assert_eq!(adjacency.get_f64(1, 1), Some(3.0));
    }

    #[test]
    fn test_biadjacency() {
        let biadjacency = edgelist_to_biadjacency(&[(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap();

        assert_eq!(biadjacency.shape(), (3, 2));
        assert_eq!(biadjacency.nnz(), 4);
        assert_eq!(biadjacency.value_kind(), ValueKind::Presence);
    }

    #[test]
    fn test_biadjacency_promoted_weights() {
        let edges = vec![
            [Field::Int(0), Field::Int(0), Field::Real(0.5)],
            [Field::Int(1), Field::Int(0), Field::Int(1)],
            [Field::Int(1), Field::Int(1), Field::Int(1)],
            [Field::Int(2), Field::Int(1), Field::Int(2)],
        ];
        let biadjacency = edgelist_to_biadjacency(&edges).unwrap();

        assert_eq!(biadjacency.value_kind(), ValueKind::Real);
        assert_eq!(biadjacency.get_f64(2, 1), Some(2.0));
    }

    #[test]
    fn test_empty_input() {
        let edges: [(u32, u32); 0] = [];

        assert_eq!(edgelist_to_adjacency(&edges, false), Err(EdgeListError::EmptyInput));
        assert_eq!(edgelist_to_adjacency(&edges, true), Err(EdgeListError::EmptyInput));
        assert_eq!(edgelist_to_biadjacency(&edges), Err(EdgeListError::EmptyInput));
    }
}
