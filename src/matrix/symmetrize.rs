//! Symmetrization of square adjacency matrices
//!
//! The undirected version of `A` combines every entry with its mirror in
//! `Aᵀ`. Rows of `A` and `Aᵀ` are both sorted, so each output row is a
//! linear merge of the two.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{EdgeListError, Result};
use crate::matrix::{EdgeValue, SparseMatrixCSR, Symmetrization};

/// Returns the undirected version of a square adjacency matrix
///
/// With [`Symmetrization::Sum`] the result is `A + Aᵀ` (diagonal weights are
/// doubled); with [`Symmetrization::Max`] it is the element-wise maximum of
/// `A` and `Aᵀ`. For presence markers both rules reduce to logical OR.
///
/// Column indices of `adjacency` must be strictly ascending within each row,
/// as they are for every matrix produced by this crate.
///
/// # Errors
///
/// * [`EdgeListError::InvalidCsr`] if `adjacency` fails
///   [`SparseMatrixCSR::validate`]
/// * [`EdgeListError::DimensionMismatch`] if the matrix is not square
/// * [`EdgeListError::WeightOverflow`] if an integer entry and its mirror
///   do not sum within `i64`
pub fn directed_to_undirected<T: EdgeValue>(
    adjacency: &SparseMatrixCSR<T>,
    symmetrization: Symmetrization,
) -> Result<SparseMatrixCSR<T>> {
    adjacency.validate()?;

    if adjacency.n_rows != adjacency.n_cols {
        return Err(EdgeListError::DimensionMismatch {
            n_rows: adjacency.n_rows,
            n_cols: adjacency.n_cols,
        });
    }

    let combine = |a: T, b: T| match symmetrization {
        Symmetrization::Sum => a.checked_merge(b),
        Symmetrization::Max => Some(a.max_with(b)),
    };

    let transposed = adjacency.transpose();
    let n = adjacency.n_rows;

    let mut row_ptr = Vec::with_capacity(n + 1);
    let mut col_idx = Vec::with_capacity(2 * adjacency.nnz());
    let mut values = Vec::with_capacity(2 * adjacency.nnz());
    row_ptr.push(0);

    for i in 0..n {
        let mut lhs = adjacency.row_iter(i).peekable();
        let mut rhs = transposed.row_iter(i).peekable();

        loop {
            let (col, val) = match (lhs.peek(), rhs.peek()) {
                (Some(&(cl, &vl)), Some(&(cr, &vr))) => match cl.cmp(&cr) {
                    Ordering::Less => {
                        lhs.next();
                        (cl, vl)
                    }
                    Ordering::Greater => {
                        rhs.next();
                        (cr, vr)
                    }
                    Ordering::Equal => {
                        lhs.next();
                        rhs.next();
                        let val = combine(vl, vr)
                            .ok_or(EdgeListError::WeightOverflow { row: i, col: cl })?;
                        (cl, val)
                    }
                },
                (Some(&(cl, &vl)), None) => {
                    lhs.next();
                    (cl, vl)
                }
                (None, Some(&(cr, &vr))) => {
                    rhs.next();
                    (cr, vr)
                }
                (None, None) => break,
            };

            col_idx.push(col);
            values.push(val);
        }

        row_ptr.push(col_idx.len());
    }

    trace!(
        "Symmetrized {} × {} matrix ({:?}): {} -> {} stored",
        n,
        n,
        symmetrization,
        adjacency.nnz(),
        col_idx.len()
    );

    Ok(SparseMatrixCSR::new(n, n, row_ptr, col_idx, values))
}
