//! Dimension inference from observed node indices

/// Number of nodes along one axis: largest index plus one
fn axis_len(indices: &[u32]) -> usize {
    indices.iter().max().map_or(0, |&max| max as usize + 1)
}

/// Side length of a square adjacency matrix
///
/// Rows and columns index the same node set, so both axes share the bound
/// `max(max(rows), max(cols)) + 1`.
pub fn adjacency_shape(rows: &[u32], cols: &[u32]) -> usize {
    axis_len(rows).max(axis_len(cols))
}

/// Shape `(n_rows, n_cols)` of a biadjacency matrix
///
/// Rows and columns are distinct node sets, so each bound is computed
/// independently.
pub fn biadjacency_shape(rows: &[u32], cols: &[u32]) -> (usize, usize) {
    (axis_len(rows), axis_len(cols))
}
