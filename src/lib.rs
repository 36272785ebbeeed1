//! # edgelist: sparse matrices from edge lists
//!
//! Converts a list of edges, optionally weighted, into a Compressed Sparse
//! Row (CSR) matrix ready for graph algorithms.
//!
//! ## Overview
//!
//! Two conversions are provided:
//!
//! - [`edgelist_to_adjacency`]: a square adjacency matrix over a single node
//!   set, optionally symmetrized for undirected graphs
//! - [`edgelist_to_biadjacency`]: a rectangular biadjacency matrix over two
//!   node sets (bipartite graphs)
//!
//! ## Pipeline
//!
//! 1. **Edge decoding**: each record is read as `(row, col)` or
//!    `(row, col, weight)`. Indices are validated against the 32-bit signed
//!    index range; the value type (presence, integer or real) is inferred
//!    once for the whole list.
//! 2. **Dimension inference**: the shape is the largest observed index plus
//!    one on each axis.
//! 3. **Sparse assembly**: entries are bucketed by row, sorted by column and
//!    duplicate coordinates are summed.
//!
//! ## Usage
//!
//! ```
//! use edgelist::{edgelist_to_adjacency, edgelist_to_biadjacency};
//!
//! let adjacency = edgelist_to_adjacency(&[(0, 1), (1, 2), (2, 0)], true).unwrap();
//! assert_eq!(adjacency.shape(), (3, 3));
//! assert_eq!(adjacency.nnz(), 6);
//!
//! let biadjacency = edgelist_to_biadjacency(&[(0, 0, 0.5), (2, 1, 2.0)]).unwrap();
//! assert_eq!(biadjacency.shape(), (3, 2));
//! assert_eq!(biadjacency.get_f64(2, 1), Some(2.0));
//! ```

pub mod accumulator;
pub mod constants;
pub mod convert;
pub mod edges;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use convert::{edgelist_to_adjacency, edgelist_to_adjacency_with, edgelist_to_biadjacency};
pub use edges::{decode_edges, CooBuffers, EdgeRecord, EdgeValues, Field};
pub use error::{EdgeListError, Result};
pub use matrix::{
    assemble_csr, directed_to_undirected, AdjacencyOptions, EdgeMatrix, EdgeValue, Present,
    SparseMatrixCSC, SparseMatrixCSR, Symmetrization, ValueKind,
};
pub use utils::{from_sprs_csr, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
