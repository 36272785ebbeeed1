// Matrix data structures and the assembly pipeline

pub mod assemble;
pub mod config;
pub mod conversion;
pub mod csc;
pub mod csr;
pub mod edge_matrix;
pub mod shape;
pub mod symmetrize;
pub mod value;

pub use assemble::assemble_csr;
pub use config::{AdjacencyOptions, Symmetrization};
pub use csc::SparseMatrixCSC;
pub use csr::SparseMatrixCSR;
pub use edge_matrix::EdgeMatrix;
pub use shape::{adjacency_shape, biadjacency_shape};
pub use symmetrize::directed_to_undirected;
pub use value::{EdgeValue, Present, ValueKind};
