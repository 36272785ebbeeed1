//! Integration tests for conversions to sprs

use edgelist::{edgelist_to_adjacency, edgelist_to_biadjacency, from_sprs_csr, to_sprs_csr};

#[test]
fn test_adjacency_to_sprs() {
    let adjacency = edgelist_to_adjacency(&[(0, 1, 2.5), (2, 0, 1.0), (0, 1, 0.5)], false).unwrap();

    let sprs_mat = adjacency.to_sprs();
    assert_eq!(sprs_mat.shape(), (3, 3));
    assert_eq!(sprs_mat.nnz(), 2);
    assert_eq!(sprs_mat.get(0, 1), Some(&3.0));
    assert_eq!(sprs_mat.get(2, 0), Some(&1.0));
}

#[test]
fn test_unweighted_biadjacency_to_sprs() {
    let biadjacency = edgelist_to_biadjacency(&[(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap();

    let sprs_mat = biadjacency.to_sprs();
    assert_eq!(sprs_mat.shape(), (3, 2));
    assert!(sprs_mat.data().iter().all(|&v| v == 1.0));
}

#[test]
fn test_sprs_roundtrip_preserves_symmetric_adjacency() {
    let undirected = edgelist_to_adjacency(&[(0, 1, 1.0), (1, 2, 2.0)], true).unwrap();
    let csr = undirected.as_real().unwrap();

    let roundtrip = from_sprs_csr(to_sprs_csr(csr));
    assert_eq!(&roundtrip, csr);
    assert!(roundtrip.is_symmetric());
}

#[test]
fn test_sprs_csc_input_is_converted() {
    let adjacency = edgelist_to_adjacency(&[(0, 2, 4i64), (1, 0, 1)], false).unwrap();
    let csr = adjacency.as_integer().unwrap();

    let csc = to_sprs_csr(csr).to_csc();
    assert_eq!(&from_sprs_csr(csc), csr);
}
