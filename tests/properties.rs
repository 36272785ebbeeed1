//! Property-based tests for the conversion invariants

use std::collections::{BTreeMap, BTreeSet};

use edgelist::{edgelist_to_adjacency, edgelist_to_biadjacency, EdgeMatrix};
use proptest::prelude::*;

fn edge_list() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..40, 0u32..40), 1..200)
}

fn weighted_edge_list() -> impl Strategy<Value = Vec<(u32, u32, i64)>> {
    prop::collection::vec((0u32..20, 0u32..20, -50i64..50), 1..200)
}

fn rows_strictly_ascending(m: &EdgeMatrix) -> bool {
    let row_ptr = m.row_ptr();
    let col_idx = m.col_idx();
    row_ptr
        .windows(2)
        .all(|w| col_idx[w[0]..w[1]].windows(2).all(|c| c[0] < c[1]))
}

proptest! {
    #[test]
    fn adjacency_shape_is_max_index_plus_one(edges in edge_list()) {
        let m = edgelist_to_adjacency(&edges, false).unwrap();
        let max = edges.iter().map(|&(r, c)| r.max(c)).max().unwrap() as usize;

        prop_assert_eq!(m.shape(), (max + 1, max + 1));
    }

    #[test]
    fn biadjacency_axes_are_independent(edges in edge_list()) {
        let m = edgelist_to_biadjacency(&edges).unwrap();
        let max_row = edges.iter().map(|&(r, _)| r).max().unwrap() as usize;
        let max_col = edges.iter().map(|&(_, c)| c).max().unwrap() as usize;

        prop_assert_eq!(m.shape(), (max_row + 1, max_col + 1));
    }

    #[test]
    fn nnz_counts_distinct_coordinates(edges in edge_list()) {
        let distinct: BTreeSet<_> = edges.iter().copied().collect();

        let m = edgelist_to_adjacency(&edges, false).unwrap();
        prop_assert_eq!(m.nnz(), distinct.len());

        let b = edgelist_to_biadjacency(&edges).unwrap();
        prop_assert_eq!(b.nnz(), distinct.len());
    }

    #[test]
    fn undirected_nnz_counts_mirrored_pairs(edges in edge_list()) {
        let mirrored: BTreeSet<_> = edges
            .iter()
            .flat_map(|&(r, c)| [(r, c), (c, r)])
            .collect();

        let m = edgelist_to_adjacency(&edges, true).unwrap();
        prop_assert_eq!(m.nnz(), mirrored.len());
        prop_assert!(m.is_symmetric());
    }

    #[test]
    fn rows_are_strictly_ascending(edges in edge_list(), undirected in any::<bool>()) {
        let m = edgelist_to_adjacency(&edges, undirected).unwrap();
        prop_assert!(rows_strictly_ascending(&m));
        prop_assert!(m.validate().is_ok());

        let b = edgelist_to_biadjacency(&edges).unwrap();
        prop_assert!(rows_strictly_ascending(&b));
    }

    #[test]
    fn duplicate_weights_are_summed(edges in weighted_edge_list()) {
        let mut expected: BTreeMap<(u32, u32), i64> = BTreeMap::new();
        for &(r, c, w) in &edges {
            *expected.entry((r, c)).or_insert(0) += w;
        }

        let m = edgelist_to_adjacency(&edges, false).unwrap();
        let csr = m.as_integer().unwrap();

        prop_assert_eq!(csr.nnz(), expected.len());
        for (&(r, c), &w) in &expected {
            prop_assert_eq!(csr.get(r as usize, c as usize), Some(w));
        }
    }

    #[test]
    fn sum_symmetrization_matches_dense(edges in weighted_edge_list()) {
        let directed = edgelist_to_adjacency(&edges, false).unwrap().to_dense();
        let undirected = edgelist_to_adjacency(&edges, true).unwrap().to_dense();

        let expected = &directed + &directed.t();
        prop_assert_eq!(undirected, expected);
    }
}
