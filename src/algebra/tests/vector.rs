use crate::algebra::*;

#[test]
fn test_zero_suppression_property() {
    let cases: Vec<Vec<(usize, f64)>> = vec![
        vec![],
        vec![(0, 0.0), (3, 3.0)],
        vec![(0, 0.0), (1, 0.0), (2, 0.0)],
        vec![(5, 2.0), (2, 2.0), (60, 8.0)],
    ];

    for triplets in cases {
        let v = SparseVector::from_triplets(100, triplets.clone()).unwrap();
        assert!(v.nnz() <= triplets.len());

        let zeros = triplets.iter().filter(|&&(_, x)| x == 0.0).count();
        assert_eq!(v.nnz(), triplets.len() - zeros);
        assert!(v.triplet_iter().all(|(_, x)| x != 0.0));
    }
}

#[test]
fn test_triplet_iter_ascending() {
    let v = SparseVector::from_triplets(1000, vec![(60, 8.0), (5, 2.0), (2, 2.0)]).unwrap();
    let triplets: Vec<_> = v.triplet_iter().collect();
    assert_eq!(triplets, vec![(2, 2.0), (5, 2.0), (60, 8.0)]);
}

#[test]
fn test_vector_csc_shape_invariant() {
    let v = SparseVector::from_triplets(10, vec![(1, 4.0), (7, -1.0), (9, 2.0)]).unwrap();
    let ccs = v.to_csc();
    assert_eq!(ccs.m, 10);
    assert_eq!(ccs.n, 1);
    assert_eq!(ccs.colptr, vec![0, 3]);
    assert!(ccs.check_format().is_ok());

    // decode through the codec recovers the stored pairs
    let pairs: Vec<_> = ccs.triplet_iter().map(|(i, _j, x)| (i, x)).collect();
    assert_eq!(pairs, v.triplet_iter().collect::<Vec<_>>());
}

#[test]
fn test_dense_copy_is_fresh() {
    let mut v = SparseVector::from_triplets(3, vec![(0, 1.0)]).unwrap();
    let dense = v.to_dense();
    v.set(0, 9.0).unwrap();
    assert_eq!(dense, vec![1.0, 0.0, 0.0]);
}
