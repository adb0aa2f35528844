#![allow(non_snake_case)]
use crate::algebra::vecmath::VectorMath;
use crate::algebra::*;

fn generic_3x3() -> DokMatrix<f64> {
    DokMatrix::from_triplets(
        3,
        3,
        vec![
            (0, 0, 1.0),
            (0, 1, 2.0),
            (0, 2, 3.0),
            (1, 0, 6.0),
            (1, 1, 5.0),
            (1, 2, 4.0),
            (2, 0, 7.0),
            (2, 1, 10.0),
            (2, 2, 4.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_solve_identity() {
    let A = DokMatrix::from_triplets(3, 3, vec![(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0)]).unwrap();
    let b = vec![1.0, 2.0, 3.0];

    let x = A.solve_dense(&b).unwrap();
    assert_eq!(x, b);

    let bs = SparseVector::from_triplets(3, vec![(0, 1.0), (1, 2.0), (2, 3.0)]).unwrap();
    let xs = A.solve_sparse(&bs).unwrap();
    assert_eq!(xs.to_csc(), bs.to_csc());
}

#[test]
fn test_solve_generic_dense_rhs() {
    let A = generic_3x3();
    let b = vec![5.0, 9.0, 5.0];
    let expected = [1.0, -1.0, 2.0];

    let x = A.solve_dense(&b).unwrap();
    assert!(x.norm_diff(&expected) / expected.norm() < 1e-10);
}

#[test]
fn test_solve_generic_sparse_rhs() {
    let A = generic_3x3();
    let b = SparseVector::from_triplets(3, vec![(0, 5.0), (1, 9.0), (2, 5.0)]).unwrap();
    let expected = [1.0, -1.0, 2.0];

    let x = A.solve_sparse(&b).unwrap();
    assert_eq!(x.dim(), 3);
    assert!(x.to_dense().norm_diff(&expected) / expected.norm() < 1e-10);
}

#[test]
fn test_solve_shape_mismatch() {
    // non-square matrix
    let A = DokMatrix::<f64>::new(3, 2).unwrap();
    assert_eq!(
        A.solve_dense(&[1.0, 2.0, 3.0]).unwrap_err(),
        AlgebraError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );

    // right-hand side of the wrong length
    let A = DokMatrix::from_triplets(3, 3, vec![(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0)]).unwrap();
    assert_eq!(
        A.solve_dense(&[1.0, 2.0]).unwrap_err(),
        AlgebraError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );

    let b = SparseVector::<f64>::new(2).unwrap();
    assert_eq!(
        A.solve_sparse(&b).unwrap_err(),
        AlgebraError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_solve_singular() {
    let A = DokMatrix::from_triplets(
        2,
        2,
        vec![(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, 1.0)],
    )
    .unwrap();
    assert_eq!(
        A.solve_dense(&[1.0, 2.0]).unwrap_err(),
        AlgebraError::SingularMatrix
    );
}

#[test]
fn test_mldivide_dispatch() {
    let A = generic_3x3();
    let b = vec![5.0, 9.0, 5.0];
    let bs = SparseVector::from_triplets(3, vec![(0, 5.0), (1, 9.0), (2, 5.0)]).unwrap();

    let x = mldivide(&A, Rhs::Dense(&b)).unwrap();
    let xs = mldivide(&A, Rhs::Sparse(&bs)).unwrap();

    // solutions come back shaped like their right-hand sides
    let xd = x.into_dense().unwrap();
    let xv = xs.into_sparse().unwrap();
    assert!(xd.norm_diff(&xv.to_dense()) < 1e-12);

    // requesting the wrong shape is an operand type error
    let x = mldivide(&A, Rhs::Dense(&b)).unwrap();
    assert_eq!(
        x.into_sparse().unwrap_err(),
        AlgebraError::UnsupportedOperandTypes
    );
    let xs = mldivide(&A, Rhs::Sparse(&bs)).unwrap();
    assert_eq!(
        xs.into_dense().unwrap_err(),
        AlgebraError::UnsupportedOperandTypes
    );
}

#[test]
fn test_solve_result_sparsity() {
    // solution of I x = b has the sparsity of b
    let A = DokMatrix::from_triplets(4, 4, (0..4).map(|i| (i, i, 1.0))).unwrap();
    let b = SparseVector::from_triplets(4, vec![(2, 7.0)]).unwrap();

    let x = A.solve_sparse(&b).unwrap();
    assert_eq!(x.nnz(), 1);
    assert_eq!(x.at(2).unwrap(), 7.0);
}
