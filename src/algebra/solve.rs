#![allow(non_snake_case)]

use crate::algebra::{AlgebraError, CscMatrix, DokMatrix, SparseVector};
use faer::{
    col::Col,
    prelude::Solve,
    sparse::{SparseColMat, SymbolicSparseColMat},
};

/// Right-hand side accepted by the [`mldivide`] dispatcher.
pub enum Rhs<'a> {
    /// plain dense vector
    Dense(&'a [f64]),
    /// sparse vector
    Sparse(&'a SparseVector<f64>),
}

/// Result of an [`mldivide`] solve, shaped like its right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// dense result vector
    Dense(Vec<f64>),
    /// sparse result vector
    Sparse(SparseVector<f64>),
}

impl Solution {
    /// Unwrap a dense solution.
    pub fn into_dense(self) -> Result<Vec<f64>, AlgebraError> {
        match self {
            Solution::Dense(x) => Ok(x),
            Solution::Sparse(_) => Err(AlgebraError::UnsupportedOperandTypes),
        }
    }

    /// Unwrap a sparse solution.
    pub fn into_sparse(self) -> Result<SparseVector<f64>, AlgebraError> {
        match self {
            Solution::Sparse(x) => Ok(x),
            Solution::Dense(_) => Err(AlgebraError::UnsupportedOperandTypes),
        }
    }
}

impl CscMatrix<f64> {
    // Hand the CSC arrays to the faer backend.  Our exports traverse
    // columns in ascending order with rows ascending within each column,
    // which is exactly what the checked constructor requires.
    fn to_faer(&self) -> SparseColMat<usize, f64> {
        let symbolic = SymbolicSparseColMat::new_checked(
            self.m,
            self.n,
            self.colptr.clone(),
            None,
            self.rowval.clone(),
        );
        SparseColMat::new(symbolic, self.nzval.clone())
    }
}

// Factor A and solve against a single dense right-hand side.  Each call
// re-factors; callers batching many right-hand sides against one matrix
// are expected to live with that for the small systems this crate
// targets.
fn lu_solve(A: &CscMatrix<f64>, b: &[f64]) -> Result<Vec<f64>, AlgebraError> {
    let Af = A.to_faer();
    let lu = Af.sp_lu().map_err(|_| AlgebraError::SingularMatrix)?;

    let b_col: Col<f64> = Col::from_iter(b.iter().copied());
    let sol = lu.solve(b_col.as_mat());
    let x: Vec<f64> = sol.row_iter().map(|r| r[0]).collect();

    // a zero pivot can slip through the backend as inf/NaN; fail loudly
    // rather than hand back garbage
    if x.iter().any(|v| !v.is_finite()) {
        return Err(AlgebraError::SingularMatrix);
    }
    Ok(x)
}

impl DokMatrix<f64> {
    fn check_solve_shape(&self, rhs_len: usize) -> Result<(), AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.nrows(),
                actual: self.ncols(),
            });
        }
        if rhs_len != self.nrows() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.nrows(),
                actual: rhs_len,
            });
        }
        Ok(())
    }

    /// Solve `A x = b` for a dense right-hand side.
    ///
    /// The matrix must be square and `b.len()` must equal `nrows()`.
    /// Encodes to CSC, factors through the external sparse LU and
    /// returns a dense result of the same length.
    pub fn solve_dense(&self, b: &[f64]) -> Result<Vec<f64>, AlgebraError> {
        self.check_solve_shape(b.len())?;
        lu_solve(&self.to_csc(), b)
    }

    /// Solve `A x = b` for a sparse right-hand side.
    ///
    /// Same shape checks as [`DokMatrix::solve_dense`], with the result
    /// re-sparsified through the CSC codec into a fresh
    /// [`SparseVector`] of dimension `nrows()`.
    pub fn solve_sparse(&self, b: &SparseVector<f64>) -> Result<SparseVector<f64>, AlgebraError> {
        self.check_solve_shape(b.dim())?;
        let x = lu_solve(&self.to_csc(), &b.to_dense())?;

        let ccs = CscMatrix::column_from_dense(&x);
        SparseVector::from_triplets(self.nrows(), ccs.triplet_iter().map(|(i, _j, v)| (i, v)))
    }
}

/// Solve `A x = b`, dispatching on the right-hand side shape.
///
/// Dense input yields a dense solution, sparse input a sparse one.
pub fn mldivide(A: &DokMatrix<f64>, b: Rhs<'_>) -> Result<Solution, AlgebraError> {
    match b {
        Rhs::Dense(b) => Ok(Solution::Dense(A.solve_dense(b)?)),
        Rhs::Sparse(b) => Ok(Solution::Sparse(A.solve_sparse(b)?)),
    }
}

// ---------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------

#[test]
fn test_lu_backend_roundtrip() {
    // A = tridiag([-1, 2, -1]) for n = 4, b = A * [1, 1, 1, 1]
    let A = CscMatrix::new(
        4,
        4,
        vec![0, 2, 5, 8, 10],
        vec![0, 1, 0, 1, 2, 1, 2, 3, 2, 3],
        vec![2.0, -1.0, -1.0, 2.0, -1.0, -1.0, 2.0, -1.0, -1.0, 2.0],
    );
    let b = vec![1.0, 0.0, 0.0, 1.0];

    let x = lu_solve(&A, &b).unwrap();
    for xi in x {
        assert!((xi - 1.0).abs() < 1e-12);
    }
}
