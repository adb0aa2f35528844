#![allow(non_snake_case)]

use crate::algebra::{FloatT, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format.
///
/// A `CscMatrix` is always a snapshot derived from (or consumed into) a
/// [`DokMatrix`](crate::algebra::DokMatrix) or a
/// [`SparseVector`](crate::algebra::SparseVector); it never aliases the
/// producing container.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use feacore::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  This constructor does __not__ ensure that row indices
    /// are all in bounds or that data within each column is ordered by
    /// increasing row index; use [`CscMatrix::check_format`] for that.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.n
    }

    /// true if the matrix is square
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[0] != 0
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowval);
            }
        }
        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// Compress a dense row-major matrix, dropping exact zeros.
    ///
    /// # Panics
    /// Panics if `rows` is empty or ragged.
    pub fn from_dense(rows: &[Vec<T>]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty());
        let m = rows.len();
        let n = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == n));

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for j in 0..n {
            for (i, row) in rows.iter().enumerate() {
                if row[j] != T::zero() {
                    rowval.push(i);
                    nzval.push(row[j]);
                }
            }
            colptr.push(rowval.len());
        }

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Compress a dense vector into a single-column matrix, dropping
    /// exact zeros.
    pub fn column_from_dense(v: &[T]) -> Self {
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();
        for (i, &x) in v.iter().enumerate() {
            if x != T::zero() {
                rowval.push(i);
                nzval.push(x);
            }
        }
        let colptr = vec![0, rowval.len()];
        CscMatrix::new(v.len(), 1, colptr, rowval, nzval)
    }

    /// Expand to a fresh dense row-major matrix with zeros filled in.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut out = vec![vec![T::zero(); self.n]; self.m];
        for (i, j, v) in self.triplet_iter() {
            out[i][j] = v;
        }
        out
    }
}

// ---------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------

#[test]
fn test_csc_check_format() {
    let A = CscMatrix::new(
        3,
        4,
        vec![0, 1, 4, 6, 7],
        vec![0, 0, 1, 2, 1, 2, 2],
        vec![1., 2., 1., 1., 2., 1., 1.],
    );
    assert!(A.check_format().is_ok());
    assert_eq!(A.nnz(), 7);
    assert!(!A.is_square());

    // non-monotonic colptr
    let mut B = A.clone();
    B.colptr = vec![0, 4, 1, 6, 7];
    assert!(B.check_format().is_err());

    // row index out of bounds
    let mut C = A.clone();
    C.rowval[0] = 3;
    assert!(C.check_format().is_err());

    // unsorted rows within a column
    let mut D = A.clone();
    D.rowval.swap(1, 2);
    assert!(D.check_format().is_err());
}

#[test]
fn test_csc_dense_roundtrip() {
    let full = vec![
        vec![1.0, 2.0, 0.0, 0.0],
        vec![0.0, 1.0, 2.0, 0.0],
        vec![0.0, 1.0, 1.0, 1.0],
    ];

    let A = CscMatrix::from_dense(&full);
    assert!(A.check_format().is_ok());
    assert_eq!(A.colptr, vec![0, 1, 4, 6, 7]);
    assert_eq!(A.rowval, vec![0, 0, 1, 2, 1, 2, 2]);
    assert_eq!(A.nzval, vec![1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0]);
    assert_eq!(A.to_dense(), full);
}

#[test]
fn test_csc_column_from_dense() {
    let v = vec![0.0, 0.0, 0.0, 3.0, 0.0];
    let c = CscMatrix::column_from_dense(&v);
    assert_eq!(c.m, 5);
    assert_eq!(c.n, 1);
    assert_eq!(c.colptr, vec![0, 1]);
    assert_eq!(c.rowval, vec![3]);
    assert_eq!(c.nzval, vec![3.0]);
}

#[test]
fn test_csc_identity() {
    let I = CscMatrix::<f64>::identity(3);
    assert!(I.check_format().is_ok());
    assert_eq!(I.to_dense(), vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ]);
}
