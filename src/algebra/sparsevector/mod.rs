use crate::algebra::{vecmath, AlgebraError, CscMatrix, FloatT, DEFAULT_TOLERANCE};
use std::collections::BTreeMap;

/// Fixed-dimension sparse vector keyed by index.
///
/// Only non-zero values are ever stored: writing an exact zero removes
/// the entry (or skips storage if none exists).  The dimension is fixed
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T = f64> {
    dim: usize,
    data: BTreeMap<usize, T>,
}

impl<T> SparseVector<T>
where
    T: FloatT,
{
    /// Empty vector of the given dimension.
    pub fn new(dim: usize) -> Result<Self, AlgebraError> {
        if dim == 0 {
            return Err(AlgebraError::InvalidArgument(
                "vector dimension must be positive",
            ));
        }
        Ok(SparseVector {
            dim,
            data: BTreeMap::new(),
        })
    }

    /// Build from a stream of `(index, value)` pairs.
    ///
    /// Each pair is range-checked; zero values contribute nothing.
    pub fn from_triplets<I>(dim: usize, triplets: I) -> Result<Self, AlgebraError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut v = SparseVector::new(dim)?;
        for (idx, val) in triplets {
            v.set(idx, val)?;
        }
        Ok(v)
    }

    /// vector dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Range-checked read; unset indices read as zero.
    pub fn at(&self, idx: usize) -> Result<T, AlgebraError> {
        if idx >= self.dim {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: "index",
                index: idx,
                extent: self.dim,
            });
        }
        Ok(self.data.get(&idx).copied().unwrap_or_else(T::zero))
    }

    /// Range-checked write.  Non-finite values are rejected; writing an
    /// exact zero removes the entry rather than storing it.
    pub fn set(&mut self, idx: usize, val: T) -> Result<(), AlgebraError> {
        if idx >= self.dim {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: "index",
                index: idx,
                extent: self.dim,
            });
        }
        if !val.is_finite() {
            return Err(AlgebraError::InvalidArgument("value must be finite"));
        }

        if val == T::zero() {
            self.data.remove(&idx);
        } else {
            self.data.insert(idx, val);
        }
        Ok(())
    }

    /// Fresh dense copy with zeros filled in.
    pub fn to_dense(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.dim];
        for (&i, &v) in &self.data {
            out[i] = v;
        }
        out
    }

    /// Iterate stored entries as `(index, value)`, ascending by index.
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.data.iter().map(|(&i, &v)| (i, v))
    }

    /// Degenerate one-column CSC encoding: `colptr = [0, nnz]`.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let mut rowval = Vec::with_capacity(self.nnz());
        let mut nzval = Vec::with_capacity(self.nnz());
        for (i, v) in self.triplet_iter() {
            rowval.push(i);
            nzval.push(v);
        }
        let colptr = vec![0, rowval.len()];
        CscMatrix::new(self.dim, 1, colptr, rowval, nzval)
    }

    /// Approximate equality by relative 2-norm of the dense difference.
    ///
    /// `tol` defaults to [`DEFAULT_TOLERANCE`].  An exactly-zero
    /// difference compares equal at any tolerance; mismatched dimensions
    /// compare unequal.
    pub fn approx_eq(&self, other: &Self, tol: Option<T>) -> bool {
        let tol = tol.unwrap_or_else(|| T::from(DEFAULT_TOLERANCE).unwrap());
        vecmath::approx_eq(&self.to_dense(), &other.to_dense(), tol)
    }
}

// ---------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------
