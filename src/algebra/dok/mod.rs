use crate::algebra::{AlgebraError, CscMatrix, FloatT};
use std::collections::BTreeMap;

/// Dictionary-of-keys sparse matrix with a fixed shape.
///
/// Entries are keyed first by column index, then by row index.  The
/// column-major key ordering is deliberate: exporting to CSC storage is
/// then an ordered traversal of the maps rather than a sort.
///
/// Zero suppression is applied uniformly, matching
/// [`SparseVector`](crate::algebra::SparseVector): writing an exact zero
/// removes the entry, so `nnz()` counts genuine non-zeros only.
#[derive(Debug, Clone, PartialEq)]
pub struct DokMatrix<T = f64> {
    m: usize,
    n: usize,
    cols: BTreeMap<usize, BTreeMap<usize, T>>,
}

impl<T> DokMatrix<T>
where
    T: FloatT,
{
    /// Empty matrix of the given shape.
    pub fn new(m: usize, n: usize) -> Result<Self, AlgebraError> {
        if m == 0 || n == 0 {
            return Err(AlgebraError::InvalidArgument(
                "matrix dimensions must be positive",
            ));
        }
        Ok(DokMatrix {
            m,
            n,
            cols: BTreeMap::new(),
        })
    }

    /// Build from a stream of `(row, col, value)` triplets.
    ///
    /// Each triplet is validated by [`DokMatrix::set`] semantics.
    pub fn from_triplets<I>(m: usize, n: usize, triplets: I) -> Result<Self, AlgebraError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut a = DokMatrix::new(m, n)?;
        for (i, j, val) in triplets {
            a.set(i, j, val)?;
        }
        Ok(a)
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.n
    }

    /// fixed shape as `(rows, columns)`
    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// true if the matrix is square
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    /// number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.cols.values().map(|col| col.len()).sum()
    }

    fn check_index(&self, i: usize, j: usize) -> Result<(), AlgebraError> {
        if i >= self.m {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: "row",
                index: i,
                extent: self.m,
            });
        }
        if j >= self.n {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: "column",
                index: j,
                extent: self.n,
            });
        }
        Ok(())
    }

    /// Range-checked read; unset entries read as zero.
    pub fn at(&self, i: usize, j: usize) -> Result<T, AlgebraError> {
        self.check_index(i, j)?;
        let val = self
            .cols
            .get(&j)
            .and_then(|col| col.get(&i))
            .copied()
            .unwrap_or_else(T::zero);
        Ok(val)
    }

    /// Range-checked write.  Non-finite values are rejected; writing an
    /// exact zero removes any stored entry.
    pub fn set(&mut self, i: usize, j: usize, val: T) -> Result<(), AlgebraError> {
        self.check_index(i, j)?;
        if !val.is_finite() {
            return Err(AlgebraError::InvalidArgument("value must be finite"));
        }

        if val == T::zero() {
            if let Some(col) = self.cols.get_mut(&j) {
                col.remove(&i);
                if col.is_empty() {
                    self.cols.remove(&j);
                }
            }
        } else {
            self.cols.entry(j).or_default().insert(i, val);
        }
        Ok(())
    }

    /// Fresh dense row-major copy with zeros filled in.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut out = vec![vec![T::zero(); self.n]; self.m];
        for (i, j, v) in self.triplet_iter() {
            out[i][j] = v;
        }
        out
    }

    /// Export to CSC storage.
    ///
    /// Columns are traversed in ascending order and rows ascending
    /// within each column, so the result always satisfies
    /// [`CscMatrix::check_format`].  The returned matrix is an
    /// independent snapshot.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let nnz = self.nnz();
        let mut colptr = Vec::with_capacity(self.n + 1);
        let mut rowval = Vec::with_capacity(nnz);
        let mut nzval = Vec::with_capacity(nnz);

        colptr.push(0);
        for j in 0..self.n {
            if let Some(col) = self.cols.get(&j) {
                for (&i, &v) in col {
                    rowval.push(i);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }

        CscMatrix::new(self.m, self.n, colptr, rowval, nzval)
    }

    /// Iterate stored entries as `(row, col, value)`, grouped by
    /// ascending column and ascending row within each column.
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.cols
            .iter()
            .flat_map(|(&j, col)| col.iter().map(move |(&i, &v)| (i, j, v)))
    }

    /// Collect all stored entries into a triplet list.
    pub fn to_triplets(&self) -> Vec<(usize, usize, T)> {
        self.triplet_iter().collect()
    }
}

// ---------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------
