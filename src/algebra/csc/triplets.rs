use crate::algebra::{CscMatrix, FloatT};

/// Lazy decoder from CSC storage back to `(row, col, value)` triplets.
///
/// Walks the flat `rowval`/`nzval` arrays once, recovering the column of
/// each entry from the column pointers.  This is the path used both for
/// round-tripping and for turning an LU solve result back into a
/// [`SparseVector`](crate::algebra::SparseVector).
pub struct CscTriplets<'a, T> {
    colptr: &'a [usize],
    rowval: &'a [usize],
    nzval: &'a [T],
    pos: usize,
    col: usize,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Iterate over the stored entries as `(row, col, value)` triplets,
    /// grouped by ascending column.
    pub fn triplet_iter(&self) -> CscTriplets<'_, T> {
        CscTriplets {
            colptr: &self.colptr,
            rowval: &self.rowval,
            nzval: &self.nzval,
            pos: 0,
            col: 0,
        }
    }
}

impl<T> Iterator for CscTriplets<'_, T>
where
    T: FloatT,
{
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.rowval.len() {
            return None;
        }

        // The current column is the first one whose *next* pointer lies
        // beyond the running flat position.  A while loop here, not an
        // if: empty columns must be skipped in one step or every entry
        // after them is attributed to the wrong column.
        while self.pos >= self.colptr[self.col + 1] {
            self.col += 1;
        }

        let item = (self.rowval[self.pos], self.col, self.nzval[self.pos]);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.rowval.len() - self.pos;
        (rem, Some(rem))
    }
}

// ---------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------

#[test]
fn test_triplet_iter_sequence() {
    let full = vec![
        vec![0.0, 1.0, 0.0],
        vec![1.0, 2.0, 0.0],
        vec![0.0, 1.0, 1.0],
    ];
    let ccs = CscMatrix::from_dense(&full);

    let triplets: Vec<_> = ccs.triplet_iter().collect();
    assert_eq!(
        triplets,
        vec![
            (1, 0, 1.0),
            (0, 1, 1.0),
            (1, 1, 2.0),
            (2, 1, 1.0),
            (2, 2, 1.0),
        ]
    );
}

#[test]
fn test_triplet_iter_empty_columns() {
    // middle columns empty, including two in a row
    let a = CscMatrix::new(
        3,
        5,
        vec![0, 1, 1, 1, 3, 3],
        vec![2, 0, 1],
        vec![5.0, 6.0, 7.0],
    );
    assert!(a.check_format().is_ok());

    let triplets: Vec<_> = a.triplet_iter().collect();
    assert_eq!(triplets, vec![(2, 0, 5.0), (0, 3, 6.0), (1, 3, 7.0)]);
}

#[test]
fn test_triplet_iter_reproduces_nnz() {
    let a = CscMatrix::<f64>::identity(4);
    assert_eq!(a.triplet_iter().count(), a.nnz());

    let empty = CscMatrix::<f64>::new(3, 3, vec![0, 0, 0, 0], vec![], vec![]);
    assert_eq!(empty.triplet_iter().count(), 0);
}
