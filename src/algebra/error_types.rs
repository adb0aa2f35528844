use thiserror::Error;

/// Error type returned by sparse container and solve operations.
///
/// Every violation is detected synchronously at the offending call and
/// surfaces immediately to the caller; there is no local recovery or
/// default substitution anywhere in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Malformed constructor or write argument
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An index access outside `[0, extent)`
    #[error("{axis} index {index} out of bounds for extent {extent}")]
    IndexOutOfBounds {
        /// which axis was violated ("row", "column" or "index")
        axis: &'static str,
        /// the offending index
        index: usize,
        /// the fixed extent of that axis
        extent: usize,
    },
    /// Operand shapes are incompatible with the requested solve
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// extent required by the left-hand operand
        expected: usize,
        /// extent actually supplied
        actual: usize,
    },
    /// The LU backend could not produce a usable factorization
    #[error("matrix is singular to working precision")]
    SingularMatrix,
    /// A solve result was requested in a shape it does not have
    #[error("unsupported operand types")]
    UnsupportedOperandTypes,
}

#[derive(Error, Debug)]
/// Error type returned by CSC format validation.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}
