//! Sparse matrix / vector types and the direct solve pipeline.

use num_traits::{Float, NumAssign, NumCast};

/// Scalar trait bound for all numeric containers in this crate.
pub trait FloatT: 'static + Float + NumAssign + NumCast + std::iter::Sum + std::cmp::PartialOrd {}
impl FloatT for f32 {}
impl FloatT for f64 {}

/// Default relative tolerance for approximate vector comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

mod error_types;
pub use error_types::*;

pub(crate) mod vecmath;

mod csc;
pub use csc::*;

mod dok;
pub use dok::*;

mod sparsevector;
pub use sparsevector::*;

mod solve;
pub use solve::*;

#[cfg(test)]
mod tests;
