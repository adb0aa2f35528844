use super::FloatT;
use itertools::izip;

/// Dense vector helpers used by the sparse comparisons and solve checks.
pub(crate) trait VectorMath {
    type T;

    fn sumsq(&self) -> Self::T;
    fn norm(&self) -> Self::T;
    fn norm_diff(&self, y: &Self) -> Self::T;
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn sumsq(&self) -> T {
        self.iter().map(|&x| x * x).sum()
    }

    fn norm(&self) -> T {
        self.sumsq().sqrt()
    }

    fn norm_diff(&self, y: &[T]) -> T {
        let sumsq = izip!(self, y)
            .map(|(&x, &y)| (x - y) * (x - y))
            .sum::<T>();
        sumsq.sqrt()
    }
}

/// Relative 2-norm comparison of two dense vectors.
///
/// Returns `true` if the difference is exactly zero, otherwise iff
/// `‖a - b‖₂ / ‖b‖₂ < tol`.  Defined as `false` for empty vectors,
/// mismatched lengths, or any non-finite entry.
pub(crate) fn approx_eq<T: FloatT>(a: &[T], b: &[T], tol: T) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    if a.iter().chain(b.iter()).any(|x| !x.is_finite()) {
        return false;
    }

    let abs_error = a.norm_diff(b);
    if abs_error == T::zero() {
        return true;
    }
    abs_error / b.norm() < tol
}

#[test]
fn test_norms() {
    let x = [3.0_f64, 4.0];
    assert_eq!(x.sumsq(), 25.0);
    assert_eq!(x.norm(), 5.0);
    assert_eq!(x.norm_diff(&[3.0, 0.0]), 4.0);
}

#[test]
fn test_approx_eq() {
    let a = [1.0_f64, 2.0, 3.0];
    assert!(approx_eq(&a, &[1.0, 2.0, 3.0], 1e-12));
    assert!(approx_eq(&a, &[1.0, 2.0, 3.0 + 1e-8], 1e-4));
    assert!(!approx_eq(&a, &[1.0, 2.0, 4.0], 1e-4));
    assert!(!approx_eq(&a, &[1.0, 2.0], 1e-4));
    assert!(!approx_eq::<f64>(&[], &[], 1e-4));
    assert!(!approx_eq(&a, &[1.0, 2.0, f64::NAN], 1e-4));
}
