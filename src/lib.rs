//! __feacore__ is the numerical core of a finite-element modeling toolkit.
//!
//! It provides the sparse containers used to assemble and solve
//! discretized finite-element equations:
//!
//! * [`DokMatrix`](crate::algebra::DokMatrix) — a dictionary-of-keys
//!   sparse matrix, keyed column-major so that export to compressed
//!   sparse column storage is an ordered traversal.
//! * [`SparseVector`](crate::algebra::SparseVector) — a fixed-dimension
//!   mostly-zero vector with strict zero suppression.
//! * [`CscMatrix`](crate::algebra::CscMatrix) — the compressed sparse
//!   column encoding shared by both, with a lazy triplet decoder.
//! * [`mldivide`](crate::algebra::mldivide) and the `DokMatrix` solve
//!   methods — a direct solve pipeline that factors through a
//!   third-party sparse LU and decodes the result back into the
//!   caller's preferred representation.
//!
//! Geometry, meshing, field degree-of-freedom numbering and boundary
//! condition handling live in the outer toolkit layers and consume this
//! crate through the types above.

pub mod algebra;
