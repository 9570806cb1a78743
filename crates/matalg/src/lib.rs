#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `matalg` provides a small [`Matrix`] value type holding at most [`MAX_DIM`] rows and
//! columns of `f64`, together with the textbook algorithms that operate on it:
//! elementwise arithmetic, multiplication, transpose, determinant and rank by Gaussian
//! elimination, trace, and inverse by cofactor expansion.
//!
//! All operations borrow their inputs and return fresh values. Failures are reported
//! through [`MatrixError`]; a diagnostic is also emitted through the [`log`] facade.
//!
//! # Quick Start
//!
//! ```rust
//! use matalg::{determinant, inverse, multiply, Matrix};
//!
//! let a: Matrix = "1, 2; 3, 4".parse().unwrap();
//! assert_eq!(determinant(&a).unwrap(), -2.0);
//!
//! let inv = inverse(&a).unwrap();
//! let eye = multiply(&a, &inv).unwrap();
//! assert_eq!(eye, Matrix::identity(2).unwrap());
//!
//! print!("{inv}");
//! ```
//!
//! # Features
//!
//! - `approx` (default): implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`]
//!   for [`Matrix`].
//! - `serde`: implements `Serialize`/`Deserialize` for [`Matrix`] as
//!   `{ rows, cols, data }`.

/// Text rendering and parsing of matrices.
pub mod display;

/// Error types for matrix operations.
///
/// Defines [`MatrixError`] for handling failures during construction and computation.
pub mod error;

/// Determinant, rank, trace, inverse and the cofactor helpers they rely on.
pub mod linalg;

/// The [`Matrix`] value type and its constructors.
pub mod matrix;

/// Elementwise arithmetic, multiplication, scaling and transpose.
pub mod ops;

/// Serde support for [`Matrix`].
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::display::format_matrix;
pub use crate::error::MatrixError;
pub use crate::linalg::{
    adjugate, cofactor, determinant, inverse, minor, rank, trace, SINGULAR_TOLERANCE,
};
pub use crate::matrix::{Matrix, MAX_DIM};
pub use crate::ops::{add, multiply, scale, sub, transpose};
