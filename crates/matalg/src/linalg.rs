//! Determinant, rank, trace and inverse of dense matrices.
//!
//! Determinant and rank are computed with Gaussian elimination. Pivots are only swapped
//! when the current pivot is exactly `0.0`: a tiny but nonzero pivot is used as-is, which
//! can lose precision on ill-conditioned input.
//!
//! The inverse is computed through the adjugate, evaluating one minor determinant per
//! entry. This costs `O(n^5)` flops and is meant for the small matrices this crate
//! supports, see [`MAX_DIM`](crate::MAX_DIM).

use crate::{error::MatrixError, matrix::Matrix};

/// Absolute determinant below which [`inverse`] reports [`MatrixError::Singular`].
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

fn require_square(op: &'static str, a: &Matrix) -> Result<usize, MatrixError> {
    if !a.is_square() {
        log::warn!("{op}: the matrix must be a square matrix, got {:?}", a.shape());
        return Err(MatrixError::NotSquare {
            op,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(a.rows())
}

/// Compute the determinant of a square matrix.
///
/// Gaussian elimination with row swaps: a swap is only attempted when the pivot is
/// exactly zero, and each swap flips the sign of the result. If no row below can supply
/// a nonzero pivot the matrix is singular and `0.0` is returned right away.
///
/// # Arguments
///
/// * `a` - The input matrix.
///
/// # Returns
///
/// The determinant. The empty `0x0` matrix has determinant `1.0`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if the matrix is not square.
///
/// # Example
///
/// ```
/// use matalg::{linalg::determinant, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&a).unwrap(), -2.0);
/// ```
pub fn determinant(a: &Matrix) -> Result<f64, MatrixError> {
    let n = require_square("determinant", a)?;

    let mut temp = a.clone();
    let mut det = 1.0;

    for i in 0..n {
        if temp[(i, i)] == 0.0 {
            match (i + 1..n).find(|&j| temp[(j, i)] != 0.0) {
                Some(j) => {
                    log::debug!("determinant: zero pivot at column {i}, swapping rows {i} and {j}");
                    temp.swap_rows(i, j);
                    det = -det;
                }
                None => {
                    log::debug!("determinant: no pivot in column {i}, matrix is singular");
                    return Ok(0.0);
                }
            }
        }

        let pivot = temp[(i, i)];
        for j in i + 1..n {
            let factor = temp[(j, i)] / pivot;
            for k in i..n {
                temp[(j, k)] -= factor * temp[(i, k)];
            }
        }

        log::trace!("determinant: pivot {i} = {pivot}");
        det *= pivot;
    }

    Ok(det)
}

/// Compute the rank of a matrix of any shape.
///
/// Reduces a copy of the matrix to row echelon form. A column that has no nonzero entry
/// at or below the current row is skipped without contributing to the rank, unlike
/// [`determinant`] which stops at the first such column.
///
/// # Arguments
///
/// * `a` - The input matrix.
///
/// # Returns
///
/// The rank, in `0..=min(rows, cols)`.
///
/// # Example
///
/// ```
/// use matalg::{linalg::rank, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert_eq!(rank(&a), 1);
/// ```
pub fn rank(a: &Matrix) -> usize {
    let (rows, cols) = a.shape();
    let mut temp = a.clone();
    let mut rank = 0;

    for i in 0..cols {
        if rank >= rows {
            break;
        }

        if temp[(rank, i)] == 0.0 {
            match (rank + 1..rows).find(|&j| temp[(j, i)] != 0.0) {
                Some(j) => temp.swap_rows(rank, j),
                None => continue,
            }
        }

        let pivot = temp[(rank, i)];
        for j in rank + 1..rows {
            let factor = temp[(j, i)] / pivot;
            for k in i..cols {
                temp[(j, k)] -= factor * temp[(rank, k)];
            }
        }
        rank += 1;
    }

    log::debug!("rank of {rows}x{cols} matrix: {rank}");
    rank
}

/// Compute the trace, the sum of the diagonal entries, of a square matrix.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if the matrix is not square.
pub fn trace(a: &Matrix) -> Result<f64, MatrixError> {
    let n = require_square("trace", a)?;
    Ok((0..n).map(|i| a[(i, i)]).sum())
}

/// Build the submatrix obtained by deleting row `row` and column `col`.
///
/// # Errors
///
/// Returns [`MatrixError::IndexOutOfBounds`] if `row` or `col` is outside the matrix.
pub fn minor(a: &Matrix, row: usize, col: usize) -> Result<Matrix, MatrixError> {
    let (rows, cols) = a.shape();
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }

    let data = (0..rows)
        .filter(|&k| k != row)
        .flat_map(|k| {
            (0..cols)
                .filter(move |&l| l != col)
                .map(move |l| a[(k, l)])
        })
        .collect();
    Ok(Matrix::from_parts(rows - 1, cols - 1, data))
}

/// Compute the cofactor `(-1)^(row + col) * det(minor(a, row, col))`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if the matrix is not square, or
/// [`MatrixError::IndexOutOfBounds`] if the position is outside the matrix.
pub fn cofactor(a: &Matrix, row: usize, col: usize) -> Result<f64, MatrixError> {
    require_square("cofactor", a)?;
    let det = determinant(&minor(a, row, col)?)?;
    let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(sign * det)
}

/// Compute the adjugate, the transpose of the cofactor matrix.
///
/// The cofactor of position `(i, j)` is written to `(j, i)` of the result. The minor of
/// a `1x1` matrix is empty with determinant `1`, so its adjugate is `[[1]]`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if the matrix is not square.
pub fn adjugate(a: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square("adjugate", a)?;
    let mut adj = Matrix::zeros(n, n)?;
    for i in 0..n {
        for j in 0..n {
            adj[(j, i)] = cofactor(a, i, j)?;
        }
    }
    Ok(adj)
}

/// Compute the inverse of a square matrix as `adjugate(a) / det(a)`.
///
/// # Arguments
///
/// * `a` - The input matrix.
///
/// # Returns
///
/// A new matrix `b` such that `a * b` is the identity up to rounding.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if the matrix is not square, or
/// [`MatrixError::Singular`] if `|det(a)| < SINGULAR_TOLERANCE`.
///
/// # Example
///
/// ```
/// use matalg::{linalg::inverse, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv.as_slice(), [-2.0, 1.0, 1.5, -0.5]);
/// ```
pub fn inverse(a: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square("inverse", a)?;

    let det = determinant(a)?;
    if det.abs() < SINGULAR_TOLERANCE {
        log::warn!("inverse: the matrix is singular (determinant {det:e})");
        return Err(MatrixError::Singular { determinant: det });
    }

    if n == 1 {
        return Matrix::from_shape_vec(1, 1, vec![1.0 / a[(0, 0)]]);
    }

    Ok(adjugate(a)?.map(|x| x / det))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_determinant_2x2() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        assert_eq!(determinant(&a)?, -2.0);
        Ok(())
    }

    #[test]
    fn test_determinant_3x3() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]])?;
        assert_relative_eq!(determinant(&a)?, -306.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_determinant_zero_pivot_swaps_sign() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
        assert_eq!(determinant(&a)?, -1.0);

        let b = Matrix::from_rows(&[[0.0, 2.0, 0.0], [0.0, 0.0, 3.0], [4.0, 0.0, 0.0]])?;
        assert_eq!(determinant(&b)?, 24.0);
        Ok(())
    }

    #[test]
    fn test_determinant_singular() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
        assert_eq!(determinant(&a)?, 0.0);

        let b = Matrix::from_rows(&[[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        assert_eq!(determinant(&b)?, 0.0);

        let zero_col = Matrix::from_rows(&[[0.0, 1.0], [0.0, 5.0]])?;
        assert_eq!(determinant(&zero_col)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_determinant_not_square() -> Result<(), MatrixError> {
        let a = Matrix::zeros(2, 3)?;
        assert_eq!(
            determinant(&a),
            Err(MatrixError::NotSquare {
                op: "determinant",
                rows: 2,
                cols: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_determinant_empty() -> Result<(), MatrixError> {
        assert_eq!(determinant(&Matrix::zeros(0, 0)?)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_determinant_leaves_input_untouched() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
        let copy = a.clone();
        determinant(&a)?;
        assert_eq!(a, copy);
        Ok(())
    }

    #[test]
    fn test_rank() -> Result<(), MatrixError> {
        assert_eq!(rank(&Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?), 1);
        assert_eq!(rank(&Matrix::identity(4)?), 4);
        assert_eq!(rank(&Matrix::zeros(3, 5)?), 0);
        assert_eq!(rank(&Matrix::zeros(0, 0)?), 0);
        Ok(())
    }

    #[test]
    fn test_rank_rectangular() -> Result<(), MatrixError> {
        let tall = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]])?;
        assert_eq!(rank(&tall), 1);

        let wide = Matrix::from_rows(&[[1.0, 0.0, 2.0, 1.0], [0.0, 1.0, 1.0, 0.0]])?;
        assert_eq!(rank(&wide), 2);
        Ok(())
    }

    #[test]
    fn test_rank_skips_empty_column() -> Result<(), MatrixError> {
        // the first column has no pivot, the second still contributes
        let a = Matrix::from_rows(&[[0.0, 1.0], [0.0, 2.0]])?;
        assert_eq!(rank(&a), 1);
        assert_eq!(determinant(&a)?, 0.0);

        let b = Matrix::from_rows(&[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])?;
        assert_eq!(rank(&b), 2);
        Ok(())
    }

    #[test]
    fn test_trace() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
        assert_eq!(trace(&a)?, 15.0);
        assert_eq!(trace(&Matrix::zeros(0, 0)?)?, 0.0);
        assert!(trace(&Matrix::zeros(1, 2)?).is_err());
        Ok(())
    }

    #[test]
    fn test_minor() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
        let m = minor(&a, 1, 0)?;
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), [2.0, 3.0, 8.0, 9.0]);
        assert!(minor(&a, 3, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_cofactor_sign() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        assert_eq!(cofactor(&a, 0, 0)?, 4.0);
        assert_eq!(cofactor(&a, 0, 1)?, -3.0);
        assert_eq!(cofactor(&a, 1, 0)?, -2.0);
        assert_eq!(cofactor(&a, 1, 1)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_adjugate_is_transposed_cofactors() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        assert_eq!(adjugate(&a)?.as_slice(), [4.0, -2.0, -3.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_inverse_2x2() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let inv = inverse(&a)?;
        assert_eq!(inv.as_slice(), [-2.0, 1.0, 1.5, -0.5]);
        Ok(())
    }

    #[test]
    fn test_inverse_1x1() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[4.0]])?;
        assert_eq!(inverse(&a)?.as_slice(), [0.25]);
        Ok(())
    }

    #[test]
    fn test_inverse_3x3() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]])?;
        let inv = inverse(&a)?;
        let eye = crate::ops::multiply(&a, &inv)?;
        for (x, y) in eye.as_slice().iter().zip(Matrix::identity(3)?.as_slice()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_inverse_singular() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
        assert_eq!(
            inverse(&a),
            Err(MatrixError::Singular { determinant: 0.0 })
        );
        Ok(())
    }

    #[test]
    fn test_inverse_below_tolerance() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1e-6, 0.0], [0.0, 1e-6]])?;
        assert!(matches!(inverse(&a), Err(MatrixError::Singular { .. })));
        Ok(())
    }

    #[test]
    fn test_inverse_not_square() -> Result<(), MatrixError> {
        let a = Matrix::zeros(3, 2)?;
        assert!(matches!(
            inverse(&a),
            Err(MatrixError::NotSquare { op: "inverse", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_inverse_empty() -> Result<(), MatrixError> {
        let inv = inverse(&Matrix::zeros(0, 0)?)?;
        assert_eq!(inv.shape(), (0, 0));
        Ok(())
    }
}
