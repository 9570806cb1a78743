use crate::{error::MatrixError, matrix::Matrix};

/// Shared shape check for the elementwise binary operations.
fn check_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        log::warn!(
            "{op}: matrices a and b must have the same rows and cols ({:?} vs {:?})",
            a.shape(),
            b.shape()
        );
        return Err(MatrixError::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Apply `f` to each pair of entries of two equally shaped matrices.
fn element_wise_op<F>(op: &'static str, a: &Matrix, b: &Matrix, f: F) -> Result<Matrix, MatrixError>
where
    F: Fn(f64, f64) -> f64,
{
    check_same_shape(op, a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_parts(a.rows(), a.cols(), data))
}

/// Add two matrices element-wise.
///
/// # Arguments
///
/// * `a` - Left-hand side matrix.
/// * `b` - Right-hand side matrix.
///
/// # Returns
///
/// A new matrix with the sum of the two matrices.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use matalg::{ops::add, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[10.0, 20.0], [30.0, 40.0]]).unwrap();
/// let c = add(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), [11.0, 22.0, 33.0, 44.0]);
/// ```
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    element_wise_op("add", a, b, |x, y| x + y)
}

/// Subtract two matrices element-wise.
///
/// # Arguments
///
/// * `a` - Left-hand side matrix.
/// * `b` - Right-hand side matrix.
///
/// # Returns
///
/// A new matrix with the difference `a - b`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    element_wise_op("sub", a, b, |x, y| x - y)
}

/// Multiply two matrices.
///
/// Uses the textbook triple loop `c[i][j] = sum_k a[i][k] * b[k][j]`.
///
/// # Arguments
///
/// * `a` - Left-hand side matrix of shape `m x n`.
/// * `b` - Right-hand side matrix of shape `n x p`.
///
/// # Returns
///
/// A new `m x p` matrix.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// # Example
///
/// ```
/// use matalg::{ops::multiply, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// let b = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.shape(), (2, 2));
/// assert_eq!(c.as_slice(), [4.0, 5.0, 10.0, 11.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        log::warn!(
            "multiply: the number of cols of matrix a ({}) must equal the number of rows of matrix b ({})",
            a.cols(),
            b.rows()
        );
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let mut result = Matrix::zeros(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = 0.0;
            for k in 0..a.cols() {
                acc += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = acc;
        }
    }
    Ok(result)
}

/// Multiply every entry of the matrix by a scalar.
///
/// # Arguments
///
/// * `a` - The input matrix.
/// * `k` - The scalar.
///
/// # Returns
///
/// A new matrix of the same shape.
pub fn scale(a: &Matrix, k: f64) -> Matrix {
    a.map(|x| x * k)
}

/// Transpose a matrix.
///
/// # Returns
///
/// A new `cols x rows` matrix with `t[j][i] = a[i][j]`.
pub fn transpose(a: &Matrix) -> Matrix {
    let mut data = Vec::with_capacity(a.rows() * a.cols());
    for j in 0..a.cols() {
        for i in 0..a.rows() {
            data.push(a[(i, j)]);
        }
    }
    Matrix::from_parts(a.cols(), a.rows(), data)
}
