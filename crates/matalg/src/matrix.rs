use std::ops::{Index, IndexMut};

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq};

use crate::error::MatrixError;

/// Maximum number of rows or columns a [`Matrix`] may hold.
pub const MAX_DIM: usize = 10;

/// A dense, row-major matrix of `f64` with both dimensions bounded by [`MAX_DIM`].
///
/// Matrices are plain values: every operation in [`crate::ops`] borrows its inputs and
/// returns a newly allocated result, so a result never aliases an operand.
///
/// # Examples
///
/// ```
/// use matalg::Matrix;
///
/// let mut m = Matrix::zeros(2, 3).unwrap();
/// m[(0, 1)] = 4.0;
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(0, 1), Some(4.0));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Checks the capacity bound shared by every constructor.
fn check_capacity(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows > MAX_DIM || cols > MAX_DIM {
        log::warn!("refusing to allocate a {rows}x{cols} matrix (MAX_DIM = {MAX_DIM})");
        return Err(MatrixError::CapacityExceeded {
            rows,
            cols,
            max: MAX_DIM,
        });
    }
    Ok(())
}

impl Matrix {
    /// Create a zero-filled matrix of the given shape.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows, at most [`MAX_DIM`].
    /// * `cols` - Number of columns, at most [`MAX_DIM`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CapacityExceeded`] if either dimension is above [`MAX_DIM`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_capacity(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows.
    /// * `cols` - Number of columns.
    /// * `data` - The entries in row-major order, `rows * cols` of them.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if the data length does not match the shape,
    /// or [`MatrixError::CapacityExceeded`] if the shape is too large.
    ///
    /// # Examples
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_shape_vec(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        check_capacity(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidShape {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a slice of rows.
    ///
    /// Accepts anything that can be viewed as a slice of `f64`, e.g. `[[f64; N]]` or
    /// `[Vec<f64>]`. An empty slice yields the `0x0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if the rows have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        check_capacity(num_rows, num_cols)?;

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(MatrixError::InvalidShape {
                    expected: num_cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Assemble a matrix whose shape is already known to respect the capacity bound,
    /// e.g. a permutation of an existing matrix's dimensions.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows <= MAX_DIM && cols <= MAX_DIM);
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Create a matrix by evaluating `f(row, col)` for every entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CapacityExceeded`] if the shape is too large.
    pub fn from_shape_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        check_capacity(rows, cols)?;
        let data = (0..rows * cols).map(|i| f(i / cols, i % cols)).collect();
        Ok(Self { rows, cols, data })
    }

    /// Create the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CapacityExceeded`] if `n` is above [`MAX_DIM`].
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::from_shape_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if the matrix holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The entries in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The entries in row-major order, mutably.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major entries.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Returns the entries of row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[f64] {
        assert!(r < self.rows, "row {r} out of bounds ({})", self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns an iterator over the rows of the matrix.
    ///
    /// Yields exactly `rows` slices, so an `n x 0` matrix yields `n` empty rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Returns the entry at `(r, c)`, or `None` if out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        if r < self.rows && c < self.cols {
            Some(self.data[r * self.cols + c])
        } else {
            None
        }
    }

    /// Sets the entry at `(r, c)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if the index is outside the matrix.
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<(), MatrixError> {
        if r >= self.rows || c >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[r * self.cols + c] = value;
        Ok(())
    }

    /// Swaps two whole rows in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.data.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Apply `f` to every entry, producing a matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[r * self.cols + c]
    }
}

impl std::ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        crate::ops::scale(self, k)
    }
}

impl std::ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        crate::ops::scale(self, -1.0)
    }
}

#[cfg(feature = "approx")]
impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
