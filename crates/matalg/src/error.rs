use thiserror::Error;

/// Error type for matrix construction and algebra operations.
///
/// Every fallible operation in this crate returns one of these variants instead of a
/// placeholder matrix, so an empty `0x0` result is never confused with a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    ///
    /// Raised by `add` and `sub` when the shapes differ, and by `multiply` when the
    /// number of columns of the left operand differs from the rows of the right one.
    #[error("Dimension mismatch in {op}: left operand shape {lhs:?}, right operand shape {rhs:?}")]
    DimensionMismatch {
        /// Name of the operation that failed
        op: &'static str,
        /// Shape `(rows, cols)` of the left operand
        lhs: (usize, usize),
        /// Shape `(rows, cols)` of the right operand
        rhs: (usize, usize),
    },

    /// The operation is only defined for square matrices.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Name of the operation that failed
        op: &'static str,
        /// Number of rows of the input
        rows: usize,
        /// Number of columns of the input
        cols: usize,
    },

    /// The matrix cannot be inverted.
    ///
    /// The absolute value of the determinant fell below
    /// [`SINGULAR_TOLERANCE`](crate::linalg::SINGULAR_TOLERANCE).
    #[error("Matrix is singular (determinant {determinant:e})")]
    Singular {
        /// The determinant that triggered the failure
        determinant: f64,
    },

    /// Requested dimensions exceed the storage capacity of a matrix.
    #[error("Matrix of {rows}x{cols} exceeds the maximum dimension {max}")]
    CapacityExceeded {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Maximum allowed size for either dimension
        max: usize,
    },

    /// The provided data does not match the requested shape.
    #[error("Shape mismatch: expected {expected} elements, but got {actual}")]
    InvalidShape {
        /// Expected number of elements
        expected: usize,
        /// Actual number of elements provided
        actual: usize,
    },

    /// An entry was addressed outside the matrix bounds.
    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Row that was requested
        row: usize,
        /// Column that was requested
        col: usize,
        /// Number of rows of the matrix
        rows: usize,
        /// Number of columns of the matrix
        cols: usize,
    },

    /// A textual matrix could not be parsed.
    #[error("Failed to parse matrix: {0}")]
    Parse(String),
}

impl MatrixError {
    /// Returns true if the error was caused by incompatible or invalid shapes.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::NotSquare { .. }
                | Self::CapacityExceeded { .. }
                | Self::InvalidShape { .. }
                | Self::IndexOutOfBounds { .. }
        )
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::DimensionMismatch { op: "multiply", .. } => {
                "The number of columns of the left matrix must equal the number of rows of the right matrix"
            }
            Self::DimensionMismatch { .. } => "Both matrices must have the same rows and cols",
            Self::NotSquare { .. } => "Use a matrix with the same number of rows and cols",
            Self::Singular { .. } => "The matrix has no inverse; check for linearly dependent rows",
            Self::CapacityExceeded { .. } => "Split the problem into smaller matrices",
            Self::InvalidShape { .. } => {
                "Ensure the number of elements equals rows * cols and that all rows have the same length"
            }
            Self::IndexOutOfBounds { .. } => "Verify indices satisfy row < rows and col < cols",
            Self::Parse(_) => "Use ',' or whitespace between entries and ';' or newlines between rows",
        }
    }
}
