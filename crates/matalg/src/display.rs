use std::{fmt, str::FromStr};

use crate::{error::MatrixError, matrix::Matrix};

/// Width of a single entry in the text grid.
const FIELD_WIDTH: usize = 8;

impl fmt::Display for Matrix {
    /// Render one row per line, each entry left-aligned in an 8 character field with two
    /// decimals. Every row ends with a newline, so an `n x 0` matrix renders as `n` blank
    /// lines and the `0x0` matrix as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            for v in row {
                write!(f, "{v:<width$.2}", width = FIELD_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a matrix as a text grid, see the [`fmt::Display`] implementation of [`Matrix`].
pub fn format_matrix(a: &Matrix) -> String {
    a.to_string()
}

impl FromStr for Matrix {
    type Err = MatrixError;

    /// Parse a matrix such as `"1, 2; 3, 4"`.
    ///
    /// Rows are separated by `;` or newlines and entries by `,` or whitespace. Blank rows
    /// are ignored, so the empty string parses as the `0x0` matrix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?;

        Matrix::from_rows(&rows)
    }
}

/// Parse the entries of one non-blank row. Every `,`-separated field must hold at least
/// one entry.
fn parse_row(line: &str) -> Result<Vec<f64>, MatrixError> {
    let mut entries = Vec::new();
    for field in line.split(',') {
        if field.trim().is_empty() {
            return Err(MatrixError::Parse(format!("empty entry in row '{line}'")));
        }
        for tok in field.split_whitespace() {
            let v = tok
                .parse::<f64>()
                .map_err(|e| MatrixError::Parse(format!("invalid entry '{tok}': {e}")))?;
            entries.push(v);
        }
    }
    Ok(entries)
}
