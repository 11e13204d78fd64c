//! Text format definitions for SMTX matrix files
//!
//! This module contains pure parsing and formatting functions for the matrix
//! text format. No I/O operations - only string transformations.
//!
//! The format is line oriented:
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>,<col>,<value>)
//! (<row>,<col>,<value>)
//! ```
//!
//! Blank lines are ignored entirely. Whitespace around numeric fields is
//! tolerated. Explicit zero-valued entries are accepted on input but are
//! normalized away, so they never survive a round trip.

pub mod entry;
pub mod header;

// Re-export format definitions
pub use entry::Entry;
pub use header::Header;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// Parse a complete matrix definition from text
///
/// The first two non-blank lines must be the dimension header; every
/// remaining non-blank line must be a single entry. Parsing stops at the
/// first malformed line - there is no partial recovery.
pub fn parse_matrix(text: &str) -> Result<SparseMatrix> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let rows_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let cols_line = lines.next().ok_or(MatrixError::InvalidHeader)?;
    let header = Header::parse(rows_line, cols_line)?;

    let mut matrix = SparseMatrix::new(header.rows, header.cols);
    for line in lines {
        let entry = Entry::parse(line)?;
        matrix.set(entry.row, entry.col, entry.value);
    }

    Ok(matrix)
}

/// Serialize a matrix into the text format
///
/// Writes the dimension header followed by one line per stored entry.
/// Entry order follows the underlying map iteration order and is not
/// numerically sorted.
pub fn write_matrix(matrix: &SparseMatrix) -> String {
    let mut out = format!("rows={}\ncols={}\n", matrix.num_rows(), matrix.num_cols());
    for ((row, col), value) in matrix.iter() {
        out.push_str(&Entry { row, col, value }.to_string());
        out.push('\n');
    }
    out
}
