//! Dimension header parsing for the matrix text format
//!
//! The header is the first two non-blank lines of a matrix file,
//! `rows=<int>` followed by `cols=<int>`.

use crate::error::{MatrixError, Result};

/// Parsed dimension header of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Header {
    /// Parse the two header lines
    ///
    /// The `rows` line must come first. Whitespace around the key and the
    /// value is tolerated.
    pub fn parse(rows_line: &str, cols_line: &str) -> Result<Self> {
        let rows = parse_assignment(rows_line, "rows")?;
        let cols = parse_assignment(cols_line, "cols")?;
        Ok(Self { rows, cols })
    }
}

/// Parse a `key=<int>` line with error mapping
fn parse_assignment(line: &str, key: &str) -> Result<usize> {
    let (name, value) = line
        .trim()
        .split_once('=')
        .ok_or(MatrixError::InvalidHeader)?;

    if name.trim() != key {
        return Err(MatrixError::InvalidHeader);
    }

    value
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::InvalidHeader)
}
