//! Entry line parsing and formatting
//!
//! Each non-blank line after the header is one non-zero cell written as
//! `(<row>,<col>,<value>)`.

use core::fmt;

use crate::error::{MatrixError, Result};

/// One cell as it appears in the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Cell value
    pub value: i64,
}

impl Entry {
    /// Parse a `(<row>,<col>,<value>)` line
    ///
    /// The line must contain exactly three comma-separated integers inside
    /// a single pair of parentheses. Whitespace inside each field is
    /// tolerated.
    pub fn parse(line: &str) -> Result<Self> {
        let inner = line
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(MatrixError::InvalidEntry)?;

        let mut fields = inner.split(',');
        let row = parse_index(fields.next())?;
        let col = parse_index(fields.next())?;
        let value = parse_value(fields.next())?;

        // Exactly three fields
        if fields.next().is_some() {
            return Err(MatrixError::InvalidEntry);
        }

        Ok(Self { row, col, value })
    }
}

/// Parse a row/column field with error mapping
fn parse_index(field: Option<&str>) -> Result<usize> {
    field
        .ok_or(MatrixError::InvalidEntry)?
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::InvalidEntry)
}

/// Parse a value field with error mapping
fn parse_value(field: Option<&str>) -> Result<i64> {
    field
        .ok_or(MatrixError::InvalidEntry)?
        .trim()
        .parse::<i64>()
        .map_err(|_| MatrixError::InvalidEntry)
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.row, self.col, self.value)
    }
}
