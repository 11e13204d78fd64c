//! Sparse matrix storage and arithmetic

use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::format;

/// Sparse integer matrix keyed by (row, col)
///
/// Only non-zero values are stored; an absent key reads as zero, and
/// setting a cell to zero removes its entry. Dimensions are fixed at
/// construction. Arithmetic never mutates an operand - each operation
/// allocates an independent result matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    num_rows: usize,
    num_cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: HashMap::new(),
        }
    }

    /// Parse a matrix from its text representation
    pub fn parse(text: &str) -> Result<Self> {
        format::parse_matrix(text)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of non-zero elements stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Get the value at (row, col), zero if not stored
    ///
    /// Positions are not bounds-checked; reading outside the declared
    /// dimensions yields zero like any other unstored cell.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the value at (row, col)
    ///
    /// A zero value removes the entry so that zeros are never stored.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
    }

    /// Iterate over stored entries as ((row, col), value)
    ///
    /// Iteration order follows the underlying map and is not sorted.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), i64)> + '_ {
        self.entries.iter().map(|(&pos, &value)| (pos, value))
    }

    /// Elementwise sum with another matrix of the same shape
    ///
    /// Two passes over the stored entries: first every entry of `self`
    /// summed against the matching cell of `other`, then every entry of
    /// `other` at a position `self` does not store. Cost is proportional
    /// to the number of non-zero entries, not to rows x cols.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.check_same_shape(other)?;

        let mut result = SparseMatrix::new(self.num_rows, self.num_cols);
        for (&(row, col), &value) in &self.entries {
            result.set(row, col, value + other.get(row, col));
        }
        for (&(row, col), &value) in &other.entries {
            if !self.entries.contains_key(&(row, col)) {
                result.set(row, col, value);
            }
        }

        Ok(result)
    }

    /// Elementwise difference with another matrix of the same shape
    ///
    /// Positions held only by `other` contribute `0 - value`.
    pub fn sub(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.check_same_shape(other)?;

        let mut result = SparseMatrix::new(self.num_rows, self.num_cols);
        for (&(row, col), &value) in &self.entries {
            result.set(row, col, value - other.get(row, col));
        }
        for (&(row, col), &value) in &other.entries {
            if !self.entries.contains_key(&(row, col)) {
                result.set(row, col, -value);
            }
        }

        Ok(result)
    }

    /// Matrix product with another matrix
    ///
    /// Requires `self.num_cols == other.num_rows`; the result is
    /// `self.num_rows x other.num_cols`. Iterates the full result space
    /// with sparse point lookups and stores only non-zero dot products.
    pub fn mul(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut result = SparseMatrix::new(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut dot = 0i64;
                for k in 0..self.num_cols {
                    dot += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, dot);
            }
        }

        Ok(result)
    }

    fn check_same_shape(&self, other: &SparseMatrix) -> Result<()> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(())
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::write_matrix(self))
    }
}

impl FromStr for SparseMatrix {
    type Err = MatrixError;

    fn from_str(text: &str) -> Result<Self> {
        format::parse_matrix(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_2x2() -> SparseMatrix {
        SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)").unwrap()
    }

    #[test]
    fn test_get_set() {
        let mut matrix = SparseMatrix::new(4, 4);
        assert_eq!(matrix.get(2, 2), 0);

        matrix.set(2, 2, 5);
        assert_eq!(matrix.get(2, 2), 5);
        assert_eq!(matrix.nnz(), 1);

        matrix.set(2, 2, -1);
        assert_eq!(matrix.get(2, 2), -1);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = SparseMatrix::new(3, 3);
        matrix.set(1, 1, 7);
        matrix.set(1, 1, 0);
        assert_eq!(matrix.get(1, 1), 0);
        assert_eq!(matrix.nnz(), 0);

        // Clearing an absent cell is a no-op
        matrix.set(0, 0, 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_add() {
        let a = sample_2x2();
        let mut b = SparseMatrix::new(2, 2);
        b.set(0, 0, 10);
        b.set(1, 1, -4);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get(0, 0), 11);
        assert_eq!(sum.get(0, 1), 2);
        assert_eq!(sum.get(1, 0), 3);
        // 4 + (-4) cancels and is not stored
        assert_eq!(sum.get(1, 1), 0);
        assert_eq!(sum.nnz(), 3);
    }

    #[test]
    fn test_add_commutes() {
        let a = sample_2x2();
        let mut b = SparseMatrix::new(2, 2);
        b.set(0, 1, -2);
        b.set(1, 0, 9);

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_add_zero_is_identity() {
        let a = sample_2x2();
        let zero = SparseMatrix::new(2, 2);
        assert_eq!(a.add(&zero).unwrap(), a);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = SparseMatrix::new(2, 2);
        let b = SparseMatrix::new(2, 3);
        assert_eq!(a.add(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_sub_self_is_empty() {
        let a = sample_2x2();
        let difference = a.sub(&a).unwrap();
        assert_eq!(difference.nnz(), 0);
        assert_eq!(difference.dimensions(), (2, 2));
    }

    #[test]
    fn test_sub_negates_missing_positions() {
        let a = SparseMatrix::new(2, 2);
        let mut b = SparseMatrix::new(2, 2);
        b.set(0, 1, 6);

        let difference = a.sub(&b).unwrap();
        assert_eq!(difference.get(0, 1), -6);
        assert_eq!(difference.nnz(), 1);
    }

    #[test]
    fn test_mul_square() {
        let a = sample_2x2();
        let product = a.mul(&a).unwrap();
        assert_eq!(product.get(0, 0), 7);
        assert_eq!(product.get(0, 1), 10);
        assert_eq!(product.get(1, 0), 15);
        assert_eq!(product.get(1, 1), 22);
        assert_eq!(product.dimensions(), (2, 2));
    }

    #[test]
    fn test_mul_shapes() {
        let mut a = SparseMatrix::new(2, 3);
        a.set(0, 0, 1);
        a.set(1, 2, 2);
        let mut b = SparseMatrix::new(3, 1);
        b.set(0, 0, 4);
        b.set(2, 0, 5);

        let product = a.mul(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 1));
        assert_eq!(product.get(0, 0), 4);
        assert_eq!(product.get(1, 0), 10);
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(4, 2);
        assert_eq!(a.mul(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_mul_by_zero_is_empty() {
        let a = sample_2x2();
        let zero = SparseMatrix::new(2, 2);
        assert_eq!(a.mul(&zero).unwrap().nnz(), 0);
    }

    #[test]
    fn test_operands_unchanged() {
        let a = sample_2x2();
        let b = sample_2x2();
        let _ = a.add(&b).unwrap();
        let _ = a.sub(&b).unwrap();
        let _ = a.mul(&b).unwrap();
        assert_eq!(a, sample_2x2());
        assert_eq!(b, sample_2x2());
    }

    #[test]
    fn test_display_round_trip() {
        let a = sample_2x2();
        let rebuilt: SparseMatrix = a.to_string().parse().unwrap();
        assert_eq!(rebuilt, a);
    }
}
