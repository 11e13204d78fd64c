//! File I/O for matrix text files
//!
//! Files are read and written in full; there is no streaming or partial
//! recovery. Parsing itself lives in smtx-core.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use smtx_core::SparseMatrix;

/// Read and parse a matrix file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let matrix = SparseMatrix::parse(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(matrix)
}

/// Serialize a matrix and write it to a file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_string())
        .with_context(|| format!("failed to write {}", path.display()))
}
