//! SMTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the core sparse matrix data structure and the plain
//! text interchange format, with no I/O dependencies. Matrices hold integer
//! values keyed by (row, col); only non-zero values are stored.
//!
//! ## Architecture
//!
//! SMTX follows a clean specification/implementation separation:
//!
//! - **smtx-core**: Pure data structure, format parsing, and validation (no I/O)
//! - **smtx**: Concrete file I/O, batch processing, and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use smtx_core::SparseMatrix;
//!
//! fn example() -> smtx_core::Result<()> {
//!     let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,1,4)".parse()?;
//!     let b = SparseMatrix::new(2, 2);
//!
//!     let sum = a.add(&b)?;
//!     assert_eq!(sum.get(0, 0), 1);
//!     assert_eq!(sum.nnz(), 2);
//!     Ok(())
//! }
//! example().unwrap();
//! ```

pub mod error;
pub mod format;
pub mod matrix;

pub use error::{ErrorCategory, MatrixError, Result};
pub use format::{parse_matrix, write_matrix, Entry, Header};
pub use matrix::SparseMatrix;
