//! SMTX - Sparse Matrix Text-File Toolkit
//!
//! This library provides file I/O and batch processing on top of the
//! sparse matrix type and text format defined in smtx-core.
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
//! ```rust,no_run
//! use smtx::batch::{self, BatchConfig};
//!
//! fn example() -> anyhow::Result<()> {
//!     // Run add/subtract/multiply over every matrix file in a directory
//!     let config = BatchConfig {
//!         input_dir: "Inputs".into(),
//!         output_dir: "Outputs".into(),
//!         keep_going: false,
//!     };
//!     let summary = batch::run(&config)?;
//!     println!("processed {} files", summary.processed);
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use smtx_core::{ErrorCategory, MatrixError, SparseMatrix};

// Implementation modules
pub mod batch;
pub mod io;

// Public exports
pub use batch::{BatchConfig, FileReport, RunSummary};
pub use io::{read_matrix, write_matrix};
