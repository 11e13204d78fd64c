//! Batch processing of matrix directories
//!
//! Every file in the input directory is loaded, combined with a same-shaped
//! zero matrix, and the results of addition, subtraction, and (for square
//! inputs) multiplication are written to the output directory under names
//! derived from the input file stem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use smtx_core::SparseMatrix;
use tracing::{error, info, warn};

use crate::io;

/// Batch run configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for matrix files
    pub input_dir: PathBuf,
    /// Directory for result files, created if missing
    pub output_dir: PathBuf,
    /// Continue with the remaining files after a per-file failure
    pub keep_going: bool,
}

/// Outcome of one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input file path
    pub input: PathBuf,
    /// Parsed dimensions, (0, 0) when the file failed to load
    pub rows: usize,
    pub cols: usize,
    /// Non-zero entries in the input
    pub nnz: usize,
    /// Result files written for this input
    pub outputs: Vec<PathBuf>,
    /// Multiplication was skipped because the input is not square
    pub multiplication_skipped: bool,
    /// Failure description, if the file could not be processed
    pub error: Option<String>,
}

/// Summary of a whole batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Files processed successfully
    pub processed: usize,
    /// Files that failed (only non-zero with keep_going)
    pub failed: usize,
    /// Per-file outcomes in processing order
    pub files: Vec<FileReport>,
}

/// Run the batch driver over every file in the input directory
///
/// Fails on the first broken file unless `keep_going` is set, in which
/// case failures are logged and recorded in the summary instead.
pub fn run(config: &BatchConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut inputs = collect_inputs(&config.input_dir)?;
    if inputs.is_empty() {
        bail!("no input files found in {}", config.input_dir.display());
    }
    // Deterministic processing order regardless of directory listing order
    inputs.sort();

    let mut summary = RunSummary::default();
    for input in inputs {
        match process_file(&input, &config.output_dir) {
            Ok(report) => {
                summary.processed += 1;
                summary.files.push(report);
            }
            Err(err) if config.keep_going => {
                error!(file = %input.display(), "skipping file: {err:#}");
                summary.failed += 1;
                summary.files.push(FileReport {
                    input,
                    rows: 0,
                    cols: 0,
                    nnz: 0,
                    outputs: Vec::new(),
                    multiplication_skipped: false,
                    error: Some(format!("{err:#}")),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}

/// Serialize a run summary as pretty-printed JSON
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary).context("failed to serialize run summary")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// List the regular files in the input directory, skipping subdirectories
fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let listing = fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for dirent in listing {
        let path = dirent
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Process one input file: load, combine with a zero matrix, write results
fn process_file(input: &Path, output_dir: &Path) -> Result<FileReport> {
    info!(file = %input.display(), "reading matrix");
    let matrix = io::read_matrix(input)?;
    let zero = SparseMatrix::new(matrix.num_rows(), matrix.num_cols());
    let base = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("matrix");

    let mut outputs = Vec::new();

    let sum = matrix.add(&zero)?;
    outputs.push(write_result(output_dir, base, "additionResult", &sum)?);

    let difference = matrix.sub(&zero)?;
    outputs.push(write_result(output_dir, base, "subtractionResult", &difference)?);

    let multiplication_skipped = matrix.num_cols() != zero.num_rows();
    if multiplication_skipped {
        warn!(
            file = %input.display(),
            "column count does not match the zero operand's row count, skipping multiplication"
        );
    } else {
        let product = matrix.mul(&zero)?;
        outputs.push(write_result(output_dir, base, "multiplicationResult", &product)?);
    }

    Ok(FileReport {
        input: input.to_path_buf(),
        rows: matrix.num_rows(),
        cols: matrix.num_cols(),
        nnz: matrix.nnz(),
        outputs,
        multiplication_skipped,
        error: None,
    })
}

fn write_result(
    output_dir: &Path,
    base: &str,
    suffix: &str,
    matrix: &SparseMatrix,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("{base}_{suffix}.txt"));
    io::write_matrix(&path, matrix)?;
    info!(result = %path.display(), "result saved");
    Ok(path)
}
