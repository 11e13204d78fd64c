use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use smtx::batch::{self, BatchConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMTX CLI - Batch arithmetic over sparse matrix text files")]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run add/subtract/multiply over every matrix file in a directory
    Process {
        /// Directory containing matrix text files
        input_dir: PathBuf,

        /// Directory for result files (created if missing)
        output_dir: PathBuf,

        /// Continue with the remaining files when one fails
        #[arg(long)]
        keep_going: bool,

        /// Write a JSON run summary to this path
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Parse a matrix file and print its dimensions and entries
    Show {
        /// Matrix text file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Process {
            input_dir,
            output_dir,
            keep_going,
            summary,
        } => {
            let config = BatchConfig {
                input_dir,
                output_dir,
                keep_going,
            };
            let run = batch::run(&config)?;
            if let Some(path) = summary {
                batch::write_summary(&path, &run)?;
            }
            tracing::info!(
                processed = run.processed,
                failed = run.failed,
                "batch complete"
            );
        }
        Commands::Show { file } => {
            let matrix = smtx::io::read_matrix(&file)?;
            let (rows, cols) = matrix.dimensions();
            println!("{}: {rows} x {cols}, {} non-zero", file.display(), matrix.nnz());
            print!("{matrix}");
        }
    }

    Ok(())
}
