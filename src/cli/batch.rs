use std::path::{Path, PathBuf};

use console::style;
use tracing::{info, warn};

use crate::cli::commands::BatchArgs;
use crate::errors::SolviewError;
use crate::reporting::convert_file;

pub fn handle_batch(args: BatchArgs, quiet: bool) -> Result<(), SolviewError> {
    let input_dir = PathBuf::from(&args.input_dir);
    let output_dir = args.output_dir.as_ref().map(PathBuf::from);

    if !input_dir.is_dir() {
        return Err(SolviewError::NotFound(input_dir.display().to_string()));
    }

    let files = discover_logs(&input_dir)?;
    if files.is_empty() {
        if !quiet {
            println!("No JSON files found in {}", input_dir.display());
        }
        return Ok(());
    }

    info!(count = files.len(), dir = %input_dir.display(), "Starting batch conversion");
    if !quiet {
        println!("Found {} JSON files to convert:", files.len());
        for file in &files {
            println!("  - {}", file.display());
        }
        println!();
    }

    let mut successful = 0usize;
    let mut failed = 0usize;
    for file in &files {
        match convert_file(file, output_dir.as_deref()) {
            Ok(output) => {
                successful += 1;
                if !quiet {
                    println!(
                        "{} {} -> {}",
                        style("✓").green().bold(),
                        file.display(),
                        output.display()
                    );
                }
            }
            Err(e) => {
                failed += 1;
                warn!(file = %file.display(), error = %e, "Conversion failed");
                eprintln!("{} {}: {}", style("✗").red().bold(), file.display(), e);
            }
        }
    }

    if !quiet {
        println!();
        println!("Successful: {}", style(successful).green());
        println!("Failed: {}", style(failed).red());
    }

    if failed > 0 {
        return Err(SolviewError::Batch(format!(
            "{} of {} conversions failed",
            failed,
            files.len()
        )));
    }

    Ok(())
}

/// Enumerates `*.json` files in the directory, sorted for a stable
/// conversion order.
fn discover_logs(input_dir: &Path) -> Result<Vec<PathBuf>, SolviewError> {
    let pattern = input_dir.join("*.json").to_string_lossy().into_owned();
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| SolviewError::Batch(format!("invalid glob pattern {}: {}", pattern, e)))?
        .filter_map(Result::ok)
        .collect();
    files.sort();
    Ok(files)
}
