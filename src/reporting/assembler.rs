use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::SolviewError;
use crate::loader::load_report;
use crate::reporting::formatter::render_report;

/// Converts one solver log to HTML and returns the path of the written
/// file. The output lands next to the input unless `output_dir` says
/// otherwise, named `<stem>_converted.html`.
pub fn convert_file(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf, SolviewError> {
    let report = load_report(input)?;
    let html = render_report(&report);

    let output_path = output_path_for(input, output_dir);
    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| SolviewError::Write(format!("{}: {}", dir.display(), e)))?;
    }
    atomic_write(&output_path, &html)
        .map_err(|e| SolviewError::Write(format!("{}: {}", output_path.display(), e)))?;

    info!(path = %output_path.display(), "HTML report generated");
    Ok(output_path)
}

/// Where the converted report for `input` goes.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{stem}_converted.html"))
}

/// Atomic file write: write to temp, then rename
fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
