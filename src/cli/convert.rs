use std::path::PathBuf;

use console::style;
use tracing::info;

use crate::cli::commands::ConvertArgs;
use crate::errors::SolviewError;
use crate::reporting::convert_file;

pub fn handle_convert(args: ConvertArgs, quiet: bool) -> Result<(), SolviewError> {
    let input = PathBuf::from(&args.input);
    let output_dir = args.output_dir.as_ref().map(PathBuf::from);

    info!(input = %input.display(), "Converting run log");
    let output = convert_file(&input, output_dir.as_deref())?;

    if !quiet {
        println!(
            "{} {} -> {}",
            style("Converted").green().bold(),
            input.display(),
            output.display()
        );
    }

    Ok(())
}
