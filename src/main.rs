use clap::Parser;
use tracing_subscriber::EnvFilter;

use solview::cli::{self, Cli, Commands};
use solview::errors::SolviewError;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => cli::convert::handle_convert(args, quiet),
        Commands::Batch(args) => cli::batch::handle_batch(args, quiet),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                SolviewError::NotFound(_) => 2,
                SolviewError::Parse(_) => 3,
                SolviewError::Schema(_) => 4,
                SolviewError::Write(_) => 5,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
