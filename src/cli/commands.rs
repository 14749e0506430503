use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solview", version, about = "Solver run-log to HTML report converter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single JSON run log to HTML
    Convert(ConvertArgs),
    /// Convert every JSON run log in a directory
    Batch(BatchArgs),
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// JSON run log to convert
    pub input: String,

    /// Directory for the generated HTML (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

#[derive(Args, Clone)]
pub struct BatchArgs {
    /// Directory containing JSON run logs
    #[arg(short, long, default_value = "./run_logs")]
    pub input_dir: String,

    /// Directory for the generated HTML (defaults to the input directory)
    #[arg(short, long)]
    pub output_dir: Option<String>,
}
