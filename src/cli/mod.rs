pub mod batch;
pub mod commands;
pub mod convert;

pub use commands::{Cli, Commands};
