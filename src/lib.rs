pub mod cli;
pub mod errors;
pub mod loader;
pub mod models;
pub mod reporting;
pub mod utils;
