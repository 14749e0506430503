pub mod types;

pub use types::SolviewError;
