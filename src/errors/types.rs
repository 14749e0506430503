use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolviewError {
    #[error("Log file not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Batch conversion failed: {0}")]
    Batch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
