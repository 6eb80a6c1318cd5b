use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule Error: {0}")]
    Rule(String),

    #[error("Missing required tool: {0}")]
    ToolNotFound(String),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Step '{desc}' failed with exit code {code:?}")]
    StepFailed { desc: String, code: Option<i32> },

    #[error("Cannot write artifact to {}: {source}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type BfResult<T> = Result<T, BootForgeError>;
