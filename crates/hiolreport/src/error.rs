//! Error types for hiolreport

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("External tool error: `{command}` {reason}")]
    ExternalTool { command: String, reason: String },

    #[error("Malformed tool output: {0}")]
    MalformedOutput(String),

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
