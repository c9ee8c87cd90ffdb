use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to write rendered html to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
