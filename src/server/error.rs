use std::path::PathBuf;

use thiserror::Error;

/// Failures while saving a request record. None of these reach the client.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to create directory \"{path}\": {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create file \"{path}\": {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write to file \"{path}\": {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
