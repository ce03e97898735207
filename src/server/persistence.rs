use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::common::{self, capture::CapturedRequest};
use crate::server::error::CaptureError;

/// Writes one text record per captured request under a directory that is
/// created on demand.
#[derive(Debug, Clone)]
pub struct RequestStore {
    dir: PathBuf,
}

impl RequestStore {

    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, request: &CapturedRequest, sequence: u32) -> Result<PathBuf, CaptureError> {
        fs::create_dir_all(&self.dir).map_err(|source| CaptureError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(record_file_name(&request.received_at, sequence));
        let mut file = File::create(&path).map_err(|source| CaptureError::CreateFile {
            path: path.clone(),
            source,
        })?;
        write!(file, "{}", request.record()).map_err(|source| CaptureError::WriteFile {
            path: path.clone(),
            source,
        })?;

        debug!("Request #{} written to {}", sequence, path.display());
        Ok(path)
    }
}

pub fn record_file_name(received_at: &DateTime<Local>, sequence: u32) -> String {
    format!("request_{}_{:03}.txt", received_at.format(common::FILE_TIME_FORMAT), sequence)
}
