//! Data sources the loader can fetch from

use crate::error::IoError;
use log::debug;
use plotvr_core::{Dataset, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

/// Fetch a dataset from a location.
///
/// Implementations block; the [`Loader`](crate::Loader) calls them off the
/// render thread.
pub trait DataSource: Send + Sync {
    fn fetch(&self, location: &str) -> Result<Dataset>;

    /// Short name used in log messages
    fn name(&self) -> &'static str;
}

/// Reads dataset JSON from local paths and `file://` URLs
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
        }
    }

    fn local_path(&self, location: &str) -> std::result::Result<PathBuf, IoError> {
        let path = if location.contains("://") {
            let url = Url::parse(location).map_err(|err| IoError::InvalidEndpoint {
                endpoint: location.to_string(),
                message: err.to_string(),
            })?;
            if url.scheme() != "file" {
                return Err(IoError::UnsupportedLocation {
                    location: location.to_string(),
                });
            }
            url.to_file_path()
                .map_err(|()| IoError::UnsupportedLocation {
                    location: location.to_string(),
                })?
        } else {
            PathBuf::from(location)
        };

        Ok(match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        })
    }
}

impl DataSource for FileSource {
    fn fetch(&self, location: &str) -> Result<Dataset> {
        let path = self.local_path(location)?;
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        debug!("reading dataset from {}", path.display());
        let file = File::open(&path).map_err(IoError::from)?;
        Dataset::from_reader(BufReader::new(file))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Read a dataset file directly
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    FileSource::new().fetch(&path.as_ref().to_string_lossy())
}
