//! Record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where session records are written
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory for file-based records; in-memory when unset
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ValidationError::EmptyDataDir),
            _ => Ok(()),
        }
    }
}
