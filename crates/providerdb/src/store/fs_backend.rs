use super::backend::StorageBackend;
use crate::error::{ProviderError, Result};
use crate::model::Provider;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ProviderError::Io)?;
            }
        }
        Ok(())
    }

    /// Temporary sibling of the data file. Same directory, so the rename stays on one
    /// filesystem.
    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("data");
        let name = format!(".{}-{}.tmp", stem, Uuid::new_v4());
        match self.data_file.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Vec<Provider>> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.data_file.display(),
                    "data file does not exist, treating as empty"
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!(
                    path = %self.data_file.display(),
                    error = %e,
                    "failed to read data file"
                );
                return Err(ProviderError::Io(e));
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        // A bare `null` document is an empty collection.
        let records: Option<Vec<Provider>> =
            serde_json::from_str(&content).map_err(ProviderError::Serialization)?;
        Ok(records.unwrap_or_default())
    }

    fn save_records(&self, records: &[Provider]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content =
            serde_json::to_string_pretty(records).map_err(ProviderError::Serialization)?;

        // Atomic write: the tmp file is flushed to disk before it replaces the target.
        let tmp_file = self.tmp_path();
        if let Err(e) = write_synced(&tmp_file, content.as_bytes()) {
            let _ = fs::remove_file(&tmp_file);
            tracing::error!(path = %tmp_file.display(), error = %e, "failed to write data file");
            return Err(ProviderError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            tracing::error!(
                path = %self.data_file.display(),
                error = %e,
                "failed to replace data file"
            );
            return Err(ProviderError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}

fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
