//! # Configuration
//!
//! providerdb configuration is loaded with [`confique`], which layers TOML files,
//! environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--data <path>` (applied by [`crate::init`], not here).
//! 2. **Environment variables**: `PROVIDERDB_DATA_FILE`, `PROVIDERDB_PAGE_SIZE`.
//! 3. **Project Config**: `./providerdb.toml` in the working directory.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | OS data dir `bd.json` | JSON file holding the provider collection |
//! | `page_size` | `10` | Page size used by `list` when none is given |

use crate::error::{ProviderError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "providerdb.toml";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for providerdb, stored in `providerdb.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderDbConfig {
    /// Path of the JSON file holding the provider collection.
    /// Relative paths are resolved against the working directory.
    #[config(env = "PROVIDERDB_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Default number of providers per page when listing.
    #[config(env = "PROVIDERDB_PAGE_SIZE", default = 10)]
    pub page_size: usize,
}

impl Default for ProviderDbConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProviderDbConfig {
    /// Load configuration for a process running in `cwd`.
    ///
    /// `global_dir` is the directory holding the user-wide `providerdb.toml`;
    /// pass `None` to skip it.
    pub fn load(cwd: &Path, global_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env().file(cwd.join(CONFIG_FILE_NAME));
        if let Some(dir) = global_dir {
            builder = builder.file(dir.join(CONFIG_FILE_NAME));
        }
        let config = builder
            .load()
            .map_err(|e| ProviderError::Config(e.to_string()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(ProviderError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }

    /// The configured data file made absolute against `cwd`, if one is set.
    pub fn data_file_in(&self, cwd: &Path) -> Option<PathBuf> {
        self.data_file.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                cwd.join(p)
            }
        })
    }
}
