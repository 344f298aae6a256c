//! # Data File Resolution
//!
//! The store is backed by exactly one JSON file. Which file is decided once, at startup:
//!
//! 1. `data_override` (the CLI's `--data` flag), if given.
//! 2. `data_file` from configuration (environment or `providerdb.toml`).
//! 3. `bd.json` in the OS-appropriate data directory (via the `directories` crate).
//! 4. `bd.json` in the working directory, when no home directory can be determined.
//!
//! Relative paths are resolved against the working directory. The file itself does not
//! need to exist: a missing file is an empty registry and is created on the first write.
//!
//! ## Environment Variables
//!
//! * `PROVIDERDB_CONFIG_DIR` - If set, replaces the OS config directory as the place
//!   the global `providerdb.toml` is read from. Used by tests to isolate global state.

use crate::api::ProviderApi;
use crate::config::ProviderDbConfig;
use crate::error::Result;
use crate::store::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE_NAME: &str = "bd.json";

pub struct ProviderDbContext {
    pub api: ProviderApi<FileStore>,
    pub config: ProviderDbConfig,
    pub data_file: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "providerdb")
}

/// Directory holding the user-wide `providerdb.toml`.
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("PROVIDERDB_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

fn default_data_file(cwd: &Path) -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILE_NAME))
        .unwrap_or_else(|| cwd.join(DEFAULT_DATA_FILE_NAME))
}

/// Pick the backing file, following the precedence described at module level.
pub fn resolve_data_file(
    cwd: &Path,
    config: &ProviderDbConfig,
    data_override: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = data_override {
        return if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        };
    }
    config
        .data_file_in(cwd)
        .unwrap_or_else(|| default_data_file(cwd))
}

/// Load configuration and open the file store it points at.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<ProviderDbContext> {
    let global_dir = global_config_dir();
    let config = ProviderDbConfig::load(cwd, global_dir.as_deref())?;
    let data_file = resolve_data_file(cwd, &config, data_override);

    tracing::debug!(path = %data_file.display(), "using data file");

    let api =
        ProviderApi::new(FileStore::open(&data_file)).with_default_page_size(config.page_size);

    Ok(ProviderDbContext {
        api,
        config,
        data_file,
    })
}
